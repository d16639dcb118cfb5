//! # Tutorbook Architecture
//!
//! Tutorbook is a contact book for tutors: it keeps the students they teach
//! and those students' parents, with fees, payment status, lesson schedule
//! and a short note for each. The book is driven by short text commands
//! such as `note 2 nt/Prefers mornings`.
//!
//! Like any UI-agnostic library, the core never touches the terminal. The
//! binary is one client of the API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Reads command lines, prints results, owns exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - text → parser → command → model → store                  │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌───────────────────────────┐  ┌──────────────────────────────┐
//! │  Parser Layer (parser/)   │  │  Command Layer (commands/)   │
//! │  - text → Command         │  │  - Command × Model → result  │
//! └───────────────────────────┘  └──────────────────────────────┘
//!                                              │
//!                                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/)                                             │
//! │  - immutable Person values, master list, filtered view      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage (`store/`) sits beside the model: the API loads the master list
//! from an [`AddressBookStore`](store::AddressBookStore) at startup and
//! writes it back after every command that changed it.
//!
//! ## Indexes
//!
//! Every index a user types is 1-based and refers to the list they last
//! saw, i.e. the model's *filtered* list. See [`index`] and [`model`].
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`parser`]: tokenizer, field rules, one parser per command
//! - [`commands`]: one command per module, plus `CmdResult`
//! - [`model`]: value objects, the `Person` sum type, the `Model`
//! - [`index`]: user-facing index conversion
//! - [`store`]: storage trait, JSON file store, in-memory store
//! - [`config`]: configuration file
//! - [`error`]: error type

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;
