use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tutorbook::api::TutorbookApi;
use tutorbook::config::TutorbookConfig;
use tutorbook::error::{Result, TutorbookError};
use tutorbook::store::fs::FileStore;

mod args;
mod print;
use args::Cli;
use print::{print_error, print_messages, print_persons};

const PROMPT: &str = "tutorbook> ";

fn main() {
    if let Err(e) = run() {
        print_error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}

struct AppContext {
    api: TutorbookApi<FileStore>,
    config: TutorbookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command_line() {
        Some(line) => run_once(&mut ctx, &line),
        None => run_interactive(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    let config = TutorbookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        TutorbookConfig::default()
    });

    let data_path = config.data_path(&data_dir);
    debug!(path = %data_path.display(), "using address book");
    let api = TutorbookApi::new(FileStore::new(data_path))?;

    Ok(AppContext { api, config })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "tutorbook", "tutorbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TutorbookError::Store("Could not determine data directory".into()))
}

fn run_once(ctx: &mut AppContext, line: &str) -> Result<()> {
    let result = ctx.api.execute(line)?;
    print_messages(&result.messages);
    if result.show_list {
        print_persons(&ctx.api.displayed_persons(), ctx.config.note_preview_width);
    }
    Ok(())
}

fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    print_persons(&ctx.api.displayed_persons(), ctx.config.note_preview_width);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().map_err(TutorbookError::Io)?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(TutorbookError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        match ctx.api.execute(&line) {
            Ok(result) => {
                print_messages(&result.messages);
                if result.exit {
                    return Ok(());
                }
                print_persons(&ctx.api.displayed_persons(), ctx.config.note_preview_width);
            }
            Err(e) => print_error(&e.to_string()),
        }
    }
}
