use std::fmt;

/// A literal marker introducing a field value in command text, e.g. `nt/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_NOTE: Prefix = Prefix::new("nt/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_SCHEDULE: Prefix = Prefix::new("s/");
pub const PREFIX_COST: Prefix = Prefix::new("c/");
pub const PREFIX_PAYMENT: Prefix = Prefix::new("pay/");
