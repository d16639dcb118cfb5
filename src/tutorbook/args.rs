use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tutorbook")]
#[command(about = "Keeps track of the students you tutor and their parents", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and config.json
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// A single command to run, e.g. `note 1 nt/Prefers mornings`.
    /// Starts an interactive session when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_words_form_the_command() {
        let cli = Cli::parse_from(["tutorbook", "-d", "/tmp/book", "note", "1", "nt/Likes", "maths"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/book")));
        assert_eq!(cli.command_line().as_deref(), Some("note 1 nt/Likes maths"));
    }

    #[test]
    fn no_words_means_interactive() {
        let cli = Cli::parse_from(["tutorbook", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.command_line(), None);
    }
}
