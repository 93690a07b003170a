//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rolodex_persistence::DEFAULT_FILE_NAME;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Rolodex - a small contact directory for the terminal
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the users file (`~` and `$VARS` are expanded)
    #[arg(short, long, env = "ROLODEX_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: String,

    /// Do not read or write the REPL history file
    #[arg(long)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive REPL mode
    Repl,

    #[command(flatten)]
    Directory(DirectoryCommand),
}

/// One-shot commands that run a single store operation.
#[derive(Subcommand, Debug)]
pub enum DirectoryCommand {
    /// Add a user
    Add {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,

        /// City
        #[arg(short, long)]
        city: String,
    },

    /// Show one user
    Get {
        /// User id
        id: String,
    },

    /// List all users
    List {
        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Delete a user
    Delete {
        /// User id
        id: String,
    },

    /// Replace a user's name, phone, and city
    Update {
        /// User id
        id: String,

        /// Full name
        #[arg(short, long)]
        name: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,

        /// City
        #[arg(short, long)]
        city: String,
    },

    /// Search names, phones, and cities (case-insensitive)
    Search {
        /// Text to look for; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the users file path with `~` and environment variables expanded.
    pub fn data_file(&self) -> PathBuf {
        let expanded = shellexpand::full(&self.file)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| shellexpand::tilde(&self.file).into_owned());
        PathBuf::from(expanded)
    }

    /// Returns the REPL history location, if history is enabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        dirs::home_dir().map(|h| h.join(".rolodex_history"))
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args enters REPL mode
        let cli = Cli::parse_from(["rolodex"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_history);
    }

    #[test]
    fn test_cli_file_flag() {
        let cli = Cli::parse_from(["rolodex", "--file", "/tmp/contacts.json", "list"]);
        assert_eq!(cli.data_file(), PathBuf::from("/tmp/contacts.json"));
    }

    #[test]
    fn test_cli_tilde_expansion() {
        let cli = Cli::parse_from(["rolodex", "-f", "~/contacts.json"]);
        let path = cli.data_file();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("contacts.json"));
    }

    #[test]
    fn test_cli_parse_add() {
        let cli = Cli::parse_from([
            "rolodex", "add", "--name", "Ann Lee", "--phone", "555-1234", "--city", "Oslo",
        ]);
        match cli.command {
            Some(Commands::Directory(DirectoryCommand::Add { name, phone, city })) => {
                assert_eq!(name, "Ann Lee");
                assert_eq!(phone, "555-1234");
                assert_eq!(city, "Oslo");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parse_search_words() {
        let cli = Cli::parse_from(["rolodex", "search", "ann", "lee"]);
        match cli.command {
            Some(Commands::Directory(DirectoryCommand::Search { query })) => assert_eq!(query, vec!["ann", "lee"]),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_parse_list_format() {
        let cli = Cli::parse_from(["rolodex", "list", "--format", "json"]);
        match cli.command {
            Some(Commands::Directory(DirectoryCommand::List { format })) => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_repl() {
        let cli = Cli::parse_from(["rolodex", "repl"]);
        assert!(matches!(cli.command, Some(Commands::Repl)));
    }

    #[test]
    fn test_cli_no_history() {
        let cli = Cli::parse_from(["rolodex", "--no-history"]);
        assert!(cli.history_path().is_none());
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["rolodex", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
