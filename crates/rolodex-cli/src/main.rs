//! Rolodex CLI entry point.

use std::path::Path;

use clap::Parser;
use rolodex_store::UserStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rolodex_cli::cli::{Cli, Commands};
use rolodex_cli::commands;
use rolodex_cli::repl::{Repl, Shell};

fn main() {
    // Load .env.local if it exists (for ROLODEX_FILE etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data_file = cli.data_file();
    let history = cli.history_path();

    // Handle command or enter REPL
    let result = match cli.command {
        Some(Commands::Repl) | None => run_repl(&data_file, history),
        Some(Commands::Directory(cmd)) => commands::execute(cmd, &data_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(data_file: &Path, history: Option<std::path::PathBuf>) -> commands::Result<()> {
    let store = UserStore::open(data_file)?;
    info!(path = %data_file.display(), users = store.len(), "Loaded users");

    let mut repl = Repl::new(Shell::new(store, data_file), history)?;
    repl.run()
}
