mod logging;
mod script;
mod tui;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "A to-do list for the terminal", long_about = None)]
struct Cli {
    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true, env = "TODOLIST_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "todolist_core=debug"
    #[arg(long, global = true, env = "TODOLIST_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Replay a task script (one command per line) and print the results
    Script {
        /// Script file, or "-" for stdin
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Script { path }) => {
            logging::init(&cli.log_level, LogTarget::FileOrStderr(cli.log_file.as_deref()))?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if path.as_os_str() == "-" {
                script::run(io::stdin().lock(), &mut out)?;
            } else {
                let file = File::open(&path)
                    .with_context(|| format!("Could not open script {}", path.display()))?;
                script::run(BufReader::new(file), &mut out)?;
            }
        }
        Some(Commands::Tui) | None => {
            logging::init(&cli.log_level, LogTarget::FileOnly(cli.log_file.as_deref()))?;
            tui::run()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_script_command() {
        let cli = Cli::try_parse_from(["todolist", "script", "tasks.txt", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Some(Commands::Script { ref path }) if path == &PathBuf::from("tasks.txt")));
    }
}
