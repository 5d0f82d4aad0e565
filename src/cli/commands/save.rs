//! Save command - save a transcript without going through MCP.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

use copilot_session_log::config::Config;
use copilot_session_log::session::{save_session, SaveRequest};

/// Arguments for the save command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    copilot-session-log save --input chat.md\n    \
    pbpaste | copilot-session-log save\n    \
    copilot-session-log save --input chat.md --saved-at 2024-03-05T09:07:02Z")]
pub struct Args {
    /// Read the transcript from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// ISO-8601 save time (default: now)
    #[arg(long, value_name = "DATETIME")]
    pub saved_at: Option<String>,
}

/// Executes the save command.
///
/// Prints the saved file path on stdout.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let transcript = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            buf
        }
    };

    let request = SaveRequest {
        transcript_markdown: Some(transcript),
        saved_at: args.saved_at,
        workspace_root: None,
    };

    let path = save_session(config, &request)?;

    eprintln!("{}", "Saved session transcript".green());
    println!("{}", path.display());

    Ok(())
}
