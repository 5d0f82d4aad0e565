use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copilot_session_log::config::{Config, DEFAULT_MODEL};

mod cli;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "copilot-session-log")]
#[command(version)]
#[command(about = "Save chat transcripts as timestamped Markdown files")]
#[command(long_about = "Runs an MCP server exposing the save-copilot-session tool.\n\
    Each call renders the chat transcript through the workspace template\n\
    (copilot-session_log/_TEMPLATE.md) and writes it to\n\
    copilot-session_log/<dd-mm-yyyy>/session_<hh-mm-ss-mmm>.md.")]
#[command(after_help = "EXAMPLES:\n    \
    copilot-session-log --workspaceRoot ~/code/app     Serve MCP on stdio\n    \
    copilot-session-log save --input chat.md           Save a transcript file\n    \
    copilot-session-log template --print               Show the template\n\n\
    For more information about a command, run 'copilot-session-log <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Workspace root to save sessions under (default: current directory)
    #[arg(
        long = "workspaceRoot",
        visible_alias = "workspace-root",
        value_name = "PATH",
        num_args = 0..=1,
        global = true
    )]
    workspace_root: Option<Option<PathBuf>>,

    /// Model label rendered into {{MODEL}}
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_MODEL, global = true)]
    model: String,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdio (default)
    #[command(long_about = "Starts the MCP server on stdio. The server reads JSON-RPC\n\
        requests from stdin and writes responses to stdout; logs go to stderr.\n\
        This is what MCP hosts launch when no subcommand is given.")]
    Serve,

    /// Save a transcript from a file or stdin
    #[command(long_about = "Saves a transcript through the same pipeline as the MCP tool\n\
        and prints the path of the written file.")]
    Save(commands::save::Args),

    /// Create the workspace template if needed and show where it is
    Template(commands::template::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. stdout carries the MCP protocol, so logs go to stderr.
    let filter = if cli.verbose {
        "copilot_session_log=debug"
    } else {
        "copilot_session_log=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config {
        workspace_root: cli.workspace_root.flatten(),
        model: cli.model,
    };

    match cli.command {
        None | Some(Commands::Serve) => commands::serve::run(config),
        Some(Commands::Save(args)) => commands::save::run(args, &config),
        Some(Commands::Template(args)) => commands::template::run(args, &config),
    }
}
