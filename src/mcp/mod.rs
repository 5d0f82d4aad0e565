//! MCP (Model Context Protocol) server.
//!
//! Lets chat assistants such as GitHub Copilot save the current
//! conversation into the workspace. The server runs on stdio transport and
//! implements one tool:
//! - `save-copilot-session`: render a transcript through the workspace
//!   template and write it to a timestamped Markdown file

mod server;

pub use server::{run_server, InvocationResult, SaveSessionParams, SessionLogServer};
