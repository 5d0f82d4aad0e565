//! Serve command - run the MCP server on stdio.

use anyhow::Result;

use copilot_session_log::config::Config;

/// Runs the MCP server until the client disconnects.
pub fn run(config: Config) -> Result<()> {
    // Requests are handled in arrival order on a single thread
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(copilot_session_log::mcp::run_server(config))
}
