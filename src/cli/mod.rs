//! Command-line interface.
//!
//! The default command serves MCP on stdio; the other commands drive the
//! same save pipeline from a terminal.

/// Individual CLI command implementations.
pub mod commands;
