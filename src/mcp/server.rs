//! MCP server implementation.
//!
//! Runs an MCP server on stdio transport exposing the single
//! `save-copilot-session` tool.

use anyhow::Result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, wrapper::Parameters},
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorCode, ErrorData as McpError,
        Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_router,
    transport::stdio,
    RoleServer, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::{Config, TOOL_NAME};
use crate::session::{save_session, SaveRequest};

// ============== Tool Parameter Types ==============

/// Parameters for the save-copilot-session tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionParams {
    /// Full chat transcript as Markdown.
    #[schemars(description = "The full chat transcript as Markdown text. Required in practice: \
                              an empty transcript is rejected")]
    pub transcript_markdown: Option<String>,

    /// Save timestamp.
    #[schemars(description = "ISO-8601 timestamp for the save (default: now), \
                              e.g. 2024-03-05T09:07:02.004Z")]
    pub saved_at: Option<String>,

    /// Workspace root override for this call.
    #[schemars(description = "Workspace root to save under (default: the server's \
                              --workspaceRoot, then its current directory)")]
    pub workspace_root: Option<String>,
}

impl From<SaveSessionParams> for SaveRequest {
    fn from(params: SaveSessionParams) -> Self {
        Self {
            transcript_markdown: params.transcript_markdown,
            saved_at: params.saved_at,
            workspace_root: params.workspace_root,
        }
    }
}

// ============== Result Types ==============

/// Outcome of a tool invocation as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// The transcript was written to `path`.
    Success { path: String },
    /// The call was rejected; the server keeps running.
    Failure { message: String },
}

impl InvocationResult {
    pub fn unknown_tool(name: &str) -> Self {
        Self::Failure {
            message: format!("Unknown tool: {name}. The only available tool is {TOOL_NAME}."),
        }
    }
}

impl From<InvocationResult> for CallToolResult {
    fn from(result: InvocationResult) -> Self {
        match result {
            InvocationResult::Success { path } => CallToolResult::success(vec![Content::text(path)]),
            InvocationResult::Failure { message } => {
                CallToolResult::error(vec![Content::text(message)])
            }
        }
    }
}

// ============== Server Implementation ==============

/// The session log MCP server.
#[derive(Debug, Clone)]
pub struct SessionLogServer {
    config: Config,
    tool_router: ToolRouter<SessionLogServer>,
    /// Keeps saves from interleaving. Arrival order comes from the
    /// current-thread runtime the server is run on, not from this lock.
    save_lock: Arc<Mutex<()>>,
}

impl SessionLogServer {
    /// Creates a server bound to the given startup configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for SessionLogServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Creates an McpError from an error message.
fn mcp_error(message: &str) -> McpError {
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(message.to_string()),
        data: None,
    }
}

#[tool_router]
impl SessionLogServer {
    /// Save a chat transcript as a timestamped Markdown file.
    ///
    /// Usage errors come back as a failed tool result; filesystem failures
    /// are reported as a protocol error.
    #[tool(
        name = "save-copilot-session",
        description = "Save the current chat transcript as a Markdown file under \
                       <workspaceRoot>/copilot-session_log/<dd-mm-yyyy>/session_<hh-mm-ss-mmm>.md, \
                       rendered through the workspace's _TEMPLATE.md. Returns the saved file path."
    )]
    async fn save_copilot_session(
        &self,
        Parameters(params): Parameters<SaveSessionParams>,
    ) -> Result<CallToolResult, McpError> {
        let _guard = self.save_lock.lock().await;
        let request = SaveRequest::from(params);

        match save_session(&self.config, &request) {
            Ok(path) => Ok(InvocationResult::Success {
                path: path.display().to_string(),
            }
            .into()),
            Err(e) if e.is_usage() => {
                tracing::info!(reason = %e, "Rejected save request");
                Ok(InvocationResult::Failure {
                    message: e.to_string(),
                }
                .into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Save failed");
                Err(mcp_error(&format!("Save failed: {e}")))
            }
        }
    }
}

impl ServerHandler for SessionLogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Saves chat transcripts as Markdown files in the workspace. Call \
                 save-copilot-session with the full transcript in transcriptMarkdown; \
                 the tool returns the path of the saved file."
                    .to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(
            self.tool_router.list_all(),
        )))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(&request.name) {
            tracing::info!(tool = %request.name, "Rejected call to unknown tool");
            return Ok(InvocationResult::unknown_tool(&request.name).into());
        }

        let context = ToolCallContext::new(self, request, context);
        self.tool_router.call(context).await
    }
}

/// Runs the MCP server on stdio transport.
///
/// Processes requests until the client closes the connection or the
/// process is interrupted.
pub async fn run_server(config: Config) -> Result<()> {
    tracing::info!(
        workspace_root = ?config.workspace_root,
        "Starting session log MCP server"
    );

    let service = SessionLogServer::new(config).serve(stdio()).await?;

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit?;
            tracing::info!(?reason, "Session log MCP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received interrupt, shutting down");
        }
    }

    Ok(())
}
