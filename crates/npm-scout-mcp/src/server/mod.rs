//! MCP server
//!
//! Wires the tool modules into an rmcp [`ServerHandler`]. The router is built
//! once per server from the `#[tool]` methods below and never changes.
//!
//! Failures are reported two ways:
//! - bad arguments fail the JSON-RPC request with the error's [`rpc_code`]
//! - registry, network and decode failures come back as a tool result with
//!   `isError: true`, so the agent can read what went wrong
//!
//! [`rpc_code`]: npm_scout_core::ScoutError::rpc_code

use npm_scout_core::error::ScoutResult;
use npm_scout_registry::RegistryClient;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, ErrorCode, Implementation, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use tracing::warn;

use crate::tools::compare::{self, CompareInput};
use crate::tools::deps;
use crate::tools::downloads::{self, DownloadsInput};
use crate::tools::info::{self, PackageInput};
use crate::tools::search::{self, SearchInput};
use crate::tools::versions::{self, VersionsInput};
use crate::{SERVER_INSTRUCTIONS, SERVER_NAME, SERVER_VERSION};


/// npm-scout MCP service
#[derive(Clone)]
pub struct NpmScoutServer {
    client: RegistryClient,
    tool_router: ToolRouter<Self>,
}

impl NpmScoutServer {
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl NpmScoutServer {
    #[tool(description = "Search npm packages by keyword")]
    pub async fn npm_search(
        &self,
        Parameters(input): Parameters<SearchInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_search", search::run(&self.client, input).await)
    }

    #[tool(description = "Get detailed info about an npm package")]
    pub async fn npm_info(
        &self,
        Parameters(input): Parameters<PackageInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_info", info::run(&self.client, input).await)
    }

    #[tool(description = "Get download statistics for an npm package")]
    pub async fn npm_downloads(
        &self,
        Parameters(input): Parameters<DownloadsInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_downloads", downloads::run(&self.client, input).await)
    }

    #[tool(description = "List recent versions of an npm package")]
    pub async fn npm_versions(
        &self,
        Parameters(input): Parameters<VersionsInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_versions", versions::run(&self.client, input).await)
    }

    #[tool(description = "Compare two npm packages side by side")]
    pub async fn npm_compare(
        &self,
        Parameters(input): Parameters<CompareInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_compare", compare::run(&self.client, input).await)
    }

    #[tool(description = "List dependencies of an npm package")]
    pub async fn npm_deps(
        &self,
        Parameters(input): Parameters<PackageInput>,
    ) -> Result<CallToolResult, McpError> {
        tool_result("npm_deps", deps::run(&self.client, input).await)
    }
}

#[tool_handler]
impl ServerHandler for NpmScoutServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = SERVER_VERSION.to_string();

        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }
}

/// Turn a tool outcome into an MCP response
pub(crate) fn tool_result(tool: &str, outcome: ScoutResult<String>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) if e.is_invalid_request() => {
            warn!(tool, error = %e, "rejected tool call");
            Err(McpError::new(ErrorCode(e.rpc_code()), e.to_string(), None))
        },
        Err(e) => {
            warn!(tool, error = %e, "tool call failed");
            Ok(CallToolResult::error(vec![Content::text(e.report())]))
        },
    }
}
