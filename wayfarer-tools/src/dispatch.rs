//! HTTP dispatch of tool calls to their backend routes.

use wayfarer_types::ToolError;

use crate::routes::route_for;

/// Default backend base URL (the local development server).
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Dispatches tool calls to the backend.
///
/// # Example
///
/// ```no_run
/// use wayfarer_tools::ToolDispatcher;
///
/// let dispatcher = ToolDispatcher::new().base_url("http://localhost:8000");
/// ```
pub struct ToolDispatcher {
    /// Backend base URL (override for testing or proxies).
    base_url: String,
    /// Shared HTTP client.
    client: reqwest::Client,
}

impl ToolDispatcher {
    /// Create a dispatcher pointed at the default backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the URL for a tool route.
    fn tool_url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Invoke a named tool with the raw argument payload from the model.
    ///
    /// The payload is already a serialized JSON object; it is sent as the
    /// request body unmodified, never re-encoded. The result shape is
    /// tool-specific and opaque to the dispatcher.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`] when the name is not in the route table
    /// (no request is issued); [`ToolError::RequestFailed`] on a non-success
    /// status; [`ToolError::Network`] on transport failure;
    /// [`ToolError::InvalidResponse`] when the body is not valid JSON.
    pub async fn invoke(
        &self,
        name: &str,
        raw_arguments: &str,
    ) -> Result<serde_json::Value, ToolError> {
        let route = route_for(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let url = self.tool_url(route);
        tracing::debug!(url = %url, tool = %name, "dispatching tool call");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(raw_arguments.to_string())
            .send()
            .await
            .map_err(|e| ToolError::Network(Box::new(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::Network(Box::new(e)))?;

        if !status.is_success() {
            tracing::warn!(tool = %name, status = %status, "tool call failed");
            return Err(ToolError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ToolError::InvalidResponse(e.to_string()))
    }
}

impl Default for ToolDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let dispatcher = ToolDispatcher::new();
        assert_eq!(dispatcher.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let dispatcher = ToolDispatcher::new().base_url("http://localhost:9999");
        assert_eq!(dispatcher.base_url, "http://localhost:9999");
    }

    #[test]
    fn tool_url_joins_base_and_route() {
        let dispatcher = ToolDispatcher::new().base_url("http://localhost:9999");
        assert_eq!(
            dispatcher.tool_url("/search_location"),
            "http://localhost:9999/search_location"
        );
    }
}
