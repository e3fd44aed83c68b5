//! The fixed tool-name → backend-route table and typed argument decoding.

use wayfarer_types::{SearchLocationArgs, ToolArguments, ToolError};

/// Closed mapping of tool name to backend route.
const ROUTES: &[(&str, &str)] = &[("search_location", "/search_location")];

/// Resolve the backend route for a tool name.
pub fn route_for(name: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|(tool, _)| *tool == name)
        .map(|(_, route)| *route)
}

/// Decode a raw argument payload into the tool's typed shape.
///
/// # Errors
///
/// [`ToolError::UnknownTool`] if the name is not in the route table;
/// [`ToolError::InvalidArguments`] if the payload does not match the tool's
/// expected shape.
pub fn parse_arguments(name: &str, raw: &str) -> Result<ToolArguments, ToolError> {
    match name {
        "search_location" => {
            let args: SearchLocationArgs =
                serde_json::from_str(raw).map_err(|e| ToolError::InvalidArguments {
                    tool: name.to_string(),
                    message: e.to_string(),
                })?;
            Ok(ToolArguments::SearchLocation(args))
        }
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}
