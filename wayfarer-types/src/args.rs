//! Typed tool argument payloads.
//!
//! The model emits arguments as a JSON-encoded string; the dispatcher decodes
//! that string into one of these shapes before any call is issued. There is
//! no `any`-typed escape hatch: an argument payload either matches its tool's
//! shape or the call fails with a typed error.

use serde::{Deserialize, Serialize};

/// Arguments for the `search_location` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLocationArgs {
    /// Free-form location query, e.g. "Paris, Ile-de-France, France".
    pub location: String,
}

/// Decoded arguments for a known tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArguments {
    /// Arguments for `search_location`.
    SearchLocation(SearchLocationArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_location_args_decode() {
        let args: SearchLocationArgs =
            serde_json::from_str(r#"{"location":"Paris, Ile-de-France, France"}"#).unwrap();
        assert_eq!(args.location, "Paris, Ile-de-France, France");
    }

    #[test]
    fn search_location_args_reject_missing_field() {
        let result = serde_json::from_str::<SearchLocationArgs>(r#"{"city":"Paris"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn tool_arguments_serialize_untagged() {
        let args = ToolArguments::SearchLocation(SearchLocationArgs {
            location: "Tokyo".into(),
        });
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({ "location": "Tokyo" }));
    }
}
