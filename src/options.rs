use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Prefix written once per nesting level at the start of each line
    pub indent: String,
    /// Client-side function invoked by a search link's click handler
    pub search_function: String,
    /// Prepended to the URL-encoded query in a search link's href
    pub search_href_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            search_function: "searchFor".to_string(),
            search_href_prefix: "?".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `width` spaces per nesting level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    pub fn from_json(json: &str) -> RenderResult<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::ConfigError(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> RenderResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| RenderError::ConfigError(e.to_string()))
    }
}
