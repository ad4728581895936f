use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::{RenderError, RenderResult};

/// Recognised `Kind` tags. Any other string passes through unclassified.
pub mod kind {
    pub const ROW: &str = "Row";
    pub const CELL: &str = "Cell";
    pub const TABLE: &str = "Table";
    pub const COLUMN_HEADER: &str = "ColumnHeader";
    pub const PARAGRAPH: &str = "Paragraph";
}

/// Recognised `Style` tags. Any other string passes through unclassified.
pub mod style {
    pub const SECTION_HEADER: &str = "SectionHeader";
    pub const FIXED: &str = "Fixed";
    pub const COLOR_SWATCH_NAME: &str = "ColorSwatchName";
    pub const COLOR_SWATCH_SMALL: &str = "ColorSwatchSmall";
    pub const COLOR_SWATCH_LARGE: &str = "ColorSwatchLarge";
    pub const COLOR: &str = "Color";
    pub const ASCII: &str = "Ascii";
    pub const ASCII_COLUMN_HEADER_CODE: &str = "AsciiColumnHeaderCode";
    pub const ASCII_COLUMN_CODE: &str = "AsciiColumnCode";
    pub const ASCII_COLUMN_HEADER_HEX: &str = "AsciiColumnHeaderHex";
    pub const ASCII_COLUMN_HEX: &str = "AsciiColumnHex";
    pub const ASCII_COLUMN_CHAR: &str = "AsciiColumnChar";
}

/// Any renderable result shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Node(Node),
    Text(String),
    List(Vec<Value>),
}

/// A typed element of a result tree.
///
/// A node with `list` set is a container and only its children are rendered.
/// A node without `list` is a leaf: its `text` (subject to style rules) is
/// rendered, wrapped in a search link when `search_link` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<Value>>,
}

impl Node {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn container(children: Vec<Value>) -> Self {
        Self {
            list: Some(children),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_search_link(mut self, query: impl Into<String>) -> Self {
        self.search_link = Some(query.into());
        self
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.style.as_deref() == Some(style)
    }

    pub fn is_container(&self) -> bool {
        self.list.is_some()
    }

    /// Leaf text, or the empty string when absent
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl Value {
    /// Decode a JSON document produced upstream.
    ///
    /// Objects become nodes, strings become text and arrays become lists.
    /// Numbers, booleans and null in a value position are rejected with
    /// [`RenderError::UnrenderableValue`].
    pub fn from_json(json: JsonValue) -> RenderResult<Value> {
        value_from_json(json, "$")
    }

    /// Short name of the variant, for diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Node(_) => "node",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = RenderError;

    fn try_from(json: JsonValue) -> RenderResult<Value> {
        Value::from_json(json)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Parse a JSON result document
pub fn parse_json(json: &str) -> RenderResult<Value> {
    let doc: JsonValue = serde_json::from_str(json)?;
    Value::from_json(doc)
}

/// Parse a YAML result document (same shape as the JSON form)
pub fn parse_yaml(yaml: &str) -> RenderResult<Value> {
    let doc: JsonValue = serde_yaml::from_str(yaml)?;
    Value::from_json(doc)
}

fn value_from_json(json: JsonValue, path: &str) -> RenderResult<Value> {
    match json {
        JsonValue::Object(map) => node_from_json(map, path).map(Value::Node),
        JsonValue::String(s) => Ok(Value::Text(s)),
        JsonValue::Array(items) => list_from_json(items, path).map(Value::List),
        other => Err(RenderError::UnrenderableValue {
            path: path.to_string(),
            value: other.to_string(),
        }),
    }
}

fn list_from_json(items: Vec<JsonValue>, path: &str) -> RenderResult<Vec<Value>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| value_from_json(item, &format!("{}[{}]", path, i)))
        .collect()
}

fn node_from_json(mut map: Map<String, JsonValue>, path: &str) -> RenderResult<Node> {
    let list = match map.remove("List") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Array(items)) => Some(list_from_json(items, &format!("{}.List", path))?),
        Some(other) => {
            return Err(RenderError::InvalidField {
                path: path.to_string(),
                field: "List".to_string(),
                reason: format!("expected an array or null, found {}", json_type(&other)),
            })
        }
    };

    Ok(Node {
        kind: string_field(&mut map, "Kind", path)?,
        style: string_field(&mut map, "Style", path)?,
        text: string_field(&mut map, "Text", path)?,
        search_link: string_field(&mut map, "SearchLink", path)?,
        list,
    })
}

fn string_field(
    map: &mut Map<String, JsonValue>,
    field: &str,
    path: &str,
) -> RenderResult<Option<String>> {
    match map.remove(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(other) => Err(RenderError::InvalidField {
            path: path.to_string(),
            field: field.to_string(),
            reason: format!("expected a string or null, found {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
