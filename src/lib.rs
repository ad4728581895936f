//! # QuickInfo HTML renderer
//!
//! Turns lookup/answer results into indented HTML for display.
//!
//! A result is a [`Value`]: a typed [`Node`], plain text, or a list of
//! values, nested arbitrarily. Each node's `Kind` and `Style` select the tag,
//! class and inline style it renders with; colour swatches and search links
//! get dedicated markup.
//!
//! ## Example
//! ```ignore
//! use quickinfo_html::{kind, render_object, Node};
//!
//! let table = Node::container(vec![Node::container(vec![Node::leaf("x")
//!     .with_kind(kind::CELL)
//!     .into()])
//! .with_kind(kind::ROW)
//! .into()])
//! .with_kind(kind::TABLE);
//!
//! let html = render_object(&table.into()).expect("render");
//! assert_eq!(html, "<table>\n    <tr>\n        <td>x</td>\n    </tr>\n</table>\n");
//! ```
//!
//! Node text is trusted: it is written without escaping.

pub mod error;
pub mod markup;
pub mod node;
pub mod options;
pub mod render;
pub mod writer;

pub use error::{RenderError, RenderResult};
pub use node::{kind, parse_json, parse_yaml, style, Node, Value};
pub use options::RenderOptions;
pub use render::Renderer;
pub use writer::IndentingWriter;

/// Render a result value with default options
pub fn render_object(value: &Value) -> RenderResult<String> {
    Renderer::new().render_object(value)
}

/// Parse a JSON result document and render it with default options
pub fn render_json(json: &str) -> RenderResult<String> {
    render_object(&parse_json(json)?)
}

/// Parse a YAML result document and render it with default options
pub fn render_yaml(yaml: &str) -> RenderResult<String> {
    render_object(&parse_yaml(yaml)?)
}
