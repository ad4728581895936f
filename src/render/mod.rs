//! Recursive rendering of result values into indented HTML.
//!
//! Text is written as given. Producers are expected to hand over text that is
//! already safe to place in markup; nothing here escapes node content.

pub mod rules;
pub mod scope;

use crate::error::RenderResult;
use crate::node::{kind, style, Node, Value};
use crate::options::RenderOptions;
use crate::writer::IndentingWriter;
use scope::{scoped, search_link, OpenTag};

/// Renders result values with a fixed set of options.
///
/// Holds no per-render state, so one renderer can serve any number of
/// independent calls.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `value` into a fresh writer and return the markup
    pub fn render_object(&self, value: &Value) -> RenderResult<String> {
        let mut writer = IndentingWriter::with_indent(self.options.indent.clone());
        self.render(&mut writer, value)?;
        log::debug!(
            "rendered {} value into {} bytes",
            value.shape(),
            writer.as_str().len()
        );
        Ok(writer.into_string())
    }

    fn render(&self, w: &mut IndentingWriter, value: &Value) -> RenderResult<()> {
        log::trace!("render {} at depth {}", value.shape(), w.depth());
        match value {
            Value::Node(node) => self.render_node(w, node),
            Value::Text(text) => {
                w.write(text);
                Ok(())
            }
            Value::List(items) => self.render_list(w, items),
        }
    }

    fn render_list(&self, w: &mut IndentingWriter, items: &[Value]) -> RenderResult<()> {
        scoped(w, Some(OpenTag::new("div")), |w| {
            items.iter().try_for_each(|item| self.render(w, item))
        })
    }

    fn render_node(&self, w: &mut IndentingWriter, node: &Node) -> RenderResult<()> {
        let class = rules::class_for(node);
        let inline_style = rules::style_for(node);
        let tag = rules::tag_for(node).or_else(|| {
            if node.is_container() {
                Some("div")
            } else if class.is_some() || inline_style.is_some() {
                Some("span")
            } else {
                None
            }
        });

        let open = tag.map(|name| {
            OpenTag::new(name)
                .with_class(class)
                .with_style(inline_style.as_deref())
                .multiline(node.is_container())
        });

        scoped(w, open, |w| match &node.list {
            Some(children) => children.iter().try_for_each(|child| self.render(w, child)),
            None => self.render_content(w, node),
        })
    }

    fn render_content(&self, w: &mut IndentingWriter, node: &Node) -> RenderResult<()> {
        let link = search_link(node.search_link.as_deref(), &self.options, false);
        scoped(w, link, |w| {
            if node.has_style(style::COLOR_SWATCH_SMALL) {
                let swatch = format!("background:{};width:60px;height:16px", node.text_or_empty());
                let block = OpenTag::new("div").with_style(Some(&swatch)).multiline(false);
                return scoped(w, Some(block), |_| Ok(()));
            }

            self.render_text(w, node)
        })
    }

    fn render_text(&self, w: &mut IndentingWriter, node: &Node) -> RenderResult<()> {
        if node.is_kind(kind::CELL) && node.has_style(style::COLOR) {
            let text = node.text_or_empty();
            let background = format!("background:{}", text);

            let link = search_link(node.text.as_deref(), &self.options, true);
            scoped(w, link, |w| {
                let swatch = OpenTag::new("div")
                    .with_class(Some("swatch"))
                    .with_style(Some(&background));
                scoped(w, Some(swatch), |_| Ok(()))
            })?;

            let name = OpenTag::new("div").with_class(Some("swatchName"));
            return scoped(w, Some(name), |w| {
                w.write(text);
                Ok(())
            });
        }

        if let Some(text) = rules::text_for(node) {
            w.write(text);
        }
        Ok(())
    }
}
