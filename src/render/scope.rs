//! Paired open/close tag emission.
//!
//! [`scoped`] writes a start tag, runs the body, then writes the matching end
//! tag whatever way the body finishes: falling off the end, returning early,
//! or returning an error. Nesting stays balanced without bookkeeping at each
//! call site.

use crate::error::RenderResult;
use crate::markup;
use crate::options::RenderOptions;
use crate::writer::IndentingWriter;

/// A tag waiting to be opened
#[derive(Debug, Clone, PartialEq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    pub class: Option<&'a str>,
    pub style: Option<&'a str>,
    pub attributes: Vec<(&'static str, String)>,
    /// Put content on its own lines rather than directly after the start tag
    pub multiline: bool,
}

impl<'a> OpenTag<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            class: None,
            style: None,
            attributes: Vec::new(),
            multiline: true,
        }
    }

    pub fn with_class(mut self, class: Option<&'a str>) -> Self {
        self.class = class;
        self
    }

    pub fn with_style(mut self, style: Option<&'a str>) -> Self {
        self.style = style;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<(&'static str, String)>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

/// Run `body` inside `tag`. With no tag the body runs unwrapped.
///
/// The end tag is always written and the indent restored. An error from the
/// body takes precedence over one raised while closing.
pub fn scoped<F>(
    writer: &mut IndentingWriter,
    tag: Option<OpenTag<'_>>,
    body: F,
) -> RenderResult<()>
where
    F: FnOnce(&mut IndentingWriter) -> RenderResult<()>,
{
    let Some(tag) = tag else {
        return body(writer);
    };

    let mut start = markup::tag_start(tag.name, tag.class, tag.style, &tag.attributes);
    if tag.multiline {
        start.push('\n');
    }
    writer.write(&start);
    writer.indent();

    let result = body(writer);

    let closed = writer.unindent();
    writer.write_line(&markup::tag_end(tag.name));
    result.and(closed)
}

/// Anchor that triggers a search for `query`, or nothing when there is no query
pub fn search_link<'a>(
    query: Option<&str>,
    options: &RenderOptions,
    multiline: bool,
) -> Option<OpenTag<'a>> {
    let query = query?;
    let attributes = markup::search_link_attributes(
        query,
        &options.search_href_prefix,
        &options.search_function,
    );
    Some(OpenTag::new("a").with_attributes(attributes).multiline(multiline))
}
