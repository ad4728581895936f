//! String builders for tags, attributes and search links.
//!
//! Everything here is pure; the renderer decides where the strings go.

use std::fmt::Write;

pub const DEFAULT_SEARCH_FUNCTION: &str = "searchFor";
pub const DEFAULT_SEARCH_HREF_PREFIX: &str = "?";

/// Opening tag with optional class, inline style and extra attributes.
///
/// Attribute values are escaped; the tag name is written as given.
pub fn tag_start(
    tag: &str,
    class: Option<&str>,
    style: Option<&str>,
    attributes: &[(&str, String)],
) -> String {
    let mut out = String::with_capacity(tag.len() + 2);
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        push_attribute(&mut out, "class", class);
    }
    if let Some(style) = style {
        push_attribute(&mut out, "style", style);
    }
    for (name, value) in attributes {
        push_attribute(&mut out, name, value);
    }
    out.push('>');
    out
}

pub fn tag_end(tag: &str) -> String {
    format!("</{}>", tag)
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

/// Escape text for a double-quoted attribute value
pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Form-style URL encoding: space becomes `+`, unreserved bytes pass through,
/// everything else is percent-encoded per UTF-8 byte.
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'*' | b'(' | b')' => out.push(byte as char),
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

/// Escape text for use inside a quoted JavaScript string literal.
///
/// `<` and `>` are escaped too so the result can never close a surrounding
/// script element.
pub fn js_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// `href` and `onclick` attributes that trigger a search for `query`
pub fn search_link_attributes(
    query: &str,
    href_prefix: &str,
    search_function: &str,
) -> Vec<(&'static str, String)> {
    let href = format!("{}{}", href_prefix, url_encode(query));
    let onclick = format!("{}(\"{}\");return false;", search_function, js_escape(query));
    vec![("href", href), ("onclick", onclick)]
}

/// Complete single-line search link around `content`
pub fn search_link(content: &str, query: &str) -> String {
    let attributes =
        search_link_attributes(query, DEFAULT_SEARCH_HREF_PREFIX, DEFAULT_SEARCH_FUNCTION);
    format!("{}{}{}", tag_start("a", None, None, &attributes), content, tag_end("a"))
}
