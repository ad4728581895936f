//! Presentation rules derived from a node's `Kind` and `Style`.
//!
//! Each table is evaluated top to bottom and the first matching rule wins, so
//! the order of entries is significant: kind-based tag rules outrank the
//! style-based ones.

use std::borrow::Cow;

use crate::node::{kind, style, Node};

struct Rule<T> {
    matches: fn(&Node) -> bool,
    yields: T,
}

type StyleFn = fn(&Node) -> Cow<'static, str>;

const TAG_RULES: &[Rule<&str>] = &[
    Rule { matches: |n: &Node| n.is_kind(kind::ROW), yields: "tr" },
    Rule { matches: |n: &Node| n.is_kind(kind::CELL), yields: "td" },
    Rule { matches: |n: &Node| n.is_kind(kind::TABLE), yields: "table" },
    Rule { matches: |n: &Node| n.is_kind(kind::COLUMN_HEADER), yields: "th" },
    Rule { matches: is_color_swatch, yields: "div" },
    Rule { matches: |n: &Node| n.is_kind(kind::PARAGRAPH), yields: "div" },
];

const CLASS_RULES: &[Rule<&str>] = &[
    Rule { matches: |n: &Node| n.has_style(style::SECTION_HEADER), yields: "sectionHeader" },
    Rule { matches: |n: &Node| n.has_style(style::FIXED), yields: "fixed" },
    Rule { matches: |n: &Node| n.has_style(style::COLOR_SWATCH_NAME), yields: "swatchName" },
];

const STYLE_RULES: &[Rule<StyleFn>] = &[
    Rule {
        matches: |n: &Node| n.has_style(style::COLOR) && n.is_kind(kind::TABLE),
        yields: |_: &Node| Cow::Borrowed("border-spacing: 10px"),
    },
    Rule {
        matches: |n: &Node| n.has_style(style::COLOR_SWATCH_LARGE),
        yields: |n: &Node| {
            Cow::Owned(format!("background:{};max-width:300px;height:50px", n.text_or_empty()))
        },
    },
    Rule {
        matches: |n: &Node| n.has_style(style::ASCII) && n.is_kind(kind::TABLE),
        yields: |_: &Node| Cow::Borrowed("font-size: 12pt"),
    },
    Rule {
        matches: |n: &Node| {
            n.has_style(style::ASCII_COLUMN_HEADER_CODE) || n.has_style(style::ASCII_COLUMN_CODE)
        },
        yields: |_: &Node| Cow::Borrowed("color: lightseagreen"),
    },
    Rule {
        matches: |n: &Node| {
            n.has_style(style::ASCII_COLUMN_HEADER_HEX) || n.has_style(style::ASCII_COLUMN_HEX)
        },
        yields: |_: &Node| Cow::Borrowed("color: lightgray"),
    },
    Rule {
        matches: |n: &Node| n.has_style(style::ASCII_COLUMN_CHAR),
        yields: |_: &Node| Cow::Borrowed("column-width: 60px"),
    },
];

fn first_match<T: Copy>(rules: &[Rule<T>], node: &Node) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.matches)(node))
        .map(|rule| rule.yields)
}

fn is_color_swatch(node: &Node) -> bool {
    node.has_style(style::COLOR_SWATCH_LARGE) || node.has_style(style::COLOR_SWATCH_SMALL)
}

/// HTML tag for a node, if its kind or style implies one
pub fn tag_for(node: &Node) -> Option<&'static str> {
    first_match(TAG_RULES, node)
}

pub fn class_for(node: &Node) -> Option<&'static str> {
    first_match(CLASS_RULES, node)
}

/// Inline CSS for a node
pub fn style_for(node: &Node) -> Option<Cow<'static, str>> {
    first_match(STYLE_RULES, node).map(|yields| yields(node))
}

/// Text to write for a leaf. Swatches render as colour blocks only.
pub fn text_for(node: &Node) -> Option<&str> {
    if is_color_swatch(node) {
        return None;
    }
    node.text.as_deref()
}
