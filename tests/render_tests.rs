use pretty_assertions::assert_eq;
use quickinfo_html::{
    kind, parse_json, parse_yaml, render_json, render_object, render_yaml, style, Node,
    RenderError, RenderOptions, Renderer, Value,
};
use std::fs;
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(filename);
    path
}

fn read_fixture(filename: &str) -> String {
    fs::read_to_string(fixture_path(filename)).unwrap()
}

fn cell(text: &str) -> Value {
    Node::leaf(text).with_kind(kind::CELL).into()
}

fn row(cells: Vec<Value>) -> Value {
    Node::container(cells).with_kind(kind::ROW).into()
}

fn table(rows: Vec<Value>) -> Node {
    Node::container(rows).with_kind(kind::TABLE)
}

/// Checks that every start tag has a matching end tag in nesting order.
fn assert_balanced(html: &str) {
    let mut stack: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            panic!("unterminated tag in {:?}", html);
        };
        let inner = &rest[start + 1..start + len];
        if let Some(name) = inner.strip_prefix('/') {
            let open = stack.pop().unwrap_or_else(|| panic!("stray </{}> in {:?}", name, html));
            assert_eq!(open, name, "mismatched tags in {:?}", html);
        } else {
            let name = inner.split_whitespace().next().unwrap_or_default();
            stack.push(name.to_string());
        }
        rest = &rest[start + len + 1..];
    }
    assert!(stack.is_empty(), "unclosed tags {:?} in {:?}", stack, html);
}

// End-to-end
#[test]
fn test_table_row_cell_nesting() {
    let tree = table(vec![row(vec![cell("x")])]);
    let html = render_object(&tree.into()).unwrap();
    assert_eq!(
        html,
        "<table>\n    <tr>\n        <td>x</td>\n    </tr>\n</table>\n"
    );
}

#[test]
fn test_children_rendered_in_order() {
    let tree = table(vec![row(vec![cell("a"), cell("b"), cell("c")])]);
    let html = render_object(&tree.into()).unwrap();
    let a = html.find(">a<").unwrap();
    let b = html.find(">b<").unwrap();
    let c = html.find(">c<").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_color_table_fixture() {
    let json = read_fixture("color_table.json");
    let expected = read_fixture("color_table.html");
    assert_eq!(render_json(&json).unwrap(), expected);
}

#[test]
fn test_ascii_table_fixture() {
    let yaml = read_fixture("ascii_table.yaml");
    let expected = read_fixture("ascii_table.html");
    assert_eq!(render_yaml(&yaml).unwrap(), expected);
}

#[test]
fn test_unrenderable_fixture() {
    let json = read_fixture("unrenderable.json");
    let result = render_json(&json);
    assert_eq!(
        result,
        Err(RenderError::UnrenderableValue {
            path: "$.List[1]".to_string(),
            value: "true".to_string(),
        })
    );
}

#[test]
fn test_json_and_yaml_decode_to_same_tree() {
    let json = r#"{ "Kind": "Paragraph", "List": ["Hello ", { "Style": "SectionHeader", "Text": "World" }] }"#;
    let yaml = "Kind: Paragraph\nList:\n  - \"Hello \"\n  - Style: SectionHeader\n    Text: World\n";
    assert_eq!(parse_json(json).unwrap(), parse_yaml(yaml).unwrap());
}

#[test]
fn test_paragraph_with_inline_header() {
    let tree = Node::container(vec![
        "Hello ".into(),
        Node::leaf("World").with_style(style::SECTION_HEADER).into(),
    ])
    .with_kind(kind::PARAGRAPH);
    assert_eq!(
        render_object(&tree.into()).unwrap(),
        "<div>\n    Hello <span class=\"sectionHeader\">World</span>\n</div>\n"
    );
}

#[test]
fn test_swatch_name_class() {
    let html = render_object(&Node::leaf("crimson").with_style(style::COLOR_SWATCH_NAME).into())
        .unwrap();
    assert_eq!(html, "<span class=\"swatchName\">crimson</span>\n");
}

// Search links
#[test]
fn test_search_link_attributes() {
    let node = Node::leaf("Cats").with_search_link("cat food");
    let html = render_object(&node.into()).unwrap();
    assert!(html.contains("href=\"?cat+food\""));
    assert!(html.contains("onclick=\"searchFor(&quot;cat food&quot;);return false;\""));
    assert!(html.contains(">Cats</a>"));
}

#[test]
fn test_search_link_query_is_escaped() {
    let node = Node::leaf("quote").with_search_link("say \"hi\" & <go>");
    let html = render_object(&node.into()).unwrap();
    assert!(html.contains("href=\"?say+%22hi%22+%26+%3Cgo%3E\""));
    assert!(html.contains(
        "onclick=\"searchFor(&quot;say \\&quot;hi\\&quot; &amp; \\u003Cgo\\u003E&quot;);return false;\""
    ));
    assert_balanced(&html);
}

// Color swatches
#[test]
fn test_color_cell_expansion() {
    let node = Node::leaf("#FF0000").with_kind(kind::CELL).with_style(style::COLOR);
    let html = render_object(&node.into()).unwrap();
    assert!(html.contains("<div class=\"swatch\" style=\"background:#FF0000\">"));
    assert!(html.contains("href=\"?%23FF0000\""));
    assert!(html.contains("<div class=\"swatchName\">\n        #FF0000</div>"));
    assert_eq!(html.matches("#FF0000").count(), 3);
    assert_balanced(&html);
}

#[test]
fn test_swatch_text_never_literal() {
    for swatch in [style::COLOR_SWATCH_SMALL, style::COLOR_SWATCH_LARGE] {
        let html = render_object(&Node::leaf("olive").with_style(swatch).into()).unwrap();
        assert!(html.contains("background:olive"));
        assert!(!html.contains(">olive"), "{} leaked text: {}", swatch, html);
    }
}

// Structural properties
#[test]
fn test_deep_nesting_is_balanced() {
    let mut value: Value = cell("leaf");
    for depth in 0..24 {
        value = match depth % 4 {
            0 => row(vec![value, cell("sibling")]),
            1 => table(vec![value]).into(),
            2 => Value::List(vec![value, "text".into()]),
            _ => Node::container(vec![value])
                .with_kind(kind::PARAGRAPH)
                .with_style(style::FIXED)
                .into(),
        };
    }
    let html = render_object(&value).unwrap();
    assert_balanced(&html);
    assert!(html.ends_with("</div>\n"));
}

#[test]
fn test_balanced_with_swatches_and_links() {
    let tree = Node::container(vec![
        Node::leaf("#123456")
            .with_kind(kind::CELL)
            .with_style(style::COLOR)
            .into(),
        Node::leaf("red")
            .with_style(style::COLOR_SWATCH_SMALL)
            .with_search_link("red")
            .into(),
        Node::leaf("blue")
            .with_style(style::COLOR_SWATCH_LARGE)
            .with_search_link("blue")
            .into(),
        Value::List(vec![Node::leaf("q").with_search_link("q").into()]),
    ])
    .with_kind(kind::ROW);
    let html = render_object(&tree.into()).unwrap();
    assert_balanced(&html);
}

#[test]
fn test_rendering_is_deterministic() {
    let json = read_fixture("color_table.json");
    let value = parse_json(&json).unwrap();
    let renderer = Renderer::new();
    let first = renderer.render_object(&value).unwrap();
    let second = renderer.render_object(&value).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_indent() {
    let tree = table(vec![row(vec![cell("x")])]);
    let renderer = Renderer::with_options(RenderOptions::new().with_indent_width(2));
    assert_eq!(
        renderer.render_object(&tree.into()).unwrap(),
        "<table>\n  <tr>\n    <td>x</td>\n  </tr>\n</table>\n"
    );
}

#[test]
fn test_renderer_shared_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = renderer.clone();
            std::thread::spawn(move || {
                let tree = table(vec![row(vec![cell(&i.to_string())])]);
                renderer.render_object(&tree.into()).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert!(html.contains(&format!("<td>{}</td>", i)));
    }
}
