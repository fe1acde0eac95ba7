use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

/// Collects every heading's display text in document order, the same text
/// the renderer shows next to its anchors. Inline markup is flattened to
/// plain text.
pub fn heading_texts(markdown: &str) -> Vec<String> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &Options::default());

    let mut headings = Vec::new();
    for node in root.descendants() {
        if matches!(node.data.borrow().value, NodeValue::Heading(_)) {
            let mut text = String::new();
            collect_text(node, &mut text);
            headings.push(text.trim().to_string());
        }
    }
    headings
}

fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.descendants() {
        match &child.data.borrow().value {
            NodeValue::Text(literal) => out.push_str(literal),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => {}
        }
    }
}
