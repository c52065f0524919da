//! HTML serialization of renderable node trees.

use crate::language::RenderableNode;

/// Elements with no content and no closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr"];

/// Serialize a node tree as an HTML fragment.
pub fn to_html(nodes: &[RenderableNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        write_node(&mut output, node);
    }
    output
}

fn write_node(output: &mut String, node: &RenderableNode) {
    output.push('<');
    output.push_str(&node.element);

    for (key, value) in &node.attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape(value));
        output.push('"');
    }

    if !node
        .style
        .is_empty()
    {
        let declarations: Vec<String> = node
            .style
            .iter()
            .map(|(key, value)| format!("{}: {}", kebab(key), value))
            .collect();
        output.push_str(" style=\"");
        output.push_str(&escape(&declarations.join("; ")));
        output.push('"');
    }

    output.push('>');

    if VOID_ELEMENTS.contains(
        &node
            .element
            .as_str(),
    ) {
        return;
    }

    output.push_str(&escape(&node.text));
    for child in &node.children {
        write_node(output, child);
    }

    output.push_str("</");
    output.push_str(&node.element);
    output.push('>');
}

/// camelCase style keys become CSS property names.
fn kebab(key: &str) -> String {
    let mut output = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            output.push('-');
            output.push(c.to_ascii_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}

fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod verify {
    use super::*;
    use crate::language::diagnostics::Diagnostics;
    use crate::rendering;

    fn html(content: &str) -> String {
        let mut diagnostics = Diagnostics::new();
        let nodes = rendering::render(content, None, &mut diagnostics)
            .expect("default sink never aborts");
        to_html(&nodes)
    }

    #[test]
    fn styled_span() {
        assert_eq!(
            html("[b]hi[/b]"),
            "<span style=\"font-weight: bold\">hi</span>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        assert_eq!(html("a\nb"), "<span>a</span><br><span>b</span>");
    }

    #[test]
    fn markup_characters_in_text_are_escaped() {
        assert_eq!(
            html("[code]<b>not markup</b>[/code]"),
            "<code style=\"font-family: monospace\">&lt;b&gt;not markup&lt;/b&gt;</code>"
        );
    }

    #[test]
    fn attributes_are_emitted_and_escaped() {
        assert_eq!(
            html("[url href=\"http://x.com?a=1&b=2\"]go[/url]"),
            "<a href=\"http://x.com?a=1&amp;b=2\" target=\"_blank\">go</a>"
        );
    }

    #[test]
    fn nested_containers_nest_elements() {
        assert_eq!(
            html("[center]mid[/center]"),
            "<div style=\"text-align: center\">\
             <div style=\"text-align: center\">mid</div></div>"
        );
    }
}
