//! Render element trees as indented XML text through `xot`

use thiserror::Error;
use xot::output::xml::Parameters;
use xot::output::Indentation;
use xot::{Node, Xot};

use super::element::Element;

pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum XmlError {
    #[error("Failed to render <{element}>: {reason}")]
    Render { element: String, reason: String },
}

/// Copy an element tree into `xot` nodes
fn build(tree: &mut Xot, el: &Element) -> Result<Node, xot::Error> {
    let name = tree.add_name(&el.name);
    let node = tree.new_element(name);
    for (key, value) in &el.attributes {
        let key = tree.add_name(key);
        tree.attributes_mut(node).insert(key, value.clone());
    }
    if let Some(text) = el.text.as_deref().filter(|t| !t.is_empty()) {
        let text = tree.new_text(text);
        tree.append(node, text)?;
    }
    for child in &el.children {
        let child = build(tree, child)?;
        tree.append(node, child)?;
    }
    Ok(node)
}

/// Render a document: declaration line, indented tree, empty elements closed
/// as `<x />`, no blank lines, trailing newline.
pub fn to_xml_string(root: &Element) -> Result<String, XmlError> {
    let render_error = |e: xot::Error| XmlError::Render {
        element: root.name.clone(),
        reason: e.to_string(),
    };

    let mut tree = Xot::new();
    let node = build(&mut tree, root).map_err(render_error)?;
    let parameters = Parameters {
        indentation: Some(Indentation::default()),
        ..Default::default()
    };
    let body = tree
        .serialize_xml_string(parameters, node)
        .map_err(render_error)?;

    Ok(format!("{}\n{}", DECLARATION, strip_blank_lines(&body)))
}

/// Drop every line that is empty or whitespace-only and space out
/// self-closing tags
pub fn strip_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match line.strip_suffix("/>") {
            Some(open) if !open.ends_with(' ') => {
                out.push_str(open);
                out.push_str(" />");
            }
            _ => out.push_str(line),
        }
        out.push('\n');
    }
    out
}
