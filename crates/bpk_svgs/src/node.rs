//! Rendered element tree and its SVG markup form.

use std::fmt::{self, Display, Formatter, Write as _};

use serde::Serialize;

use crate::props::PropertyMap;
use crate::request::StyleMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Element produced by [`render`](crate::render).
///
/// The merged style is kept structured rather than folded into `attributes`; markup output emits
/// it as the trailing `style` attribute when it is non-empty.
pub struct RenderableNode {
    tag: &'static str,
    attributes: PropertyMap,
    #[serde(skip_serializing_if = "PropertyMap::is_empty")]
    style: StyleMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<RenderableNode>,
}

impl RenderableNode {
    pub(crate) fn element(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: PropertyMap::new(),
            style: StyleMap::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut PropertyMap {
        &mut self.attributes
    }

    pub(crate) fn set_style(&mut self, style: StyleMap) {
        self.style = style;
    }

    pub(crate) fn push_child(&mut self, child: RenderableNode) {
        self.children.push(child);
    }

    /// Element name (`svg`, `path`).
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Attributes in emission order, excluding `style`.
    pub fn attributes(&self) -> &PropertyMap {
        &self.attributes
    }

    /// Single attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Merged inline style.
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// Child elements in declaration order.
    pub fn children(&self) -> &[RenderableNode] {
        &self.children
    }

    /// Serializes the element and its subtree as SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// Serializes only the children, for hosts that build the root element themselves.
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in self.attributes.iter() {
            if !is_attribute_name(name) {
                tracing::debug!(tag = self.tag, name, "skipping malformed attribute name");
                continue;
            }
            write_attribute(out, name, value);
        }
        if !self.style.is_empty() {
            write_attribute(out, "style", &self.style.to_css());
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl Display for RenderableNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// XML attribute name check: no markup delimiters, quotes or whitespace, and no leading digit,
/// `-` or `.`.
pub(crate) fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_ascii_digit() || matches!(first, '-' | '.') {
        return false;
    }
    name.chars().all(|ch| {
        !ch.is_whitespace()
            && !ch.is_control()
            && !matches!(ch, '"' | '\'' | '=' | '<' | '>' | '/' | '&' | '`')
    })
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn childless_elements_self_close() {
        let mut node = RenderableNode::element("path");
        node.attributes_mut().insert("d", "M1 1");
        assert_eq!(node.to_markup(), r#"<path d="M1 1"/>"#);
        assert_eq!(node.inner_markup(), "");
    }

    #[test]
    fn style_is_emitted_after_attributes() {
        let mut root = RenderableNode::element("svg");
        root.attributes_mut().insert("width", "24");
        root.set_style(StyleMap::from([("width", "1.5rem")]));
        root.push_child(RenderableNode::element("path"));

        assert_eq!(
            root.to_string(),
            r#"<svg width="24" style="width:1.5rem"><path/></svg>"#
        );
        assert_eq!(root.inner_markup(), "<path/>");
    }

    #[test]
    fn malformed_attribute_names_are_not_serialized() {
        let mut node = RenderableNode::element("svg");
        node.attributes_mut().insert(r#"onload="alert(1)" data-x"#, "y");
        node.attributes_mut().insert("a>b", "1");
        node.attributes_mut().insert("", "empty");
        node.attributes_mut().insert("1st", "digit");
        node.attributes_mut().insert("xlink:href", "#dot");
        node.attributes_mut().insert("data-icon", "dot");

        let markup = node.to_markup();
        assert!(!markup.contains("onload"));
        assert_eq!(markup, r##"<svg xlink:href="#dot" data-icon="dot"/>"##);
    }

    #[test]
    fn attribute_name_check_accepts_svg_names() {
        for name in ["viewBox", "aria-hidden", "data-x", "xml:lang", "_private"] {
            assert!(is_attribute_name(name), "{name}");
        }
        for name in ["on load", "a=b", "a'b", "a/b", "-x", ".x", "9x"] {
            assert!(!is_attribute_name(name), "{name}");
        }
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut node = RenderableNode::element("svg");
        node.attributes_mut()
            .insert("aria-label", r#"Tom & "Jerry" <3"#);
        assert_eq!(
            node.to_markup(),
            r#"<svg aria-label="Tom &amp; &quot;Jerry&quot; &lt;3"/>"#
        );
    }
}
