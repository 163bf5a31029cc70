//! Minimal XML node tree
//!
//! Just enough XML to write an SVG document: named elements with ordered
//! attributes, optional text, children. Attribute order is preserved as
//! inserted so emitted documents are stable and diffable.

use std::io::{self, Write};

/// One XML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn add_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Builder form of [`add_attr`](Node::add_attr).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attr(name, value);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Serialize this element and its subtree.
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "\n<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(w, " {}='{}'", name, escape(value))?;
        }
        if self.children.is_empty() && self.text.is_none() {
            write!(w, " />")?;
        } else {
            write!(w, ">")?;
            if let Some(text) = &self.text {
                write!(w, "{}", escape(text))?;
            }
            for child in &self.children {
                child.write(w)?;
            }
            write!(w, "\n</{}>", self.name)?;
        }
        Ok(())
    }
}
