// crates/lwm2m-ddf/src/xml.rs

//! Loading a DDF document into a `roxmltree` tree, and the few node helpers
//! the resolvers need.

use crate::error::DdfError;
use roxmltree::{Document, Node, ParsingOptions};
use std::io::Read;

/// Reusable document loading configuration.
///
/// Holds no per-document state, so one loader may be shared between threads.
#[derive(Debug, Clone)]
pub(crate) struct DocumentLoader {
    allow_dtd: bool,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        // DDF files may carry a DOCTYPE with entity declarations.
        Self { allow_dtd: true }
    }
}

impl DocumentLoader {
    /// Reads the whole source. Only UTF-8 input is accepted.
    pub(crate) fn read<R: Read>(&self, mut source: R) -> Result<String, DdfError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Builds the tree for an in-memory document.
    pub(crate) fn parse<'input>(&self, text: &'input str) -> Result<Document<'input>, DdfError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;
        Ok(Document::parse_with_options(text, options)?)
    }
}

/// Tag name without namespace prefix.
pub(crate) fn name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Immediate element children, skipping text and comments.
pub(crate) fn elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Every descendant element (not `node` itself) with the given name, in
/// document order.
pub(crate) fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |d| d.id() != node.id() && d.is_element() && name(*d) == tag)
}

/// Concatenation of all descendant text, untrimmed.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|d| d.is_text())
        .filter_map(|d| d.text())
        .collect()
}
