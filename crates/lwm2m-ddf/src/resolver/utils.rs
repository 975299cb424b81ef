// crates/lwm2m-ddf/src/resolver/utils.rs

//! Text helpers shared by the object and resource resolvers.

use crate::xml::text_content;
use roxmltree::Node;

/// Cardinality literal that sets `multiple`.
pub(super) const MULTIPLE: &str = "Multiple";

/// Cardinality literal that sets `mandatory`.
pub(super) const MANDATORY: &str = "Mandatory";

/// The element's full text, verbatim.
pub(super) fn text(element: Node<'_, '_>) -> String {
    text_content(element)
}

/// The element's text, or `None` when it is empty or whitespace only.
pub(super) fn non_blank_text(element: Node<'_, '_>) -> Option<String> {
    let text = text_content(element);
    if text.trim().is_empty() { None } else { Some(text) }
}

/// True only when the element's text is exactly `literal`.
pub(super) fn is_literal(element: Node<'_, '_>, literal: &str) -> bool {
    text_content(element) == literal
}
