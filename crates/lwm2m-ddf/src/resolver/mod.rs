// crates/lwm2m-ddf/src/resolver/mod.rs

//! Maps a document tree onto the public model.
//!
//! Each element kind has a static table of `(child name, handler)` pairs.
//! A single pass over the element's children runs the handler of every
//! recognized child; unknown children are skipped, and a later sibling
//! overwrites what an earlier one set.

use crate::error::DdfError;
use crate::model::ObjectModel;
use crate::xml;
use log::trace;
use roxmltree::{Document, Node};

mod object;
mod resource;
mod utils;

/// Writes the value of one child element into the record being built.
type FieldHandler<T> = fn(&mut T, Node<'_, '_>) -> Result<(), DdfError>;

/// Runs the matching handler for every immediate child element of `element`.
fn dispatch<T>(
    target: &mut T,
    element: Node<'_, '_>,
    fields: &[(&str, FieldHandler<T>)],
) -> Result<(), DdfError> {
    for child in xml::elements(element) {
        if let Some((_, handler)) = fields.iter().find(|(name, _)| *name == xml::name(child)) {
            handler(target, child)?;
        }
    }
    Ok(())
}

/// Resolves every `<Object>` below the document root, in document order.
///
/// The first malformed object aborts the whole document.
pub(crate) fn resolve_document(document: &Document<'_>) -> Result<Vec<ObjectModel>, DdfError> {
    xml::descendants_named(document.root_element(), "Object")
        .map(|element| {
            let object = object::resolve_object(element)?;
            trace!(
                "Resolved object {} ({} resources)",
                object.id,
                object.resources.len()
            );
            Ok(object)
        })
        .collect()
}
