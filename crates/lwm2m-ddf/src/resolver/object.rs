// crates/lwm2m-ddf/src/resolver/object.rs

use super::utils::{MANDATORY, MULTIPLE, is_literal, non_blank_text, text};
use super::{FieldHandler, dispatch, resource};
use crate::error::{DdfError, parse_id};
use crate::model::{DEFAULT_VERSION, ObjectModel, ResourceModel};
use crate::xml;
use roxmltree::Node;

/// Fields collected while walking an `<Object>`; `id` stays optional until
/// the walk is over.
struct ObjectDraft {
    id: Option<i32>,
    name: Option<String>,
    description: Option<String>,
    version: String,
    multiple: bool,
    mandatory: bool,
    resources: Vec<ResourceModel>,
}

impl Default for ObjectDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            version: DEFAULT_VERSION.into(),
            multiple: false,
            mandatory: false,
            resources: Vec::new(),
        }
    }
}

const OBJECT_FIELDS: &[(&str, FieldHandler<ObjectDraft>)] = &[
    ("ObjectID", set_id),
    ("Name", set_name),
    ("Description1", set_description),
    ("ObjectVersion", set_version),
    ("MultipleInstances", set_multiple),
    ("Mandatory", set_mandatory),
    ("Resources", append_resources),
];

fn set_id(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    draft.id = Some(parse_id("ObjectID", &text(field))?);
    Ok(())
}

fn set_name(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    draft.name = Some(text(field));
    Ok(())
}

fn set_description(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    draft.description = Some(text(field));
    Ok(())
}

fn set_version(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    if let Some(version) = non_blank_text(field) {
        draft.version = version;
    }
    Ok(())
}

fn set_multiple(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    draft.multiple = is_literal(field, MULTIPLE);
    Ok(())
}

fn set_mandatory(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    draft.mandatory = is_literal(field, MANDATORY);
    Ok(())
}

fn append_resources(draft: &mut ObjectDraft, field: Node<'_, '_>) -> Result<(), DdfError> {
    for item in xml::elements(field).filter(|e| xml::name(*e) == "Item") {
        draft.resources.push(resource::resolve_resource(item)?);
    }
    Ok(())
}

/// Resolves one `<Object>` element into an `ObjectModel`.
pub(super) fn resolve_object(element: Node<'_, '_>) -> Result<ObjectModel, DdfError> {
    let mut draft = ObjectDraft::default();
    dispatch(&mut draft, element, OBJECT_FIELDS)?;

    Ok(ObjectModel {
        id: draft.id.ok_or(DdfError::MissingElement { element: "ObjectID" })?,
        name: draft.name,
        description: draft.description,
        version: draft.version,
        multiple: draft.multiple,
        mandatory: draft.mandatory,
        resources: draft.resources,
    })
}
