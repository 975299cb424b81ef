// crates/lwm2m-ddf/src/resolver/resource.rs

use super::utils::{MANDATORY, MULTIPLE, is_literal, text};
use super::{FieldHandler, dispatch};
use crate::error::{DdfError, parse_id};
use crate::model::{Operations, ResourceModel, ResourceType};
use roxmltree::Node;

const RESOURCE_FIELDS: &[(&str, FieldHandler<ResourceModel>)] = &[
    ("Name", set_name),
    ("Operations", set_operations),
    ("MultipleInstances", set_multiple),
    ("Mandatory", set_mandatory),
    ("Type", set_type),
    ("RangeEnumeration", set_range_enumeration),
    ("Units", set_units),
    ("Description", set_description),
];

fn set_name(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.name = Some(text(field));
    Ok(())
}

/// Empty text keeps the current value; anything else must be a known literal.
fn set_operations(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    let literal = text(field);
    if !literal.is_empty() {
        resource.operations = literal.parse::<Operations>()?;
    }
    Ok(())
}

fn set_multiple(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.multiple = is_literal(field, MULTIPLE);
    Ok(())
}

fn set_mandatory(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.mandatory = is_literal(field, MANDATORY);
    Ok(())
}

/// Unknown labels fall back to `String` instead of failing.
fn set_type(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    if let Some(resource_type) = ResourceType::from_label(&text(field)) {
        resource.resource_type = resource_type;
    }
    Ok(())
}

fn set_range_enumeration(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.range_enumeration = Some(text(field));
    Ok(())
}

fn set_units(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.units = Some(text(field));
    Ok(())
}

fn set_description(resource: &mut ResourceModel, field: Node<'_, '_>) -> Result<(), DdfError> {
    resource.description = Some(text(field));
    Ok(())
}

/// Resolves one `<Item>` element into a `ResourceModel`.
pub(super) fn resolve_resource(item: Node<'_, '_>) -> Result<ResourceModel, DdfError> {
    let id = item.attribute("ID").ok_or(DdfError::MissingAttribute {
        element: "Item",
        attribute: "ID",
    })?;

    let mut resource = ResourceModel {
        id: parse_id("Item@ID", id)?,
        name: None,
        operations: Operations::default(),
        multiple: false,
        mandatory: false,
        resource_type: ResourceType::default(),
        range_enumeration: None,
        units: None,
        description: None,
    };
    dispatch(&mut resource, item, RESOURCE_FIELDS)?;
    Ok(resource)
}
