// crates/lwm2m-ddf/src/model.rs

//! Public, ergonomic data structures for a parsed Object description.

use crate::error::DdfError;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Version assigned to an object whose `<ObjectVersion>` is missing or blank.
pub const DEFAULT_VERSION: &str = "1.0";

// --- Object ---

/// One managed-object type definition (an `<Object>` element).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectModel {
    /// `<ObjectID>`
    pub id: i32,
    /// `<Name>`
    pub name: Option<String>,
    /// `<Description1>`
    pub description: Option<String>,
    /// `<ObjectVersion>`, or [`DEFAULT_VERSION`].
    pub version: String,
    /// `<MultipleInstances>` is exactly `Multiple`.
    pub multiple: bool,
    /// `<Mandatory>` is exactly `Mandatory`.
    pub mandatory: bool,
    /// Every `<Resources>/<Item>`, in document order.
    pub resources: Vec<ResourceModel>,
}

impl ObjectModel {
    /// Returns the first resource with the given ID.
    pub fn resource(&self, id: i32) -> Option<&ResourceModel> {
        self.resources.iter().find(|r| r.id == id)
    }
}

// --- Resource ---

/// One resource definition within an object (an `<Item>` element).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceModel {
    /// `@ID`
    pub id: i32,
    /// `<Name>`
    pub name: Option<String>,
    /// `<Operations>`
    pub operations: Operations,
    /// `<MultipleInstances>` is exactly `Multiple`.
    pub multiple: bool,
    /// `<Mandatory>` is exactly `Mandatory`.
    pub mandatory: bool,
    /// `<Type>`
    pub resource_type: ResourceType,
    /// `<RangeEnumeration>`
    pub range_enumeration: Option<String>,
    /// `<Units>`
    pub units: Option<String>,
    /// `<Description>`
    pub description: Option<String>,
}

// --- Operations ---

/// Actions permitted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operations {
    #[default]
    None,
    R,
    W,
    RW,
    E,
    RE,
    WE,
    RWE,
}

const OPERATIONS_LITERALS: &[(&str, Operations)] = &[
    ("NONE", Operations::None),
    ("R", Operations::R),
    ("W", Operations::W),
    ("RW", Operations::RW),
    ("E", Operations::E),
    ("RE", Operations::RE),
    ("WE", Operations::WE),
    ("RWE", Operations::RWE),
];

impl Operations {
    /// Exact, case-sensitive lookup of a DDF literal.
    pub fn from_literal(literal: &str) -> Option<Self> {
        OPERATIONS_LITERALS
            .iter()
            .find(|(text, _)| *text == literal)
            .map(|(_, op)| *op)
    }

    /// The DDF literal for this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Operations::None => "NONE",
            Operations::R => "R",
            Operations::W => "W",
            Operations::RW => "RW",
            Operations::E => "E",
            Operations::RE => "RE",
            Operations::WE => "WE",
            Operations::RWE => "RWE",
        }
    }

    pub fn is_readable(self) -> bool {
        matches!(
            self,
            Operations::R | Operations::RW | Operations::RE | Operations::RWE
        )
    }

    pub fn is_writable(self) -> bool {
        matches!(
            self,
            Operations::W | Operations::RW | Operations::WE | Operations::RWE
        )
    }

    pub fn is_executable(self) -> bool {
        matches!(
            self,
            Operations::E | Operations::RE | Operations::WE | Operations::RWE
        )
    }
}

impl FromStr for Operations {
    type Err = DdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operations::from_literal(s).ok_or_else(|| DdfError::UnknownOperations(s.into()))
    }
}

impl fmt::Display for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Resource Type ---

/// Value type of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResourceType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Opaque,
    Time,
    Objlnk,
}

const RESOURCE_TYPE_LABELS: &[(&str, ResourceType)] = &[
    ("String", ResourceType::String),
    ("Integer", ResourceType::Integer),
    ("Float", ResourceType::Float),
    ("Boolean", ResourceType::Boolean),
    ("Opaque", ResourceType::Opaque),
    ("Time", ResourceType::Time),
    ("Objlnk", ResourceType::Objlnk),
];

impl ResourceType {
    /// Exact, case-sensitive lookup of a DDF `<Type>` label.
    pub fn from_label(label: &str) -> Option<Self> {
        RESOURCE_TYPE_LABELS
            .iter()
            .find(|(text, _)| *text == label)
            .map(|(_, ty)| *ty)
    }

    /// The DDF label for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::String => "String",
            ResourceType::Integer => "Integer",
            ResourceType::Float => "Float",
            ResourceType::Boolean => "Boolean",
            ResourceType::Opaque => "Opaque",
            ResourceType::Time => "Time",
            ResourceType::Objlnk => "Objlnk",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
