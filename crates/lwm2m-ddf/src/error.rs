// crates/lwm2m-ddf/src/error.rs

use core::fmt;
use core::num::ParseIntError;
use roxmltree::Error as XmlError;
use std::error::Error;
use std::io;

/// Errors that can occur while reading or resolving a DDF document.
///
/// Any of these aborts the parse of the whole document. The fail-soft
/// entry points of [`crate::DdfParser`] log them and return no objects.
#[derive(Debug)]
pub enum DdfError {
    /// The byte source could not be opened or read, or was not UTF-8.
    Io(io::Error),

    /// The document is not well-formed XML.
    Xml(XmlError),

    /// A required child element was missing (e.g., ObjectID).
    MissingElement { element: &'static str },

    /// A required attribute was missing (e.g., Item@ID).
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An identifier did not parse as a decimal integer.
    InvalidInteger { field: &'static str, value: String },

    /// The `Operations` literal is not one of the known permission sets.
    UnknownOperations(String),
}

impl From<io::Error> for DdfError {
    fn from(e: io::Error) -> Self {
        DdfError::Io(e)
    }
}

impl From<XmlError> for DdfError {
    fn from(e: XmlError) -> Self {
        DdfError::Xml(e)
    }
}

impl fmt::Display for DdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdfError::Io(e) => write!(f, "I/O error: {}", e),
            DdfError::Xml(e) => write!(f, "XML parsing error: {}", e),
            DdfError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            DdfError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute {} on <{}>", attribute, element)
            }
            DdfError::InvalidInteger { field, value } => {
                write!(f, "Invalid integer for {}: '{}'", field, value)
            }
            DdfError::UnknownOperations(value) => {
                write!(f, "Unknown Operations value: '{}'", value)
            }
        }
    }
}

impl Error for DdfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DdfError::Io(e) => Some(e),
            DdfError::Xml(e) => Some(e),
            _ => None,
        }
    }
}

/// Parses a decimal identifier, attaching the field name and raw text on failure.
pub(crate) fn parse_id(field: &'static str, value: &str) -> Result<i32, DdfError> {
    value
        .parse()
        .map_err(|_: ParseIntError| DdfError::InvalidInteger {
            field,
            value: value.into(),
        })
}
