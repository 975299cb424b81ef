// crates/lwm2m-ddf/src/lib.rs

#![doc = "Parses LwM2M Object description (DDF) files into a typed model."]
#![doc = ""]
#![doc = "A DDF document holds one or more `<Object>` definitions, each listing its"]
#![doc = "`<Resources>` as `<Item>` elements. [`DdfParser`] turns such a document into"]
#![doc = "a list of [`ObjectModel`] records, in document order."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `parse_file` / `parse_reader` / `parse_str`: fail-soft parsing that logs"]
#![doc = "  any error and returns an empty list."]
#![doc = "- `try_parse_file` / `try_parse_reader` / `try_parse_str`: the same parse,"]
#![doc = "  returning a [`DdfError`] on failure."]

// --- Crate Modules ---

mod error;
mod model;
mod parser;
mod resolver;
mod xml;

// --- Public API Re-exports ---

pub use error::DdfError;
pub use model::{DEFAULT_VERSION, ObjectModel, Operations, ResourceModel, ResourceType};
pub use parser::DdfParser;
