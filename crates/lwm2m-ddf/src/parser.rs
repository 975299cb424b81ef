// crates/lwm2m-ddf/src/parser.rs

use crate::error::DdfError;
use crate::model::ObjectModel;
use crate::resolver;
use crate::xml::DocumentLoader;
use log::{debug, error};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parser for LwM2M Object description (DDF) files.
///
/// The parser only keeps its document-loading configuration, so a single
/// instance can be reused for any number of documents and shared between
/// threads.
///
/// The `parse_*` methods never fail: any error is logged and reported as an
/// empty list. The `try_parse_*` methods return the error instead.
#[derive(Debug, Clone, Default)]
pub struct DdfParser {
    loader: DocumentLoader,
}

impl DdfParser {
    /// Creates a parser that accepts UTF-8 documents, DOCTYPE declarations
    /// included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the DDF file at `path`.
    ///
    /// Returns an empty list if the file cannot be opened or is not a valid
    /// description.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Vec<ObjectModel> {
        let path = path.as_ref();
        contain(&file_label(path), self.try_parse_file(path))
    }

    /// Parses an already-open stream. `label` only appears in log records.
    pub fn parse_reader<R: Read>(&self, reader: R, label: Option<&str>) -> Vec<ObjectModel> {
        let label = label.unwrap_or_default();
        contain(label, self.try_parse_reader(reader, Some(label)))
    }

    /// Parses a document held in memory. `label` only appears in log records.
    pub fn parse_str(&self, xml: &str, label: Option<&str>) -> Vec<ObjectModel> {
        self.parse_reader(xml.as_bytes(), label)
    }

    /// Parses the DDF file at `path`, returning the first error encountered.
    pub fn try_parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<ObjectModel>, DdfError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.try_parse_reader(file, Some(&file_label(path)))
    }

    /// Parses an already-open stream, returning the first error encountered.
    pub fn try_parse_reader<R: Read>(
        &self,
        reader: R,
        label: Option<&str>,
    ) -> Result<Vec<ObjectModel>, DdfError> {
        debug!("Parsing DDF file {}", label.unwrap_or_default());

        let text = self.loader.read(reader)?;
        let document = self.loader.parse(&text)?;
        resolver::resolve_document(&document)
    }

    /// Parses a document held in memory, returning the first error encountered.
    pub fn try_parse_str(
        &self,
        xml: &str,
        label: Option<&str>,
    ) -> Result<Vec<ObjectModel>, DdfError> {
        self.try_parse_reader(xml.as_bytes(), label)
    }
}

/// The single point where parse errors are logged and turned into "no objects".
fn contain(label: &str, result: Result<Vec<ObjectModel>, DdfError>) -> Vec<ObjectModel> {
    result.unwrap_or_else(|e| {
        error!("Could not parse the resource definition file {}: {}", label, e);
        Vec::new()
    })
}

/// File name used to label log records; falls back to the full path.
fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
