//! Error types for loading a reflection document.
//!
//! Extraction itself never fails; only reading and parsing the document do.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid UTF-8 in document at byte {position}")]
    Utf8 { position: u64 },

    #[error("document has no root element")]
    MissingRoot,

    #[error("element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("unexpected element <{0}> after the root element")]
    MultipleRoots(String),

    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
