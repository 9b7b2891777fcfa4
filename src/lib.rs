//! refdoc — extract a documentation model from API reflection XML.
//!
//! Reads a `structure.xml` style reflection document and produces, for every
//! class, interface and trait, a sorted record of its constants, properties
//! and methods, split into members declared on the type and members
//! inherited from an ancestor.
//!
//! ```no_run
//! let document = refdoc::load(std::path::Path::new("build/structure.xml"))?;
//! let catalog = refdoc::collect(&document);
//! for (name, class) in &catalog {
//!     println!("{} {} ({} methods)", class.kind, name, class.methods.len());
//! }
//! # Ok::<(), refdoc::Error>(())
//! ```

pub mod collect;
pub mod dom;
pub mod error;
pub mod extract;
pub mod model;
pub mod query;
pub mod render;

pub use collect::collect;
pub use dom::{Document, Element};
pub use error::{Error, Result};
pub use model::Catalog;

use std::fs;
use std::path::Path;

/// Read and parse a reflection document from disk.
pub fn load(path: &Path) -> Result<Document> {
    tracing::info!("collecting API docs from '{}'", path.display());
    let xml = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Document::parse(&xml)
}
