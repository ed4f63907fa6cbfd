//! # shoprank storage
//!
//! Loads the catalog snapshot and the pre-trained models from a data
//! directory into an immutable [`Artifacts`] bundle. Nothing is written back.
//!
//! ```text
//! <data-dir>/
//!   catalog.{json,json.gz,bin}
//!   manifest.json                 optional SHA-256 checksums
//!   models/dictionary.*
//!   models/tfidf.*
//!   models/lsi.*
//!   models/similarity_index.*
//!   models/svd.*
//! ```

pub mod artifacts;
pub mod format;
pub mod manifest;

pub use artifacts::{ArtifactLoader, Artifacts};
pub use format::ArtifactFormat;
pub use manifest::{Manifest, MANIFEST_FILE};
