//! # autovet-adapter-yaml-fs
//!
//! Filesystem adapter implementing the `DocumentSource` port.
//!
//! ## Responsibilities
//! - Discover automation files (`.yaml`, `.yml`, `.json` by default) under a
//!   root directory, recursively and in a stable order
//! - Read and parse each file into a `serde_json::Value` tree, converting
//!   YAML-only constructs (tags, scalar keys) on the way
//!
//! ## Dependency rule
//! Depends on `autovet-app` (for the port trait) and `autovet-domain`
//! (for error types). Nothing depends on this crate except the binary.

pub mod error;
pub mod parser;
pub mod source;

pub use error::YamlFsError;
pub use source::{DEFAULT_EXTENSIONS, YamlFsSource};
