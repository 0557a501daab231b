//! TOML-based reference data store
//!
//! Implements `ReferenceStore` using a single TOML file.
//!
//! - [`parser`] - Read and deserialize reference files
//! - [`writer`] - Format and write reference files
//! - [`repository`] - `ReferenceStore` implementation

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::{ReferenceError, load_file, parse_str};
pub use repository::TomlReferenceStore;
pub use writer::{format_reference_file, write_file};
