//! Adapter tests
//!
//! Tests for I/O adapter implementations:
//! - TOML reference data parsing and writing
//! - `TomlReferenceStore` persistence

mod toml_test;
