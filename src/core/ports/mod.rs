//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the parser and wherever the
//! caller keeps its employees and projects.
//!
//! Implementations live in the `adapters` module.

mod reference_store;

pub use reference_store::ReferenceStore;
