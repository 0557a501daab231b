//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Reference data files (`[[employee]]` / `[[project]]` tables)

pub mod toml;
