//! Core domain logic for timesheet imports
//!
//! This module contains pure business logic with no I/O dependencies.
//! Reference data is reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Employee, Project, TimeEntry, errors)
//! - `parser/` - The import file grammar
//! - `services/` - Entity resolution
//! - `ports/` - Trait definitions for reference data storage

pub mod models;
pub mod parser;
pub mod ports;
pub mod services;
