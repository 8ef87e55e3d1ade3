//! # foody-schema
//!
//! Schema registry, validation, and seeding for the Foodylicious data layer.
//!
//! This crate provides:
//! - `SchemaRegistry`: one immutable rule set per entity kind, built once at startup
//! - Ordered document validation with field-path error reporting
//! - All-or-nothing batch seeding through a caller-supplied [`Persistence`] collaborator
//! - The index catalog every storage backend is expected to maintain
//! - JSON Schema export of the typed records for external tooling
//!
//! ## Architecture
//!
//! Typed records live in `foody-core`. This crate holds the declarative rules
//! those records must satisfy and classifies violations. It never stores
//! anything itself: uniqueness and persistence belong to whatever implements
//! [`Persistence`] (see `foody-store`).

pub mod error;
pub mod indexes;
pub mod persistence;
pub mod registry;
pub mod rules;
pub mod standard;
mod validate;

#[cfg(test)]
mod test_support;

pub use error::{PersistenceError, SchemaError, ValidationError};
pub use persistence::Persistence;
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};
pub use rules::{DocumentCheck, FieldRule, FieldType, Schema, ValueSpec};
