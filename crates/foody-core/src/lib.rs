//! # foody-core
//!
//! Core types for the Foodylicious data layer.
//!
//! This crate provides the foundational types shared across all foody crates:
//! - Entity records for the six collections (users, restaurants, items, menu, orders, feedback)
//! - Closed enums for entity kinds and order/payment status
//! - Embedded address and GeoJSON point records
//! - Cross-cutting error types
//! - The sample data set used for initial population and golden tests

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fixtures;
