//! Core types for the orgtree entity-hierarchy engine.
//!
//! This crate is deliberately free of anything but the data model: the
//! time-versioned organizational-unit record ([`entity::EntityVersion`]),
//! its type enumeration, and the validated collection that answers
//! point-in-time queries ([`store::EntityVersionStore`]). All other crates
//! depend on it; it depends on nothing proprietary.

pub mod entity;
pub mod error;
pub mod store;

pub use entity::{EntityType, EntityVersion};
pub use error::{Error, Result};
pub use store::EntityVersionStore;
