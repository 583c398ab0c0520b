//! Build-then-query tree engine over a point-in-time entity snapshot.
//!
//! The flat collection of versions active on one date forms a forest via
//! `parent_entity_id` links. [`HierarchyBuilder`] materialises that forest
//! once — adjacency plus the full descendant closure — and the resulting
//! [`Hierarchy`] answers ancestor/descendant/faculty queries from in-memory
//! maps, with no further traversal cost and no hidden global cache.
//!
//! A [`Hierarchy`] is immutable after construction and safe to share across
//! threads for concurrent reads. Callers build one per logical point in time
//! and pass it down explicitly.

pub mod builder;
pub mod error;
pub mod hierarchy;
pub mod organigram;
pub mod policy;

pub use builder::HierarchyBuilder;
pub use error::{Error, Result};
pub use hierarchy::Hierarchy;
pub use organigram::OrganigramNode;
pub use policy::FacultyPolicy;
