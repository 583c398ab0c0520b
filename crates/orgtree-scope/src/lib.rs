//! Authorization scoping over a built [`orgtree_hierarchy::Hierarchy`].
//!
//! Resolves a person's direct entity assignments into the flat set of entity
//! ids they may act upon, and hosts the cross-faculty predicates built on the
//! same hierarchy (borrowed-course detection). The resolved id set is the
//! contract consumed by record-filtering code elsewhere: "return only records
//! whose owning entity is a member of this set."

pub mod borrowed;
pub mod resolver;

pub use borrowed::{faculty_scope, is_borrowed};
pub use resolver::{EntityAssignment, ScopeResolver};
