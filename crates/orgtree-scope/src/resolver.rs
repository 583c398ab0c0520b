//! Assignment-to-entity-set resolution.

use std::collections::HashSet;

use orgtree_hierarchy::Hierarchy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One direct grant: a person may act on `entity_id`, and on its whole
/// subtree when `with_descendants` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAssignment {
  pub entity_id:        Uuid,
  pub with_descendants: bool,
}

impl EntityAssignment {
  pub fn new(entity_id: Uuid, with_descendants: bool) -> Self {
    Self { entity_id, with_descendants }
  }
}

/// Resolves assignments against one point-in-time hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct ScopeResolver<'a> {
  hierarchy: &'a Hierarchy,
}

impl<'a> ScopeResolver<'a> {
  pub fn new(hierarchy: &'a Hierarchy) -> Self { Self { hierarchy } }

  /// The union of every assignment's entity and, where flagged, its
  /// descendant closure. No assignments resolves to the empty set: the
  /// person is authorized for nothing, which is not an error.
  ///
  /// An assigned entity absent from the snapshot still contributes its own
  /// id — the grant stands even while the unit has no active version — but
  /// has no descendants to expand.
  pub fn resolve(&self, assignments: &[EntityAssignment]) -> HashSet<Uuid> {
    let mut scope = HashSet::new();
    for assignment in assignments {
      scope.insert(assignment.entity_id);
      if assignment.with_descendants {
        scope.extend(
          self
            .hierarchy
            .all_descendants_of(assignment.entity_id)
            .iter()
            .map(|v| v.entity_id),
        );
      }
    }
    tracing::debug!(
      assignments = assignments.len(),
      entities = scope.len(),
      "scope resolved"
    );
    scope
  }
}
