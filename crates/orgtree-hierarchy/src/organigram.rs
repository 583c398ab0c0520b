//! Depth-limited organigram export.
//!
//! Reporting screens render an entity's subtree as nested JSON; the depth
//! limit keeps the payload readable for deep structures.

use serde::Serialize;
use uuid::Uuid;

use crate::hierarchy::Hierarchy;

/// One node of the rendered organigram. Serialises to
/// `{"entity_id": ..., "acronym": ..., "children": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct OrganigramNode {
  pub entity_id: Uuid,
  pub acronym:   String,
  pub children:  Vec<OrganigramNode>,
}

impl Hierarchy {
  /// The subtree rooted at `entity_id`, pruned below `max_depth` levels of
  /// children (`max_depth == 0` yields a childless node). `None` when the
  /// entity is not in this snapshot.
  pub fn organigram(
    &self,
    entity_id: Uuid,
    max_depth: usize,
  ) -> Option<OrganigramNode> {
    let version = self.version(entity_id)?;
    Some(OrganigramNode {
      entity_id,
      acronym:  version.acronym.clone(),
      children: if max_depth == 0 {
        Vec::new()
      } else {
        self
          .direct_children_of(entity_id)
          .iter()
          // Children are in-snapshot by construction, so the recursion
          // cannot return None.
          .filter_map(|c| self.organigram(c.entity_id, max_depth - 1))
          .collect()
      },
    })
  }
}
