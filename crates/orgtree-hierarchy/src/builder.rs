//! Single-pass materialisation of the snapshot forest.
//!
//! One pass over the input builds the `entity_id -> version` map and the
//! parent/child adjacency; a memoized depth-first accumulation then computes
//! every node's descendant closure exactly once, so the total build cost is
//! linear in the node count regardless of later query patterns.

use std::collections::HashMap;

use orgtree_core::EntityVersion;
use uuid::Uuid;

use crate::{
  error::{Error, Result},
  hierarchy::Hierarchy,
  policy::FacultyPolicy,
};

/// Builds a [`Hierarchy`] from the versions active on one date.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
  policy: FacultyPolicy,
}

impl HierarchyBuilder {
  pub fn new() -> Self { Self::default() }

  /// Replace the default faculty-equivalence policy.
  pub fn with_policy(mut self, policy: FacultyPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Materialise the forest.
  ///
  /// A version whose `parent_entity_id` resolves to no entity in the
  /// snapshot (the parent closed before this date, or is unknown) is
  /// treated as a root: the build succeeds and traversals simply stop at
  /// the broken link.
  pub fn build<I>(self, versions: I) -> Result<Hierarchy>
  where
    I: IntoIterator<Item = EntityVersion>,
  {
    let mut by_entity: HashMap<Uuid, EntityVersion> = HashMap::new();
    for version in versions {
      if let Some(previous) = by_entity.insert(version.entity_id, version) {
        return Err(Error::DuplicateEntity(previous.entity_id));
      }
    }

    let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    let mut roots: Vec<Uuid> = Vec::new();
    for version in by_entity.values() {
      match version.parent_entity_id.filter(|p| by_entity.contains_key(p)) {
        Some(parent) => {
          children.entry(parent).or_default().push(version.entity_id)
        }
        None => roots.push(version.entity_id),
      }
    }

    // Deterministic traversal and output order.
    let by_acronym =
      |a: &Uuid, b: &Uuid| by_entity[a].acronym.cmp(&by_entity[b].acronym);
    for siblings in children.values_mut() {
      siblings.sort_by(by_acronym);
    }
    roots.sort_by(by_acronym);

    let mut descendants: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    let mut marks: HashMap<Uuid, Mark> = HashMap::new();
    for &entity_id in by_entity.keys() {
      collect_descendants(entity_id, &children, &mut marks, &mut descendants)?;
    }

    tracing::debug!(
      nodes = by_entity.len(),
      roots = roots.len(),
      "hierarchy built"
    );
    Ok(Hierarchy {
      versions: by_entity,
      children,
      descendants,
      roots,
      policy: self.policy,
    })
  }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
  InProgress,
  Done,
}

/// Post-order accumulation: a node's closure is each direct child plus that
/// child's own (already memoized) closure. Each node is computed once; a
/// node revisited while still in progress means the parent links loop.
fn collect_descendants(
  entity_id: Uuid,
  children: &HashMap<Uuid, Vec<Uuid>>,
  marks: &mut HashMap<Uuid, Mark>,
  memo: &mut HashMap<Uuid, Vec<Uuid>>,
) -> Result<()> {
  match marks.get(&entity_id) {
    Some(Mark::Done) => return Ok(()),
    Some(Mark::InProgress) => return Err(Error::CycleDetected(entity_id)),
    None => {}
  }
  marks.insert(entity_id, Mark::InProgress);

  let mut closure = Vec::new();
  for &child in children.get(&entity_id).map(Vec::as_slice).unwrap_or(&[]) {
    collect_descendants(child, children, marks, memo)?;
    closure.push(child);
    closure.extend(memo[&child].iter().copied());
  }

  marks.insert(entity_id, Mark::Done);
  memo.insert(entity_id, closure);
  Ok(())
}
