//! The built forest and its query layer.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use orgtree_core::{EntityType, EntityVersion, EntityVersionStore};
use uuid::Uuid;

use crate::{
  builder::HierarchyBuilder,
  error::{Error, Result},
  policy::FacultyPolicy,
};

/// A materialised point-in-time forest of entity versions.
///
/// All maps are filled by [`HierarchyBuilder::build`] and never mutated
/// afterwards, so `&Hierarchy` is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct Hierarchy {
  pub(crate) versions:    HashMap<Uuid, EntityVersion>,
  pub(crate) children:    HashMap<Uuid, Vec<Uuid>>,
  pub(crate) descendants: HashMap<Uuid, Vec<Uuid>>,
  pub(crate) roots:       Vec<Uuid>,
  pub(crate) policy:      FacultyPolicy,
}

impl Hierarchy {
  /// Build the hierarchy of the versions active on `as_of`, with the
  /// default [`FacultyPolicy`].
  pub fn at(store: &EntityVersionStore, as_of: NaiveDate) -> Result<Self> {
    HierarchyBuilder::new()
      .build(store.current_versions(as_of).into_iter().cloned())
  }

  // ── Structure ─────────────────────────────────────────────────────────

  pub fn version(&self, entity_id: Uuid) -> Option<&EntityVersion> {
    self.versions.get(&entity_id)
  }

  /// The parent's version, or `None` for roots and broken parent links.
  pub fn parent_of(&self, entity_id: Uuid) -> Option<&EntityVersion> {
    let parent = self.versions.get(&entity_id)?.parent_entity_id?;
    self.versions.get(&parent)
  }

  /// Direct children, ordered by acronym.
  pub fn direct_children_of(&self, entity_id: Uuid) -> Vec<&EntityVersion> {
    self
      .children
      .get(&entity_id)
      .map(Vec::as_slice)
      .unwrap_or(&[])
      .iter()
      .map(|id| &self.versions[id])
      .collect()
  }

  /// Every transitive descendant, the entity itself excluded. Precomputed
  /// at build time, so repeated calls are map lookups.
  pub fn all_descendants_of(&self, entity_id: Uuid) -> Vec<&EntityVersion> {
    self
      .descendants
      .get(&entity_id)
      .map(Vec::as_slice)
      .unwrap_or(&[])
      .iter()
      .map(|id| &self.versions[id])
      .collect()
  }

  /// Versions with no resolvable parent in this snapshot, ordered by
  /// acronym.
  pub fn roots(&self) -> Vec<&EntityVersion> {
    self.roots.iter().map(|id| &self.versions[id]).collect()
  }

  pub fn len(&self) -> usize { self.versions.len() }

  pub fn is_empty(&self) -> bool { self.versions.is_empty() }

  // ── Upward queries ────────────────────────────────────────────────────

  /// All ancestors of `entity_id`, root first, immediate parent last.
  /// The entity itself is not included.
  ///
  /// Fails fast with [`Error::CycleDetected`] if the walk revisits a node.
  /// The build already rejects cyclic snapshots, so this only fires on a
  /// hierarchy corrupted after the fact.
  pub fn ancestors_of(&self, entity_id: Uuid) -> Result<Vec<&EntityVersion>> {
    let mut seen = HashSet::from([entity_id]);
    let mut chain: Vec<&EntityVersion> = Vec::new();

    let mut current = self.versions.get(&entity_id);
    while let Some(version) = current {
      let parent = version
        .parent_entity_id
        .and_then(|p| self.versions.get(&p));
      let Some(parent) = parent else { break };
      if !seen.insert(parent.entity_id) {
        return Err(Error::CycleDetected(parent.entity_id));
      }
      chain.push(parent);
      current = Some(parent);
    }

    chain.reverse();
    Ok(chain)
  }

  /// The nearest ancestor (the entity itself included) of the given type,
  /// or `None` when the walk reaches a root without a match.
  pub fn ancestor_of_type(
    &self,
    entity_id: Uuid,
    entity_type: EntityType,
  ) -> Option<&EntityVersion> {
    let mut seen = HashSet::new();
    let mut current = self.versions.get(&entity_id)?;
    loop {
      if current.entity_type == entity_type {
        return Some(current);
      }
      if !seen.insert(current.entity_id) {
        return None;
      }
      current = current
        .parent_entity_id
        .and_then(|p| self.versions.get(&p))?;
    }
  }

  // ── Faculty queries ───────────────────────────────────────────────────

  /// The faculty this entity belongs to: the nearest ancestor (itself
  /// included) that is `FACULTY`-typed or faculty-equivalent under the
  /// policy. Returns `None` once the walk hits a `SECTOR` (faculties never
  /// sit above sectors) or runs out of parents.
  pub fn faculty_of(&self, entity_id: Uuid) -> Option<&EntityVersion> {
    let mut seen = HashSet::new();
    let mut current = self.versions.get(&entity_id)?;
    loop {
      if self.policy.is_faculty_equivalent(current) {
        return Some(current);
      }
      if current.entity_type == EntityType::Sector {
        return None;
      }
      if !seen.insert(current.entity_id) {
        return None;
      }
      current = current
        .parent_entity_id
        .and_then(|p| self.versions.get(&p))?;
    }
  }

  /// Whether `a` and `b` resolve to the same faculty.
  ///
  /// Two entities that both have *no* faculty compare equal here — the
  /// comparison is on the resolved faculty, and `None == None`. Callers
  /// that need "not comparable" semantics for faculty-less entities must
  /// check [`Self::faculty_of`] themselves.
  pub fn same_faculty(&self, a: Uuid, b: Uuid) -> bool {
    let faculty_id = |id| self.faculty_of(id).map(|v| v.entity_id);
    faculty_id(a) == faculty_id(b)
  }
}
