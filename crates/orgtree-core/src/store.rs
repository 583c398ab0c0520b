//! The validated collection of entity-version records.
//!
//! [`EntityVersionStore`] takes the full historical record set, checks the
//! integrity invariants once at construction, and then answers point-in-time
//! queries. It never mutates its records; a snapshot taken with
//! [`EntityVersionStore::current_versions`] is the input to hierarchy builds.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  entity::EntityVersion,
  error::{Error, Result},
};

/// An immutable, integrity-checked set of entity-version records.
#[derive(Debug, Clone)]
pub struct EntityVersionStore {
  versions: Vec<EntityVersion>,
}

impl EntityVersionStore {
  /// Validate `versions` and build a store.
  ///
  /// Enforced invariants (violations surface as [`Error`], never silently
  /// repaired):
  /// - no two versions of one entity have overlapping validity;
  /// - no two versions sharing an acronym have overlapping validity
  ///   (i.e. an acronym is unique among versions active on any date);
  /// - no version is its own parent.
  pub fn new(versions: Vec<EntityVersion>) -> Result<Self> {
    for version in &versions {
      if version.parent_entity_id == Some(version.entity_id) {
        return Err(Error::SelfParented(version.entity_id));
      }
    }

    Self::check_no_overlap_per_entity(&versions)?;
    Self::check_no_duplicate_acronym(&versions)?;

    tracing::debug!(records = versions.len(), "entity version store validated");
    Ok(Self { versions })
  }

  fn check_no_overlap_per_entity(versions: &[EntityVersion]) -> Result<()> {
    let mut by_entity: HashMap<Uuid, Vec<&EntityVersion>> = HashMap::new();
    for version in versions {
      by_entity.entry(version.entity_id).or_default().push(version);
    }

    for history in by_entity.values_mut() {
      history.sort_by_key(|v| v.valid_from);
      for pair in history.windows(2) {
        if pair[0].overlaps(pair[1]) {
          return Err(Error::OverlappingVersions {
            entity_id: pair[0].entity_id,
            first:     pair[0].valid_from,
            second:    pair[1].valid_from,
          });
        }
      }
    }
    Ok(())
  }

  fn check_no_duplicate_acronym(versions: &[EntityVersion]) -> Result<()> {
    let mut by_acronym: HashMap<String, Vec<&EntityVersion>> = HashMap::new();
    for version in versions {
      by_acronym
        .entry(version.acronym.to_uppercase())
        .or_default()
        .push(version);
    }

    for carriers in by_acronym.values_mut() {
      carriers.sort_by_key(|v| v.valid_from);
      for pair in carriers.windows(2) {
        // Same-entity overlaps were already rejected above.
        if pair[0].entity_id != pair[1].entity_id && pair[0].overlaps(pair[1]) {
          return Err(Error::DuplicateAcronym {
            acronym: pair[0].acronym.clone(),
          });
        }
      }
    }
    Ok(())
  }

  // ── Point-in-time queries ─────────────────────────────────────────────

  /// All versions active on `as_of`. An empty result is a valid outcome of
  /// valid data (e.g. a date before any record starts), not an error.
  pub fn current_versions(&self, as_of: NaiveDate) -> Vec<&EntityVersion> {
    self.versions.iter().filter(|v| v.contains(as_of)).collect()
  }

  /// The single version of `entity_id` active on `as_of`, or `None`.
  /// Uniqueness is guaranteed by the no-overlap invariant.
  pub fn version_of(
    &self,
    entity_id: Uuid,
    as_of: NaiveDate,
  ) -> Option<&EntityVersion> {
    self
      .versions
      .iter()
      .find(|v| v.entity_id == entity_id && v.contains(as_of))
  }

  /// Like [`Self::version_of`], but an absent version is an error. For
  /// callers that cannot proceed without the record.
  pub fn require_version_of(
    &self,
    entity_id: Uuid,
    as_of: NaiveDate,
  ) -> Result<&EntityVersion> {
    self
      .version_of(entity_id, as_of)
      .ok_or(Error::NoActiveVersion { entity_id, as_of })
  }

  /// The version carrying `acronym` on `as_of`, matched case-insensitively.
  /// Uniqueness is guaranteed by the acronym invariant.
  pub fn find_by_acronym(
    &self,
    acronym: &str,
    as_of: NaiveDate,
  ) -> Option<&EntityVersion> {
    self
      .versions
      .iter()
      .find(|v| v.acronym.eq_ignore_ascii_case(acronym) && v.contains(as_of))
  }

  /// The full history of one entity, oldest first.
  pub fn versions_of(&self, entity_id: Uuid) -> Vec<&EntityVersion> {
    let mut history: Vec<&EntityVersion> = self
      .versions
      .iter()
      .filter(|v| v.entity_id == entity_id)
      .collect();
    history.sort_by_key(|v| v.valid_from);
    history
  }

  pub fn iter(&self) -> impl Iterator<Item = &EntityVersion> {
    self.versions.iter()
  }

  pub fn len(&self) -> usize { self.versions.len() }

  pub fn is_empty(&self) -> bool { self.versions.is_empty() }
}
