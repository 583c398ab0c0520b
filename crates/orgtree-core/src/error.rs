//! Error types for `orgtree-core`.
//!
//! Integrity errors indicate corrupted upstream data and are never repaired
//! locally; callers must fail the enclosing operation. An absent version is
//! not an error — lookups return `None` for that.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "entity {entity_id} has two versions with overlapping validity \
     (starting {first} and {second})"
  )]
  OverlappingVersions {
    entity_id: Uuid,
    first:     NaiveDate,
    second:    NaiveDate,
  },

  #[error("acronym {acronym:?} is shared by two versions active on the same date")]
  DuplicateAcronym { acronym: String },

  #[error("entity {0} is recorded as its own parent")]
  SelfParented(Uuid),

  #[error("no version of entity {entity_id} is active on {as_of}")]
  NoActiveVersion { entity_id: Uuid, as_of: NaiveDate },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
