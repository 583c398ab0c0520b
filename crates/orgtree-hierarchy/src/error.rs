//! Error types for `orgtree-hierarchy`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// Parent links loop back on themselves. The invariants upstream forbid
  /// this; hitting it means the snapshot is corrupt and the enclosing
  /// operation must fail rather than proceed with a broken tree.
  #[error("cycle detected in parent links at entity {0}")]
  CycleDetected(Uuid),

  /// Two versions in one snapshot claim the same entity. A valid
  /// point-in-time snapshot has at most one version per entity.
  #[error("entity {0} appears twice in the snapshot")]
  DuplicateEntity(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
