//! Policy for faculty-equivalence lookups.

use orgtree_core::{EntityType, EntityVersion};
use serde::{Deserialize, Serialize};

/// Acronyms of entities treated as faculties for pedagogical purposes even
/// though their recorded type is not `FACULTY` (language institutes, lifelong
/// learning, ...). The default list matches the production allow-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyPolicy {
  pub faculty_equivalent_acronyms: Vec<String>,
}

impl Default for FacultyPolicy {
  fn default() -> Self {
    Self {
      faculty_equivalent_acronyms: ["ILV", "IUFC", "CCR"]
        .map(String::from)
        .to_vec(),
    }
  }
}

impl FacultyPolicy {
  /// A policy with no acronym exceptions: only `FACULTY`-typed versions
  /// count as faculties.
  pub fn strict() -> Self {
    Self { faculty_equivalent_acronyms: Vec::new() }
  }

  /// Whether `version` counts as a faculty for upward lookups.
  pub fn is_faculty_equivalent(&self, version: &EntityVersion) -> bool {
    version.entity_type == EntityType::Faculty
      || self
        .faculty_equivalent_acronyms
        .iter()
        .any(|a| a.eq_ignore_ascii_case(&version.acronym))
  }
}
