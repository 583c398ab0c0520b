//! The entity-version record — the fundamental unit of the engine.
//!
//! An organizational unit (faculty, school, sector...) is a stable identity
//! whose attributes change over time. Each change appends a new
//! [`EntityVersion`] with a fresh validity interval; past versions are never
//! updated. The unit's state on any given date is the single version whose
//! interval contains that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Entity type ─────────────────────────────────────────────────────────────

/// The structural kind of an organizational unit.
///
/// Serialized names match the upstream data feed (`SECTOR`, `FACULTY`, ...);
/// a unit with no recorded kind carries the empty string, mapped to
/// [`EntityType::Unspecified`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
  Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
  Sector,
  Faculty,
  School,
  Institute,
  Pole,
  DoctoralCommission,
  Platform,
  LogisticsEntity,
  #[default]
  #[serde(rename = "")]
  #[strum(serialize = "")]
  Unspecified,
}

impl EntityType {
  /// Whether units of this type take part in teaching organization.
  /// Used to restrict pickers and reports to pedagogical entities.
  pub fn is_pedagogical(self) -> bool {
    matches!(
      self,
      Self::Sector | Self::Faculty | Self::School | Self::DoctoralCommission
    )
  }
}

// ─── Entity version ──────────────────────────────────────────────────────────

/// A time-bounded snapshot of an organizational unit's attributes.
///
/// `entity_id` is stable across all versions of one unit; everything else may
/// differ between versions (rename, re-parenting, type change). The validity
/// interval `[valid_from, valid_to]` is inclusive on both ends and open-ended
/// when `valid_to` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityVersion {
  pub entity_id:        Uuid,
  /// Short uppercase code, unique among versions active on any single date.
  pub acronym:          String,
  pub title:            String,
  pub entity_type:      EntityType,
  /// The unit's parent at this point in time; `None` for roots.
  pub parent_entity_id: Option<Uuid>,
  pub valid_from:       NaiveDate,
  /// Inclusive end of validity; `None` means still open.
  pub valid_to:         Option<NaiveDate>,
}

impl EntityVersion {
  /// Convenience constructor for an open-ended version. The acronym is
  /// normalised to uppercase, as the upstream feed guarantees on write.
  pub fn new(
    entity_id: Uuid,
    acronym: &str,
    title: &str,
    entity_type: EntityType,
    parent_entity_id: Option<Uuid>,
    valid_from: NaiveDate,
  ) -> Self {
    Self {
      entity_id,
      acronym: acronym.to_uppercase(),
      title: title.to_owned(),
      entity_type,
      parent_entity_id,
      valid_from,
      valid_to: None,
    }
  }

  /// Whether this version is active on `date`.
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.valid_from <= date && self.valid_to.is_none_or(|end| date <= end)
  }

  /// Whether the validity intervals of `self` and `other` share at least one
  /// date. Both bounds are inclusive.
  pub fn overlaps(&self, other: &EntityVersion) -> bool {
    let starts_before_other_ends =
      other.valid_to.is_none_or(|end| self.valid_from <= end);
    let other_starts_before_end =
      self.valid_to.is_none_or(|end| other.valid_from <= end);
    starts_before_other_ends && other_starts_before_end
  }

  pub fn is_open_ended(&self) -> bool { self.valid_to.is_none() }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use uuid::Uuid;

  use super::{EntityType, EntityVersion};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn version(from: NaiveDate, to: Option<NaiveDate>) -> EntityVersion {
    EntityVersion {
      entity_id:        Uuid::new_v4(),
      acronym:          "ESPO".into(),
      title:            "Sciences économiques".into(),
      entity_type:      EntityType::Faculty,
      parent_entity_id: None,
      valid_from:       from,
      valid_to:         to,
    }
  }

  #[test]
  fn contains_is_inclusive_on_both_bounds() {
    let v = version(date(2019, 9, 15), Some(date(2020, 9, 14)));
    assert!(v.contains(date(2019, 9, 15)));
    assert!(v.contains(date(2020, 9, 14)));
    assert!(v.contains(date(2020, 1, 1)));
    assert!(!v.contains(date(2019, 9, 14)));
    assert!(!v.contains(date(2020, 9, 15)));
  }

  #[test]
  fn open_ended_version_contains_any_later_date() {
    let v = version(date(2019, 9, 15), None);
    assert!(v.contains(date(2119, 9, 15)));
    assert!(!v.contains(date(2019, 9, 14)));
  }

  #[test]
  fn disjoint_intervals_do_not_overlap() {
    let a = version(date(2018, 1, 1), Some(date(2018, 12, 31)));
    let b = version(date(2019, 1, 1), Some(date(2019, 12, 31)));
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
  }

  #[test]
  fn touching_intervals_overlap_on_the_shared_date() {
    let a = version(date(2018, 1, 1), Some(date(2019, 1, 1)));
    let b = version(date(2019, 1, 1), Some(date(2019, 12, 31)));
    assert!(a.overlaps(&b));
  }

  #[test]
  fn open_ended_overlaps_everything_after_its_start() {
    let a = version(date(2019, 1, 1), None);
    let b = version(date(2025, 6, 1), Some(date(2026, 5, 31)));
    let c = version(date(2018, 1, 1), Some(date(2018, 12, 31)));
    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&c));
  }

  #[test]
  fn entity_type_round_trips_through_strings() {
    assert_eq!(
      "DOCTORAL_COMMISSION".parse::<EntityType>().unwrap(),
      EntityType::DoctoralCommission
    );
    assert_eq!(EntityType::LogisticsEntity.to_string(), "LOGISTICS_ENTITY");
    assert_eq!("".parse::<EntityType>().unwrap(), EntityType::Unspecified);
  }

  #[test]
  fn pedagogical_types() {
    assert!(EntityType::Faculty.is_pedagogical());
    assert!(EntityType::Sector.is_pedagogical());
    assert!(!EntityType::LogisticsEntity.is_pedagogical());
    assert!(!EntityType::Unspecified.is_pedagogical());
  }

  #[test]
  fn new_uppercases_the_acronym() {
    let v = EntityVersion::new(
      Uuid::new_v4(),
      "drt",
      "Faculté de droit",
      EntityType::Faculty,
      None,
      date(2019, 9, 15),
    );
    assert_eq!(v.acronym, "DRT");
    assert!(v.is_open_ended());
  }
}
