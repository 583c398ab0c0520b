//! Cross-faculty (borrowed course) predicates.
//!
//! A course is "borrowed" when a program outside the faculty that owns the
//! course uses it. Both helpers operate on resolved faculties, so the
//! faculty-equivalence policy of the hierarchy applies.

use std::collections::HashSet;

use orgtree_hierarchy::Hierarchy;
use uuid::Uuid;

/// The faculty plus its entire subtree — the id set used to restrict a
/// borrowed-course search to one borrowing faculty.
pub fn faculty_scope(hierarchy: &Hierarchy, faculty_id: Uuid) -> HashSet<Uuid> {
  let mut scope = HashSet::from([faculty_id]);
  scope.extend(
    hierarchy
      .all_descendants_of(faculty_id)
      .iter()
      .map(|v| v.entity_id),
  );
  scope
}

/// Whether any entity using the course sits outside the faculty of
/// `requirement_entity` (the entity that owns the course). With no using
/// entities there is nobody borrowing, so the answer is `false`.
pub fn is_borrowed(
  hierarchy: &Hierarchy,
  requirement_entity: Uuid,
  using_entities: &[Uuid],
) -> bool {
  using_entities
    .iter()
    .any(|&user| !hierarchy.same_faculty(requirement_entity, user))
}
