//! Hierarchical programme/course navigator.
//!
//! A two-level drill-down: the programme list at the root, and the selected
//! programme's course list one level down. Transitions return the
//! [`CriteriaPatch`] the caller applies through the filter store, so the
//! visible level and the stored selection always move in one step.

use rundbok_model::{CourseId, ProgrammeId, ProgrammeWithCourses, SearchCriteria};

use crate::store::CriteriaPatch;

/// The level the navigator is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Root: the list of programmes.
    #[default]
    Programmes,
    /// The course list of the selected programme.
    Courses { programme_id: ProgrammeId },
}

/// Drill-down state machine over [`Level`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Navigator {
    level: Level,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_root(&self) -> bool {
        self.level == Level::Programmes
    }

    /// The programme whose courses are showing, if any.
    pub fn current_programme(&self) -> Option<ProgrammeId> {
        match self.level {
            Level::Programmes => None,
            Level::Courses { programme_id } => Some(programme_id),
        }
    }

    /// Drill into a programme's course list.
    pub fn select_programme(&mut self, id: ProgrammeId) -> CriteriaPatch {
        self.level = Level::Courses { programme_id: id };
        CriteriaPatch::select_programme(id)
    }

    /// Select a course; the level does not change (the listings update
    /// through the store).
    pub fn select_course(&self, id: CourseId) -> CriteriaPatch {
        CriteriaPatch::select_course(id)
    }

    /// Return to the programme list, clearing both selections at once.
    pub fn back(&mut self) -> CriteriaPatch {
        self.level = Level::Programmes;
        CriteriaPatch::clear_selection()
    }

    /// Re-enter the level a restored location points at.
    ///
    /// With a programme id that resolves against the fetched list, the
    /// navigator lands directly on that programme's course list; otherwise
    /// it falls back to the root.
    pub fn restore(&mut self, criteria: &SearchCriteria, programmes: &[ProgrammeWithCourses]) {
        self.level = match criteria.programme_id {
            Some(id) if programmes.iter().any(|p| p.id == id) => {
                Level::Courses { programme_id: id }
            }
            _ => Level::Programmes,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn programme(id: u64) -> ProgrammeWithCourses {
        ProgrammeWithCourses {
            id: ProgrammeId(id),
            name: format!("Programme {id}"),
            programme_code: format!("P{id}"),
            courses: Vec::new(),
        }
    }

    #[test]
    fn drill_down_and_back() {
        let mut nav = Navigator::new();
        assert!(nav.is_root());

        nav.select_programme(ProgrammeId(2));
        assert_eq!(nav.current_programme(), Some(ProgrammeId(2)));

        let patch = nav.back();
        assert!(nav.is_root());
        assert_eq!(patch, CriteriaPatch::clear_selection());
    }

    #[test]
    fn restore_skips_straight_to_courses_for_a_known_programme() {
        let mut nav = Navigator::new();
        let criteria = SearchCriteria {
            programme_id: Some(ProgrammeId(2)),
            ..SearchCriteria::default()
        };

        nav.restore(&criteria, &[programme(1), programme(2)]);
        assert_eq!(nav.current_programme(), Some(ProgrammeId(2)));
    }

    #[test]
    fn restore_falls_back_to_root_for_an_unknown_programme() {
        let mut nav = Navigator::new();
        let criteria = SearchCriteria {
            programme_id: Some(ProgrammeId(99)),
            ..SearchCriteria::default()
        };

        nav.restore(&criteria, &[programme(1)]);
        assert!(nav.is_root());
    }
}
