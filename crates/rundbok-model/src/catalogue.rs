//! Programme and course read models.
//!
//! The catalogue is served in two shapes on purpose: a flat programme list
//! for typeahead use, and a programme list with pre-expanded courses for the
//! drill-down browser. Keeping them as separate types makes each cache's
//! purpose unambiguous instead of sharing one ad hoc struct with optionally
//! populated children.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CourseId, ProgrammeId};

/// A programme without its course list.
///
/// Returned by the plain programme endpoint, which is only consulted when
/// programme names and codes are needed (the book form's typeahead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeSummary {
    pub id: ProgrammeId,
    pub name: String,
    pub programme_code: String,
}

impl fmt::Display for ProgrammeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.programme_code)
    }
}

/// A course, either nested under a programme or returned standalone from a
/// free-text course search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub course_code: String,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.course_code)
    }
}

/// A programme with its nested, ordered course list.
///
/// Returned by the available-programmes endpoint that backs the drill-down
/// browser, which needs children without a second request per programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeWithCourses {
    pub id: ProgrammeId,
    pub name: String,
    pub programme_code: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl ProgrammeWithCourses {
    /// Look up a nested course by id.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}
