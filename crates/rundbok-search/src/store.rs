//! Filter state store and location synchronization.
//!
//! [`FilterStore`] is the single source of truth for the active
//! [`SearchCriteria`]. It has exactly two entry points: [`FilterStore::search`]
//! for UI actions, which merges a patch and rewrites the location in the same
//! step, and [`FilterStore::location_changed`] for externally changed
//! locations (startup, a pasted share link), which adopts the location
//! without writing it back. Because only `search` ever writes, the two
//! directions cannot feed back into each other.

use rundbok_model::{CourseId, ProgrammeId, SearchCriteria};

use crate::query_string::{QueryString, criteria_from_query, write_criteria};

/// The location the filter state synchronizes with.
///
/// In the application this is the shareable link shown to the user and
/// persisted across runs; in tests it is an in-memory string. Only the
/// store's synchronizer writes it.
pub trait LocationStore {
    fn read(&self) -> String;
    fn write(&mut self, query: &str);
}

/// In-memory [`LocationStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    current: String,
    writes: u64,
}

impl MemoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            writes: 0,
        }
    }

    /// Number of writes so far. Lets tests assert that adopting an external
    /// location change does not echo a reciprocal write.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl LocationStore for MemoryLocation {
    fn read(&self) -> String {
        self.current.clone()
    }

    fn write(&mut self, query: &str) {
        self.current = query.to_string();
        self.writes += 1;
    }
}

/// Partial update merged into the criteria by [`FilterStore::search`].
///
/// Each field is a three-way choice: `None` keeps the current value,
/// `Some(None)` clears it, `Some(Some(_))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaPatch {
    pub programme_id: Option<Option<ProgrammeId>>,
    pub course_id: Option<Option<CourseId>>,
    pub query_text: Option<Option<String>>,
}

impl CriteriaPatch {
    /// Select a programme. Any course selected under a previous programme
    /// is cleared in the same step.
    pub fn select_programme(id: ProgrammeId) -> Self {
        Self {
            programme_id: Some(Some(id)),
            course_id: Some(None),
            ..Self::default()
        }
    }

    pub fn select_course(id: CourseId) -> Self {
        Self {
            course_id: Some(Some(id)),
            ..Self::default()
        }
    }

    /// Clear both the programme and course selection at once.
    pub fn clear_selection() -> Self {
        Self {
            programme_id: Some(None),
            course_id: Some(None),
            ..Self::default()
        }
    }

    /// Set or clear the free-text query; empty text clears.
    pub fn query(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            query_text: Some((!text.is_empty()).then_some(text)),
            ..Self::default()
        }
    }
}

/// Single source of truth for the active search criteria, kept in lockstep
/// with a [`LocationStore`].
#[derive(Debug, Clone)]
pub struct FilterStore<L: LocationStore> {
    criteria: SearchCriteria,
    location: L,
    revision: u64,
}

impl<L: LocationStore> FilterStore<L> {
    /// Build the store from the location's current value (the mount-time
    /// parse).
    pub fn new(location: L) -> Self {
        let query = QueryString::parse(&location.read());
        Self {
            criteria: criteria_from_query(&query),
            location,
            revision: 0,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Bumped on every criteria change; dependents refetch when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Merge `patch` into the criteria and rewrite the location to match,
    /// preserving unrelated query parameters. A patch that changes nothing
    /// is a no-op (no write, no revision bump).
    pub fn search(&mut self, patch: CriteriaPatch) {
        let mut next = self.criteria.clone();
        if let Some(programme_id) = patch.programme_id {
            next.programme_id = programme_id;
        }
        if let Some(course_id) = patch.course_id {
            next.course_id = course_id;
        }
        if let Some(query_text) = patch.query_text {
            next.query_text = query_text;
        }

        if next == self.criteria {
            return;
        }
        self.criteria = next;
        self.revision += 1;

        let mut query = QueryString::parse(&self.location.read());
        write_criteria(&mut query, &self.criteria);
        self.location.write(&query.serialize());
    }

    /// Adopt an externally changed location without writing it back.
    ///
    /// The free-text query is not carried by the location and survives the
    /// adoption unchanged.
    pub fn location_changed(&mut self) {
        let query = QueryString::parse(&self.location.read());
        let mut next = criteria_from_query(&query);
        next.query_text = self.criteria.query_text.clone();

        if next != self.criteria {
            self.criteria = next;
            self.revision += 1;
        }
    }

    /// The location's current value, suitable for sharing.
    pub fn share_link(&self) -> String {
        self.location.read()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }
}
