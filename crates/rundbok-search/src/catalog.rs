//! Programme catalogue controllers.
//!
//! Two deliberately separate read models back the two places programmes are
//! consumed: [`ProgrammeCatalog`] holds the flat list for the book form's
//! typeahead, [`AvailableProgrammes`] holds the list with pre-expanded
//! courses for the drill-down browser. Each is fetched once per run.

use rundbok_model::{ProgrammeId, ProgrammeSummary, ProgrammeWithCourses};

use crate::fetch::{FetchTicket, Fetcher};
use crate::request::RequestStatus;

/// Flat programme list for typeahead use.
#[derive(Debug, Clone, Default)]
pub struct ProgrammeCatalog {
    fetcher: Fetcher<(), Vec<ProgrammeSummary>>,
}

impl ProgrammeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the one-time fetch. Returns `None` once a fetch has been
    /// triggered, so callers can invoke this from every mount-like event
    /// without re-requesting.
    pub fn start(&mut self) -> Option<FetchTicket<()>> {
        if self.fetcher.status() != RequestStatus::Idle {
            return None;
        }
        self.fetcher.begin(())
    }

    pub fn settle(&mut self, seq: u64, result: Result<Vec<ProgrammeSummary>, String>) -> bool {
        self.fetcher.settle(seq, result)
    }

    /// Fetched programmes; an unfetched or failed catalogue reads as empty.
    pub fn programmes(&self) -> &[ProgrammeSummary] {
        self.fetcher.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn status(&self) -> RequestStatus {
        self.fetcher.status()
    }
}

/// Programme list with nested courses for the drill-down browser.
#[derive(Debug, Clone, Default)]
pub struct AvailableProgrammes {
    fetcher: Fetcher<(), Vec<ProgrammeWithCourses>>,
}

impl AvailableProgrammes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the one-time fetch; `None` if already triggered.
    pub fn start(&mut self) -> Option<FetchTicket<()>> {
        if self.fetcher.status() != RequestStatus::Idle {
            return None;
        }
        self.fetcher.begin(())
    }

    pub fn settle(&mut self, seq: u64, result: Result<Vec<ProgrammeWithCourses>, String>) -> bool {
        self.fetcher.settle(seq, result)
    }

    /// Fetched programmes; an unfetched or failed catalogue reads as empty.
    pub fn programmes(&self) -> &[ProgrammeWithCourses] {
        self.fetcher.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Resolve a programme by id against the fetched list.
    pub fn find(&self, id: ProgrammeId) -> Option<&ProgrammeWithCourses> {
        self.programmes().iter().find(|p| p.id == id)
    }

    pub fn status(&self) -> RequestStatus {
        self.fetcher.status()
    }
}
