//! Book listings feed.
//!
//! Refetches whenever the filter criteria change; superseded fetches are
//! dropped by the shared sequence check, so rapid drill-down clicks settle
//! on the listings for the final selection.

use rundbok_model::{BookListing, SearchCriteria};

use crate::fetch::{FetchTicket, Fetcher};
use crate::request::RequestStatus;

/// Listings matching the current search criteria.
#[derive(Debug, Clone, Default)]
pub struct ListingFeed {
    fetcher: Fetcher<SearchCriteria, Vec<BookListing>>,
}

impl ListingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the listings for `criteria`. Returns `None` when that exact
    /// query is already in flight.
    pub fn refresh(&mut self, criteria: &SearchCriteria) -> Option<FetchTicket<SearchCriteria>> {
        self.fetcher.begin(criteria.clone())
    }

    pub fn settle(&mut self, seq: u64, result: Result<Vec<BookListing>, String>) -> bool {
        self.fetcher.settle(seq, result)
    }

    /// Last successfully fetched listings, retained while a refresh runs.
    /// An empty result is a valid answer, not an error.
    pub fn listings(&self) -> &[BookListing] {
        self.fetcher.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn status(&self) -> RequestStatus {
        self.fetcher.status()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetcher.error()
    }
}
