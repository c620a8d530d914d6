//! REST client for the Rundbok backend.
//!
//! The backend is consumed, not reimplemented: this crate only knows the
//! call contract. [`NetworkService`] is the seam the rest of the
//! application programs against, so tests can substitute a fake without a
//! server; [`ApiClient`] is the production implementation over reqwest.

use async_trait::async_trait;

use rundbok_model::{
    BookDraft, BookListing, Course, ListingId, ProgrammeSummary, ProgrammeWithCourses,
    SearchCriteria,
};

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};

/// The backend call contract.
///
/// All listing reads and writes go through this trait. Implementations must
/// be cheap to share behind an `Arc`.
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Fetch the flat programme list (no nested courses).
    async fn fetch_programmes(&self) -> Result<Vec<ProgrammeSummary>>;

    /// Fetch programmes with their pre-expanded course lists.
    async fn fetch_available_programmes(&self) -> Result<Vec<ProgrammeWithCourses>>;

    /// Free-text course search.
    async fn fetch_courses(&self, query: &str) -> Result<Vec<Course>>;

    /// Fetch the book listings matching the given criteria.
    async fn fetch_books(&self, criteria: &SearchCriteria) -> Result<Vec<BookListing>>;

    /// Publish a new listing.
    async fn add_new_book(&self, auth_token: &str, draft: &BookDraft) -> Result<BookListing>;

    /// Update an existing listing.
    async fn edit_book(
        &self,
        auth_token: &str,
        draft: &BookDraft,
        listing: ListingId,
    ) -> Result<BookListing>;
}
