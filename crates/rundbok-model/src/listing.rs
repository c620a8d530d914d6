//! Book listings and the create/edit draft.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ListingId;

/// A published book listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListing {
    pub id: ListingId,
    pub title: String,
    pub author: String,
    pub programme_code: String,
    pub course_code: String,
    /// Asking price in SEK.
    pub price: u32,
    /// Price of the book when bought new, if the seller provided it.
    pub new_price: Option<u32>,
    #[serde(default)]
    pub description: String,
    /// Seller's note on the copy's condition.
    #[serde(default)]
    pub personal_description: String,
    pub release_year: Option<u16>,
}

/// Transient form model for creating or editing a listing.
///
/// Created fresh for "add", hydrated from an existing [`BookListing`] for
/// "edit", and dropped once the submission succeeds. Field names match the
/// submission payload; the cover photo travels as a separate upload part and
/// is skipped during serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub programme_code: String,
    pub course_code: String,
    pub price: Option<u32>,
    pub new_price: Option<u32>,
    pub description: String,
    pub personal_description: String,
    pub release_year: Option<u16>,
    #[serde(skip)]
    pub cover_photo: Option<PathBuf>,
}

impl BookDraft {
    /// Empty draft for the "add book" flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing listing for the "edit" flow.
    pub fn from_listing(listing: &BookListing) -> Self {
        Self {
            title: listing.title.clone(),
            author: listing.author.clone(),
            programme_code: listing.programme_code.clone(),
            course_code: listing.course_code.clone(),
            price: Some(listing.price),
            new_price: listing.new_price,
            description: listing.description.clone(),
            personal_description: listing.personal_description.clone(),
            release_year: listing.release_year,
            cover_photo: None,
        }
    }

    /// Whether every field the backend requires is filled in.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.programme_code.is_empty()
            && !self.course_code.is_empty()
            && self.price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> BookListing {
        BookListing {
            id: ListingId(9),
            title: "Introduction to Algorithms".to_string(),
            author: "Cormen".to_string(),
            programme_code: "CINTE".to_string(),
            course_code: "DD2350".to_string(),
            price: 350,
            new_price: Some(700),
            description: "Third edition.".to_string(),
            personal_description: "Some highlighting.".to_string(),
            release_year: Some(2009),
        }
    }

    #[test]
    fn draft_hydrates_from_listing() {
        let draft = BookDraft::from_listing(&listing());
        assert_eq!(draft.title, "Introduction to Algorithms");
        assert_eq!(draft.price, Some(350));
        assert!(draft.cover_photo.is_none());
        assert!(draft.is_complete());
    }

    #[test]
    fn fresh_draft_is_incomplete() {
        assert!(!BookDraft::new().is_complete());
    }
}
