//! Data model types for the Rundbok used-textbook marketplace.
//!
//! This crate provides the wire and domain types shared by the API client,
//! the search core, and the desktop application:
//!
//! - [`catalogue`]: programme and course read models from the study catalogue
//! - [`listing`]: book listings and the create/edit draft
//! - [`criteria`]: the search criteria the filter state is built around
//!
//! Catalogue reads use camelCase field names on the wire; the submission
//! payload uses snake_case. Both follow the backend contract.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod catalogue;
pub mod criteria;
pub mod listing;

pub use catalogue::{Course, ProgrammeSummary, ProgrammeWithCourses};
pub use criteria::SearchCriteria;
pub use listing::{BookDraft, BookListing};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

id_type! {
    /// Server-assigned identifier of a programme.
    ProgrammeId
}

id_type! {
    /// Server-assigned identifier of a course.
    CourseId
}

id_type! {
    /// Server-assigned identifier of a book listing.
    ListingId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_display_and_from_str() {
        let id = ProgrammeId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<ProgrammeId>(), Ok(id));
        assert!("abc".parse::<CourseId>().is_err());
    }
}
