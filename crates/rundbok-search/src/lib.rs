//! Search and filter state machine for the Rundbok front end.
//!
//! This crate coordinates asynchronous catalogue fetches with the
//! hierarchical drill-down browser and with a shareable location string, so
//! filter state survives relaunches and can be passed around as a link. It
//! contains no UI and no I/O: fetch controllers hand out tickets describing
//! the request to issue, and the embedder reports resolutions back. That
//! keeps every state transition synchronous and deterministic.
//!
//! # Module map
//!
//! - [`request`]: the Idle/Loading/Success/Error lifecycle with retained
//!   last-good data
//! - [`fetch`]: the generic controller adding sequence numbers, in-flight
//!   dedupe, and stale-response suppression
//! - [`catalog`], [`courses`], [`listings`]: the concrete fetch controllers
//! - [`query_string`]: the location codec
//! - [`store`]: the filter state store and its location synchronization
//! - [`navigator`]: the two-level programme/course drill-down

pub mod catalog;
pub mod courses;
pub mod fetch;
pub mod listings;
pub mod navigator;
pub mod query_string;
pub mod request;
pub mod store;

pub use catalog::{AvailableProgrammes, ProgrammeCatalog};
pub use courses::{CourseSearch, DebounceTicket, DEBOUNCE, MIN_QUERY_LEN};
pub use fetch::{FetchTicket, Fetcher};
pub use listings::ListingFeed;
pub use navigator::{Level, Navigator};
pub use query_string::QueryString;
pub use request::{RequestState, RequestStatus};
pub use store::{CriteriaPatch, FilterStore, LocationStore, MemoryLocation};
