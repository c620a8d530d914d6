//! Drill-down browser state.

use rundbok_search::{AvailableProgrammes, FilterStore, ListingFeed, MemoryLocation, Navigator};

/// State behind the browse screen: the filter store with its location, the
/// two-level navigator, the programme catalogue, and the listings feed.
pub struct BrowseState {
    /// Single source of truth for the search criteria, kept in lockstep
    /// with the share-link location.
    pub filter: FilterStore<MemoryLocation>,
    /// Programme/course drill-down level.
    pub navigator: Navigator,
    /// Programmes with nested courses backing the drill-down.
    pub available: AvailableProgrammes,
    /// Listings matching the current criteria.
    pub feed: ListingFeed,
    /// Share-link paste box contents.
    pub link_input: String,
}

impl BrowseState {
    /// Restore the browser from a saved location query-string (empty for a
    /// first run). The navigator level is resolved once the catalogue
    /// arrives; until then it stays at the root.
    pub fn restore(saved: &str) -> Self {
        Self {
            filter: FilterStore::new(MemoryLocation::new(saved)),
            navigator: Navigator::new(),
            available: AvailableProgrammes::new(),
            feed: ListingFeed::new(),
            link_input: String::new(),
        }
    }
}
