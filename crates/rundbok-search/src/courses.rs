//! Debounced free-text course search.
//!
//! Typing drives [`CourseSearch::set_query`], which applies the
//! minimum-length gate and hands back a [`DebounceTicket`] when a fetch may
//! be due. The embedder schedules a [`DEBOUNCE`]-long timer and calls
//! [`CourseSearch::debounce_elapsed`] when it fires; only the ticket from
//! the latest keystroke survives, so a burst of typing produces at most one
//! request.

use std::time::Duration;

use rundbok_model::Course;

use crate::fetch::{FetchTicket, Fetcher};
use crate::request::RequestStatus;

/// Queries shorter than this (in characters) issue no request.
pub const MIN_QUERY_LEN: usize = 3;

/// How long input must pause before a gated query is fetched.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle for a scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    /// Echoed back into [`CourseSearch::debounce_elapsed`] when the timer
    /// fires.
    pub seq: u64,
}

/// Course search controller: length gate, debounce, stale suppression.
#[derive(Debug, Clone, Default)]
pub struct CourseSearch {
    fetcher: Fetcher<String, Vec<Course>>,
    pending: Option<(u64, String)>,
    debounce_seq: u64,
}

impl CourseSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke.
    ///
    /// Queries below [`MIN_QUERY_LEN`] cancel any pending fetch and return
    /// `None`. Longer queries replace the pending one and return a ticket
    /// for the embedder's debounce timer.
    pub fn set_query(&mut self, text: &str) -> Option<DebounceTicket> {
        let text = text.trim();
        if text.chars().count() < MIN_QUERY_LEN {
            self.pending = None;
            return None;
        }

        self.debounce_seq += 1;
        self.pending = Some((self.debounce_seq, text.to_string()));
        Some(DebounceTicket {
            seq: self.debounce_seq,
        })
    }

    /// A debounce timer fired.
    ///
    /// Returns the fetch to issue if this timer belongs to the latest
    /// keystroke; timers superseded by further typing return `None`.
    pub fn debounce_elapsed(&mut self, seq: u64) -> Option<FetchTicket<String>> {
        let (_, query) = self.pending.take_if(|(pending, _)| *pending == seq)?;
        self.fetcher.begin(query)
    }

    pub fn settle(&mut self, seq: u64, result: Result<Vec<Course>, String>) -> bool {
        self.fetcher.settle(seq, result)
    }

    /// Matching courses; unfetched or failed searches read as empty.
    pub fn courses(&self) -> &[Course] {
        self.fetcher.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn status(&self) -> RequestStatus {
        self.fetcher.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rundbok_model::CourseId;

    fn course(id: u64, code: &str) -> Course {
        Course {
            id: CourseId(id),
            name: code.to_string(),
            course_code: code.to_string(),
        }
    }

    #[test]
    fn short_queries_never_fetch() {
        let mut search = CourseSearch::new();
        assert!(search.set_query("").is_none());
        assert!(search.set_query("C").is_none());
        assert!(search.set_query("CS").is_none());
        assert_eq!(search.status(), RequestStatus::Idle);
    }

    #[test]
    fn shrinking_below_the_gate_cancels_the_pending_fetch() {
        let mut search = CourseSearch::new();
        let ticket = search.set_query("CS1").unwrap();
        assert!(search.set_query("CS").is_none());

        // The old timer fires anyway; nothing must happen.
        assert!(search.debounce_elapsed(ticket.seq).is_none());
        assert_eq!(search.status(), RequestStatus::Idle);
    }

    #[test]
    fn only_the_latest_keystroke_fetches() {
        let mut search = CourseSearch::new();
        let first = search.set_query("CS1").unwrap();
        let second = search.set_query("CS10").unwrap();

        assert!(search.debounce_elapsed(first.seq).is_none());
        let fetch = search.debounce_elapsed(second.seq).unwrap();
        assert_eq!(fetch.query, "CS10");
        assert_eq!(search.status(), RequestStatus::Loading);

        // A timer firing twice is harmless.
        assert!(search.debounce_elapsed(second.seq).is_none());
    }

    #[test]
    fn late_result_of_superseded_query_is_ignored() {
        let mut search = CourseSearch::new();
        let t1 = search.set_query("alg").unwrap();
        let f1 = search.debounce_elapsed(t1.seq).unwrap();

        let t2 = search.set_query("algebra").unwrap();
        let f2 = search.debounce_elapsed(t2.seq).unwrap();

        assert!(search.settle(f2.seq, Ok(vec![course(1, "SF1624")])));
        assert!(!search.settle(f1.seq, Ok(vec![course(2, "DD1337")])));
        assert_eq!(search.courses().len(), 1);
        assert_eq!(search.courses()[0].id, CourseId(1));
    }
}
