//! Generic fetch controller.
//!
//! A [`Fetcher`] wraps a [`RequestState`] with the ordering rules every data
//! hook needs: one in-flight request per distinct query, and last-write-wins
//! when a newer query supersedes an older one. Each issued fetch carries a
//! monotonically increasing sequence number; a resolution is applied only if
//! its number is still the latest, so an out-of-order response from a
//! superseded request can never overwrite newer data.
//!
//! The controller performs no I/O itself. [`Fetcher::begin`] hands back a
//! [`FetchTicket`] describing the request to issue; the embedder runs it and
//! reports the outcome through [`Fetcher::settle`].

use crate::request::{RequestState, RequestStatus};

/// Description of a fetch the embedder should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<Q> {
    /// Sequence number to echo back into [`Fetcher::settle`].
    pub seq: u64,
    pub query: Q,
}

/// Sequence-numbered fetch state for one query/payload pair.
#[derive(Debug, Clone)]
pub struct Fetcher<Q, T> {
    state: RequestState<T>,
    seq: u64,
    in_flight: Option<(u64, Q)>,
}

impl<Q, T> Default for Fetcher<Q, T> {
    fn default() -> Self {
        Self {
            state: RequestState::new(),
            seq: 0,
            in_flight: None,
        }
    }
}

impl<Q, T> Fetcher<Q, T>
where
    Q: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `query`.
    ///
    /// Returns `None` when an identical query is already in flight (no
    /// duplicate request). A different query supersedes the in-flight one:
    /// the new ticket gets a higher sequence number, and the old request's
    /// eventual resolution will fail the sequence check in [`settle`].
    ///
    /// [`settle`]: Fetcher::settle
    pub fn begin(&mut self, query: Q) -> Option<FetchTicket<Q>> {
        if let Some((_, in_flight)) = &self.in_flight
            && *in_flight == query
        {
            return None;
        }

        self.seq += 1;
        self.in_flight = Some((self.seq, query.clone()));
        self.state.begin();
        Some(FetchTicket {
            seq: self.seq,
            query,
        })
    }

    /// Report the outcome of a previously issued fetch.
    ///
    /// The result is committed only when `seq` matches the most recently
    /// issued ticket; anything older is dropped without a trace in the
    /// visible state. Returns whether the result was applied.
    pub fn settle(&mut self, seq: u64, result: Result<T, String>) -> bool {
        match &self.in_flight {
            Some((current, _)) if *current == seq => {
                self.in_flight = None;
                match result {
                    Ok(value) => self.state.succeed(value),
                    Err(message) => self.state.fail(message),
                }
                true
            }
            _ => {
                tracing::trace!(seq, "dropping superseded fetch resolution");
                false
            }
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn status(&self) -> RequestStatus {
        self.state.status()
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}
