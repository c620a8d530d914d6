//! Asynchronous request lifecycle.
//!
//! Every fetch in the application moves through the same four states:
//! `Idle → Loading → {Success, Error}`, re-entering `Loading` on the next
//! invocation. There is no terminal state.

/// Lifecycle phase of a request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// No fetch has been triggered yet.
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Request lifecycle with retained last-good data.
///
/// The payload of the last successful fetch is kept through subsequent
/// `Loading` and `Error` phases, so views never flash empty while a refresh
/// is in flight. Only a new success replaces it.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    status: RequestStatus,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T> RequestState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Last successful payload, retained through `Loading` and `Error`.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub(crate) fn begin(&mut self) {
        self.status = RequestStatus::Loading;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, value: T) {
        self.status = RequestStatus::Success;
        self.data = Some(value);
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = RequestStatus::Error;
        self.error = Some(message);
    }
}
