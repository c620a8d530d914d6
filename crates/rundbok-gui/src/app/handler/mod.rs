//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, keeping
//! `App::update` a thin dispatcher and letting handlers be driven directly
//! in tests.

mod browse;
mod form;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use browse::BrowseHandler;
pub use form::FormHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
