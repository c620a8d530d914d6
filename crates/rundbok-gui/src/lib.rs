//! Rundbok Desktop - GUI library.
//!
//! A desktop front end for browsing and listing used course textbooks,
//! filtered by academic programme and course.
//!
//! Built with Iced using the Elm architecture (State, Message, Update,
//! View). All state changes happen in `update()`; views are pure functions;
//! async work runs through `Task::perform` and reports back as messages.

pub mod app;
pub mod component;
pub mod message;
pub mod service;
pub mod state;
pub mod view;

pub use app::App;
