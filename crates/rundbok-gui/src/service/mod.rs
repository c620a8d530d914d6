//! Background tasks.
//!
//! Async work runs through Iced's `Task::perform` and reports back as
//! messages; nothing here touches state directly. Each task carries the
//! sequence number of the fetch ticket that requested it, so resolutions
//! from superseded requests are recognized and dropped by the controllers.

pub mod books;
pub mod catalogue;
