//! Book submission tasks.

use std::sync::Arc;

use iced::Task;

use rundbok_api::NetworkService;
use rundbok_model::BookDraft;

use crate::message::{FormMessage, Message};
use crate::state::FormMode;

/// Submit a draft: create in `Add` mode, update in `Edit` mode.
///
/// A single non-retried call; the caller guards against concurrent
/// submissions before scheduling this task.
pub fn submit_book(
    api: Arc<dyn NetworkService>,
    auth_token: String,
    mode: FormMode,
    draft: BookDraft,
    seq: u64,
) -> Task<Message> {
    Task::perform(
        async move {
            match mode {
                FormMode::Add => api.add_new_book(&auth_token, &draft).await,
                FormMode::Edit(listing) => api.edit_book(&auth_token, &draft, listing).await,
            }
            .map_err(|e| e.to_string())
        },
        move |result| Message::Form(FormMessage::SubmitFinished { seq, result }),
    )
}

/// Open the native file dialog for a cover photo.
pub fn pick_cover_photo() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        |path| Message::Form(FormMessage::CoverPhotoPicked(path)),
    )
}
