//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! ideas-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels and the message each one sends; the first is the default
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Confirmation shown before wiping all favorites
    pub fn clear_favorites(favorite_count: usize) -> Self {
        let message = match favorite_count {
            0 => "You have no favorites saved.".to_string(),
            1 => "This removes your 1 saved favorite.".to_string(),
            n => format!("This removes all {} saved favorites.", n),
        };
        Self::new(
            "Clear all favorites?",
            message,
            vec![
                ("Clear", Message::ConfirmClearFavorites),
                ("Cancel", Message::CancelConfirm),
            ],
        )
    }
}
