//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;

use ideas_core::prelude::*;

use crate::clipboard::Clipboard;
use crate::export::write_favorites;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::source::fetch_ideas;

/// Resources owned by the event loop that actions run against
pub struct ActionContext {
    pub clipboard: Box<dyn Clipboard>,
}

impl ActionContext {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self { clipboard }
    }
}

/// Execute an action.
///
/// Loading runs as a background task; clipboard and export are quick local
/// operations done inline. Results come back to the loop as messages.
pub fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, ctx: &mut ActionContext) {
    match action {
        UpdateAction::LoadIdeas { source, timeout } => {
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match fetch_ideas(&source, timeout).await {
                    Ok(ideas) => Message::IdeasLoaded { ideas },
                    Err(e) => Message::IdeasLoadFailed {
                        error: e.to_string(),
                    },
                };
                if tx.send(msg).await.is_err() {
                    warn!("Event loop closed before ideas finished loading");
                }
            });
        }

        UpdateAction::CopyToClipboard { text, title } => {
            match ctx.clipboard.set_text(&text) {
                Ok(()) => send(msg_tx, Message::ClipboardCopied { title }),
                // Copy is best effort
                Err(e) => debug!("Clipboard copy failed: {}", e),
            }
        }

        UpdateAction::ExportFavorites {
            directory,
            favorites,
        } => {
            let msg = match write_favorites(&directory, &favorites) {
                Ok(path) => Message::ExportCompleted { path },
                Err(e) => {
                    error!("{}", e);
                    Message::ExportFailed {
                        error: e.to_string(),
                    }
                }
            };
            send(msg_tx, msg);
        }
    }
}

fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.try_send(msg) {
        warn!("Dropping action result: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::export::EXPORT_FILENAME;
    use crate::source::IdeaSource;
    use ideas_core::IdeaRecord;
    use std::time::Duration;
    use tempfile::tempdir;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::clipboard("no display"))
        }
    }

    fn memory_context() -> ActionContext {
        ActionContext::new(Box::new(MemoryClipboard::default()))
    }

    #[tokio::test]
    async fn test_load_ideas_reports_loaded() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ideas.json");
        std::fs::write(&path, r#"[{"idea": "Solar kiosk", "summary": "Charge phones"}]"#).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::LoadIdeas {
                source: IdeaSource::File(path),
                timeout: Duration::from_secs(1),
            },
            &tx,
            &mut memory_context(),
        );

        match rx.recv().await {
            Some(Message::IdeasLoaded { ideas }) => {
                assert_eq!(ideas, vec![IdeaRecord::new("Solar kiosk", "Charge phones")]);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_ideas_reports_failure() {
        let temp = tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::LoadIdeas {
                source: IdeaSource::File(temp.path().join("missing.json")),
                timeout: Duration::from_secs(1),
            },
            &tx,
            &mut memory_context(),
        );

        assert!(matches!(
            rx.recv().await,
            Some(Message::IdeasLoadFailed { .. })
        ));
    }

    #[test]
    fn test_copy_reports_success() {
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CopyToClipboard {
                text: "Recipe box".to_string(),
                title: "Recipe box".to_string(),
            },
            &tx,
            &mut memory_context(),
        );

        assert!(matches!(
            rx.try_recv(),
            Ok(Message::ClipboardCopied { title }) if title == "Recipe box"
        ));
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ctx = ActionContext::new(Box::new(BrokenClipboard));

        handle_action(
            UpdateAction::CopyToClipboard {
                text: "x".to_string(),
                title: "x".to_string(),
            },
            &tx,
            &mut ctx,
        );

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_export_writes_file_and_reports_path() {
        let temp = tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::ExportFavorites {
                directory: temp.path().to_path_buf(),
                favorites: vec![IdeaRecord::new("Recipe box", "")],
            },
            &tx,
            &mut memory_context(),
        );

        match rx.try_recv() {
            Ok(Message::ExportCompleted { path }) => {
                assert_eq!(path, temp.path().join(EXPORT_FILENAME));
                assert!(path.exists());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_export_failure_reports_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::ExportFavorites {
                directory: blocker,
                favorites: Vec::new(),
            },
            &tx,
            &mut memory_context(),
        );

        assert!(matches!(rx.try_recv(), Ok(Message::ExportFailed { .. })));
    }
}
