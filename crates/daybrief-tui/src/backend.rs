use std::sync::Arc;

use tokio::sync::mpsc;

use daybrief_core::{BriefingSource, date};

use crate::tui_event::{BackendCommand, BackendEvent};

/// Run the backend command listener.
///
/// Every fetch is spawned as its own task so a slow content fetch never
/// blocks a newer command. A superseded fetch is not cancelled — it runs to
/// completion and its result is discarded by the staleness check when the
/// event is applied to the state.
pub async fn run(
    source: Arc<dyn BriefingSource>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::LoadIndex => {
                let source = Arc::clone(&source);
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    let event = match source.fetch_index().await {
                        Ok(entries) => BackendEvent::IndexLoaded { entries },
                        Err(e) => {
                            tracing::warn!(source = source.name(), error = %e, "index load failed");
                            BackendEvent::IndexFailed {
                                error: e.to_string(),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            BackendCommand::LoadContent { date } => {
                let source = Arc::clone(&source);
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    let event = match source.fetch_content(date).await {
                        Ok(doc) => BackendEvent::ContentLoaded { date, doc },
                        Err(e) => {
                            tracing::debug!(date = %date::format_iso(date), error = %e, "content load failed");
                            BackendEvent::ContentFailed {
                                date,
                                error: e.to_string(),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
        }
    }
}
