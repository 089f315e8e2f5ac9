use chrono::NaiveDate;

use daybrief_core::{ContentDocument, IndexEntry};

/// Commands sent from the TUI to the backend fetch listener.
pub enum BackendCommand {
    /// Fetch the briefing index. Issued once at startup.
    LoadIndex,
    /// Fetch the content document for a newly selected date.
    LoadContent { date: NaiveDate },
}

/// Events flowing from the backend fetch tasks to the TUI.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum BackendEvent {
    /// The index arrived (possibly empty).
    IndexLoaded { entries: Vec<IndexEntry> },
    /// The index fetch failed — the reader stays empty.
    IndexFailed { error: String },
    /// A content fetch completed; `date` is the selection it was issued for.
    ContentLoaded { date: NaiveDate, doc: ContentDocument },
    /// A content fetch failed; the previous content stays in place.
    ContentFailed { date: NaiveDate, error: String },
}
