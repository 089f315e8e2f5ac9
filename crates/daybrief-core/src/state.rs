use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{ContentDocument, IndexEntry, date};

/// The date-selection and content-synchronization state machine.
///
/// Holds the ordered index entries (most recent first), the availability set
/// derived from them, the single selected date, and the content document last
/// accepted for that selection. All mutation goes through the entry points
/// below: a mutator returns the newly selected date when it accepts the
/// change — the caller's cue to initiate a content fetch — and `None` when it
/// rejects it as a no-op.
#[derive(Debug, Default)]
pub struct BriefingState {
    entries: Vec<IndexEntry>,
    available: HashSet<NaiveDate>,
    selected: Option<NaiveDate>,
    content: Option<ContentDocument>,
}

impl BriefingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the loaded index and seed the selection to the most recent
    /// entry. An empty index leaves the state empty. The index loads exactly
    /// once per session; the availability set is recomputed here and nowhere
    /// else.
    pub fn load_entries(&mut self, entries: Vec<IndexEntry>) -> Option<NaiveDate> {
        self.available = entries.iter().map(|e| e.date).collect();
        self.entries = entries;
        self.selected = self.entries.first().map(|e| e.date);
        self.selected
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn content(&self) -> Option<&ContentDocument> {
        self.content.as_ref()
    }

    /// Whether a briefing exists for the given day. Calendar widgets use
    /// this to disable non-selectable days.
    pub fn is_available(&self, day: NaiveDate) -> bool {
        self.available.contains(&day)
    }

    /// Position of the current selection within the descending-sorted
    /// entries, or `None` if nothing is selected.
    pub fn selected_index(&self) -> Option<usize> {
        let sel = self.selected?;
        self.entries.iter().position(|e| e.date == sel)
    }

    /// Select a date. Rejected as a no-op unless the date is in the
    /// availability set; re-selecting the current date is also a no-op (the
    /// content already corresponds to it).
    pub fn select_date(&mut self, day: NaiveDate) -> Option<NaiveDate> {
        if !self.available.contains(&day) || self.selected == Some(day) {
            return None;
        }
        self.selected = Some(day);
        Some(day)
    }

    /// Select the viewer's local calendar day, iff a briefing exists for it.
    /// Never snaps to the nearest available date.
    pub fn go_to_today(&mut self) -> Option<NaiveDate> {
        self.select_date(date::today_local())
    }

    /// Move to the chronologically earlier briefing — one row further down
    /// the descending list. No-op at the oldest entry or while unresolved.
    pub fn go_to_prev(&mut self) -> Option<NaiveDate> {
        let i = self.selected_index()?;
        let target = self.entries.get(i + 1)?.date;
        self.select_date(target)
    }

    /// Move to the chronologically later briefing — one row further up the
    /// descending list. No-op at the newest entry or while unresolved.
    pub fn go_to_next(&mut self) -> Option<NaiveDate> {
        let i = self.selected_index()?;
        if i == 0 {
            return None;
        }
        let target = self.entries[i - 1].date;
        self.select_date(target)
    }

    /// Accept a completed content fetch, but only if `for_date` still equals
    /// the current selection. A result for any other date is discarded
    /// unconditionally — the fetch it came from was superseded, whatever
    /// order the fetches happened to resolve in.
    pub fn apply_content(&mut self, for_date: NaiveDate, doc: ContentDocument) -> bool {
        if self.selected != Some(for_date) {
            tracing::debug!(date = %date::format_iso(for_date), "discarding stale content result");
            return false;
        }
        self.content = Some(doc);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(iso: &str) -> NaiveDate {
        date::parse_iso(iso).unwrap()
    }

    fn entry(iso: &str) -> IndexEntry {
        IndexEntry {
            date: d(iso),
            title: format!("Briefing for {iso}"),
        }
    }

    /// Descending fixture: 2024-03-10 (newest) .. 2024-03-08 (oldest).
    fn loaded_state() -> BriefingState {
        let mut state = BriefingState::new();
        state.load_entries(vec![
            entry("2024-03-10"),
            entry("2024-03-09"),
            entry("2024-03-08"),
        ]);
        state
    }

    fn markup(text: &str) -> ContentDocument {
        ContentDocument::Markup(text.to_string())
    }

    // ── index load ─────────────────────────────────────────────────

    #[test]
    fn load_seeds_selection_to_most_recent() {
        let state = loaded_state();
        assert_eq!(state.selected(), Some(d("2024-03-10")));
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn empty_load_leaves_state_empty() {
        let mut state = BriefingState::new();
        assert_eq!(state.load_entries(vec![]), None);
        assert_eq!(state.selected(), None);
        assert!(state.content().is_none());
    }

    // ── select_date ────────────────────────────────────────────────

    #[test]
    fn select_unavailable_date_is_rejected() {
        let mut state = loaded_state();
        assert_eq!(state.select_date(d("2024-03-11")), None);
        assert_eq!(state.selected(), Some(d("2024-03-10")));
    }

    #[test]
    fn select_available_date_is_accepted() {
        let mut state = loaded_state();
        assert_eq!(state.select_date(d("2024-03-08")), Some(d("2024-03-08")));
        assert_eq!(state.selected(), Some(d("2024-03-08")));
    }

    #[test]
    fn reselecting_current_date_is_a_noop() {
        let mut state = loaded_state();
        assert_eq!(state.select_date(d("2024-03-10")), None);
        assert_eq!(state.selected(), Some(d("2024-03-10")));
    }

    // ── prev/next walks ────────────────────────────────────────────

    #[test]
    fn prev_walks_to_oldest_then_stops() {
        let mut state = loaded_state();
        assert_eq!(state.go_to_prev(), Some(d("2024-03-09")));
        assert_eq!(state.go_to_prev(), Some(d("2024-03-08")));
        assert_eq!(state.go_to_prev(), None);
        assert_eq!(state.selected(), Some(d("2024-03-08")));
    }

    #[test]
    fn next_walks_to_newest_then_stops() {
        let mut state = loaded_state();
        state.select_date(d("2024-03-08"));
        assert_eq!(state.go_to_next(), Some(d("2024-03-09")));
        assert_eq!(state.go_to_next(), Some(d("2024-03-10")));
        assert_eq!(state.go_to_next(), None);
        assert_eq!(state.selected(), Some(d("2024-03-10")));
    }

    #[test]
    fn prev_and_next_are_noops_without_selection() {
        let mut state = BriefingState::new();
        assert_eq!(state.go_to_prev(), None);
        assert_eq!(state.go_to_next(), None);
        assert_eq!(state.selected(), None);
    }

    // ── go_to_today ────────────────────────────────────────────────

    #[test]
    fn today_selected_iff_available() {
        let today = date::today_local();
        let mut state = BriefingState::new();
        state.load_entries(vec![entry("2024-03-10"), entry("2024-03-09")]);
        // Today is not 2024 — go_to_today must leave the selection alone.
        assert_eq!(state.go_to_today(), None);
        assert_eq!(state.selected(), Some(d("2024-03-10")));

        let mut state = BriefingState::new();
        state.load_entries(vec![
            IndexEntry {
                date: today,
                title: "today".into(),
            },
            entry("2024-03-10"),
        ]);
        state.select_date(d("2024-03-10"));
        assert_eq!(state.go_to_today(), Some(today));
        assert_eq!(state.selected(), Some(today));
    }

    // ── stale-result suppression ───────────────────────────────────

    #[test]
    fn content_for_current_selection_is_applied() {
        let mut state = loaded_state();
        assert!(state.apply_content(d("2024-03-10"), markup("newest")));
        assert_eq!(state.content(), Some(&markup("newest")));
    }

    #[test]
    fn stale_content_is_discarded_even_when_it_resolves_last() {
        let mut state = loaded_state();
        // select A, then B; A's fetch resolves after B's.
        let a = state.select_date(d("2024-03-09")).unwrap();
        let b = state.select_date(d("2024-03-08")).unwrap();
        assert!(state.apply_content(b, markup("for B")));
        assert!(!state.apply_content(a, markup("for A")));
        assert_eq!(state.content(), Some(&markup("for B")));
    }

    #[test]
    fn stale_content_is_discarded_before_current_arrives() {
        let mut state = loaded_state();
        let a = state.select_date(d("2024-03-09")).unwrap();
        state.select_date(d("2024-03-08")).unwrap();
        assert!(!state.apply_content(a, markup("for A")));
        assert_eq!(state.content(), None);
    }

    #[test]
    fn failed_fetch_leaves_previous_content() {
        let mut state = loaded_state();
        assert!(state.apply_content(d("2024-03-10"), markup("first")));
        // Selection moves on; the new fetch never completes. Nothing changes.
        state.select_date(d("2024-03-09"));
        assert_eq!(state.content(), Some(&markup("first")));
    }
}
