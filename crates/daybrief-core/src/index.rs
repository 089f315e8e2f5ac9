use chrono::NaiveDate;
use serde::Deserialize;

use crate::CoreError;
use crate::date;

/// One briefing in the index: a calendar day and its display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub date: NaiveDate,
    pub title: String,
}

/// Wire form of an index entry — the date is still an ISO string.
#[derive(Deserialize)]
struct LoadedEntry {
    date: String,
    title: Option<String>,
}

/// Decode the index document.
///
/// The source is trusted to return entries sorted descending by date (most
/// recent first); their order is preserved as received. Entries whose date
/// fails to parse are dropped rather than failing the whole load.
pub fn decode_index(body: &str) -> Result<Vec<IndexEntry>, CoreError> {
    let loaded: Vec<LoadedEntry> =
        serde_json::from_str(body).map_err(|e| CoreError::Decode(e.to_string()))?;

    let mut entries = Vec::with_capacity(loaded.len());
    for raw in loaded {
        match date::parse_iso(&raw.date) {
            Some(day) => entries.push(IndexEntry {
                date: day,
                title: raw.title.unwrap_or_default(),
            }),
            None => {
                tracing::debug!(date = %raw.date, "dropping index entry with unparseable date");
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_preserves_received_order() {
        let body = r#"[
            {"date": "2024-03-10", "title": "Sunday"},
            {"date": "2024-03-09", "title": "Saturday"},
            {"date": "2024-03-08", "title": "Friday"}
        ]"#;
        let entries = decode_index(body).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, date::parse_iso("2024-03-10").unwrap());
        assert_eq!(entries[2].title, "Friday");
    }

    #[test]
    fn decode_drops_unparseable_dates() {
        let body = r#"[
            {"date": "2024-03-10", "title": "good"},
            {"date": "not-a-date", "title": "bad"},
            {"date": "2024-03-08", "title": "good too"}
        ]"#;
        let entries = decode_index(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.title.starts_with("good")));
    }

    #[test]
    fn decode_tolerates_missing_title() {
        let body = r#"[{"date": "2024-03-10"}]"#;
        let entries = decode_index(body).unwrap();
        assert_eq!(entries[0].title, "");
    }

    #[test]
    fn decode_rejects_non_array() {
        assert!(decode_index(r#"{"date": "2024-03-10"}"#).is_err());
        assert!(decode_index("not json").is_err());
    }
}
