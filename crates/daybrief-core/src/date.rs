use chrono::{Local, NaiveDate, NaiveDateTime};

/// Parse a canonical ISO `YYYY-MM-DD` string into a calendar-day value.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a calendar-day value as its canonical ISO `YYYY-MM-DD` string.
pub fn format_iso(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// The viewer's local calendar day.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Anchor a calendar day at local noon. Point-in-time conversions go through
/// this so no timezone offset can shift the value across a day boundary.
pub fn local_noon(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(12, 0, 0).expect("12:00:00 is valid on every day")
}

/// Full readable form, e.g. "Monday, March 10, 2024".
pub fn format_full(day: NaiveDate) -> String {
    local_noon(day).format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn iso_round_trip() {
        for iso in ["2024-03-10", "1999-12-31", "2024-02-29", "2000-01-01"] {
            let day = parse_iso(iso).unwrap();
            assert_eq!(format_iso(day), iso);
            assert_eq!(parse_iso(&format_iso(day)), Some(day));
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("2024-13-01"), None);
        assert_eq!(parse_iso("2023-02-29"), None);
        assert_eq!(parse_iso("March 10, 2024"), None);
    }

    #[test]
    fn noon_anchor() {
        let day = parse_iso("2024-03-10").unwrap();
        let anchored = local_noon(day);
        assert_eq!(anchored.hour(), 12);
        assert_eq!(anchored.date(), day);
    }

    #[test]
    fn full_format_wording() {
        let day = parse_iso("2024-03-10").unwrap();
        assert_eq!(format_full(day), "Sunday, March 10, 2024");
        let day = parse_iso("2024-03-08").unwrap();
        assert_eq!(format_full(day), "Friday, March 8, 2024");
    }
}
