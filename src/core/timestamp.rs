// src/core/timestamp.rs
//
// Generic timestamp parsing for the issued-at column. The report comes out of
// spreadsheets and HTML exports, so both ISO and Brazilian day-first layouts
// show up. All values are naive local time.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const SUMMARY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// First matching layout wins; `None` if nothing fits.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(SUMMARY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn accepts_iso_and_day_first() {
        let want = ymd_hms(2024, 11, 5, 9, 30, 0);
        assert_eq!(parse_timestamp("2024-11-05 09:30:00"), Some(want));
        assert_eq!(parse_timestamp("2024-11-05T09:30:00"), Some(want));
        assert_eq!(parse_timestamp("05/11/2024 09:30"), Some(want));
        assert_eq!(parse_timestamp("2024-11-05T09:30:00-03:00"), Some(want));
    }

    #[test]
    fn date_only_is_midnight() {
        assert_eq!(parse_timestamp("01/11/2024"), Some(ymd_hms(2024, 11, 1, 0, 0, 0)));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_timestamp("ontem"), None);
        assert_eq!(parse_timestamp("  "), None);
    }

    #[test]
    fn summary_format() {
        assert_eq!(format_timestamp(&ymd_hms(2024, 11, 1, 12, 0, 0)), "2024-11-01 12:00:00");
    }
}
