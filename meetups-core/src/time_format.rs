//! Display formatting for event dates and times.
//!
//! Event records carry `date` and `time` as loose strings. Times show up as
//! picker output (`"17:30"`), compact digits (`"1730"`, `"700"`) or text that
//! was already formatted (`"5:30 PM"`). Everything here renders to en-US
//! conventions (`5:30 PM`, `Jul 14, 2025`) so output does not depend on the
//! host locale or timezone.
//!
//! Nothing in this module fails: input that cannot be understood is handed
//! back as-is, and missing input becomes an empty string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static MERIDIEM_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(am|pm)$").expect("valid meridiem regex"));
static COMPACT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("valid compact time regex"));
static COLON_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid colon time regex"));

const CLOCK_FORMAT: &str = "%-I:%M %p";
const MEDIUM_DATE_FORMAT: &str = "%b %-d, %Y";
const SEPARATOR: &str = " • ";

/// Format an event time as a 12-hour clock string (e.g. "7:00 PM").
///
/// `date` only anchors the time to a calendar day; when it is absent the
/// epoch day is used. Returns an empty string for missing input and the
/// trimmed input for anything that cannot be parsed. Applying this to its
/// own output returns the output unchanged.
pub fn format_time(time: Option<&str>, date: Option<&str>) -> String {
    let Some(t) = time.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };

    if MERIDIEM_SUFFIX.is_match(t) {
        return t.to_string();
    }

    let (hour, minute) = if COMPACT_TIME.is_match(t) {
        let padded = format!("{t:0>4}");
        let (hh, mm) = padded.split_at(2);
        (hh.parse::<u32>().ok(), mm.parse::<u32>().ok())
    } else if let Some(caps) = COLON_TIME.captures(t) {
        (caps[1].parse::<u32>().ok(), caps[2].parse::<u32>().ok())
    } else {
        return t.to_string();
    };

    let anchored = match (hour, minute) {
        (Some(hour), Some(minute)) => anchor(date, hour, minute),
        _ => None,
    };

    match anchored {
        Some(datetime) => datetime.format(CLOCK_FORMAT).to_string(),
        None => {
            debug!("Leaving unparseable time {t:?} (date {date:?}) as-is");
            t.to_string()
        }
    }
}

/// Format a date-only value as a medium date (e.g. "Jul 14, 2025").
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, whose UTC calendar day is
/// used. Unparseable input is returned trimmed rather than rendered as an
/// invalid date.
pub fn format_date(date: Option<&str>) -> String {
    let Some(d) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    match parse_calendar_date(d) {
        Some(day) => day.format(MEDIUM_DATE_FORMAT).to_string(),
        None => {
            debug!("Leaving unparseable date {d:?} as-is");
            d.to_string()
        }
    }
}

/// Join already-formatted time and date with a bullet, skipping empty parts.
pub fn display_line(time: &str, date: &str) -> Option<String> {
    match (time.is_empty(), date.is_empty()) {
        (true, true) => None,
        (false, true) => Some(time.to_string()),
        (true, false) => Some(date.to_string()),
        (false, false) => Some(format!("{time}{SEPARATOR}{date}")),
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Combine a clock time with its anchor day. `24:00` means the following midnight.
fn anchor(date: Option<&str>, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let day = match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => parse_calendar_date(d)?,
        None => NaiveDate::from_ymd_opt(1970, 1, 1)?,
    };

    if hour == 24 && minute == 0 {
        return day.succ_opt()?.and_hms_opt(0, 0, 0);
    }

    day.and_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- format_time ---

    #[test]
    fn empty_or_missing_time_is_empty() {
        assert_eq!(format_time(None, None), "");
        assert_eq!(format_time(Some(""), Some("2025-07-14")), "");
        assert_eq!(format_time(Some("   "), None), "");
    }

    #[test]
    fn already_formatted_time_passes_through() {
        assert_eq!(format_time(Some("7:00 PM"), None), "7:00 PM");
        assert_eq!(format_time(Some("7:00 PM"), Some("2025-07-14")), "7:00 PM");
        assert_eq!(format_time(Some("7:00 PM"), Some("not a date")), "7:00 PM");
        assert_eq!(format_time(Some("11:15am"), None), "11:15am");
        assert_eq!(format_time(Some("  9 Pm "), None), "9 Pm");
    }

    #[test]
    fn colon_time_converts_to_twelve_hour() {
        let formatted = format_time(Some("17:30"), Some("2025-07-14"));
        assert!(formatted.contains("5:30"));
        assert!(formatted.ends_with("PM"));
        assert_eq!(formatted, "5:30 PM");

        assert_eq!(format_time(Some("07:00"), None), "7:00 AM");
        assert_eq!(format_time(Some("9:05"), None), "9:05 AM");
        assert_eq!(format_time(Some("00:00"), None), "12:00 AM");
        assert_eq!(format_time(Some("12:00"), None), "12:00 PM");
    }

    #[test]
    fn compact_digits_are_padded_and_split() {
        let formatted = format_time(Some("0700"), Some("2025-07-14"));
        assert!(formatted.contains("7:00"));
        assert!(formatted.ends_with("AM"));

        assert_eq!(format_time(Some("700"), None), "7:00 AM");
        assert_eq!(format_time(Some("1730"), None), "5:30 PM");
        assert_eq!(format_time(Some("0000"), None), "12:00 AM");
    }

    #[test]
    fn out_of_range_clock_values_pass_through() {
        assert_eq!(format_time(Some("9999"), None), "9999");
        assert_eq!(format_time(Some("9999"), Some("2025-07-14")), "9999");
        assert_eq!(format_time(Some("1260"), None), "1260");
        assert_eq!(format_time(Some("25:00"), None), "25:00");
        assert_eq!(format_time(Some("24:30"), None), "24:30");
    }

    #[test]
    fn twenty_four_hundred_is_midnight() {
        assert_eq!(format_time(Some("24:00"), Some("2025-07-14")), "12:00 AM");
        assert_eq!(format_time(Some("2400"), None), "12:00 AM");
    }

    #[test]
    fn unparseable_anchor_date_leaves_time_alone() {
        assert_eq!(format_time(Some("17:30"), Some("someday")), "17:30");
        assert_eq!(format_time(Some("1730"), Some("2025-13-40")), "1730");
    }

    #[test]
    fn timestamp_anchor_date_is_accepted() {
        assert_eq!(
            format_time(Some("18:45"), Some("2025-07-14T00:00:00.000Z")),
            "6:45 PM"
        );
    }

    #[test]
    fn other_shapes_pass_through_trimmed() {
        assert_eq!(format_time(Some("noon"), None), "noon");
        assert_eq!(format_time(Some("17:30:00"), None), "17:30:00");
        assert_eq!(format_time(Some("12345"), None), "12345");
        assert_eq!(format_time(Some(" evening "), None), "evening");
    }

    #[test]
    fn non_ascii_digits_pass_through() {
        assert_eq!(format_time(Some("７００"), None), "７００");
        assert_eq!(format_time(Some("١٢٣"), Some("2025-07-14")), "١٢٣");
        assert_eq!(format_time(Some("١٧:٣٠"), None), "١٧:٣٠");
        assert_eq!(format_time(Some("１７:30"), Some("2025-07-14")), "１７:30");
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "", "7:00 PM", "17:30", "0700", "700", "9999", "24:00", "noon", "6:15",
        ];
        for input in inputs {
            let once = format_time(Some(input), Some("2025-07-14"));
            let twice = format_time(Some(&once), Some("2025-07-14"));
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    // --- format_date ---

    #[test]
    fn empty_or_missing_date_is_empty() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
    }

    #[test]
    fn iso_date_renders_medium() {
        let formatted = format_date(Some("2025-07-14"));
        assert!(formatted.contains("Jul"));
        assert!(formatted.contains("14"));
        assert!(formatted.contains("2025"));
        assert_eq!(formatted, "Jul 14, 2025");
        assert_eq!(format_date(Some("2026-01-05")), "Jan 5, 2026");
    }

    #[test]
    fn timestamp_renders_utc_day() {
        assert_eq!(format_date(Some("2025-07-14T00:00:00.000Z")), "Jul 14, 2025");
        assert_eq!(format_date(Some("2025-07-14T23:30:00-02:00")), "Jul 15, 2025");
    }

    #[test]
    fn unparseable_date_is_returned_unchanged() {
        assert_eq!(format_date(Some("next tuesday")), "next tuesday");
        assert_eq!(format_date(Some(" 2025-02-30 ")), "2025-02-30");
    }

    // --- display_line ---

    #[test]
    fn display_line_joins_present_parts() {
        assert_eq!(
            display_line("7:00 PM", "Jul 14, 2025").as_deref(),
            Some("7:00 PM • Jul 14, 2025")
        );
        assert_eq!(display_line("7:00 PM", "").as_deref(), Some("7:00 PM"));
        assert_eq!(display_line("", "Jul 14, 2025").as_deref(), Some("Jul 14, 2025"));
        assert_eq!(display_line("", ""), None);
    }
}
