//! Permissive, locale-independent date-time parsing.
//!
//! Accepts ISO 8601 / RFC 3339 and RFC 2822 timestamps, date-only values and
//! the common slash, dot and month-name layouts, each with an optional time of
//! day and UTC offset. Slash dates read as month/day/year, dot dates as
//! day.month.year. A leading weekday (`Wednesday, May 2, 1990`) is accepted
//! when it matches the date.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Weekday,
};

/// Layouts carrying an explicit UTC offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M %:z",
    "%Y/%m/%d %H:%M:%S %:z",
    "%Y/%m/%d %H:%M %:z",
    "%m/%d/%Y %H:%M:%S %:z",
    "%m/%d/%Y %H:%M %:z",
    "%m/%d/%Y %I:%M:%S %p %:z",
    "%d.%m.%Y %H:%M:%S %:z",
    "%d.%m.%Y %H:%M %:z",
    "%d %B %Y %H:%M:%S %:z",
    "%d %B %Y %H:%M %:z",
    "%B %d, %Y %H:%M:%S %:z",
    "%B %d, %Y %H:%M %:z",
];

/// Layouts with a time of day but no offset
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

/// Date-only layouts, read as midnight
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%Y %B %d",
];

/// A successfully parsed date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDateTime {
    /// Carries an explicit offset, which is preserved on output
    Offset(DateTime<FixedOffset>),
    /// No offset given
    Naive(NaiveDateTime),
}

impl ParsedDateTime {
    /// Render as ISO 8601; naive values carry no offset suffix
    pub fn to_iso8601(&self) -> String {
        match self {
            ParsedDateTime::Offset(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            ParsedDateTime::Naive(dt) => {
                let base = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
                if dt.nanosecond() == 0 {
                    base
                } else {
                    format!("{}{}", base, dt.format("%.f"))
                }
            }
        }
    }

    fn naive_local(&self) -> NaiveDateTime {
        match self {
            ParsedDateTime::Offset(dt) => dt.naive_local(),
            ParsedDateTime::Naive(dt) => *dt,
        }
    }
}

/// Parse `text` as a date-time, returning `None` when no layout matches
pub fn parse_datetime(text: &str) -> Option<ParsedDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_without_weekday(s) {
        return Some(parsed);
    }

    // "Wednesday, May 2, 1990": drop the weekday, then require it to agree
    let (day_name, rest) = s.split_once(',')?;
    let weekday: Weekday = day_name.trim().parse().ok()?;
    let parsed = parse_without_weekday(rest.trim())?;
    (parsed.naive_local().weekday() == weekday).then_some(parsed)
}

fn parse_without_weekday(s: &str) -> Option<ParsedDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(ParsedDateTime::Offset(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(ParsedDateTime::Offset(dt));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(ParsedDateTime::Offset(dt));
        }
    }

    // A trailing 'Z' means UTC for the offset-less layouts
    if let Some(stripped) = s.strip_suffix('Z') {
        if let Some(naive) = parse_naive(stripped) {
            return Some(ParsedDateTime::Offset(naive.and_utc().fixed_offset()));
        }
    }

    parse_naive(s).map(ParsedDateTime::Naive)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
