//! Time and date formatting for the tick handler.
//!
//! - Time: `HH:MM` in 24-hour style, `hh:MM` (zero-padded, 01-12) in 12-hour style
//! - Date: abbreviated weekday, zero-padded day, abbreviated month (`Mon 05 Jan`)

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::text::TextBuffer;

/// Clock style reported by the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClockStyle {
    /// 01:00 - 12:59, no AM/PM marker.
    #[default]
    TwelveHour,
    /// 00:00 - 23:59.
    TwentyFourHour,
}

impl ClockStyle {
    /// Map the host's 24-hour preference flag to a style.
    #[inline]
    pub const fn from_24h(is_24h: bool) -> Self {
        if is_24h { Self::TwentyFourHour } else { Self::TwelveHour }
    }
}

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter English weekday abbreviation.
#[inline]
pub fn weekday_abbreviation(time: &NaiveDateTime) -> &'static str {
    WEEKDAY_ABBREVIATIONS[time.weekday().num_days_from_monday() as usize]
}

/// Three-letter English month abbreviation.
#[inline]
pub fn month_abbreviation(time: &NaiveDateTime) -> &'static str { MONTH_ABBREVIATIONS[time.month0() as usize] }

/// Write the time of day into `buffer`.
pub fn format_time<const N: usize>(
    buffer: &mut TextBuffer<N>,
    time: &NaiveDateTime,
    style: ClockStyle,
) {
    let hour = match style {
        ClockStyle::TwentyFourHour => time.hour(),
        ClockStyle::TwelveHour => time.hour12().1,
    };
    buffer.set_fmt(format_args!("{:02}:{:02}", hour, time.minute()));
}

/// Write the date into `buffer`.
pub fn format_date<const N: usize>(
    buffer: &mut TextBuffer<N>,
    time: &NaiveDateTime,
) {
    buffer.set_fmt(format_args!(
        "{} {:02} {}",
        weekday_abbreviation(time),
        time.day(),
        month_abbreviation(time)
    ));
}

// =============================================================================
// Tests
// =============================================================================
