//! Clock-time handling.
//!
//! Departure times are plain wall-clock times with no date attached. Trips
//! that run past midnight wrap around to the early hours, which is all the
//! traffic rule needs since it only looks at the hour.

use chrono::{Duration, NaiveTime, Timelike};

/// Minutes in a day. Advancing a clock by a whole number of days is a no-op.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Whether `hour` (0-23) falls in the morning or evening peak.
///
/// Peak hours are 07:00-09:59 and 16:00-18:59.
pub fn is_peak_hour(hour: u32) -> bool {
    matches!(hour, 7..=9 | 16..=18)
}

/// Advance a clock by the whole-minute part of `minutes`.
///
/// The fractional part is dropped before advancing, so a 2.6 minute leg
/// moves the clock forward by two minutes. Times wrap past midnight.
///
/// # Examples
///
/// ```
/// use campus_router::domain::advance_clock;
/// use chrono::NaiveTime;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(advance_clock(eight, 2.6), NaiveTime::from_hms_opt(8, 2, 0).unwrap());
///
/// let late = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
/// assert_eq!(advance_clock(late, 3.0), NaiveTime::from_hms_opt(0, 2, 0).unwrap());
/// ```
pub fn advance_clock(time: NaiveTime, minutes: f64) -> NaiveTime {
    let whole = minutes.floor().rem_euclid(MINUTES_PER_DAY) as i64;
    let (advanced, _) = time.overflowing_add_signed(Duration::minutes(whole));
    advanced
}

/// Parse a time from "HH:MM" or "HH:MM:SS" format.
///
/// # Examples
///
/// ```
/// use campus_router::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
/// assert!(parse_hhmm("08:15:30").is_ok());
///
/// assert!(parse_hhmm("0815").is_err());
/// assert!(parse_hhmm("8:15").is_err());
/// assert!(parse_hhmm("24:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();

    // HH:MM or HH:MM:SS
    if bytes.len() != 5 && bytes.len() != 8 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    let second = if bytes.len() == 8 {
        if bytes[5] != b':' {
            return Err(TimeError::new("expected colon at position 5"));
        }
        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }
        second
    } else {
        0
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
}

/// Format a clock time as "HH:MM".
pub(crate) fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}
