//! Wall-clock times for timetables.
//!
//! Departure boards and stop timetables use plain "HH:MM" times of day with
//! no date component: every slot repeats daily.

use std::fmt;

use chrono::{NaiveTime, Timelike};

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

/// A time of day with minute precision, displayed as zero-padded `"HH:MM"`.
///
/// # Examples
///
/// ```
/// use transit_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse("06:00").unwrap();
/// assert_eq!(t.to_string(), "06:00");
///
/// assert!(TimeOfDay::parse("6:00").is_err());
/// assert!(TimeOfDay::parse("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time from hour (0-23) and minute (0-59) components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))
    }

    /// Parse a time from strict "HH:MM" format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

/// Parse exactly two ASCII digits into a number.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some(u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0'))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert!(TimeOfDay::parse("00:00").is_ok());
        assert!(TimeOfDay::parse("06:00").is_ok());
        assert!(TimeOfDay::parse("14:30").is_ok());
        assert!(TimeOfDay::parse("23:59").is_ok());
    }

    #[test]
    fn reject_bad_format() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("6:00").is_err());
        assert!(TimeOfDay::parse("0600").is_err());
        assert!(TimeOfDay::parse("06:0").is_err());
        assert!(TimeOfDay::parse("06-00").is_err());
        assert!(TimeOfDay::parse("ab:cd").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::from_hm(24, 0).is_err());
        assert!(TimeOfDay::from_hm(0, 60).is_err());
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(TimeOfDay::from_hm(6, 0).unwrap().to_string(), "06:00");
        assert_eq!(TimeOfDay::from_hm(14, 5).unwrap().to_string(), "14:05");
    }

    #[test]
    fn ordering_follows_the_clock() {
        let a = TimeOfDay::parse("06:00").unwrap();
        let b = TimeOfDay::parse("06:30").unwrap();
        let c = TimeOfDay::parse("20:00").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn accessors() {
        let t = TimeOfDay::parse("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }
}
