//! Time source abstraction and timestamp conventions.
//!
//! Entities stamp `dateCreated`/`dateModified` at construction from an
//! injected [`Clock`] instead of reading the wall clock directly, so tests
//! and fixtures can supply deterministic instants. All instants are UTC and
//! quantized to whole milliseconds, matching the serialized timestamp form
//! (`2015-09-15T10:15:00.000Z`).

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// A source of "now" for entity construction and decoding defaults.
pub trait Clock {
    /// Returns the current instant, quantized to whole milliseconds.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        quantize(Utc::now())
    }
}

/// A time source that returns the same instant on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        quantize(self.0)
    }
}

/// Truncates an instant to whole-millisecond precision.
///
/// The serialized form carries exactly three fractional digits, so instants
/// survive a round trip through the serializer only at this precision.
#[must_use]
pub fn quantize(instant: DateTime<Utc>) -> DateTime<Utc> {
    let millis = instant.timestamp_subsec_millis();
    instant
        .with_nanosecond(millis * 1_000_000)
        .unwrap_or(instant)
}

/// Formats an instant as an ISO-8601 UTC string with millisecond precision.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// # Errors
///
/// Returns the underlying parse error when the input is not a valid
/// ISO-8601 timestamp.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(input).map(|instant| instant.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap()
    }

    #[test]
    fn fixed_clock_repeats_its_instant() {
        let clock = FixedClock(instant());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn quantize_truncates_below_the_millisecond() {
        let fine = instant() + Duration::nanoseconds(123_456_789);
        let coarse = quantize(fine);
        assert_eq!(coarse, instant() + Duration::milliseconds(123));
    }

    #[test]
    fn system_clock_is_millisecond_quantized() {
        let now = SystemClock.now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn format_is_millisecond_utc() {
        assert_eq!(format_timestamp(instant()), "2015-09-15T10:15:00.000Z");
        assert_eq!(
            format_timestamp(instant() + Duration::milliseconds(42)),
            "2015-09-15T10:15:00.042Z"
        );
    }

    #[test]
    fn parse_inverts_format() {
        let stamped = instant() + Duration::milliseconds(42);
        assert_eq!(parse_timestamp(&format_timestamp(stamped)), Ok(stamped));
    }

    #[test]
    fn parse_accepts_offset_forms_and_normalizes_to_utc() {
        let parsed = parse_timestamp("2015-09-15T12:15:00.000+02:00").unwrap();
        assert_eq!(parsed, instant());
    }

    #[test]
    fn parse_rejects_non_timestamps() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2015-09-15").is_err());
    }
}
