//! Free-form date interpretation
//!
//! The session builder only needs two things from a date library: turn an arbitrary date
//! expression into a timestamp, and tell the time when that fails. [`DateInterpreter`] is
//! that seam. [`ChronoDates`] is the default and understands the layouts people actually
//! write at the top of a training log.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// The date expression did not match any known layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date {input:?}")]
pub struct DateError {
    pub input: String,
}

pub trait DateInterpreter {
    fn parse_freeform(&self, text: &str) -> Result<DateTime<Utc>, DateError>;

    /// Fallback timestamp used when `parse_freeform` fails
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: DateInterpreter + ?Sized> DateInterpreter for &T {
    fn parse_freeform(&self, text: &str) -> Result<DateTime<Utc>, DateError> {
        (**self).parse_freeform(text)
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

// Layouts without an offset are read as UTC.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %I:%M%p",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%m/%d/%Y %I:%M %p",
    "%a %b %d %Y %I:%M%p",
    "%a %b %d %Y %I:%M %p",
    "%a %b %d %Y %H:%M",
    "%b %d %Y %I:%M%p",
    "%b %d %Y %H:%M",
];

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A, %B %d, %Y",
    "%Y%m%d",
];

/// Layout-table date interpreter backed by chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDates;

impl DateInterpreter for ChronoDates {
    fn parse_freeform(&self, text: &str) -> Result<DateTime<Utc>, DateError> {
        let input = text.trim();
        let fail = || DateError {
            input: text.to_owned(),
        };
        if input.is_empty() {
            return Err(fail());
        }

        if let Ok(date) = DateTime::parse_from_rfc3339(input) {
            return Ok(date.with_timezone(&Utc));
        }
        if let Ok(date) = DateTime::parse_from_rfc2822(input) {
            return Ok(date.with_timezone(&Utc));
        }

        for layout in DATE_TIME_LAYOUTS {
            if let Ok(date) = NaiveDateTime::parse_from_str(input, layout) {
                return Ok(date.and_utc());
            }
        }

        for layout in DATE_LAYOUTS {
            if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
                return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
            }
        }

        Err(fail())
    }
}

/// Interpreter with a frozen clock, for deterministic fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock<D = ChronoDates> {
    pub dates: D,
    pub now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            dates: ChronoDates,
            now,
        }
    }
}

impl<D: DateInterpreter> DateInterpreter for FixedClock<D> {
    fn parse_freeform(&self, text: &str) -> Result<DateTime<Utc>, DateError> {
        self.dates.parse_freeform(text)
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
