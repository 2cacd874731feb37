//! Schedule expression parsing.
//!
//! Turns the free-text start time a user typed into an absolute instant in
//! the deployment's canonical UTC offset.
//!
//! # Accepted forms
//!
//! Tried in this order; the first whose shape matches decides the outcome
//! and no later form is attempted:
//!
//! | Form | Example | Meaning |
//! |------|---------|---------|
//! | `HH:MM` | `21:00` | today (canonical offset), no rollover |
//! | `MM/DD HH:MM` | `12/24 21:00` | this year |
//! | `YYYY/MM/DD HH:MM` | `2030/01/15 09:30` | fully explicit |
//! | `NN` | `25` | minutes from now, must be positive |
//!
//! No input at all means "in [`DEFAULT_LEAD_MINUTES`] minutes".

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::ValidationError;
use crate::domain::foundation::ScheduledAt;
use crate::ports::Clock;

/// Lead time applied when no start time is given.
pub const DEFAULT_LEAD_MINUTES: i64 = 30;

/// Calendar years a start time may fall in.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

static TIME_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").expect("static regex"));

static MONTH_DAY_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2}) ([0-9]{1,2}):([0-9]{1,2})$").expect("static regex")
});

static FULL_DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2}) ([0-9]{1,2}):([0-9]{1,2})$")
        .expect("static regex")
});

static MINUTES_LATER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("static regex"));

/// Returns true if `hour:minute` is a valid wall-clock time.
pub fn is_valid_time(hour: u32, minute: u32) -> bool {
    hour <= 23 && minute <= 59
}

/// Returns true if the triple names a real calendar day in years 1 to 9999.
///
/// Uses chrono's strict constructor, so February 30th or month 13 are
/// rejected instead of rolling over.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    YEAR_RANGE.contains(&year) && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Parser for schedule expressions, bound to a clock and canonical offset.
#[derive(Clone)]
pub struct ScheduleParser {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
    default_lead: Duration,
}

impl ScheduleParser {
    /// Create a parser producing instants in `offset`.
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            clock,
            offset,
            default_lead: Duration::minutes(DEFAULT_LEAD_MINUTES),
        }
    }

    /// Override the lead time used when no input is given.
    pub fn with_default_lead(mut self, lead: Duration) -> Self {
        self.default_lead = lead;
        self
    }

    /// Returns the canonical offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Parse a schedule expression.
    ///
    /// Surrounding whitespace is ignored; blank input counts as absent.
    ///
    /// # Errors
    ///
    /// - `InvalidTimeRange` if hour or minute is out of range
    /// - `InvalidCalendarDate` if the date does not exist
    /// - `NonPositiveOffset` for `0` minutes from now
    /// - `OffsetOutOfRange` if the minute count is too large to represent
    /// - `UnmatchedDateFormat` if no accepted form matches
    pub fn parse(&self, raw: Option<&str>) -> Result<ScheduledAt, ValidationError> {
        let now = self.clock.now().with_timezone(&self.offset);

        let input = match raw.map(str::trim) {
            Some(input) if !input.is_empty() => input,
            _ => return Ok(ScheduledAt::from_datetime(now + self.default_lead)),
        };

        if let Some(caps) = TIME_ONLY.captures(input) {
            let hour = capture(&caps, 1, input)?;
            let minute = capture(&caps, 2, input)?;
            return self.resolve(now.year(), now.month(), now.day(), hour, minute);
        }

        if let Some(caps) = MONTH_DAY_TIME.captures(input) {
            let month = capture(&caps, 1, input)?;
            let day = capture(&caps, 2, input)?;
            let hour = capture(&caps, 3, input)?;
            let minute = capture(&caps, 4, input)?;
            return self.resolve(now.year(), month, day, hour, minute);
        }

        if let Some(caps) = FULL_DATE_TIME.captures(input) {
            let year = capture(&caps, 1, input)?;
            let month = capture(&caps, 2, input)?;
            let day = capture(&caps, 3, input)?;
            let hour = capture(&caps, 4, input)?;
            let minute = capture(&caps, 5, input)?;
            return self.resolve(year, month, day, hour, minute);
        }

        if MINUTES_LATER.is_match(input) {
            return minutes_from(now, input);
        }

        Err(ValidationError::unmatched_date_format(input))
    }

    /// Build an instant in the canonical offset from validated fields.
    fn resolve(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<ScheduledAt, ValidationError> {
        if !is_valid_time(hour, minute) {
            return Err(ValidationError::invalid_time_range(hour, minute));
        }

        if !is_valid_date(year, month, day) {
            return Err(ValidationError::invalid_calendar_date(year, month, day));
        }

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ValidationError::invalid_calendar_date(year, month, day))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ValidationError::invalid_time_range(hour, minute))?;

        date.and_time(time)
            .and_local_timezone(self.offset)
            .single()
            .map(ScheduledAt::from_datetime)
            .ok_or_else(|| ValidationError::invalid_calendar_date(year, month, day))
    }
}

impl std::fmt::Debug for ScheduleParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleParser")
            .field("offset", &self.offset)
            .field("default_lead", &self.default_lead)
            .finish_non_exhaustive()
    }
}

fn minutes_from(
    now: DateTime<FixedOffset>,
    input: &str,
) -> Result<ScheduledAt, ValidationError> {
    let minutes: u32 = input
        .parse()
        .map_err(|_| ValidationError::OffsetOutOfRange {
            input: input.to_string(),
        })?;

    if minutes == 0 {
        return Err(ValidationError::NonPositiveOffset { minutes });
    }

    now.checked_add_signed(Duration::minutes(i64::from(minutes)))
        .filter(|at| YEAR_RANGE.contains(&at.year()))
        .map(ScheduledAt::from_datetime)
        .ok_or_else(|| ValidationError::OffsetOutOfRange {
            input: input.to_string(),
        })
}

/// Read a numeric capture group. The grammars only capture ASCII digits of
/// bounded width, so a failure here means the grammar itself is wrong.
fn capture<T: FromStr>(caps: &Captures<'_>, index: usize, input: &str) -> Result<T, ValidationError> {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ValidationError::unmatched_date_format(input))
}
