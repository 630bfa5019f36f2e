//! Countdown value shown on the pricing page.
//!
//! A four-field duration that ticks down one second at a time, borrowing from
//! the next larger unit only when every smaller unit is already zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Value the pricing page offer counter starts from
pub const OFFER_COUNTDOWN_START: Countdown = Countdown {
    days: 5,
    hours: 9,
    minutes: 52,
    seconds: 38,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("{field} must be below {limit}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        limit: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Build a countdown, rejecting hours/minutes/seconds outside their clock range.
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Result<Self, CountdownError> {
        let countdown = Self {
            days,
            hours,
            minutes,
            seconds,
        };
        countdown.validate()?;
        Ok(countdown)
    }

    pub fn validate(&self) -> Result<(), CountdownError> {
        check_field("hours", self.hours, 24)?;
        check_field("minutes", self.minutes, 60)?;
        check_field("seconds", self.seconds, 60)?;
        Ok(())
    }

    /// Advance by one second. Returns false once the terminal all-zero value is reached.
    pub fn tick(&mut self) -> bool {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else if self.days > 0 {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            return false;
        }
        true
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// Labelled fields in display order, largest unit first
    pub fn fields(&self) -> [(u32, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}

fn check_field(field: &'static str, value: u32, limit: u32) -> Result<(), CountdownError> {
    if value >= limit {
        return Err(CountdownError::OutOfRange {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
