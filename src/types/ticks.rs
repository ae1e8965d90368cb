//! Points in time and durations measured in 100-nanosecond ticks.
//!
//! A `Timestamp` counts ticks since 0001-01-01T00:00:00 (no time zone). A
//! `TimeSpan` is a signed tick count. Both are stored on the wire as a single
//! signed 64-bit integer and convert to and from `chrono` types.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::BitweaveError;

pub const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

fn tick_epoch() -> Result<NaiveDateTime, BitweaveError> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| BitweaveError::TimeOverflow("tick epoch is not representable".into()))
}

//==================================================================================
// 1. TimeSpan
//==================================================================================

/// A signed duration in 100 ns ticks.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct TimeSpan {
    ticks: i64,
}

impl TimeSpan {
    pub const MIN: TimeSpan = TimeSpan { ticks: i64::MIN };
    pub const MAX: TimeSpan = TimeSpan { ticks: i64::MAX };

    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Converts a `chrono` duration, truncating sub-tick precision toward zero.
    pub fn from_delta(delta: TimeDelta) -> Result<Self, BitweaveError> {
        let whole = delta.num_seconds().checked_mul(TICKS_PER_SECOND);
        let part = i64::from(delta.subsec_nanos()) / NANOS_PER_TICK;
        whole
            .and_then(|ticks| ticks.checked_add(part))
            .map(Self::from_ticks)
            .ok_or_else(|| BitweaveError::TimeOverflow(format!("{delta} exceeds the tick range")))
    }

    /// Every tick count fits in a `TimeDelta`.
    pub fn to_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.ticks / TICKS_PER_SECOND)
            + TimeDelta::nanoseconds((self.ticks % TICKS_PER_SECOND) * NANOS_PER_TICK)
    }
}

//==================================================================================
// 2. Timestamp
//==================================================================================

/// A calendar date and time in 100 ns ticks since 0001-01-01.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Timestamp {
    ticks: i64,
}

impl Timestamp {
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn from_naive(value: NaiveDateTime) -> Result<Self, BitweaveError> {
        let since_epoch = value.signed_duration_since(tick_epoch()?);
        TimeSpan::from_delta(since_epoch).map(|span| Self::from_ticks(span.ticks()))
    }

    /// Fails with `TimeOverflow` when the tick count lies outside the range
    /// `chrono` can represent.
    pub fn to_naive(&self) -> Result<NaiveDateTime, BitweaveError> {
        tick_epoch()?
            .checked_add_signed(TimeSpan::from_ticks(self.ticks).to_delta())
            .ok_or_else(|| {
                BitweaveError::TimeOverflow(format!("{} ticks is not a valid date", self.ticks))
            })
    }
}
