//! Password-expiry computation in the seconds-since-epoch domain.

use chrono::{DateTime, Local};

use crate::record::Aging;

/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 60 * 60 * 24;

/// Derived expiry figures for one account at one instant.
///
/// All fields are seconds since the epoch (or a span of seconds), computed
/// with saturating integer arithmetic so absurd day counts degrade instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryStatus {
    /// Instant of the last password change.
    pub last_change_secs: i64,
    /// How long ago the password was changed.
    pub age_secs: i64,
    /// Instant at which the password stops being valid.
    pub expires_secs: i64,
    /// Seconds until expiry; negative or zero once expired.
    pub remaining_secs: i64,
}

impl ExpiryStatus {
    /// Compute expiry figures for `aging` as of `now_secs`.
    #[must_use]
    pub const fn compute(aging: Aging, now_secs: i64) -> Self {
        let last_change_secs = aging.last_change_day.saturating_mul(SECS_PER_DAY);
        let expires_secs =
            last_change_secs.saturating_add(aging.max_age_days.saturating_mul(SECS_PER_DAY));

        Self {
            last_change_secs,
            age_secs: now_secs.saturating_sub(last_change_secs),
            expires_secs,
            remaining_secs: expires_secs.saturating_sub(now_secs),
        }
    }

    /// Returns true while the password has remaining validity.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.remaining_secs > 0
    }

    /// Current password age in whole days, truncated toward zero.
    #[must_use]
    pub const fn age_days(&self) -> i64 {
        self.age_secs / SECS_PER_DAY
    }

    /// Whole days until expiry, truncated toward zero.
    #[must_use]
    pub const fn days_left(&self) -> i64 {
        self.remaining_secs / SECS_PER_DAY
    }

    /// Whole days since expiry, truncated toward zero.
    #[must_use]
    pub const fn days_overdue(&self) -> i64 {
        self.remaining_secs.saturating_neg() / SECS_PER_DAY
    }

    /// The last-change instant as a local-calendar date, e.g. `" 5 Mar 2024"`.
    ///
    /// Returns `None` when the instant cannot be represented on the calendar,
    /// letting the caller fall back to the raw day count.
    #[must_use]
    pub fn last_change_date(&self) -> Option<String> {
        let utc = DateTime::from_timestamp(self.last_change_secs, 0)?;
        Some(utc.with_timezone(&Local).format("%e %b %Y").to_string())
    }
}
