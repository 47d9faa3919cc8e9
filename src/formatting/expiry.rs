//! Expiry

use jiff::Timestamp;

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// Remaining lifetime of a promo code, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// The expiry instant is in the past
    Expired,

    /// Days left, rounded up; `0` means the code expires right now
    DaysLeft(u64),
}

/// Days from `now` until `expires_at`.
///
/// Any positive fraction of a day counts as a full day, so 23h59m59s left is one day. An expiry
/// strictly before `now` is [`Expiry::Expired`], however close.
pub fn days_left(expires_at: Timestamp, now: Timestamp) -> Expiry {
    let remaining = expires_at.duration_since(now).as_nanos();

    if remaining < 0 {
        return Expiry::Expired;
    }

    let days = remaining.div_euclid(NANOS_PER_DAY)
        + i128::from(remaining.rem_euclid(NANOS_PER_DAY) != 0);

    Expiry::DaysLeft(u64::try_from(days).unwrap_or(u64::MAX))
}
