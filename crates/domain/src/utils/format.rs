//! Display formatting for counters, ages and discounts

use chrono::{DateTime, Utc};

use crate::Money;

/// Compact engagement counter: `999`, `1.2K`, `3.4M`.
///
/// Always one decimal place, rounded half up. A value that rounds up to
/// 1000 of one unit moves to the next suffix.
///
/// ```
/// use marketfeed_domain::compact_count;
///
/// assert_eq!(compact_count(999), "999");
/// assert_eq!(compact_count(1_250), "1.3K");
/// assert_eq!(compact_count(999_950), "1.0M");
/// assert_eq!(compact_count(2_000_000), "2.0M");
/// ```
#[must_use]
pub fn compact_count(n: u64) -> String {
    const SUFFIXES: [(u64, &str); 2] = [(1_000, "K"), (1_000_000, "M")];

    let mut label = n.to_string();
    for (unit, suffix) in SUFFIXES {
        if n < unit {
            break;
        }
        let tenths = (u128::from(n) * 10 + u128::from(unit / 2)) / u128::from(unit);
        label = format!("{}.{}{suffix}", tenths / 10, tenths % 10);
        if tenths < 10_000 {
            break;
        }
    }
    label
}

/// Short age label for feed items: `now`, `5m`, `2h`, `3d`, `2w`.
///
/// Timestamps in the future read as `now`.
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d");
    }
    format!("{}w", days / 7)
}

/// Discount of `price` against `original`, rounded to the nearest percent.
///
/// Returns 0 when there is no discount or `original` is not positive.
#[must_use]
pub fn percent_off(original: Money, price: Money) -> u8 {
    let (orig, now) = (original.cents(), price.cents());
    if orig <= 0 || now >= orig {
        return 0;
    }
    let pct = ((orig - now) * 100 + orig / 2) / orig;
    u8::try_from(pct.clamp(0, 100)).unwrap_or(100)
}
