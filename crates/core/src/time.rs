//! Relative-time formatting ("5 minutes ago", "in 2 hours").

use chrono::{DateTime, Utc};

/// Anything this close to `now` (inclusive) renders as "just now".
const JUST_NOW_SECS: i64 = 45;

/// Format `then` relative to `now`.
///
/// Picks the largest unit (days, hours, minutes) with a magnitude of at least
/// one; anything within 45 seconds is "just now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = then.signed_duration_since(now);
    let secs = delta.num_seconds();

    if secs.abs() <= JUST_NOW_SECS {
        return "just now".to_string();
    }

    let (amount, unit) = if delta.num_days().abs() >= 1 {
        (delta.num_days().abs(), "day")
    } else if delta.num_hours().abs() >= 1 {
        (delta.num_hours().abs(), "hour")
    } else {
        // 46..60 seconds rounds up to a minute.
        (delta.num_minutes().abs().max(1), "minute")
    };

    let plural = if amount == 1 { "" } else { "s" };
    if secs < 0 {
        format!("{amount} {unit}{plural} ago")
    } else {
        format!("in {amount} {unit}{plural}")
    }
}
