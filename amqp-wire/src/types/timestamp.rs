use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Whole seconds since the epoch, rounding towards negative infinity
///
/// Returns `None` when the result doesn't fit in an i64
pub(crate) fn to_unix_seconds(time: SystemTime) -> Option<i64> {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i128::from(since.as_secs()),
        Err(before) => {
            let before = before.duration();
            let secs = -i128::from(before.as_secs());
            if before.subsec_nanos() > 0 {
                secs - 1
            } else {
                secs
            }
        }
    };
    i64::try_from(secs).ok()
}

pub(crate) fn from_unix_seconds(secs: i64) -> Option<SystemTime> {
    if secs >= 0 {
        UNIX_EPOCH.checked_add(Duration::from_secs(secs.unsigned_abs()))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))
    }
}
