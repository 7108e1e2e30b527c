//! Event-time window clause.

use crate::schema::{CAPTURE_BEGIN, CAPTURE_END};

/// Seconds per microsecond, applied to the capture timestamps.
const MICROS_TO_SECONDS: &str = "1e-6";

/// The event window shared by every definition.
///
/// Capture timestamps are microseconds since the epoch; the engine wants
/// seconds. The second line is indented relative to the first.
pub fn window_clause() -> String {
    format!(
        "EVENT STARTING AT {CAPTURE_BEGIN} * {MICROS_TO_SECONDS}\n  AND STOPPING AT {CAPTURE_END} * {MICROS_TO_SECONDS}"
    )
}
