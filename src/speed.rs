use crate::config::POINTS_PER_SPEED_STEP;

/// Tick interval in milliseconds for `score`, starting from `base_ms`.
///
/// The interval shortens by `step_ms` every [`POINTS_PER_SPEED_STEP`] points
/// and never drops below `floor_ms`.
#[must_use]
pub fn effective_speed_ms(base_ms: u64, score: u32, floor_ms: u64, step_ms: u64) -> u64 {
    let steps = u64::from(score / POINTS_PER_SPEED_STEP);
    base_ms
        .saturating_sub(steps.saturating_mul(step_ms))
        .max(floor_ms)
}
