use kotatsu_core::constants::HOURS_PER_DAY;
use kotatsu_core::ColorPair;

use crate::clock::TimeOfDay;
use crate::keyframe::KeyframeTable;

/// Maps time of day to a sky color pair by blending the surrounding keyframes.
/// Stateless; throttling lives in [`crate::poller::SkyPoller`].
#[derive(Debug, Clone, Default)]
pub struct TimeOfDayColorEngine {
    table: KeyframeTable,
}

impl TimeOfDayColorEngine {
    pub fn new(table: KeyframeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeyframeTable {
        &self.table
    }

    pub fn sample(&self, now: TimeOfDay) -> ColorPair {
        self.sample_hours(now.as_hours())
    }

    /// Sample at fractional hours. Any real value is accepted and wrapped
    /// into [0, 24); non-finite input samples midnight.
    pub fn sample_hours(&self, hours: f64) -> ColorPair {
        let hour = wrap_hour(hours);
        let bracket = self.table.bracket(hour);
        bracket.prev.pair().lerp(bracket.next.pair(), bracket.t)
    }
}

fn wrap_hour(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    let h = hours.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if h >= HOURS_PER_DAY {
        0.0
    } else {
        h
    }
}
