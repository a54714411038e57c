use kotatsu_core::constants::HOURS_PER_DAY;
use kotatsu_core::{ColorPair, ConfigError, Rgb24};
use serde::{Deserialize, Serialize};

/// A (time, color pair) anchor for sky interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKeyframe {
    /// Hour of day in [0, 24).
    pub hour: f64,
    pub top: Rgb24,
    pub bottom: Rgb24,
}

impl ColorKeyframe {
    pub const fn new(hour: f64, top: u32, bottom: u32) -> Self {
        Self {
            hour,
            top: Rgb24::masked(top),
            bottom: Rgb24::masked(bottom),
        }
    }

    pub const fn pair(&self) -> ColorPair {
        ColorPair::new(self.top, self.bottom)
    }
}

/// Built-in sky: deep night, dawn, day, sunset, dusk.
/// Midnight is reached again through the wraparound from 20:00.
pub const DEFAULT_SKY_KEYFRAMES: [ColorKeyframe; 13] = [
    ColorKeyframe::new(0.0, 0x0a0a20, 0x1a1a3a),
    ColorKeyframe::new(4.0, 0x0a0a20, 0x1a1a3a),
    ColorKeyframe::new(5.0, 0x1a1a40, 0x2a2a5a),
    ColorKeyframe::new(6.0, 0x4a3a60, 0x7a5a80),
    ColorKeyframe::new(7.0, 0xff9966, 0xffb088),
    ColorKeyframe::new(8.0, 0x87ceeb, 0xb0e0e6),
    ColorKeyframe::new(9.0, 0x6ab0de, 0x9cd0e8),
    ColorKeyframe::new(10.0, 0x4a90d9, 0x87ceeb),
    ColorKeyframe::new(16.0, 0x4a90d9, 0x87ceeb),
    ColorKeyframe::new(17.0, 0xff7e5f, 0xfeb47b),
    ColorKeyframe::new(18.0, 0xff5f6d, 0xd45a6a),
    ColorKeyframe::new(19.0, 0x3a3a60, 0x5a4a7a),
    ColorKeyframe::new(20.0, 0x1a1a30, 0x2a2a4a),
];

/// The pair of keyframes surrounding an hour, plus the blend fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub prev: ColorKeyframe,
    pub next: ColorKeyframe,
    pub t: f64,
}

/// Validated keyframe sequence: at least two entries, hours in [0, 24),
/// strictly ascending. The last entry blends into the first across midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTable {
    keyframes: Vec<ColorKeyframe>,
}

impl Default for KeyframeTable {
    fn default() -> Self {
        Self {
            keyframes: DEFAULT_SKY_KEYFRAMES.to_vec(),
        }
    }
}

impl KeyframeTable {
    pub fn new(keyframes: Vec<ColorKeyframe>) -> Result<Self, ConfigError> {
        if keyframes.len() < 2 {
            return Err(ConfigError::TooFewKeyframes(keyframes.len()));
        }

        for (index, kf) in keyframes.iter().enumerate() {
            if !(kf.hour.is_finite() && (0.0..HOURS_PER_DAY).contains(&kf.hour)) {
                return Err(ConfigError::HourOutOfRange {
                    index,
                    hour: kf.hour,
                });
            }
        }

        for (index, pair) in keyframes.windows(2).enumerate() {
            let (previous, hour) = (pair[0].hour, pair[1].hour);
            if hour == previous {
                return Err(ConfigError::DuplicateHour {
                    index: index + 1,
                    hour,
                });
            }
            if hour < previous {
                return Err(ConfigError::NonMonotonicHour {
                    index: index + 1,
                    hour,
                    previous,
                });
            }
        }

        log::debug!("validated sky keyframe table ({} entries)", keyframes.len());
        Ok(Self { keyframes })
    }

    pub fn keyframes(&self) -> &[ColorKeyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Find `prev <= hour < next`. `hour` must already be wrapped into [0, 24).
    /// Hours before the first or at/after the last keyframe bracket between
    /// the last and the first, with the first shifted by one day.
    pub fn bracket(&self, hour: f64) -> Bracket {
        let first = self.keyframes[0];
        let last = self.keyframes[self.keyframes.len() - 1];

        if hour < first.hour || hour >= last.hour {
            let span = first.hour + HOURS_PER_DAY - last.hour;
            let elapsed = if hour >= last.hour {
                hour - last.hour
            } else {
                hour + HOURS_PER_DAY - last.hour
            };
            return Bracket {
                prev: last,
                next: first,
                t: fraction(elapsed, span),
            };
        }

        // first.hour <= hour < last.hour, so 1 <= idx <= len - 1
        let idx = self.keyframes.partition_point(|k| k.hour <= hour);
        let prev = self.keyframes[idx - 1];
        let next = self.keyframes[idx];
        Bracket {
            prev,
            next,
            t: fraction(hour - prev.hour, next.hour - prev.hour),
        }
    }
}

fn fraction(elapsed: f64, span: f64) -> f64 {
    if span > 0.0 {
        elapsed / span
    } else {
        0.0
    }
}
