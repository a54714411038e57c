use kotatsu_core::ColorPair;

use crate::clock::{TimeBucket, TimeOfDay};
use crate::engine::TimeOfDayColorEngine;
use crate::schedule::{Scheduler, TickHandle};

/// Throttles sky recomputation to one sample per 15-minute bucket.
///
/// Owned by the render loop. Each poll either yields a fresh immutable
/// [`ColorPair`] for the consumer to apply, or nothing if the bucket is
/// unchanged. The poller never holds a reference into the renderer.
#[derive(Debug, Clone)]
pub struct SkyPoller {
    engine: TimeOfDayColorEngine,
    last_bucket: Option<TimeBucket>,
    current: Option<ColorPair>,
}

impl SkyPoller {
    pub fn new(engine: TimeOfDayColorEngine) -> Self {
        Self {
            engine,
            last_bucket: None,
            current: None,
        }
    }

    /// Recompute only if `now` falls in a different bucket than the last
    /// sample. The first poll always samples.
    pub fn poll(&mut self, now: TimeOfDay) -> Option<ColorPair> {
        let bucket = now.bucket();
        if self.last_bucket == Some(bucket) {
            return None;
        }

        let pair = self.engine.sample(now);
        log::info!(
            "sky bucket {} -> top {} bottom {}",
            bucket,
            pair.top,
            pair.bottom
        );
        self.last_bucket = Some(bucket);
        self.current = Some(pair);
        Some(pair)
    }

    /// Most recent sample, if any poll has run.
    pub fn current(&self) -> Option<ColorPair> {
        self.current
    }

    pub fn last_bucket(&self) -> Option<TimeBucket> {
        self.last_bucket
    }

    pub fn engine(&self) -> &TimeOfDayColorEngine {
        &self.engine
    }

    /// Hand the poller to `scheduler`: every `interval_ms` the tick reads
    /// `clock`, and each new pair is passed to `apply`. Polls once
    /// immediately so the consumer starts with a valid sky.
    pub fn attach<S, C, A>(
        mut self,
        scheduler: &mut S,
        interval_ms: u64,
        mut clock: C,
        mut apply: A,
    ) -> TickHandle
    where
        S: Scheduler + ?Sized,
        C: FnMut() -> TimeOfDay + 'static,
        A: FnMut(ColorPair) + 'static,
    {
        if let Some(pair) = self.poll(clock()) {
            apply(pair);
        }
        scheduler.register_periodic_tick(
            interval_ms,
            Box::new(move || {
                if let Some(pair) = self.poll(clock()) {
                    apply(pair);
                }
            }),
        )
    }
}
