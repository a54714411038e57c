//! Periodic tick scheduling decoupled from any rendering framework.
//! Hosts that own a real timer implement [`Scheduler`]; hosts that step
//! time themselves (frame loops, tests) use [`ManualScheduler`].

/// Due time of a tick whose interval ran past the end of the clock.
const NEVER_DUE: u64 = u64::MAX;

/// Callback fired on every tick. Runs on the thread that drives the scheduler.
pub type TickCallback = Box<dyn FnMut()>;

/// Identifies a registered periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

pub trait Scheduler {
    /// Fire `callback` every `interval_ms` until cancelled.
    fn register_periodic_tick(&mut self, interval_ms: u64, callback: TickCallback) -> TickHandle;

    /// Stop a tick. Returns false if the handle was unknown or already cancelled.
    fn cancel(&mut self, handle: TickHandle) -> bool;
}

struct PeriodicTick {
    handle: TickHandle,
    interval_ms: u64,
    next_due_ms: u64,
    callback: TickCallback,
}

/// Scheduler driven by explicit `advance` calls.
/// Ticks are fired in due-time order; ties fire in registration order.
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    ticks: Vec<PeriodicTick>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            ticks: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn active_count(&self) -> usize {
        self.ticks.len()
    }

    /// Move time forward, firing every tick that falls due.
    /// A tick whose interval fits several times into `elapsed_ms` fires
    /// once per elapsed interval. Returns the number of callbacks fired.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let target = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = 0;

        loop {
            let due = self
                .ticks
                .iter()
                .enumerate()
                .filter(|(_, tick)| tick.next_due_ms != NEVER_DUE && tick.next_due_ms <= target)
                .min_by_key(|(i, tick)| (tick.next_due_ms, *i))
                .map(|(i, _)| i);

            let Some(idx) = due else { break };
            let tick = &mut self.ticks[idx];
            self.now_ms = tick.next_due_ms;
            tick.next_due_ms = tick.next_due_ms.saturating_add(tick.interval_ms);
            (tick.callback)();
            fired += 1;
        }

        self.now_ms = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    /// Intervals of 0 ms are treated as 1 ms. A tick whose due time
    /// saturates at `u64::MAX` never fires.
    fn register_periodic_tick(&mut self, interval_ms: u64, callback: TickCallback) -> TickHandle {
        let interval_ms = interval_ms.max(1);
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.ticks.push(PeriodicTick {
            handle,
            interval_ms,
            next_due_ms: self.now_ms.saturating_add(interval_ms),
            callback,
        });
        log::debug!("registered periodic tick {:?} every {} ms", handle, interval_ms);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        let before = self.ticks.len();
        self.ticks.retain(|tick| tick.handle != handle);
        before != self.ticks.len()
    }
}
