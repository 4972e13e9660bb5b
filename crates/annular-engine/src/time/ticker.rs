use std::time::{Duration, Instant};

/// Default redraw interval, roughly 30 fps.
pub const DRAW_INTERVAL: Duration = Duration::from_millis(33);

/// If the host stalls, at most this many missed ticks are replayed before the
/// schedule re-anchors to the present. Keeps a long pause from turning into a
/// burst of catch-up frames.
const MAX_CATCH_UP: u32 = 8;

/// Polled periodic schedule.
///
/// `start` and `stop` are idempotent and guarded by the running flag, so
/// calling either twice in a row is safe and has no extra effect. A tick can
/// never be observed after `stop`: [`due_ticks`](Self::due_ticks) reports zero
/// once the schedule is detached, even for time that elapsed while running.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    running: bool,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { interval: DRAW_INTERVAL, running: false, next: None }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Attaches the schedule: the first tick falls due at `now + interval`.
    ///
    /// Ignored while already running; the active interval is kept.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        if self.running {
            return;
        }
        debug_assert!(!interval.is_zero(), "Ticker::start with zero interval");
        self.interval = interval;
        self.running = true;
        self.next = Some(now + interval);
    }

    /// Detaches the schedule. Safe to call at any time, any number of times.
    pub fn stop(&mut self) {
        self.running = false;
        self.next = None;
    }

    /// Number of ticks that fell due by `now`, advancing the schedule.
    ///
    /// Capped at `MAX_CATCH_UP`; past the cap the next tick is re-anchored to
    /// `now + interval`.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let Some(mut next) = self.next else {
            return 0;
        };

        let mut due = 0;
        while next <= now {
            due += 1;
            if due >= MAX_CATCH_UP {
                log::debug!("ticker stalled, re-anchoring after {due} ticks");
                next = now + self.interval;
                break;
            }
            next += self.interval;
        }

        self.next = Some(next);
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
