use std::time::{Duration, Instant};

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable periodic tick source driving a timed session.
///
/// The session arms the clock when a timed match starts or resumes and
/// disarms it on pause, reset and end. A disarmed clock never reports due
/// ticks, so cancellation takes effect as soon as `disarm` returns.
pub trait Clock {
    /// Start ticking. Arming an armed clock does nothing.
    fn arm(&mut self);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
    /// Number of whole periods elapsed since the last call
    fn due_ticks(&mut self) -> u32;
    /// How long until `due_ticks` reports something; `None` when nothing is scheduled
    fn until_next_tick(&self) -> Option<Duration>;
}

/// Wall-clock ticker firing once per `period`
#[derive(Debug, Clone)]
pub struct IntervalClock {
    period: Duration,
    next_deadline: Option<Instant>,
    arm_count: u32,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: None,
            arm_count: 0,
        }
    }

    /// How many times the clock went from disarmed to armed
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }

    fn arm_at(&mut self, now: Instant) {
        if self.next_deadline.is_none() {
            self.next_deadline = Some(now + self.period);
            self.arm_count += 1;
        }
    }

    fn due_ticks_at(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_deadline else {
            return 0;
        };

        let mut due = 0;
        while now >= deadline {
            due += 1;
            deadline += self.period;
        }
        self.next_deadline = Some(deadline);
        due
    }

    fn until_next_tick_at(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new(CLOCK_PERIOD)
    }
}

impl Clock for IntervalClock {
    fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    fn disarm(&mut self) {
        self.next_deadline = None;
    }

    fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        self.due_ticks_at(Instant::now())
    }

    fn until_next_tick(&self) -> Option<Duration> {
        self.until_next_tick_at(Instant::now())
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    armed: bool,
    pending: u32,
    arm_count: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `n` ticks; ignored while disarmed
    pub fn advance(&mut self, n: u32) {
        if self.armed {
            self.pending += n;
        }
    }

    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }
}

impl Clock for ManualClock {
    fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.arm_count += 1;
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.pending = 0;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }

    /// Queued ticks are due now; otherwise nothing is scheduled until `advance`
    fn until_next_tick(&self) -> Option<Duration> {
        (self.pending > 0).then_some(Duration::ZERO)
    }
}
