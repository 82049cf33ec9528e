use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use tracing::{debug, info};

use crate::choice::{resolve, Choice, Opponent, Outcome, RandomOpponent};
use crate::clock::{Clock, IntervalClock};
use crate::error::SessionError;
use crate::util::progress_percent;

pub const MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
pub const DEFAULT_MINUTES: u32 = 3;
pub const ROUNDS_RANGE: RangeInclusive<u32> = 1..=50;
pub const DEFAULT_ROUNDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Mode {
    #[strum(to_string = "Time Mode")]
    Timed,
    #[strum(to_string = "Rounds Mode")]
    RoundLimited,
}

impl Mode {
    /// Accepted values for the start parameter (minutes or rounds)
    pub fn param_range(self) -> RangeInclusive<u32> {
        match self {
            Mode::Timed => MINUTES_RANGE,
            Mode::RoundLimited => ROUNDS_RANGE,
        }
    }

    pub fn default_param(self) -> u32 {
        match self {
            Mode::Timed => DEFAULT_MINUTES,
            Mode::RoundLimited => DEFAULT_ROUNDS,
        }
    }

    pub fn param_prompt(self) -> &'static str {
        match self {
            Mode::Timed => "Enter game duration (minutes):",
            Mode::RoundLimited => "Enter number of rounds:",
        }
    }
}

/// A single scored exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub user: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    User,
    Computer,
    Tie,
    NoContest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub mode: Option<Mode>,
    pub user_score: u32,
    pub computer_score: u32,
    /// Seconds or rounds left when the session ended
    pub remaining: u32,
    pub verdict: Verdict,
}

impl GameSummary {
    fn from_state(state: &SessionState) -> Self {
        let verdict = match (state.user_score, state.computer_score) {
            (0, 0) => Verdict::NoContest,
            (u, c) if u > c => Verdict::User,
            (u, c) if c > u => Verdict::Computer,
            _ => Verdict::Tie,
        };
        let remaining = match state.mode {
            Some(Mode::Timed) => state.remaining_seconds,
            Some(Mode::RoundLimited) => state.remaining_rounds,
            None => 0,
        };

        Self {
            mode: state.mode,
            user_score: state.user_score,
            computer_score: state.computer_score,
            remaining,
            verdict,
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verdict == Verdict::NoContest {
            return write!(f, "Game Over!\nNo scores recorded.");
        }

        writeln!(f, "Game Over!")?;
        writeln!(f, "Final Score:")?;
        writeln!(f, "You: {}", self.user_score)?;
        writeln!(f, "Computer: {}", self.computer_score)?;
        match self.verdict {
            Verdict::User => write!(f, "Winner: You!"),
            Verdict::Computer => write!(f, "Winner: Computer!"),
            _ => write!(f, "It's a tie!"),
        }
    }
}

/// Returned by an accepted throw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowOutcome {
    pub user: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
    pub user_score: u32,
    pub computer_score: u32,
    /// Set when this throw met the stop condition and ended the session
    pub summary: Option<GameSummary>,
}

/// Everything mutable about a session. `Default` is the not-yet-started shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub mode: Option<Mode>,
    pub user_score: u32,
    pub computer_score: u32,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub remaining_rounds: u32,
    pub total_rounds: u32,
    pub running: bool,
    pub last_throw: Option<Throw>,
}

impl SessionState {
    fn stop_condition_met(&self) -> bool {
        match self.mode {
            Some(Mode::Timed) => self.remaining_seconds == 0,
            Some(Mode::RoundLimited) => self.remaining_rounds == 0,
            None => false,
        }
    }
}

/// Render-ready snapshot of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub mode: Option<Mode>,
    pub user_score: u32,
    pub computer_score: u32,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub remaining_rounds: u32,
    pub total_rounds: u32,
    pub running: bool,
    pub paused: bool,
    pub progress: u16,
    pub last_throw: Option<Throw>,
}

/// Game session state machine: not started → running ⇄ paused → ended.
///
/// All transitions happen on the caller's thread. A timed session owns its
/// clock: `start`/`resume` arm it and `pause`/`reset`/`end` disarm it.
#[derive(Debug)]
pub struct GameSession<C: Clock = IntervalClock, O: Opponent = RandomOpponent> {
    state: SessionState,
    clock: C,
    opponent: O,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_parts(IntervalClock::default(), RandomOpponent)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, O: Opponent> GameSession<C, O> {
    pub fn with_parts(clock: C, opponent: O) -> Self {
        Self {
            state: SessionState::default(),
            clock,
            opponent,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn mode(&self) -> Option<Mode> {
        self.state.mode
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_paused(&self) -> bool {
        self.state.mode.is_some() && !self.state.running
    }

    pub fn start(&mut self, mode: Mode, param: u32) -> Result<SessionView, SessionError> {
        let range = mode.param_range();
        if !range.contains(&param) {
            debug!(%mode, param, "start rejected");
            return Err(SessionError::StartRejected {
                mode,
                value: param,
                min: *range.start(),
                max: *range.end(),
            });
        }

        self.clock.disarm();
        self.state = SessionState {
            mode: Some(mode),
            running: true,
            ..SessionState::default()
        };

        match mode {
            Mode::Timed => {
                self.state.remaining_seconds = param * 60;
                self.state.total_seconds = param * 60;
                self.clock.arm();
            }
            Mode::RoundLimited => {
                self.state.remaining_rounds = param;
                self.state.total_rounds = param;
            }
        }

        info!(%mode, param, "session started");
        Ok(self.view())
    }

    pub fn throw(&mut self, user: Choice) -> Result<ThrowOutcome, SessionError> {
        if !self.state.running {
            debug!(%user, "throw rejected, session not running");
            return Err(SessionError::ThrowRejected);
        }

        let computer = self.opponent.pick();
        let outcome = resolve(user, computer);
        match outcome {
            Outcome::UserWin => self.state.user_score += 1,
            Outcome::ComputerWin => self.state.computer_score += 1,
            Outcome::Tie => {}
        }

        if self.state.mode == Some(Mode::RoundLimited) {
            debug_assert!(self.state.remaining_rounds > 0);
            self.state.remaining_rounds = self.state.remaining_rounds.saturating_sub(1);
        }

        self.state.last_throw = Some(Throw {
            user,
            computer,
            outcome,
        });
        debug!(%user, %computer, %outcome, "throw scored");

        let user_score = self.state.user_score;
        let computer_score = self.state.computer_score;
        let summary = if self.state.stop_condition_met() {
            Some(self.end())
        } else {
            None
        };

        Ok(ThrowOutcome {
            user,
            computer,
            outcome,
            user_score,
            computer_score,
            summary,
        })
    }

    /// One clock period elapsed. Ignored unless a timed session is running.
    pub fn tick(&mut self) -> Option<GameSummary> {
        if self.state.mode != Some(Mode::Timed) || !self.state.running {
            return None;
        }

        debug_assert!(self.state.remaining_seconds <= self.state.total_seconds);
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }

        if self.state.stop_condition_met() {
            Some(self.end())
        } else {
            None
        }
    }

    /// Apply every tick the clock reports as due, stopping at the end of the session
    pub fn pump(&mut self) -> Option<GameSummary> {
        let due = self.clock.due_ticks();
        for _ in 0..due {
            if let Some(summary) = self.tick() {
                return Some(summary);
            }
        }
        None
    }

    /// Time until `pump` has work; `None` while no clock is running
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.clock.until_next_tick()
    }

    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.clock.disarm();
        self.state.running = false;
        info!("session paused");
    }

    pub fn resume(&mut self) {
        let Some(mode) = self.state.mode else {
            return;
        };
        if self.state.running {
            return;
        }
        if mode == Mode::Timed {
            self.clock.arm();
        }
        self.state.running = true;
        info!("session resumed");
    }

    pub fn toggle_pause(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn reset(&mut self) {
        self.clock.disarm();
        self.state = SessionState::default();
        info!("session reset");
    }

    pub fn end(&mut self) -> GameSummary {
        self.clock.disarm();
        self.state.running = false;
        let summary = GameSummary::from_state(&self.state);
        self.state = SessionState::default();

        info!(
            user = summary.user_score,
            computer = summary.computer_score,
            verdict = ?summary.verdict,
            "session ended"
        );
        summary
    }

    pub fn view(&self) -> SessionView {
        let s = &self.state;
        let progress = match s.mode {
            Some(Mode::Timed) => progress_percent(s.remaining_seconds, s.total_seconds),
            Some(Mode::RoundLimited) => progress_percent(s.remaining_rounds, s.total_rounds),
            None => 0,
        };

        SessionView {
            mode: s.mode,
            user_score: s.user_score,
            computer_score: s.computer_score,
            remaining_seconds: s.remaining_seconds,
            total_seconds: s.total_seconds,
            remaining_rounds: s.remaining_rounds,
            total_rounds: s.total_rounds,
            running: s.running,
            paused: self.is_paused(),
            progress,
            last_throw: s.last_throw,
        }
    }
}
