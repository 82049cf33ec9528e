use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::{
    choice::{Choice, Opponent, RandomOpponent},
    clock::{Clock, IntervalClock},
    config::{Config, ConfigStore},
    session::{GameSession, GameSummary, Mode},
};

/// Longest number the duration prompt accepts as typed input
const PROMPT_MAX_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Reset,
    Quit,
}

impl ConfirmKind {
    pub fn title(self) -> &'static str {
        match self {
            ConfirmKind::Reset => "Reset Game",
            ConfirmKind::Quit => "Quit Game",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            ConfirmKind::Reset => "Are you sure you want to reset?",
            ConfirmKind::Quit => "Are you sure you want to quit?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    ModeSelect,
    Prompt,
    Playing,
    Confirm(ConfirmKind),
    GameOver,
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub mode: Mode,
    pub input: String,
    pub error: Option<String>,
}

impl PromptState {
    fn new(mode: Mode, default: u32) -> Self {
        Self {
            mode,
            input: default.to_string(),
            error: None,
        }
    }

    fn step(&mut self, up: bool) {
        let range = self.mode.param_range();
        let current = self.input.parse::<u32>().unwrap_or(*range.start());
        let next = if up {
            current.saturating_add(1)
        } else {
            current.saturating_sub(1)
        };
        self.input = next.clamp(*range.start(), *range.end()).to_string();
        self.error = None;
    }
}

/// Terminal adapter around a [`GameSession`]: turns key presses into session
/// intents and keeps the bits of screen state the session does not own.
pub struct App<C: Clock = IntervalClock, O: Opponent = RandomOpponent> {
    pub session: GameSession<C, O>,
    pub state: AppState,
    pub selected_mode: Mode,
    pub prompt: Option<PromptState>,
    pub summary: Option<GameSummary>,
    pub config: Config,
    confirm_return: AppState,
    store: Box<dyn ConfigStore>,
}

impl App {
    pub fn new(config: Config, store: Box<dyn ConfigStore>) -> Self {
        Self::with_session(GameSession::new(), config, store)
    }
}

impl<C: Clock, O: Opponent> App<C, O> {
    pub fn with_session(
        session: GameSession<C, O>,
        config: Config,
        store: Box<dyn ConfigStore>,
    ) -> Self {
        Self {
            session,
            state: AppState::ModeSelect,
            selected_mode: Mode::Timed,
            prompt: None,
            summary: None,
            config,
            confirm_return: AppState::ModeSelect,
            store,
        }
    }

    /// Screen shown underneath an open confirmation dialog
    pub fn confirm_return(&self) -> AppState {
        self.confirm_return
    }

    /// Deliver due clock ticks; called on every runner tick regardless of screen
    pub fn on_tick(&mut self) {
        if let Some(summary) = self.session.pump() {
            self.finish(summary);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.state {
            AppState::ModeSelect => self.on_mode_select_key(key),
            AppState::Prompt => self.on_prompt_key(key),
            AppState::Playing => self.on_playing_key(key),
            AppState::Confirm(kind) => return self.on_confirm_key(kind, key),
            AppState::GameOver => self.back_to_mode_select(),
        }
        Control::Continue
    }

    fn on_mode_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') | KeyCode::Char('T') => self.choose_mode(Mode::Timed),
            KeyCode::Char('r') | KeyCode::Char('R') => self.choose_mode(Mode::RoundLimited),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected_mode = match self.selected_mode {
                    Mode::Timed => Mode::RoundLimited,
                    Mode::RoundLimited => Mode::Timed,
                };
            }
            KeyCode::Enter => self.choose_mode(self.selected_mode),
            KeyCode::Char('q') | KeyCode::Esc => self.ask(ConfirmKind::Quit),
            _ => {}
        }
    }

    fn on_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            self.state = AppState::ModeSelect;
            return;
        };

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if prompt.input.len() < PROMPT_MAX_DIGITS {
                    prompt.input.push(c);
                }
                prompt.error = None;
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                prompt.error = None;
            }
            KeyCode::Up => prompt.step(true),
            KeyCode::Down => prompt.step(false),
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Esc => self.back_to_mode_select(),
            _ => {}
        }
    }

    fn on_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.session.toggle_pause(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.ask(ConfirmKind::Reset),
            KeyCode::Char('q') | KeyCode::Esc => self.ask(ConfirmKind::Quit),
            KeyCode::Char(c) => {
                if let Some(choice) = Choice::from_key(c) {
                    self.play(choice);
                }
            }
            _ => {}
        }
    }

    fn on_confirm_key(&mut self, kind: ConfirmKind, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => match kind {
                ConfirmKind::Quit => return Control::Quit,
                ConfirmKind::Reset => {
                    self.session.reset();
                    self.back_to_mode_select();
                }
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = self.confirm_return;
            }
            _ => {}
        }
        Control::Continue
    }

    /// Open the duration prompt for `mode`, pre-filled with the stored default
    pub fn choose_mode(&mut self, mode: Mode) {
        self.selected_mode = mode;
        self.prompt = Some(PromptState::new(mode, self.config.default_for(mode)));
        self.state = AppState::Prompt;
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        let Ok(param) = prompt.input.parse::<u32>() else {
            prompt.error = Some("Please enter a whole number".to_string());
            return;
        };

        match self.session.start(prompt.mode, param) {
            Ok(_) => {
                let mode = prompt.mode;
                self.prompt = None;
                self.summary = None;
                self.state = AppState::Playing;

                self.config.remember(mode, param);
                if let Err(e) = self.store.save(&self.config) {
                    warn!(error = %e, "could not save preferences");
                }
            }
            Err(e) => prompt.error = Some(e.to_string()),
        }
    }

    pub fn play(&mut self, choice: Choice) {
        match self.session.throw(choice) {
            Ok(outcome) => {
                if let Some(summary) = outcome.summary {
                    self.finish(summary);
                }
            }
            Err(e) => debug!(error = %e, "throw ignored"),
        }
    }

    fn ask(&mut self, kind: ConfirmKind) {
        self.confirm_return = self.state;
        self.state = AppState::Confirm(kind);
    }

    fn finish(&mut self, summary: GameSummary) {
        self.summary = Some(summary);
        self.state = AppState::GameOver;
    }

    fn back_to_mode_select(&mut self) {
        self.prompt = None;
        self.state = AppState::ModeSelect;
    }
}
