//! Event delivery between the terminal and an [`App`].
//!
//! The loop sleeps until either input arrives or the session clock's next
//! deadline passes, so an idle menu costs nothing and a running match wakes
//! once per clock period.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::{debug, warn};

use crate::{
    app::{App, Control},
    choice::Opponent,
    clock::Clock,
};

#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// The wait ran up to the clock deadline without input
    Tick,
    /// The input side hung up; no further keys can arrive
    Closed,
}

/// Receiving end of the terminal input channel
pub struct Events {
    rx: Receiver<GameEvent>,
}

impl Events {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }

    /// Forward crossterm key presses and resizes from a reader thread
    pub fn crossterm() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                // Windows reports releases too
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => GameEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self::new(rx)
    }

    /// Block until input arrives or `until_tick` elapses.
    ///
    /// With no deadline this waits for input only.
    pub fn next(&self, until_tick: Option<Duration>) -> GameEvent {
        let received = match until_tick {
            Some(wait) => self.rx.recv_timeout(wait),
            None => self.rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(evt) => evt,
            Err(RecvTimeoutError::Timeout) => GameEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => GameEvent::Closed,
        }
    }

    /// Next event for `app`, waking no later than its clock's next tick
    pub fn next_for<C: Clock, O: Opponent>(&self, app: &App<C, O>) -> GameEvent {
        self.next(app.session.until_next_tick())
    }
}

/// Apply one event to the app
pub fn dispatch<C: Clock, O: Opponent>(app: &mut App<C, O>, event: GameEvent) -> Control {
    match event {
        GameEvent::Key(key) => app.on_key(key),
        GameEvent::Tick => {
            app.on_tick();
            Control::Continue
        }
        GameEvent::Resize => Control::Continue,
        GameEvent::Closed => {
            debug!("input closed");
            Control::Quit
        }
    }
}
