use thiserror::Error;

use crate::session::Mode;

/// Intents the session refuses. Neither is fatal; the caller decides
/// whether to re-prompt or drop the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{mode} needs a value between {min} and {max}, got {value}")]
    StartRejected {
        mode: Mode,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("no session is running")]
    ThrowRejected,
}
