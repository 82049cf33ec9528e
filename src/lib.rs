// Library surface for headless/integration tests and reuse.
// The binary only adds the CLI and terminal setup on top of this.
pub mod app;
pub mod app_dirs;
pub mod art;
pub mod choice;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;
