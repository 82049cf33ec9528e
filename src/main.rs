use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use roshambo::{
    app::{App, Control},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{self, Events},
    session::Mode,
    ui,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::{info, warn};

/// rock, paper, scissors in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Rock, paper, scissors against the computer, either against the clock or for a fixed number of rounds."
)]
pub struct Cli {
    /// default game duration in minutes for time mode
    #[clap(short = 'm', long, value_parser = clap::value_parser!(u32).range(1..=60))]
    minutes: Option<u32>,

    /// default number of rounds for rounds mode
    #[clap(short = 'r', long, value_parser = clap::value_parser!(u32).range(1..=50))]
    rounds: Option<u32>,

    /// skip the mode menu and go straight to the duration prompt
    #[clap(long, value_enum)]
    mode: Option<CliMode>,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CliMode {
    Timed,
    Rounds,
}

impl From<CliMode> for Mode {
    fn from(m: CliMode) -> Self {
        match m {
            CliMode::Timed => Mode::Timed,
            CliMode::Rounds => Mode::RoundLimited,
        }
    }
}

impl Cli {
    /// Stored preferences with command line overrides applied
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(minutes) = self.minutes {
            config.default_minutes = minutes;
        }
        if let Some(rounds) = self.rounds {
            config.default_rounds = rounds;
        }
        config
    }
}

fn build_app(cli: &Cli, store: FileConfigStore) -> App {
    let config = cli.apply_to(store.load());
    let mut app = App::new(config, Box::new(store));
    if let Some(mode) = cli.mode {
        app.choose_mode(mode.into());
    }
    app
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(e) = logging::init_file_logging(&path) {
            eprintln!("logging disabled: {e}");
        }
    }

    let store = FileConfigStore::new();
    info!(config = %store.path().display(), "starting");
    let mut app = build_app(&cli, store);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!(error = %e, "event loop failed");
    }
    info!("exiting");
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = Events::crossterm();

    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let event = events.next_for(app);
        if runtime::dispatch(app, event) == Control::Quit {
            break;
        }
        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}
