pub mod menu;
pub mod popup;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
    Frame,
};

use crate::{
    app::{App, AppState},
    art,
    choice::{Choice, Opponent, Outcome},
    clock::Clock,
    session::{Mode, SessionView, Throw},
    util::format_clock,
};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

pub fn draw<C: Clock, O: Opponent>(app: &App<C, O>, f: &mut Frame) {
    let area = f.area();
    match app.state {
        AppState::ModeSelect => menu::render_mode_select(app, f),
        AppState::Prompt => {
            menu::render_mode_select(app, f);
            if let Some(prompt) = &app.prompt {
                popup::render_prompt(prompt, f);
            }
        }
        AppState::Playing => f.render_widget(app, area),
        AppState::Confirm(kind) => {
            match app.confirm_return() {
                AppState::Playing => f.render_widget(app, area),
                _ => menu::render_mode_select(app, f),
            }
            popup::render_confirm(kind, f);
        }
        AppState::GameOver => {
            menu::render_mode_select(app, f);
            if let Some(summary) = &app.summary {
                popup::render_game_over(summary, f);
            }
        }
    }
}

/// One-line description of a throw for the result banner
pub fn describe(throw: &Throw) -> String {
    match throw.outcome {
        Outcome::UserWin => format!("You win! {} beats {}.", throw.user, throw.computer),
        Outcome::ComputerWin => {
            format!("Computer wins! {} beats {}.", throw.computer, throw.user)
        }
        Outcome::Tie => format!("Tie! Both chose {}.", throw.user),
    }
}

pub fn status_line(view: &SessionView) -> String {
    match view.mode {
        Some(Mode::Timed) => format!("Time left: {}", format_clock(view.remaining_seconds)),
        Some(Mode::RoundLimited) => format!("Rounds left: {}", view.remaining_rounds),
        None => String::new(),
    }
}

pub fn score_line(view: &SessionView) -> String {
    format!(
        "Score - You: {} | Computer: {}",
        view.user_score, view.computer_score
    )
}

/// `(r)ock (p)aper (s)cissors`
pub fn throw_legend() -> String {
    Choice::ALL
        .iter()
        .map(|c| {
            let name = c.to_string();
            format!("({}){}", name[..1].to_lowercase(), &name[1..])
        })
        .join(" ")
}

fn hand_widget<'a>(title: &'a str, choice: Option<Choice>, mirrored: bool) -> Paragraph<'a> {
    let mut lines: Vec<Line> = match choice {
        Some(c) => {
            let art = if mirrored {
                art::mirrored_hand(c)
            } else {
                art::hand(c)
            };
            art.into_iter().map(Line::from).collect()
        }
        None => vec![Line::from("?")],
    };
    lines.push(Line::from(""));
    if let Some(c) = choice {
        lines.push(Line::from(format!("{} {}", c.symbol(), c)));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title))
}

impl<C: Clock, O: Opponent> Widget for &App<C, O> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.session.view();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // result
                Constraint::Length(1), // score
                Constraint::Min(8),    // hands
                Constraint::Length(1), // time or rounds left
                Constraint::Length(1), // progress
                Constraint::Length(1), // padding
                Constraint::Length(1), // legend
            ])
            .split(area);

        let result = match &view.last_throw {
            Some(throw) => {
                let color = match throw.outcome {
                    Outcome::UserWin => Color::Green,
                    Outcome::ComputerWin => Color::Red,
                    Outcome::Tie => Color::Yellow,
                };
                Span::styled(describe(throw), bold_style.fg(color))
            }
            None => Span::styled("Make your throw!", dim_style),
        };
        Paragraph::new(result)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(score_line(&view), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let hands = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(10),
                Constraint::Percentage(45),
            ])
            .split(chunks[2]);

        let last = view.last_throw.as_ref();
        hand_widget("You", last.map(|t| t.user), false).render(hands[0], buf);
        hand_widget("Computer", last.map(|t| t.computer), true).render(hands[2], buf);

        let vs_area = Rect {
            y: hands[1].y + hands[1].height / 2,
            height: 1,
            ..hands[1]
        };
        Paragraph::new(Span::styled("VS", bold_style.fg(Color::Red)))
            .alignment(Alignment::Center)
            .render(vs_area, buf);

        let status = if view.paused {
            Span::styled(
                format!("PAUSED - {}", status_line(&view)),
                bold_style.fg(Color::Yellow),
            )
        } else {
            Span::styled(status_line(&view), bold_style)
        };
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .percent(view.progress.min(100))
            .render(chunks[4], buf);

        let pause_hint = if view.paused { "resume" } else { "pause" };
        let legend = format!(
            "{} | (space) {} | (x) reset | (q)uit",
            throw_legend(),
            pause_hint
        );
        Paragraph::new(Span::styled(
            legend,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::ConfirmKind,
        choice::ScriptedOpponent,
        clock::ManualClock,
        config::{Config, MemoryConfigStore},
        session::GameSession,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn app(script: &[Choice]) -> App<ManualClock, ScriptedOpponent> {
        let session =
            GameSession::with_parts(ManualClock::new(), ScriptedOpponent::new(script.to_vec()));
        App::with_session(session, Config::default(), Box::new(MemoryConfigStore))
    }

    fn render(app: &App<ManualClock, ScriptedOpponent>) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_describe() {
        let mut s = GameSession::with_parts(
            ManualClock::new(),
            ScriptedOpponent::new([Choice::Scissors, Choice::Paper, Choice::Rock]),
        );
        s.start(Mode::RoundLimited, 5).unwrap();

        let mut next = |user| {
            s.throw(user).unwrap();
            describe(&s.view().last_throw.unwrap())
        };
        assert_eq!(next(Choice::Rock), "You win! Rock beats Scissors.");
        assert_eq!(next(Choice::Rock), "Computer wins! Paper beats Rock.");
        assert_eq!(next(Choice::Rock), "Tie! Both chose Rock.");
    }

    #[test]
    fn test_throw_legend() {
        assert_eq!(throw_legend(), "(r)ock (p)aper (s)cissors");
    }

    #[test]
    fn test_status_line() {
        let mut s =
            GameSession::with_parts(ManualClock::new(), ScriptedOpponent::new(Vec::<Choice>::new()));
        s.start(Mode::Timed, 3).unwrap();
        assert_eq!(status_line(&s.view()), "Time left: 3m 00s");
        s.start(Mode::RoundLimited, 4).unwrap();
        assert_eq!(status_line(&s.view()), "Rounds left: 4");
    }

    #[test]
    fn test_render_mode_select() {
        let content = render(&app(&[]));
        assert!(content.contains("Time Mode"));
        assert!(content.contains("Rounds Mode"));
    }

    #[test]
    fn test_render_prompt() {
        let mut app = app(&[]);
        app.choose_mode(Mode::Timed);
        let content = render(&app);
        assert!(content.contains("Game Duration"));
        assert!(content.contains("1-60"));
    }

    #[test]
    fn test_render_playing_after_throw() {
        let mut app = app(&[Choice::Scissors]);
        app.choose_mode(Mode::Timed);
        app.submit_prompt();
        app.play(Choice::Rock);

        let content = render(&app);
        assert!(content.contains("Score - You: 1 | Computer: 0"));
        assert!(content.contains("You win!"));
        assert!(content.contains("Time left: 3m 00s"));
        assert!(content.contains("VS"));
    }

    #[test]
    fn test_restart_clears_the_result_banner() {
        let mut app = app(&[Choice::Scissors]);
        app.choose_mode(Mode::Timed);
        app.submit_prompt();
        app.play(Choice::Rock);
        assert!(render(&app).contains("You win!"));

        app.choose_mode(Mode::RoundLimited);
        app.submit_prompt();
        let content = render(&app);
        assert!(content.contains("Make your throw!"));
        assert!(!content.contains("You win!"));
        assert!(content.contains("Score - You: 0 | Computer: 0"));
    }

    #[test]
    fn test_render_paused() {
        let mut app = app(&[]);
        app.choose_mode(Mode::RoundLimited);
        app.submit_prompt();
        app.session.pause();

        let content = render(&app);
        assert!(content.contains("PAUSED - Rounds left: 5"));
        assert!(content.contains("(space) resume"));
    }

    #[test]
    fn test_render_confirm_over_board() {
        let mut app = app(&[]);
        app.choose_mode(Mode::RoundLimited);
        app.submit_prompt();
        app.state = AppState::Confirm(ConfirmKind::Reset);

        let content = render(&app);
        assert!(content.contains("Are you sure you want to reset?"));
    }

    #[test]
    fn test_render_game_over() {
        let mut app = app(&[Choice::Scissors]);
        app.choose_mode(Mode::RoundLimited);
        app.prompt.as_mut().unwrap().input = "1".to_string();
        app.submit_prompt();
        app.play(Choice::Rock);

        assert_eq!(app.state, AppState::GameOver);
        let content = render(&app);
        assert!(content.contains("Winner: You!"));
    }
}
