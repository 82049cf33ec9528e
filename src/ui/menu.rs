use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::{app::App, choice::Opponent, clock::Clock, session::Mode};

/// Mode picker shown before a session and after it ends
pub fn render_mode_select<C: Clock, O: Opponent>(app: &App<C, O>, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(1),    // padding
            Constraint::Length(5), // time mode
            Constraint::Length(1), // gap
            Constraint::Length(5), // rounds mode
            Constraint::Min(1),    // padding
            Constraint::Length(1), // instructions
        ])
        .split(f.area());

    let title = Paragraph::new("Rock, Paper, Scissors")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    for (mode, key, area) in [
        (Mode::Timed, 't', chunks[2]),
        (Mode::RoundLimited, 'r', chunks[4]),
    ] {
        let selected = app.selected_mode == mode;
        let style = if selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Green)
        };
        let button = Paragraph::new(format!("\n{mode} ({key})"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(button, area);
    }

    let instructions = Paragraph::new("(t)ime | (r)ounds | ↑/↓ select | (enter) start | (q)uit")
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[6]);
}
