use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{ConfirmKind, PromptState},
    session::{GameSummary, Mode},
};

/// Rect of `width` x `height` centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn dialog(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

pub fn render_prompt(prompt: &PromptState, f: &mut Frame) {
    let title = match prompt.mode {
        Mode::Timed => "Game Duration",
        Mode::RoundLimited => "Number of Rounds",
    };
    let range = prompt.mode.param_range();

    let mut lines = vec![
        Line::from(prompt.mode.param_prompt()),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(
                prompt.input.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(Span::styled(
            format!(
                "Range: {}-{} (default {})",
                range.start(),
                range.end(),
                prompt.mode.default_param()
            ),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    if let Some(error) = &prompt.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "(enter) start | ↑/↓ adjust | (esc) cancel",
        Style::default().add_modifier(Modifier::ITALIC),
    )));

    let area = centered_rect(60, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(dialog(title))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_confirm(kind: ConfirmKind, f: &mut Frame) {
    let lines = vec![
        Line::from(kind.question()),
        Line::from(""),
        Line::from(Span::styled(
            "(y)es | (n)o",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    let area = centered_rect(50, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(dialog(kind.title()))
            .alignment(Alignment::Center),
        area,
    );
}

pub fn render_game_over(summary: &GameSummary, f: &mut Frame) {
    let text = summary.to_string();
    let mut lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_owned())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "press any key to continue",
        Style::default().add_modifier(Modifier::ITALIC),
    )));

    let area = centered_rect(40, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(dialog("Game Over"))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 10, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 20, 4);
        assert_eq!(centered_rect(40, 10, area), Rect::new(5, 5, 20, 4));
    }
}
