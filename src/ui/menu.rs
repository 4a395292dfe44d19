use crate::config::Difficulty;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Start menu: title, difficulty selection, and start/quit hints.
pub fn render_start(frame: &mut Frame, difficulty: Difficulty) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title
            Constraint::Length(4), // Difficulty
            Constraint::Min(3),    // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connect 4",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Play against the computer"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut options = vec![Span::raw("Select Difficulty:  ")];
    for (i, level) in Difficulty::ALL.iter().enumerate() {
        if i > 0 {
            options.push(Span::raw("   "));
        }
        let label = level.to_string().to_uppercase();
        if *level == difficulty {
            options.push(Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            options.push(Span::raw(format!("  {label}  ")));
        }
    }

    let selector = Paragraph::new(vec![Line::from(""), Line::from(options)])
        .alignment(Alignment::Center);
    frame.render_widget(selector, chunks[1]);

    let hints = Paragraph::new("←/→: Difficulty  |  Enter: Start Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);
}

/// Pause overlay drawn on top of the game screen.
pub fn render_pause(frame: &mut Frame) {
    let area = centered_rect(40, 7, frame.area());
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "Game Paused",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("P: Resume   R: Restart   M: Menu"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

/// End-of-game overlay announcing the winner (or a draw).
pub fn render_game_over(frame: &mut Frame, winner_text: &str) {
    let area = centered_rect(40, 7, frame.area());
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            winner_text.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("R: Play Again   M: Back to Menu"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
