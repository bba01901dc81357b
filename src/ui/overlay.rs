use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tugmath::{clock::format_time, DuelSnapshot, Phase};

use super::team_color;

/// A popup drawn over the arena between duels
pub trait Overlay {
    fn render(&self, snap: &DuelSnapshot, area: Rect, buf: &mut Buffer);
}

/// Shown before the first duel
pub struct StartOverlay;

impl Overlay for StartOverlay {
    fn render(&self, _snap: &DuelSnapshot, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Ready to Play?",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("First team to pull the rope all the way to their side wins!"),
            Line::from("Answer math problems correctly to pull."),
            Line::from(""),
            Line::from(Span::styled(
                "START GAME: press enter or any team key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        render_popup(lines, area, buf);
    }
}

/// Shown once a team reaches the win margin
pub struct WinnerOverlay;

impl Overlay for WinnerOverlay {
    fn render(&self, snap: &DuelSnapshot, area: Rect, buf: &mut Buffer) {
        let Some(winner) = snap.winner else {
            return;
        };
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(
                format!("{winner} wins!"),
                bold.fg(team_color(winner)),
            )),
            Line::from(""),
            Line::from(format!(
                "Score {}   Time {}",
                snap.players[winner].score,
                format_time(snap.elapsed_secs)
            )),
            Line::from(""),
            Line::from(Span::styled(
                "PLAY AGAIN: press enter",
                bold.fg(Color::Blue),
            )),
        ];
        render_popup(lines, area, buf);
    }
}

/// Overlay for the current phase; nothing covers the arena while playing
pub fn current_overlay(phase: Phase) -> Option<Box<dyn Overlay>> {
    match phase {
        Phase::Idle => Some(Box::new(StartOverlay)),
        Phase::Playing => None,
        Phase::Finished => Some(Box::new(WinnerOverlay)),
    }
}

fn render_popup(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    // one spare row in case a line wraps on narrow terminals
    let height = lines.len() as u16 + 3;
    let popup = centered_rect(80, height, area);

    Clear.render(popup, buf);
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}

/// Rect `percent_x` of the width and `height` rows tall, centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
