pub mod overlay;
pub mod panel;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tugmath::{clock::format_time, rope, DuelSnapshot, Phase, Player};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 2;

pub const ROPE_COLOR: Color = Color::Rgb(139, 69, 19);

pub fn team_color(player: Player) -> Color {
    match player {
        Player::A => Color::Blue,
        Player::B => Color::Red,
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.duel.snapshot();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(3), // scoreboard
                Constraint::Length(4), // rope
                Constraint::Min(9),    // player panels
                Constraint::Length(1), // legend
            ])
            .split(area);

        render_scoreboard(&snap, chunks[0], buf);
        render_rope(&snap, chunks[1], buf);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        for (player, half) in Player::ALL.into_iter().zip(halves.iter()) {
            panel::render_player_panel(&snap, player, self.keymap.layout(player), *half, buf);
        }

        let legend = Paragraph::new(Span::styled(
            match snap.phase {
                Phase::Playing => "(esc)ape",
                Phase::Idle | Phase::Finished => "(enter) start / (esc)ape",
            },
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        legend.render(chunks[3], buf);

        if let Some(overlay) = overlay::current_overlay(snap.phase) {
            overlay.render(&snap, area, buf);
        }
    }
}

fn render_scoreboard(snap: &DuelSnapshot, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let score_a = format!("{}  {}", Player::A, snap.players[Player::A].score);
    let score_b = format!("{}  {}", snap.players[Player::B].score, Player::B);

    Paragraph::new(Span::styled(score_a, bold.fg(team_color(Player::A))))
        .alignment(Alignment::Left)
        .render(cols[0], buf);
    Paragraph::new(Span::styled(format_time(snap.elapsed_secs), bold))
        .alignment(Alignment::Center)
        .render(cols[1], buf);
    Paragraph::new(Span::styled(score_b, bold.fg(team_color(Player::B))))
        .alignment(Alignment::Right)
        .render(cols[2], buf);
}

fn render_rope(snap: &DuelSnapshot, area: Rect, buf: &mut Buffer) {
    if area.width < 12 || area.height < 4 {
        return;
    }
    let width = area.width;
    let center = rope::marker_column(rope::CENTER_PERCENT, width);
    let marker = rope::marker_column(snap.marker_percent, width);
    let gap = (width / 12).max(2);

    let dashed = Style::default().fg(Color::Gray);
    buf.set_string(area.x + center, area.y, "┆", dashed);
    buf.set_string(area.x + center, area.y + 3, "┆", dashed);

    // pullers stand on either side of the marker, leaning when ahead
    let leader = match snap.marker_percent {
        p if p < rope::CENTER_PERCENT => Some(Player::A),
        p if p > rope::CENTER_PERCENT => Some(Player::B),
        _ => None,
    };
    for player in Player::ALL {
        let figure = if leader == Some(player) {
            match player {
                Player::A => "\\o \\o",
                Player::B => "o/ o/",
            }
        } else {
            "o  o"
        };
        let fig_width = figure.width() as u16;
        let x = match player {
            Player::A => marker.saturating_sub(gap + fig_width),
            Player::B => (marker + gap + 1).min(width.saturating_sub(fig_width)),
        };
        let style = Style::default()
            .fg(team_color(player))
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + x, area.y + 1, figure, style);
    }

    let rope_line = "━".repeat(width as usize);
    buf.set_string(area.x, area.y + 2, rope_line, Style::default().fg(ROPE_COLOR));
    buf.set_string(
        area.x + marker,
        area.y + 2,
        "█",
        Style::default().fg(Color::Red),
    );
}
