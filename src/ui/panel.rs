use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tugmath::{keys::KeyLayout, DuelSnapshot, Player};

use super::team_color;

const CURSOR: &str = "_";

/// One player's side of the screen: problem, typed answer, feedback and keypad legend
pub fn render_player_panel(
    snap: &DuelSnapshot,
    player: Player,
    layout: &KeyLayout,
    area: Rect,
    buf: &mut Buffer,
) {
    let view = &snap.players[player];
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let border_color = if view.success {
        Color::Green
    } else if view.error {
        Color::Red
    } else {
        team_color(player)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            player.to_string(),
            bold.fg(team_color(player)),
        ));

    let answer = if view.input.is_empty() {
        Span::styled(CURSOR, bold.add_modifier(Modifier::DIM))
    } else if view.success {
        Span::styled(view.input.clone(), bold.fg(Color::Green))
    } else {
        Span::styled(view.input.clone(), bold)
    };

    let feedback = if view.success {
        Span::styled("✓ correct!", bold.fg(Color::Green))
    } else if view.error {
        Span::styled("✗ try again", bold.fg(Color::Red))
    } else {
        Span::raw("")
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", view.problem), bold),
            answer,
        ]),
        Line::from(feedback),
        Line::from(""),
    ];

    let key_style = Style::default().fg(Color::DarkGray);
    for row in layout.rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (key, label) in row {
            let label_style = match label {
                "X" => bold.fg(Color::Red),
                "V" => bold.fg(Color::Blue),
                _ => bold,
            };
            spans.push(Span::styled(format!("{label:>2}"), label_style));
            spans.push(Span::styled(format!(" [{key}]  "), key_style));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tugmath::{config::Config, Duel, KeyToken, Keymap};

    fn rendered(duel: &Duel, player: Player) -> String {
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        render_player_panel(
            &duel.snapshot(),
            player,
            Keymap::default().layout(player),
            area,
            &mut buffer,
        );
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn playing() -> Duel {
        let settings = Config::default().duel_settings().unwrap();
        let mut duel = Duel::with_seed(settings, 3);
        duel.start();
        duel
    }

    #[test]
    fn test_panel_shows_cursor_when_empty() {
        let duel = playing();
        let out = rendered(&duel, Player::A);
        assert!(out.contains("Team 1"));
        assert!(out.contains(&format!("{} _", duel.player(Player::A).problem)));
    }

    #[test]
    fn test_panel_shows_keypad_bindings() {
        let duel = playing();
        let out = rendered(&duel, Player::B);
        assert!(out.contains(" 1 [8]"));
        assert!(out.contains(" V [/]"));
    }

    #[test]
    fn test_panel_feedback() {
        let mut duel = playing();
        duel.on_key(Player::A, KeyToken::Digit(0));
        duel.on_key(Player::A, KeyToken::Submit);
        assert!(rendered(&duel, Player::A).contains("try again"));

        let sum = duel.player(Player::B).problem.sum;
        for c in sum.to_string().chars() {
            duel.on_key(Player::B, KeyToken::Digit(c.to_digit(10).unwrap() as u8));
        }
        duel.on_key(Player::B, KeyToken::Submit);
        assert!(rendered(&duel, Player::B).contains("correct!"));
    }
}
