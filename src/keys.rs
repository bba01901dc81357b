use crate::error::ConfigError;
use crate::player::{PerPlayer, Player};
use itertools::Itertools;

/// Labels of the on-screen keypad, in layout order
pub const KEYPAD_LABELS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "X", "0", "V"];

pub const DEFAULT_LAYOUT_A: &str = "123qweasdzxc";
pub const DEFAULT_LAYOUT_B: &str = "890iopkl;,./";

// Used by the app itself: start/restart and quit
const RESERVED: [char; 2] = [' ', '\u{1b}'];

/// Closed set of inputs a player can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Digit(u8),
    Clear,
    Submit,
}

impl KeyToken {
    /// Parse an on-screen keypad label. Anything outside the keypad is ignored.
    pub fn parse(label: &str) -> Option<KeyToken> {
        let mut chars = label.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c {
            '0'..='9' => Some(KeyToken::Digit(c as u8 - b'0')),
            'X' => Some(KeyToken::Clear),
            'V' => Some(KeyToken::Submit),
            _ => None,
        }
    }

    /// False for a `Digit` outside 0-9
    pub fn is_valid(&self) -> bool {
        match self {
            KeyToken::Digit(d) => *d <= 9,
            KeyToken::Clear | KeyToken::Submit => true,
        }
    }
}

/// Twelve keyboard characters, one per keypad slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    keys: Vec<char>,
}

impl KeyLayout {
    pub fn parse(player: Player, keys: &str) -> Result<Self, ConfigError> {
        let keys: Vec<char> = keys.chars().collect();
        if keys.len() != KEYPAD_LABELS.len() {
            return Err(ConfigError::LayoutLength {
                player: player.to_string(),
                len: keys.len(),
            });
        }
        if !keys.iter().all_unique() {
            return Err(ConfigError::LayoutDuplicate {
                player: player.to_string(),
            });
        }
        if let Some(&key) = keys.iter().find(|k| RESERVED.contains(k)) {
            return Err(ConfigError::LayoutReserved {
                player: player.to_string(),
                key,
            });
        }
        Ok(Self { keys })
    }

    pub fn token_for(&self, c: char) -> Option<KeyToken> {
        let slot = self.keys.iter().position(|k| *k == c)?;
        KeyToken::parse(KEYPAD_LABELS[slot])
    }

    /// Keyboard key bound to each keypad slot, three slots per row
    pub fn rows(&self) -> Vec<Vec<(char, &'static str)>> {
        let slots: Vec<_> = self.keys.iter().copied().zip(KEYPAD_LABELS).collect();
        slots.chunks(3).map(|row| row.to_vec()).collect()
    }
}

/// Routes keyboard characters to a player and a key token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    layouts: PerPlayer<KeyLayout>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            layouts: PerPlayer([
                KeyLayout {
                    keys: DEFAULT_LAYOUT_A.chars().collect(),
                },
                KeyLayout {
                    keys: DEFAULT_LAYOUT_B.chars().collect(),
                },
            ]),
        }
    }
}

impl Keymap {
    pub fn new(layout_a: &str, layout_b: &str) -> Result<Self, ConfigError> {
        let a = KeyLayout::parse(Player::A, layout_a)?;
        let b = KeyLayout::parse(Player::B, layout_b)?;
        if let Some(&key) = a.keys.iter().find(|k| b.keys.contains(k)) {
            return Err(ConfigError::LayoutOverlap { key });
        }
        Ok(Self {
            layouts: PerPlayer([a, b]),
        })
    }

    pub fn resolve(&self, c: char) -> Option<(Player, KeyToken)> {
        self.layouts
            .iter()
            .find_map(|(player, layout)| layout.token_for(c).map(|t| (player, t)))
    }

    pub fn layout(&self, player: Player) -> &KeyLayout {
        &self.layouts[player]
    }
}
