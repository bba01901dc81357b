use crate::clock::MatchClock;
use crate::error::ConfigError;
use crate::player::{PerPlayer, Player, PlayerRoundState};
use crate::problem::OperandRange;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_WIN_MARGIN: u32 = 10;
pub const DEFAULT_MAX_DIGITS: usize = 3;
pub const DEFAULT_COOLDOWN_MS: u64 = 500;

/// Top-level state of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Playing,
    Finished,
}

/// Rules of a duel, fixed for its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelSettings {
    pub win_margin: u32,
    pub max_digits: usize,
    pub cooldown: Duration,
    pub operands: OperandRange,
}

impl Default for DuelSettings {
    fn default() -> Self {
        Self {
            win_margin: DEFAULT_WIN_MARGIN,
            max_digits: DEFAULT_MAX_DIGITS,
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            operands: OperandRange::default(),
        }
    }
}

impl DuelSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_margin == 0 {
            return Err(ConfigError::ZeroWinMargin);
        }
        if !(1..=9).contains(&self.max_digits) {
            return Err(ConfigError::MaxDigitsOutOfRange(self.max_digits));
        }
        if self.operands.is_empty() {
            return Err(ConfigError::EmptyOperandRange {
                min: self.operands.min,
                max: self.operands.max,
            });
        }
        let sum = self.operands.max_sum();
        if sum.to_string().len() > self.max_digits {
            return Err(ConfigError::SumTooWide {
                sum,
                max_digits: self.max_digits,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub clock: MatchClock,
    pub players: PerPlayer<PlayerRoundState>,
    pub winner: Option<Player>,
}

impl SessionState {
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn score_gap(&self) -> i64 {
        i64::from(self.players[Player::A].score) - i64::from(self.players[Player::B].score)
    }

    /// Player strictly ahead on score, if any
    pub fn leader(&self) -> Option<Player> {
        match self.score_gap() {
            0 => None,
            gap if gap > 0 => Some(Player::A),
            _ => Some(Player::B),
        }
    }
}
