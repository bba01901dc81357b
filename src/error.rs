use thiserror::Error;

/// Reasons a configuration cannot be turned into playable duel settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("win margin must be at least 1")]
    ZeroWinMargin,

    #[error("max input digits must be between 1 and 9, got {0}")]
    MaxDigitsOutOfRange(usize),

    #[error("operand range {min}..={max} is empty")]
    EmptyOperandRange { min: u32, max: u32 },

    #[error("largest possible sum {sum} does not fit in {max_digits} digit(s)")]
    SumTooWide { sum: u32, max_digits: usize },

    #[error("key layout for {player} must have exactly 12 keys, got {len}")]
    LayoutLength { player: String, len: usize },

    #[error("key layout for {player} repeats a key")]
    LayoutDuplicate { player: String },

    #[error("key '{key}' is bound for both players")]
    LayoutOverlap { key: char },

    #[error("key layout for {player} binds reserved key '{key}'")]
    LayoutReserved { player: String, key: char },
}
