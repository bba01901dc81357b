// Library surface for headless/integration tests and reuse.
// Terminal rendering lives with the binary in main.rs.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod duel;
pub mod error;
pub mod input;
pub mod keys;
pub mod logging;
pub mod player;
pub mod problem;
pub mod rope;
pub mod runtime;
pub mod scheduler;
pub mod session;

pub use duel::{Duel, DuelSnapshot, KeyOutcome};
pub use keys::{KeyToken, Keymap};
pub use player::Player;
pub use session::{DuelSettings, Phase};
