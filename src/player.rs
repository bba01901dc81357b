use crate::input::InputBuffer;
use crate::problem::Problem;
use crate::scheduler::TimerHandle;
use serde::Serialize;
use std::ops::{Index, IndexMut};

/// One of the two fixed player slots. A sits on the left and pulls left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum Player {
    #[strum(to_string = "Team 1")]
    A,
    #[strum(to_string = "Team 2")]
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// A value per player slot, indexed by [`Player`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPlayer<T>(pub [T; 2]);

impl<T> PerPlayer<T> {
    pub fn from_fn(mut f: impl FnMut(Player) -> T) -> Self {
        Self([f(Player::A), f(Player::B)])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        &self.0[player.index()]
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        &mut self.0[player.index()]
    }
}

/// Everything one player sees and types during a round
#[derive(Debug, Clone)]
pub struct PlayerRoundState {
    pub problem: Problem,
    pub input: InputBuffer,
    pub score: u32,
    pub error: bool,
    pub success: bool,
    // pending cool-downs, cancelled on restart
    pub(crate) success_timer: Option<TimerHandle>,
    pub(crate) error_timer: Option<TimerHandle>,
}

impl PlayerRoundState {
    pub fn new(problem: Problem, max_digits: usize) -> Self {
        Self {
            problem,
            input: InputBuffer::new(max_digits),
            score: 0,
            error: false,
            success: false,
            success_timer: None,
            error_timer: None,
        }
    }

    /// Success flash in progress; all input for this player is suppressed
    pub fn is_cooling_down(&self) -> bool {
        self.success
    }
}
