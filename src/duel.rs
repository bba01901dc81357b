use crate::clock::MatchClock;
use crate::keys::KeyToken;
use crate::player::{PerPlayer, Player, PlayerRoundState};
use crate::problem::Problem;
use crate::rope;
use crate::scheduler::Scheduler;
use crate::session::{DuelSettings, Phase, SessionState};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::time::Duration;

/// Work that happens one cool-down after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    NextRound(Player),
    ClearError(Player),
}

/// What a single key press did to the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The duel was idle; the press started it and was otherwise discarded
    Started,
    /// Not a keypad token, a finished duel, or the player is in their
    /// success cool-down
    Ignored,
    Appended,
    /// Buffer already full
    Dropped,
    Cleared,
    EmptySubmit,
    Correct,
    Incorrect,
    /// Correct answer that reached the win margin
    Won(Player),
}

impl KeyOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(
            self,
            KeyOutcome::Ignored | KeyOutcome::Dropped | KeyOutcome::EmptySubmit
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub problem: Problem,
    pub input: String,
    pub score: u32,
    pub error: bool,
    pub success: bool,
}

/// Read model handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuelSnapshot {
    pub phase: Phase,
    pub elapsed_secs: u64,
    pub players: PerPlayer<PlayerView>,
    pub winner: Option<Player>,
    pub win_margin: u32,
    pub marker_percent: f64,
}

/// The session controller: owns the whole duel and is the only thing that mutates it
#[derive(Debug)]
pub struct Duel {
    settings: DuelSettings,
    state: SessionState,
    timers: Scheduler<Deferred>,
    rng: StdRng,
}

impl Duel {
    pub fn new(settings: DuelSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Same problems in the same order for the same seed
    pub fn with_seed(settings: DuelSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: DuelSettings, mut rng: StdRng) -> Self {
        let players = fresh_players(&settings, &mut rng);
        Self {
            state: SessionState {
                phase: Phase::Idle,
                clock: MatchClock::new(),
                players,
                winner: None,
            },
            settings,
            timers: Scheduler::new(),
            rng,
        }
    }

    pub fn settings(&self) -> &DuelSettings {
        &self.settings
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.state.elapsed_secs()
    }

    pub fn player(&self, player: Player) -> &PlayerRoundState {
        &self.state.players[player]
    }

    /// Set once the duel is finished
    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    /// Begin a new duel from any phase. Pending cool-downs from the previous
    /// duel are cancelled before the new state exists.
    pub fn start(&mut self) {
        self.timers.cancel_all();

        self.state.players = fresh_players(&self.settings, &mut self.rng);
        self.state.clock.reset();
        self.state.winner = None;
        self.state.phase = Phase::Playing;

        info!(
            "duel started: {} vs {}",
            self.state.players[Player::A].problem,
            self.state.players[Player::B].problem
        );
    }

    pub fn on_key(&mut self, player: Player, key: KeyToken) -> KeyOutcome {
        if !key.is_valid() {
            debug!("{player} sent {key:?}, not a keypad token");
            return KeyOutcome::Ignored;
        }

        match self.state.phase {
            Phase::Idle => {
                self.start();
                return KeyOutcome::Started;
            }
            Phase::Finished => return KeyOutcome::Ignored,
            Phase::Playing => {}
        }

        if self.state.players[player].is_cooling_down() {
            return KeyOutcome::Ignored;
        }

        let outcome = match key {
            KeyToken::Clear => {
                self.state.players[player].input.clear();
                KeyOutcome::Cleared
            }
            KeyToken::Submit => self.submit(player),
            KeyToken::Digit(d) => {
                if self.state.players[player].input.push_digit(d) {
                    KeyOutcome::Appended
                } else {
                    KeyOutcome::Dropped
                }
            }
        };
        debug!("{player} {key:?} -> {outcome:?}");
        outcome
    }

    fn submit(&mut self, player: Player) -> KeyOutcome {
        let cooldown = self.settings.cooldown;
        let st = &mut self.state.players[player];
        let Some(value) = st.input.value() else {
            return KeyOutcome::EmptySubmit;
        };

        if st.problem.is_answer(value) {
            // input stays on screen until the next round begins
            st.score += 1;
            st.success = true;
            st.success_timer = Some(self.timers.schedule(cooldown, Deferred::NextRound(player)));

            match self.check_winner() {
                Some(winner) => KeyOutcome::Won(winner),
                None => KeyOutcome::Correct,
            }
        } else {
            st.error = true;
            st.input.clear();
            if let Some(stale) = st.error_timer.take() {
                self.timers.cancel(stale);
            }
            st.error_timer = Some(self.timers.schedule(cooldown, Deferred::ClearError(player)));
            KeyOutcome::Incorrect
        }
    }

    fn check_winner(&mut self) -> Option<Player> {
        if self.state.score_gap().unsigned_abs() < u64::from(self.settings.win_margin) {
            return None;
        }
        let winner = self.state.leader()?;
        self.state.phase = Phase::Finished;
        self.state.winner = Some(winner);
        info!(
            "{winner} wins {}-{} after {}s",
            self.state.players[Player::A].score,
            self.state.players[Player::B].score,
            self.state.elapsed_secs()
        );
        Some(winner)
    }

    /// Move time forward by `dt`. The clock only runs while playing; due
    /// cool-downs fire in deadline order. Returns true if anything visible changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut changed = false;

        if self.state.phase == Phase::Playing && self.state.clock.advance(dt) > 0 {
            changed = true;
        }

        for (_, action) in self.timers.advance(dt) {
            self.run(action);
            changed = true;
        }

        changed
    }

    fn run(&mut self, action: Deferred) {
        match action {
            Deferred::NextRound(player) => {
                let problem = Problem::generate(&mut self.rng, self.settings.operands);
                let st = &mut self.state.players[player];
                st.success = false;
                st.success_timer = None;
                st.problem = problem;
                st.input.clear();
            }
            Deferred::ClearError(player) => {
                let st = &mut self.state.players[player];
                st.error = false;
                st.error_timer = None;
            }
        }
    }

    pub fn snapshot(&self) -> DuelSnapshot {
        let players = PerPlayer::from_fn(|p| {
            let st = &self.state.players[p];
            PlayerView {
                problem: st.problem,
                input: st.input.as_str().to_string(),
                score: st.score,
                error: st.error,
                success: st.success,
            }
        });
        DuelSnapshot {
            phase: self.state.phase,
            elapsed_secs: self.state.elapsed_secs(),
            marker_percent: rope::marker_percent(
                players[Player::A].score,
                players[Player::B].score,
                self.settings.win_margin,
            ),
            players,
            winner: self.state.winner,
            win_margin: self.settings.win_margin,
        }
    }
}

fn fresh_players(settings: &DuelSettings, rng: &mut StdRng) -> PerPlayer<PlayerRoundState> {
    PerPlayer::from_fn(|_| {
        PlayerRoundState::new(Problem::generate(rng, settings.operands), settings.max_digits)
    })
}
