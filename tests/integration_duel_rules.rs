use std::time::Duration;

use assert_matches::assert_matches;
use rand::{rngs::StdRng, SeedableRng};
use tugmath::problem::Problem;
use tugmath::{Duel, DuelSettings, KeyOutcome, KeyToken, Phase, Player};

const COOLDOWN: Duration = Duration::from_millis(500);

fn digits(value: u32) -> Vec<KeyToken> {
    value
        .to_string()
        .chars()
        .map(|c| KeyToken::Digit(c.to_digit(10).unwrap() as u8))
        .collect()
}

fn submit_answer(duel: &mut Duel, player: Player, value: u32) -> KeyOutcome {
    for d in digits(value) {
        duel.on_key(player, d);
    }
    duel.on_key(player, KeyToken::Submit)
}

fn answer_right(duel: &mut Duel, player: Player) -> KeyOutcome {
    let sum = duel.player(player).problem.sum;
    submit_answer(duel, player, sum)
}

fn playing(seed: u64) -> Duel {
    let mut duel = Duel::with_seed(DuelSettings::default(), seed);
    duel.start();
    duel
}

#[test]
fn scenario_nine_nil_then_winning_answer() {
    let mut duel = playing(10);
    for _ in 0..9 {
        answer_right(&mut duel, Player::A);
        duel.advance(COOLDOWN);
    }
    assert_eq!(duel.player(Player::A).score, 9);
    assert_eq!(duel.player(Player::B).score, 0);

    assert_matches!(answer_right(&mut duel, Player::A), KeyOutcome::Won(Player::A));
    assert_eq!(duel.player(Player::A).score, 10);
    assert_eq!(duel.phase(), Phase::Finished);
    assert_eq!(duel.winner(), Some(Player::A));
}

#[test]
fn scenario_idle_key_press_starts_duel() {
    for player in Player::ALL {
        let mut duel = Duel::with_seed(DuelSettings::default(), 20);
        assert_eq!(duel.phase(), Phase::Idle);

        assert_eq!(duel.on_key(player, KeyToken::Submit), KeyOutcome::Started);
        assert_eq!(duel.phase(), Phase::Playing);
        assert_eq!(duel.elapsed_secs(), 0);
        assert_eq!(duel.player(player).score, 0);
        assert!(!duel.player(player).error);
    }
}

#[test]
fn scenario_third_digit_fills_fourth_is_dropped() {
    let mut duel = playing(30);
    duel.on_key(Player::B, KeyToken::Digit(1));
    duel.on_key(Player::B, KeyToken::Digit(2));
    assert_eq!(duel.player(Player::B).input.as_str(), "12");

    duel.on_key(Player::B, KeyToken::Digit(3));
    assert_eq!(duel.player(Player::B).input.as_str(), "123");

    assert_eq!(
        duel.on_key(Player::B, KeyToken::Digit(4)),
        KeyOutcome::Dropped
    );
    assert_eq!(duel.player(Player::B).input.as_str(), "123");
}

#[test]
fn scenario_keys_during_success_cooldown_are_ignored() {
    let mut duel = playing(40);
    answer_right(&mut duel, Player::A);
    let frozen = duel.snapshot();

    duel.advance(Duration::from_millis(250));
    for key in [KeyToken::Digit(5), KeyToken::Clear, KeyToken::Submit] {
        assert_eq!(duel.on_key(Player::A, key), KeyOutcome::Ignored);
    }
    assert_eq!(duel.snapshot().players, frozen.players);

    duel.advance(Duration::from_millis(250));
    assert!(!duel.player(Player::A).success);
    assert_eq!(
        duel.on_key(Player::A, KeyToken::Digit(5)),
        KeyOutcome::Appended
    );
}

#[test]
fn scenario_restart_after_finish() {
    let settings = DuelSettings {
        win_margin: 2,
        ..DuelSettings::default()
    };
    let mut duel = Duel::with_seed(settings, 50);
    duel.start();
    duel.advance(Duration::from_secs(7));
    answer_right(&mut duel, Player::B);
    duel.advance(COOLDOWN);
    answer_right(&mut duel, Player::B);
    assert_eq!(duel.phase(), Phase::Finished);
    let old = duel.snapshot();

    duel.start();
    let fresh = duel.snapshot();
    assert_eq!(fresh.phase, Phase::Playing);
    assert_eq!(fresh.elapsed_secs, 0);
    assert_eq!(fresh.winner, None);
    for player in Player::ALL {
        assert_eq!(fresh.players[player].score, 0);
        assert!(fresh.players[player].input.is_empty());
    }
    assert_eq!(old.elapsed_secs, 7);
    assert_eq!(old.winner, Some(Player::B));

    // construction and first start draw two each, B's second round one more;
    // the restart then draws A and B from the same stream
    let mut rng = StdRng::seed_from_u64(50);
    let operands = duel.settings().operands;
    let draws: Vec<Problem> = (0..7)
        .map(|_| Problem::generate(&mut rng, operands))
        .collect();
    assert_eq!(old.players[Player::B].problem, draws[4]);
    assert_eq!(fresh.players[Player::A].problem, draws[5]);
    assert_eq!(fresh.players[Player::B].problem, draws[6]);
}

#[test]
fn wrong_answer_never_scores() {
    let mut duel = playing(60);
    let sum = duel.player(Player::A).problem.sum;
    assert_eq!(
        submit_answer(&mut duel, Player::A, sum + 3),
        KeyOutcome::Incorrect
    );
    assert_eq!(duel.player(Player::A).score, 0);
    assert!(duel.player(Player::A).input.is_empty());
    assert!(duel.player(Player::A).error);

    duel.advance(COOLDOWN);
    assert!(!duel.player(Player::A).error);
}

#[test]
fn leading_zero_answer_is_parsed_base_ten() {
    let mut duel = playing(70);
    let sum = duel.player(Player::B).problem.sum;
    duel.on_key(Player::B, KeyToken::Digit(0));
    assert_eq!(submit_answer(&mut duel, Player::B, sum), KeyOutcome::Correct);
}

#[test]
fn custom_margin_and_range_are_respected() {
    let settings = DuelSettings {
        win_margin: 1,
        operands: tugmath::problem::OperandRange::new(3, 3),
        ..DuelSettings::default()
    };
    let mut duel = Duel::with_seed(settings, 80);
    duel.start();
    assert_eq!(duel.player(Player::A).problem.sum, 6);
    assert_matches!(
        submit_answer(&mut duel, Player::A, 6),
        KeyOutcome::Won(Player::A)
    );
}
