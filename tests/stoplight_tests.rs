//! Stoplight engine integration tests.

use proptest::prelude::*;

use parlor_games::core::{ErrorKind, GameRng, PlayerId, ScriptedSource, StoplightConfig};
use parlor_games::games::stoplight::{
    Choice, Outcome, SimulationSummary, StoplightEngine, EXPECTED_RANDOM_NASH_RATE, PAYOFF_TABLE,
};

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Go), Just(Choice::Stop)]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_nash_iff_asymmetric(
        seed in any::<u64>(),
        moves in prop::collection::vec(choice_strategy(), 1..50),
    ) {
        let mut engine = StoplightEngine::new(&StoplightConfig::default().with_seed(seed));

        for human in moves {
            let result = engine.resolve_round(human).unwrap();
            prop_assert_eq!(result.is_nash_equilibrium, result.human_choice != result.computer_choice);
            prop_assert_eq!(result.payoffs, PAYOFF_TABLE.payoffs(human, result.computer_choice));
            engine.start_new_round();
        }
    }

    #[test]
    fn prop_scores_accumulate_history(
        seed in any::<u64>(),
        moves in prop::collection::vec(choice_strategy(), 0..50),
    ) {
        let mut engine = StoplightEngine::new(&StoplightConfig::default().with_seed(seed));
        for human in &moves {
            engine.resolve_round(*human).unwrap();
            engine.start_new_round();
        }

        let human_total: i64 = engine.history().iter().map(|r| i64::from(r.payoffs.0)).sum();
        let computer_total: i64 = engine.history().iter().map(|r| i64::from(r.payoffs.1)).sum();
        prop_assert_eq!(engine.score(PlayerId::HUMAN), human_total);
        prop_assert_eq!(engine.score(PlayerId::COMPUTER), computer_total);
        prop_assert_eq!(engine.round_number() as usize, moves.len() + 1);
    }

    #[test]
    fn prop_simulation_length(n in 0usize..300, seed in any::<u64>()) {
        let mut engine = StoplightEngine::new(&StoplightConfig::default().with_seed(seed));
        let rounds = engine.simulate_rounds(n);
        prop_assert_eq!(rounds.len(), n);
        prop_assert_eq!(rounds.count(), n);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test that Go against a stopping opponent pays the human and is an equilibrium.
#[test]
fn test_forced_stop_draw() {
    let mut engine = StoplightEngine::with_source(ScriptedSource::new(vec![1]));
    let result = engine.resolve_round("Go".parse().unwrap()).unwrap();

    assert_eq!(result.payoffs, (5, 0));
    assert!(result.is_nash_equilibrium);
    assert_eq!(engine.score(PlayerId::HUMAN), 5);
}

/// Test that both going is a collision and no equilibrium.
#[test]
fn test_forced_go_draw() {
    let mut engine = StoplightEngine::with_source(ScriptedSource::new(vec![0]));
    let result = engine.resolve_round(Choice::Go).unwrap();

    assert_eq!(result.payoffs, (-10, -10));
    assert!(!result.is_nash_equilibrium);
    assert_eq!(result.scores, (-10, -10));
}

/// Test that unknown choice text is rejected as invalid input.
#[test]
fn test_invalid_choice_text() {
    let err = "Maybe".parse::<Choice>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Test that resolving a round twice fails without drawing from the source.
#[test]
fn test_double_resolution_consumes_no_draw() {
    let source = ScriptedSource::new(vec![0, 1]);
    let mut engine = StoplightEngine::with_source(source);

    engine.resolve_round(Choice::Stop).unwrap();
    assert!(engine.resolve_round(Choice::Stop).is_err());
    engine.start_new_round();

    // Second draw in the script is Stop
    let second = engine.resolve_round(Choice::Go).unwrap();
    assert_eq!(second.computer_choice, Choice::Stop);
    assert_eq!(second.round_number, 2);
}

/// Test that simulating rounds leaves the live game's state untouched.
#[test]
fn test_simulation_leaves_live_game_alone() {
    let mut engine = StoplightEngine::with_source(ScriptedSource::new(vec![1]));
    engine.resolve_round(Choice::Go).unwrap();

    let summary = engine.simulate_rounds(100).summarize();
    assert_eq!(summary.rounds, 100);

    assert_eq!(engine.round_number(), 1);
    assert_eq!(engine.score(PlayerId::HUMAN), 5);
    assert_eq!(engine.history().len(), 1);
}

/// Test that a restarted simulation replays the same rounds.
#[test]
fn test_simulation_is_restartable() {
    let mut engine = StoplightEngine::new(&StoplightConfig::default());
    let mut rounds = engine.simulate_rounds(50);

    let first: Vec<_> = rounds.by_ref().take(10).collect();
    rounds.restart();
    let replay: Vec<_> = rounds.take(10).collect();

    assert_eq!(first, replay);
}

/// Test that each simulation draws from a fresh fork.
#[test]
fn test_successive_simulations_differ() {
    let mut engine = StoplightEngine::new(&StoplightConfig::default());
    let a: Vec<_> = engine.simulate_rounds(64).collect();
    let b: Vec<_> = engine.simulate_rounds(64).collect();
    assert_ne!(a, b);
}

/// Test that random play lands near the expected outcome frequencies.
#[test]
fn test_simulated_frequencies() {
    let rounds: Vec<_> = parlor_games::SimulatedRounds::new(GameRng::new(77), 8_000).collect();
    let summary: SimulationSummary = rounds.iter().collect();

    assert_eq!(summary.rounds, 8_000);
    assert!((summary.nash_rate() - EXPECTED_RANDOM_NASH_RATE).abs() < 0.05);
    for outcome in [
        Outcome::Collision,
        Outcome::HumanProceeds,
        Outcome::ComputerProceeds,
        Outcome::BothStopped,
    ] {
        let share = summary.count(outcome) as f64 / 8_000.0;
        assert!((share - 0.25).abs() < 0.05, "{:?} share {}", outcome, share);
    }
}
