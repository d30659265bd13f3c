//! Move policies driving the engine from outside the crate.

use banqi::{
    play_out, Action, ActionKind, GameConfig, GameEngine, MovePolicy, PlayoutEnd, PlayoutReport, RandomPolicy,
};

/// Prefers captures, then flips, then anything.
struct GreedyCapture;

impl MovePolicy for GreedyCapture {
    fn choose(&mut self, engine: &GameEngine, legal: &[Action]) -> Option<Action> {
        let capture = legal
            .iter()
            .find(|a| matches!(engine.validate(**a), Ok(ActionKind::Capture { .. })));
        capture
            .or_else(|| legal.iter().find(|a| a.is_flip()))
            .or_else(|| legal.first())
            .copied()
    }
}

#[test]
fn test_custom_policy_plays_to_the_end() {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(5));
    let report = play_out(&mut engine, &mut GreedyCapture, 10_000);

    assert_ne!(report.end, PlayoutEnd::StepLimit);
    let captures = report
        .history
        .iter()
        .filter(|r| matches!(r.kind, ActionKind::Capture { .. }))
        .count();
    let flips = report.history.iter().filter(|r| r.action.is_flip()).count();
    assert!(flips <= 32);
    assert!(captures <= 30);
}

#[test]
fn test_policies_behind_trait_objects() {
    let mut policies: Vec<Box<dyn MovePolicy>> = vec![Box::new(RandomPolicy::new(1)), Box::new(GreedyCapture)];

    for policy in policies.iter_mut() {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(8));
        let report = play_out(&mut engine, policy.as_mut(), 200);
        assert!(report.steps > 0);
        assert_eq!(report.steps as usize, report.history.len());
    }
}

#[test]
fn test_report_serialization() {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(2));
    let report = play_out(&mut engine, &mut RandomPolicy::new(2), 40);

    let json = serde_json::to_string(&report).unwrap();
    let restored: PlayoutReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, restored);
}

#[test]
fn test_engines_are_independent() {
    let mut a = GameEngine::new(GameConfig::default().with_seed(4));
    let b = GameEngine::new(GameConfig::default().with_seed(4));

    play_out(&mut a, &mut RandomPolicy::new(4), 30);
    assert_eq!(b.state().ply(), 0);
    assert_eq!(b.state().board.hidden_count(), 32);
}
