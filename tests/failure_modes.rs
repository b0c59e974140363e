//! Error-path integration tests: an empty group, a failing judge
//! mid-round, and an unknown registry lookup.

mod support;

use std::sync::Arc;

use qqr_reward_models::{Anchor, DoubleElimination, GroupRewardModel, RoundRobin, Swiss};
use qqr_reward_models::{Registry, SingleElimination, TournamentError};

use support::{FailingJudge, predictions};

#[tokio::test]
async fn every_driver_rejects_an_empty_group() {
    let judge: Arc<dyn qqr_reward_models::Judge> = Arc::new(FailingJudge);

    assert!(matches!(
        RoundRobin::new(Arc::clone(&judge)).compute(&[], "q").await,
        Err(TournamentError::EmptyGroup)
    ));
    assert!(matches!(
        Anchor::new(Arc::clone(&judge)).compute(&[], "q").await,
        Err(TournamentError::EmptyGroup)
    ));
    assert!(matches!(
        Swiss::new(Arc::clone(&judge)).compute(&[], "q").await,
        Err(TournamentError::EmptyGroup)
    ));
    assert!(matches!(
        SingleElimination::new(Arc::clone(&judge)).compute(&[], "q").await,
        Err(TournamentError::EmptyGroup)
    ));
    assert!(matches!(
        DoubleElimination::new(judge).compute(&[], "q").await,
        Err(TournamentError::EmptyGroup)
    ));
}

#[tokio::test]
async fn a_failing_judge_aborts_the_whole_round_robin_call() {
    let model = RoundRobin::new(Arc::new(FailingJudge));
    let result = model.compute(&predictions(4), "q").await;
    assert!(matches!(result, Err(TournamentError::JudgeFailure(_))));
}

#[tokio::test]
async fn a_failing_judge_aborts_single_elimination_at_any_stage() {
    let model = SingleElimination::new(Arc::new(FailingJudge));
    let result = model.compute(&predictions(4), "q").await;
    assert!(result.is_err());
}

#[test]
fn registry_lookup_of_an_unregistered_name_fails_with_the_available_list() {
    let registry = Registry::with_defaults();
    let judge: Arc<dyn qqr_reward_models::Judge> = Arc::new(FailingJudge);
    let err = registry.build("not_a_real_model", judge).unwrap_err();
    match err {
        TournamentError::UnknownModel { requested, available } => {
            assert_eq!(requested, "not_a_real_model");
            assert!(available.contains(&"round_robin".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
