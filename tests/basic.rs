use otter_refute::{
    config::{Config, ControlStrategy, ResolutionRule},
    context::Context,
    reports::{Outcome, TaskReport},
    structures::{clause::Clause, task::Task},
    types::err::{self},
};

fn clause(s: &str) -> Clause {
    s.parse().expect("clause")
}

fn context_with(premises: &[&str], config: Config) -> Context {
    Context::from_premises(config, premises.iter().map(|s| clause(s)))
}

mod basic {
    use super::*;

    #[test]
    fn soundness() {
        for strategy in [ControlStrategy::SaturationByLevels, ControlStrategy::SupportSet] {
            let mut config = Config::default();
            config.control_strategy.value = strategy;

            let mut ctx = context_with(&["a", "b v ~a", "~b v c"], config);
            let report = ctx.resolve(Some(clause("c")), false).unwrap();

            assert!(report.goal_is_true());
            let proof = report.proof().expect("proof");
            assert!(proof.steps.last().unwrap().resolvent.clause().is_nil());
        }
    }

    #[test]
    fn termination() {
        for strategy in [ControlStrategy::SaturationByLevels, ControlStrategy::SupportSet] {
            let mut config = Config::default();
            config.control_strategy.value = strategy;

            let mut ctx = context_with(&["a"], config);
            let report = ctx.resolve(Some(clause("b")), false).unwrap();

            assert!(!report.goal_is_true());
            assert!(report.proof().is_none());
            assert_eq!(report.to_string(), "b is unknown");
        }
    }

    #[test]
    fn full_report() {
        let mut ctx = context_with(&["a", "b v ~a", "~b v c"], Config::default());
        let report = ctx.resolve(Some(clause("c")), false).unwrap();

        let expected = "\
1. a
2. b v ~a
3. c v ~b
=============
4. ~c
=============
5. ~b (3, 4)
6. ~a (2, 5)
7. NIL (1, 6)
=============
c is true";

        assert_eq!(report.to_string(), expected);
        assert_eq!(report.short_str(), "c is true");
    }

    #[test]
    fn no_goal() {
        let mut ctx = context_with(&["a"], Config::default());

        assert_eq!(
            ctx.resolve(None, false).map(|report| report.goal_is_true()),
            Err(err::ErrorKind::State(err::StateError::NoGoal))
        );

        assert!(ctx.resolve(Some(clause("a")), false).unwrap().goal_is_true());
        // The previous goal is reused.
        assert!(ctx.resolve(None, false).unwrap().goal_is_true());
    }

    #[test]
    fn counters() {
        let mut ctx = context_with(&["a", "b v ~a", "~b v c"], Config::default());

        assert!(ctx.resolve(Some(clause("c")), false).is_ok());
        assert_eq!(ctx.counters.resolutions, 1);
        assert_eq!(ctx.counters.rounds, 3);
        assert_eq!(ctx.counters.resolvents, 2);

        assert!(ctx.resolve(Some(clause("d")), false).is_ok());
        assert_eq!(ctx.counters.resolutions, 2);

        // Only the count of resolutions accumulates.
        assert!(ctx.resolve(Some(clause("c")), false).is_ok());
        assert_eq!(ctx.counters.resolutions, 3);
        assert_eq!(ctx.counters.rounds, 3);
        assert_eq!(ctx.counters.resolvents, 2);
    }

    #[test]
    fn saturation_carries_acquired_knowledge() {
        let mut ctx = context_with(&["a v b", "~b v c"], Config::default());
        let report = ctx.resolve(Some(clause("d")), false).unwrap();

        let Outcome::Saturation { acquired_knowledge } = report.outcome() else {
            panic!("refutation");
        };
        assert!(acquired_knowledge.is_empty());

        let report = ctx.resolve(Some(clause("a v c")), false).unwrap();
        assert!(report.goal_is_true());
    }

    #[test]
    fn rederived_premise_supports() {
        let mut config = Config::default();
        config.control_strategy.value = ControlStrategy::SupportSet;
        config.simplification.clear();
        config.resolution_rule.value = ResolutionRule::NonTautology;

        let mut ctx = context_with(&["a", "~a", "a v g", "b v g"], config);
        let report = ctx.resolve(Some(clause("g")), false).unwrap();

        assert!(report.goal_is_true());
        assert_eq!(ctx.counters.rounds, 2);

        let proof = report.proof().expect("proof");
        assert_eq!(proof.steps.len(), 1);
        assert!(proof.steps[0].resolvent.clause().is_nil());
    }

    #[test]
    fn tautology_preserving_units() {
        let mut config = Config::default();
        config.simplification.clear();
        config.resolution_rule.value = ResolutionRule::suited_to(&config.simplification);
        assert_eq!(config.resolution_rule.value, ResolutionRule::TautologyPreserving);

        let mut ctx = context_with(&["a", "b"], config);
        assert!(ctx.resolve(Some(clause("a")), false).unwrap().goal_is_true());
        assert!(!ctx.resolve(Some(clause("c")), false).unwrap().goal_is_true());
    }
}

mod tasks {
    use super::*;

    fn perform_all(ctx: &mut Context, tasks: &[&str]) -> Vec<String> {
        tasks
            .iter()
            .map(|task| task.parse::<Task>().expect("task"))
            .map(|task| ctx.perform(task).expect("report").short_str())
            .collect()
    }

    #[test]
    fn retraction() {
        let mut ctx = context_with(&["a", "~a v b", "~b v c"], Config::default());

        let reports = perform_all(&mut ctx, &["c ?", "a -", "c ?", "a -", "a +", "c ?"]);
        assert_eq!(
            reports,
            [
                "c is true",
                "removed a",
                "c is unknown",
                "failed to remove a",
                "added a",
                "c is true"
            ]
        );
    }

    #[test]
    fn retraction_with_kept_knowledge() {
        let mut config = Config::default();
        config.keep_acquired_knowledge.value = true;

        let mut ctx = context_with(&["a", "~a v b", "~b v c", "~c v d"], config);

        let reports = perform_all(&mut ctx, &["d ?", "c ?", "a -", "d ?", "c ?", "a +", "d ?"]);
        assert_eq!(
            reports,
            [
                "d is true",
                "c is true",
                "removed a",
                "d is unknown",
                "c is unknown",
                "added a",
                "d is true"
            ]
        );

        for resolvent in ctx.knowledge_db.acquired_knowledge() {
            for parent in resolvent.parents() {
                let clause = parent.clause();
                assert!(
                    ctx.knowledge_db.is_premise(clause)
                        || ctx.knowledge_db.negated_goal().any(|unit| unit == clause)
                        || ctx
                            .knowledge_db
                            .acquired_knowledge()
                            .any(|acquired| acquired.clause() == clause)
                );
            }
        }
    }

    #[test]
    fn kept_knowledge_proofs() {
        let mut config = Config::default();
        config.keep_acquired_knowledge.value = true;

        let mut ctx = context_with(&["p v q", "~q v r", "~r v s"], config);

        for goal in ["p v s", "p v r", "p v s", "s v p v t"] {
            let report = ctx.resolve(Some(clause(goal)), true).unwrap();
            assert!(report.goal_is_true(), "{goal}");
            assert!(report.proof().is_some());
        }
    }

    #[test]
    fn task_report_forms() {
        let mut ctx = Context::from_config(Config::default());

        let added = ctx.perform(Task::PremiseAddition(clause("a"))).unwrap();
        assert!(matches!(added, TaskReport::PremiseAddition { .. }));
        assert_eq!(added.to_string(), "added a");

        let failed = ctx.perform(Task::PremiseRemoval(clause("b"))).unwrap();
        assert_eq!(failed.to_string(), "failed to remove b");
        assert_eq!(failed.short_str(), "failed to remove b");

        let inquiry = ctx.perform(Task::Inquiry(clause("a v b"))).unwrap();
        assert!(inquiry.is_inquiry());
        assert_eq!(inquiry.short_str(), "a v b is true");
        assert!(inquiry.to_string().ends_with("a v b is true"));
    }
}
