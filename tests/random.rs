use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use otter_refute::{
    config::{Config, ControlStrategy},
    context::Context,
    simplification::SimplificationStrategy,
    structures::{clause::Clause, literal::Literal},
};

const VARIABLES: [&str; 5] = ["a", "b", "c", "d", "e"];

fn random_clause(rng: &mut StdRng, variables: usize, max_size: usize) -> Clause {
    let size = rng.random_range(1..=max_size);
    (0..size)
        .map(|_| {
            let variable = VARIABLES[rng.random_range(0..variables)];
            Literal::new(variable, rng.random_bool(0.5))
        })
        .collect()
}

fn satisfies(valuation: &[bool], clause: &Clause) -> bool {
    clause.literals().any(|literal| {
        let index = VARIABLES
            .iter()
            .position(|variable| literal.variable().eq_ignore_ascii_case(variable))
            .expect("known variable");
        valuation[index] != literal.is_negated()
    })
}

/// Every valuation of the first `variables` variables.
fn valuations(variables: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..(1_usize << variables)).map(move |bits| (0..variables).map(|i| bits & (1 << i) != 0).collect())
}

fn entails(premises: &[Clause], goal: &Clause, variables: usize) -> bool {
    valuations(variables)
        .filter(|valuation| premises.iter().all(|premise| satisfies(valuation, premise)))
        .all(|valuation| satisfies(&valuation, goal))
}

fn consistent(premises: &[Clause], variables: usize) -> bool {
    valuations(variables).any(|valuation| premises.iter().all(|premise| satisfies(&valuation, premise)))
}

fn random_problem(rng: &mut StdRng) -> (Vec<Clause>, Clause, usize) {
    let variables = rng.random_range(1..=VARIABLES.len());
    let premise_count = rng.random_range(1..=6);
    let premises = (0..premise_count)
        .map(|_| random_clause(rng, variables, 3))
        .collect();
    let goal = random_clause(rng, variables, 2);
    (premises, goal, variables)
}

fn goal_is_true(premises: &[Clause], goal: &Clause, strategy: ControlStrategy) -> bool {
    let mut config = Config::default();
    config.control_strategy.value = strategy;

    let mut ctx = Context::from_premises(config, premises.iter().cloned());
    match ctx.resolve(Some(goal.clone()), false) {
        Ok(report) => report.goal_is_true(),
        Err(e) => panic!("{e:?}"),
    }
}

#[test]
fn saturation_decides_entailment() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..400 {
        let (premises, goal, variables) = random_problem(&mut rng);
        let expected = entails(&premises, &goal, variables);

        assert_eq!(
            goal_is_true(&premises, &goal, ControlStrategy::SaturationByLevels),
            expected,
            "{premises:?} ⊨ {goal}"
        );
    }
}

#[test]
fn support_set_is_sound() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..400 {
        let (premises, goal, variables) = random_problem(&mut rng);
        let expected = entails(&premises, &goal, variables);
        let found = goal_is_true(&premises, &goal, ControlStrategy::SupportSet);

        if found {
            assert!(expected, "{premises:?} ⊨ {goal}");
        } else if consistent(&premises, variables) {
            // With consistent premises, refutation requires the negated goal.
            assert!(!expected, "{premises:?} ⊨ {goal}");
        }
    }
}

#[test]
fn simplification_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let strategies = [
        SimplificationStrategy::RedundantClauseRemoval,
        SimplificationStrategy::InsignificantClauseRemoval,
    ];

    for _ in 0..200 {
        let clauses = (0..rng.random_range(1..=10))
            .map(|_| random_clause(&mut rng, VARIABLES.len(), 4))
            .collect::<BTreeSet<_>>();

        let once = SimplificationStrategy::simplify_all(&strategies, clauses);
        let twice = SimplificationStrategy::simplify_all(&strategies, once.clone());

        assert_eq!(once, twice);
    }
}
