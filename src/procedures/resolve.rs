/*!
Refutation by resolution.

# Overview

A resolution establishes a goal by deriving the empty clause (NIL) from the premises together with the negation of the goal.

```text
prepare the knowledge database for the goal
loop {
    for each pair of clauses given by the control strategy {
        resolve the pair
        if the resolvent is NIL {
            return a proof
        } else if the resolvent is new knowledge {
            note the resolvent as temporary knowledge
        }
    }
    if no temporary knowledge is new {
        return saturation
    }
    consolidate the temporary knowledge
}
```

Each round adds some clause to the resolution clauses which was neither a resolution clause nor discarded by simplification earlier in the resolution.
As only finitely many clauses may be written with the literals of the premises and goal, a resolution always terminates.

# Proof reconstruction

On resolving NIL, the ancestors of NIL which were obtained by resolution are ordered so that each resolvent follows its parents --- left parent first, then right parent, then the resolvent itself --- with each clause listed at most once.
The position of each parent is then found in the sequence of premises, followed by the negated goal, followed by the ordered resolvents.
*/

use std::{collections::BTreeSet, rc::Rc};

use crate::{
    context::Context,
    db::knowledge::KnowledgeDB,
    misc::log::targets,
    reports::{DerivationStep, Outcome, Proof, ResolutionReport},
    structures::{
        clause::Clause,
        resolvent::{Knowledge, Resolvent},
    },
    types::err::{self},
};

impl Context {
    /// Resolves for the given goal, or for the most recent goal if no goal is given.
    ///
    /// If `keep_acquired_knowledge` is set, knowledge acquired by earlier resolutions is kept (so long as it does not depend on some earlier goal).
    ///
    /// ```rust
    /// # use otter_refute::context::Context;
    /// # use otter_refute::config::Config;
    /// # use otter_refute::structures::clause::Clause;
    /// let mut the_context = Context::from_config(Config::default());
    /// the_context.knowledge_db.add_premise("a v b".parse().unwrap());
    /// the_context.knowledge_db.add_premise("~b".parse().unwrap());
    ///
    /// let report = the_context.resolve(Some("a".parse().unwrap()), false).unwrap();
    /// assert!(report.goal_is_true());
    ///
    /// let proof = report.proof().unwrap();
    /// assert!(proof.steps.last().unwrap().resolvent.clause().is_nil());
    /// ```
    pub fn resolve(
        &mut self,
        goal: Option<Clause>,
        keep_acquired_knowledge: bool,
    ) -> Result<ResolutionReport, err::ErrorKind> {
        let this_total_time = std::time::Instant::now();

        let goal = self
            .knowledge_db
            .prepare_for_resolution(goal, keep_acquired_knowledge)?;

        self.counters.resolutions += 1;
        self.counters.rounds = 0;
        self.counters.pairs = 0;
        self.counters.resolvents = 0;

        log::debug!(target: targets::RESOLUTION,
            "Resolving for {goal} with {} and {}",
            self.config.control_strategy,
            self.config.resolution_rule
        );

        let rule = self.config.resolution_rule.value;

        let outcome = 'resolution_loop: loop {
            self.counters.rounds += 1;

            let pairs = self.knowledge_db.new_clause_pairs();
            log::debug!(target: targets::RESOLUTION, "Round {} with {} pairs", self.counters.rounds, pairs.len());

            let mut fresh = Vec::default();

            for (left, right) in pairs {
                self.counters.pairs += 1;

                let clause = rule.apply(left.clause(), right.clause());
                let resolvent = Resolvent::new(clause, left, right);

                if resolvent.clause().is_nil() {
                    log::trace!(target: targets::RESOLUTION, "NIL from {} and {}", resolvent.left_parent(), resolvent.right_parent());
                    let proof = reconstruct_proof(&self.knowledge_db, Rc::new(resolvent))?;
                    break 'resolution_loop Outcome::Refutation(proof);
                }

                if resolvent.is_new_knowledge() {
                    log::trace!(target: targets::RESOLUTION, "Resolvent {resolvent} from {} and {}", resolvent.left_parent(), resolvent.right_parent());
                    self.counters.resolvents += 1;
                    fresh.push(resolvent);
                }
            }

            self.knowledge_db.acquire_temporary_knowledge(fresh);

            if !self.knowledge_db.found_any_new_knowledge() {
                let acquired_knowledge = self.knowledge_db.acquired_knowledge().cloned().collect();
                break 'resolution_loop Outcome::Saturation { acquired_knowledge };
            }

            self.knowledge_db.consolidate_knowledge();
        };

        self.counters.time = this_total_time.elapsed();

        let report = ResolutionReport::new(goal, outcome);
        log::info!(target: targets::RESOLUTION,
            "{} after {} rounds, {} pairs, and {} resolvents ({:?})",
            report.short_str(),
            self.counters.rounds,
            self.counters.pairs,
            self.counters.resolvents,
            self.counters.time
        );

        Ok(report)
    }
}

/// A proof of NIL, from the premises and negated goal of the database.
pub fn reconstruct_proof(db: &KnowledgeDB, nil: Rc<Resolvent>) -> Result<Proof, err::ErrorKind> {
    let premises = db.premises().cloned().collect::<Vec<_>>();
    let negated_goal = db.negated_goal().cloned().collect::<Vec<_>>();

    let ordered = derivation_order(nil);

    let mut sequence = Vec::with_capacity(premises.len() + negated_goal.len() + ordered.len());
    sequence.extend(premises.iter().cloned());
    sequence.extend(negated_goal.iter().cloned());

    let mut steps = Vec::with_capacity(ordered.len());

    for resolvent in ordered {
        let [left, right] = resolvent.parents();

        let (Some(left), Some(right)) = (position(&sequence, left), position(&sequence, right)) else {
            log::error!(target: targets::PROOF, "Missing parent of {resolvent}");
            return Err(err::ErrorKind::from(err::DerivationError::MissingParent));
        };

        sequence.push(resolvent.clause().clone());
        log::trace!(target: targets::PROOF, "Step {}: {resolvent} ({left}, {right})", sequence.len());

        steps.push(DerivationStep {
            resolvent,
            parents: (left, right),
        });
    }

    Ok(Proof {
        premises,
        negated_goal,
        steps,
    })
}

/// The (1-indexed) position of the first clause in `sequence` equal to the clause of `parent`.
fn position(sequence: &[Clause], parent: &Knowledge) -> Option<usize> {
    sequence
        .iter()
        .position(|clause| clause == parent.clause())
        .map(|index| index + 1)
}

/// The resolvents from which `root` was derived, with `root` last and each resolvent following its parents.
fn derivation_order(root: Rc<Resolvent>) -> Vec<Rc<Resolvent>> {
    let mut ordered = Vec::default();
    let mut seen = BTreeSet::<Clause>::default();

    // Pairs of a resolvent and whether the parents of the resolvent have been visited.
    let mut stack = vec![(root, false)];

    while let Some((resolvent, expanded)) = stack.pop() {
        if seen.contains(resolvent.clause()) {
            continue;
        }

        if expanded {
            seen.insert(resolvent.clause().clone());
            ordered.push(resolvent);
            continue;
        }

        stack.push((resolvent.clone(), true));
        for parent in resolvent.parents().into_iter().rev() {
            if let Some(derived) = parent.resolvent() {
                if !seen.contains(derived.clause()) {
                    stack.push((derived.clone(), false));
                }
            }
        }
    }

    ordered
}
