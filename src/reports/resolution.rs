/*!
The report of a resolution.

A resolution either refutes the negation of its goal, in which case the report carries a [Proof], or saturates the knowledge base without refutation, in which case the report carries whatever knowledge was acquired.

# Rendering

The [short form](ResolutionReport::short_str) of a report is `<goal> is true` on refutation and `<goal> is unknown` otherwise.

The full form ([Display]) of a report without refutation is the short form.
With refutation, the full form lists premises, unit clauses of the negated goal, and the resolvents of the proof with numbering continued throughout and each resolvent followed by the numbers of its parents.
Each list is followed by a [separator](SEPARATOR), and the short form ends the report.

```text
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
c is true
```
*/

use std::rc::Rc;

use crate::structures::{clause::Clause, resolvent::Resolvent};

/// The line between sections of a full report.
pub const SEPARATOR: &str = "=============";

/// A resolvent of a proof, with the (1-indexed) positions of its parents in the proof.
#[derive(Clone, Debug)]
pub struct DerivationStep {
    pub resolvent: Rc<Resolvent>,
    pub parents: (usize, usize),
}

/// A refutation of the negated goal.
///
/// Every parent of a step is a premise, a unit clause of the negated goal, or the resolvent of some earlier step.
/// And, the resolvent of the final step is NIL.
#[derive(Clone, Debug)]
pub struct Proof {
    pub premises: Vec<Clause>,
    pub negated_goal: Vec<Clause>,
    pub steps: Vec<DerivationStep>,
}

/// How a resolution ended.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The negated goal was refuted.
    Refutation(Proof),

    /// No further knowledge could be acquired, and NIL was never resolved.
    Saturation { acquired_knowledge: Vec<Rc<Resolvent>> },
}

/// The report of a resolution.
#[derive(Clone, Debug)]
pub struct ResolutionReport {
    goal: Clause,
    outcome: Outcome,
}

impl ResolutionReport {
    pub fn new(goal: Clause, outcome: Outcome) -> Self {
        Self { goal, outcome }
    }

    pub fn goal(&self) -> &Clause {
        &self.goal
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The proof, if the negated goal was refuted.
    pub fn proof(&self) -> Option<&Proof> {
        match &self.outcome {
            Outcome::Refutation(proof) => Some(proof),
            Outcome::Saturation { .. } => None,
        }
    }

    /// Whether the goal follows from the premises.
    pub fn goal_is_true(&self) -> bool {
        matches!(self.outcome, Outcome::Refutation(_))
    }

    pub fn short_str(&self) -> String {
        match self.goal_is_true() {
            true => format!("{} is true", self.goal),
            false => format!("{} is unknown", self.goal),
        }
    }
}

impl std::fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Outcome::Refutation(proof) = &self.outcome else {
            return write!(f, "{}", self.short_str());
        };

        let mut count = 1;

        for premise in &proof.premises {
            writeln!(f, "{count}. {premise}")?;
            count += 1;
        }
        writeln!(f, "{SEPARATOR}")?;

        for unit in &proof.negated_goal {
            writeln!(f, "{count}. {unit}")?;
            count += 1;
        }
        writeln!(f, "{SEPARATOR}")?;

        for step in &proof.steps {
            let (left, right) = step.parents;
            writeln!(f, "{count}. {} ({left}, {right})", step.resolvent)?;
            count += 1;
        }
        writeln!(f, "{SEPARATOR}")?;

        write!(f, "{}", self.short_str())
    }
}
