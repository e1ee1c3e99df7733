/*!
Strategies to reduce a set of clauses without losing any information relevant to a refutation.

Each strategy is a pure function from a set of clauses to a subset of the clauses.
- [RedundantClauseRemoval](SimplificationStrategy::RedundantClauseRemoval) discards every clause which is a (strict) superset of some other clause.
  For, if *C* ⊆ *D* then *C* entails *D*, and so *D* is redundant given *C*.
- [InsignificantClauseRemoval](SimplificationStrategy::InsignificantClauseRemoval) discards every tautology.
  For, a tautology is entailed by any set of clauses.

Strategies are applied in the order given by the [configuration](crate::config::Config), and the configured sequence is reapplied whenever the working set of a resolution changes.

Strategies are generic over anything which may be borrowed as a clause, so provenance (e.g. [Knowledge](crate::structures::resolvent::Knowledge)) is kept through a simplification.

```rust
# use std::collections::BTreeSet;
# use otter_refute::simplification::SimplificationStrategy;
# use otter_refute::structures::clause::Clause;
let clauses = ["f v ~c", "f v g v ~c", "f"]
    .iter()
    .map(|s| s.parse::<Clause>().unwrap())
    .collect::<BTreeSet<_>>();

let simplified = SimplificationStrategy::RedundantClauseRemoval.simplify(clauses);

assert_eq!(simplified, BTreeSet::from(["f".parse::<Clause>().unwrap()]));
```
*/

use std::{borrow::Borrow, collections::BTreeSet, str::FromStr};

use crate::{misc::log::targets, structures::clause::Clause};

/// Supported simplification strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimplificationStrategy {
    /// Remove clauses subsumed by some other clause.
    RedundantClauseRemoval,

    /// Remove tautologies.
    InsignificantClauseRemoval,
}

impl SimplificationStrategy {
    /// The subset of `clauses` kept by the strategy.
    pub fn simplify<C: Borrow<Clause> + Ord>(&self, clauses: BTreeSet<C>) -> BTreeSet<C> {
        let before = clauses.len();

        let simplified = match self {
            Self::RedundantClauseRemoval => remove_subsumed(clauses),
            Self::InsignificantClauseRemoval => clauses
                .into_iter()
                .filter(|clause| !clause.borrow().is_tautology())
                .collect(),
        };

        log::trace!(target: targets::SIMPLIFICATION, "{self} kept {} of {before} clauses", simplified.len());
        simplified
    }

    /// Applies each strategy in `strategies` in turn.
    pub fn simplify_all<C: Borrow<Clause> + Ord>(
        strategies: &[SimplificationStrategy],
        clauses: BTreeSet<C>,
    ) -> BTreeSet<C> {
        strategies
            .iter()
            .fold(clauses, |clauses, strategy| strategy.simplify(clauses))
    }
}

/// Discards the superset of every pair of distinct clauses where one clause is a subset of the other.
fn remove_subsumed<C: Borrow<Clause> + Ord>(clauses: BTreeSet<C>) -> BTreeSet<C> {
    let discard = {
        let members = clauses.iter().map(Borrow::borrow).collect::<Vec<&Clause>>();
        let mut discard = vec![false; members.len()];

        for (i, a) in members.iter().enumerate() {
            for (j, b) in members.iter().enumerate().skip(i + 1) {
                if a.is_subset(b) {
                    discard[j] = true;
                } else if b.is_subset(a) {
                    discard[i] = true;
                }
            }
        }
        discard
    };

    clauses
        .into_iter()
        .zip(discard)
        .filter_map(|(clause, discard)| (!discard).then_some(clause))
        .collect()
}

impl std::fmt::Display for SimplificationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedundantClauseRemoval => write!(f, "RedundantClauseRemoval"),
            Self::InsignificantClauseRemoval => write!(f, "InsignificantClauseRemoval"),
        }
    }
}

impl FromStr for SimplificationStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RedundantClauseRemoval" => Ok(Self::RedundantClauseRemoval),

            "InsignificantClauseRemoval" => Ok(Self::InsignificantClauseRemoval),

            _unkown_string => Err(()),
        }
    }
}
