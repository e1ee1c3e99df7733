//! The resolution rule, applied to a pair of clauses.
//!
//! Resolution is propositional, and so no unification is required and there is no need to restrict resolution to a single pivot literal.
//! Instead, each [rule](ResolutionRule) eliminates the complementary literals between two clauses in one step.
//!
//! # Non-tautology
//!
//! The resolvent of *A* and *B* is (*A* ∩ *B*) ∪ *R*, where *R* is the symmetric difference of *A* and *B* with all complementary pairs removed.
//!
//! The rule is used when tautologies are removed by simplification.
//! And, as every sound resolvent of a pair of clauses which clash on two or more variables is a tautology, when there are multiple clashes the resolvent is on the first clash only --- a tautology to be discarded by simplification.
//!
//! # Tautology-preserving
//!
//! The resolvent of *A* and *B* contains *x* and *y* for each *x* in *A* and *y* in *B* such that *x* is not the negation of *y*.
//!
//! Literals which are complementary within one of the clauses are kept, and removal of any resulting tautology is left to simplification.
//!
//! ```rust
//! # use otter_refute::config::ResolutionRule;
//! # use otter_refute::structures::clause::Clause;
//! let a_or_b = "a v b".parse::<Clause>().unwrap();
//! let not_a = "~a".parse::<Clause>().unwrap();
//!
//! let non_tautology = ResolutionRule::NonTautology.apply(&a_or_b, &not_a);
//! assert_eq!(non_tautology, "b".parse::<Clause>().unwrap());
//!
//! let tautology_preserving = ResolutionRule::TautologyPreserving.apply(&a_or_b, &not_a);
//! assert_eq!(tautology_preserving, "b v ~a".parse::<Clause>().unwrap());
//! ```

use std::collections::BTreeSet;

use crate::{
    config::ResolutionRule,
    structures::{
        clause::{remove_all_complementary_pairs, Clause},
        literal::Literal,
    },
};

impl ResolutionRule {
    /// The resolvent of `left` and `right`, on the rule.
    pub fn apply(&self, left: &Clause, right: &Clause) -> Clause {
        match self {
            Self::NonTautology => non_tautology(left, right),
            Self::TautologyPreserving => tautology_preserving(left, right),
        }
    }
}

fn non_tautology(left: &Clause, right: &Clause) -> Clause {
    let a = left.literal_set();
    let b = right.literal_set();

    let mut clashes = a.iter().filter(|literal| b.contains(&literal.negate()));

    if let (Some(pivot), Some(_)) = (clashes.next(), clashes.next()) {
        let complement = pivot.negate();
        return a
            .union(b)
            .filter(|literal| *literal != pivot && **literal != complement)
            .cloned()
            .collect();
    }

    let common = a.intersection(b).cloned();
    let unique = a.symmetric_difference(b).cloned().collect::<BTreeSet<Literal>>();

    common.chain(remove_all_complementary_pairs(unique)).collect()
}

fn tautology_preserving(left: &Clause, right: &Clause) -> Clause {
    let mut literals = BTreeSet::new();

    for x in left.literals() {
        for y in right.literals() {
            if !x.is_complement_of(y) {
                literals.insert(x.clone());
                literals.insert(y.clone());
            }
        }
    }

    Clause::from(literals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().expect("clause")
    }

    #[test]
    fn complementary_units() {
        for rule in [ResolutionRule::NonTautology, ResolutionRule::TautologyPreserving] {
            assert!(rule.apply(&clause("a"), &clause("~a")).is_nil());
            assert!(rule.apply(&clause("~A"), &clause("a")).is_nil());
        }
    }

    #[test]
    fn non_tautology_single_clash() {
        let rule = ResolutionRule::NonTautology;

        assert_eq!(rule.apply(&clause("a v b"), &clause("~a v c")), clause("b v c"));
        assert_eq!(rule.apply(&clause("a v b"), &clause("~a v b")), clause("b"));
        assert_eq!(rule.apply(&clause("a v b"), &clause("c")), clause("a v b v c"));
    }

    #[test]
    fn non_tautology_multiple_clashes() {
        let resolvent =
            ResolutionRule::NonTautology.apply(&clause("a v b"), &clause("~a v ~b"));

        assert!(!resolvent.is_nil());
        assert!(resolvent.is_tautology());
        assert_eq!(resolvent, clause("b v ~b"));
    }

    #[test]
    fn tautology_preserving_keeps_unclashed_pairs() {
        let rule = ResolutionRule::TautologyPreserving;

        assert_eq!(rule.apply(&clause("a v b"), &clause("~a")), clause("b v ~a"));
        assert_eq!(
            rule.apply(&clause("a v b"), &clause("~a v ~b")),
            clause("a v b v ~a v ~b")
        );
    }

    #[test]
    fn tautology_preserving_within_a_clause() {
        // Complementary literals of a single clause are not removed.
        let resolvent = ResolutionRule::TautologyPreserving.apply(&clause("a v ~a v b"), &clause("~b"));

        assert_eq!(resolvent, clause("a v ~a v ~b"));
        assert!(resolvent.is_tautology());
    }
}
