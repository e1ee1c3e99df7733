//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The representation of a clause is as an (ordered) set of literals.
//! So, a clause has no duplicate literals, and two clauses are equal whenever they contain the same literals, regardless of the order in which the literals were given.
//!
//! ```rust
//! # use otter_refute::structures::clause::Clause;
//! # use otter_refute::structures::literal::Literal;
//! let a_or_b = Clause::from_iter([Literal::new("a", false), Literal::new("b", false)]);
//! let b_or_a = Clause::from_iter([Literal::new("B", false), Literal::new("a", false)]);
//!
//! assert_eq!(a_or_b, b_or_a);
//! assert_eq!(a_or_b.size(), 2);
//! assert_eq!(a_or_b.to_string(), "a v b");
//! ```
//!
//! - The empty clause is always false (never true), and is written `NIL`.
//!   Deriving the empty clause from the premises and a negated goal is the aim of a resolution.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// The token written between the literals of a clause.
pub const DISJUNCTION: &str = "v";

/// The representation of the empty clause.
pub const NIL: &str = "NIL";

/// A set of literals, interpreted as a disjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn nil() -> Self {
        Self::default()
    }

    /// The clause containing only the given literal.
    pub fn unit(literal: Literal) -> Self {
        Self {
            literals: BTreeSet::from([literal]),
        }
    }

    /// Whether the clause is the empty clause.
    pub fn is_nil(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// An iterator over all literals in the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Whether the literal is in the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Whether the clause contains both some literal and the negation of the literal.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.contains(&literal.negate()))
    }

    /// Whether every literal of the clause is a literal of `other`.
    pub fn is_subset(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// The unit clauses of the negation of each literal in the clause.
    ///
    /// As a clause is a disjunction, its negation is the conjunction of these unit clauses.
    ///
    /// ```rust
    /// # use otter_refute::structures::clause::Clause;
    /// # use otter_refute::structures::literal::Literal;
    /// let goal = Clause::from_iter([Literal::new("a", false), Literal::new("b", true)]);
    /// let negated = goal.negate_as_unit_clauses();
    ///
    /// assert_eq!(negated.len(), 2);
    /// assert!(negated.contains(&Clause::unit(Literal::new("a", true))));
    /// assert!(negated.contains(&Clause::unit(Literal::new("b", false))));
    /// ```
    pub fn negate_as_unit_clauses(&self) -> BTreeSet<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause::unit(literal.negate()))
            .collect()
    }

    /// The literals of the clause, as a set.
    pub fn literal_set(&self) -> &BTreeSet<Literal> {
        &self.literals
    }
}

/// Every literal in `literals` whose negation is not also in `literals`.
///
/// All complementary pairs are removed at once, and so the result never contains a complementary pair.
pub fn remove_all_complementary_pairs(literals: BTreeSet<Literal>) -> BTreeSet<Literal> {
    let complementary = literals
        .iter()
        .filter(|literal| literals.contains(&literal.negate()))
        .cloned()
        .collect::<Vec<_>>();

    let mut remaining = literals;
    for literal in &complementary {
        remaining.remove(literal);
    }
    remaining
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeSet<Literal>> for Clause {
    fn from(literals: BTreeSet<Literal>) -> Self {
        Self { literals }
    }
}

impl std::fmt::Display for Clause {
    /// Literals are written in order of their string representation, as the (case-insensitive) order of literals need not agree with how literals are written.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nil() {
            return write!(f, "{NIL}");
        }

        let mut written = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        written.sort();

        write!(f, "{}", written.join(&format!(" {DISJUNCTION} ")))
    }
}
