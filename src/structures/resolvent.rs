//! Resolvents, aka. clauses derived from a pair of parent clauses, and knowledge, aka. clauses together with how they came to be known.
//!
//! A [Resolvent] is a clause tagged with the two parent clauses it was resolved from.
//! Either parent may itself be a resolvent, and so every resolvent is the root of a derivation whose leaves are premises or unit clauses of some negated goal.
//!
//! Parents are shared rather than owned, via [Rc].
//! Resolvents are never mutated after creation, and so the derivation graph only grows (and is acyclic, as parents always exist before their children).
//!
//! A [Knowledge] is either a given clause or a resolvent.
//! Comparison of knowledge is by clause only, so a resolvent is 'already known' if some equal clause is known, regardless of how that clause was obtained.

use std::{borrow::Borrow, cmp::Ordering, collections::BTreeSet, rc::Rc};

use crate::structures::{clause::Clause, literal::Literal};

/// A clause, paired with the two clauses it was resolved from.
#[derive(Clone, Debug)]
pub struct Resolvent {
    clause: Clause,
    left_parent: Knowledge,
    right_parent: Knowledge,
}

impl Resolvent {
    pub fn new(clause: Clause, left_parent: Knowledge, right_parent: Knowledge) -> Self {
        Self {
            clause,
            left_parent,
            right_parent,
        }
    }

    /// The resolved clause.
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn left_parent(&self) -> &Knowledge {
        &self.left_parent
    }

    pub fn right_parent(&self) -> &Knowledge {
        &self.right_parent
    }

    /// Both parents, left first.
    pub fn parents(&self) -> [&Knowledge; 2] {
        [&self.left_parent, &self.right_parent]
    }

    /// Whether the resolvent is a strict subset of the union of its parents.
    ///
    /// In other words, whether resolution discarded at least one literal, rather than restating the parents.
    pub fn is_new_knowledge(&self) -> bool {
        let union = self
            .left_parent
            .clause()
            .literals()
            .chain(self.right_parent.clause().literals())
            .collect::<BTreeSet<&Literal>>();

        self.clause.size() < union.len() && self.clause.literals().all(|l| union.contains(l))
    }
}

impl std::fmt::Display for Resolvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clause)
    }
}

/// A clause which is known, and how the clause is known.
#[derive(Clone, Debug)]
pub enum Knowledge {
    /// A clause given to a resolution, as a premise or as a unit clause of the negated goal.
    Given(Rc<Clause>),

    /// A clause obtained by resolution.
    Derived(Rc<Resolvent>),
}

impl Knowledge {
    /// The known clause.
    pub fn clause(&self) -> &Clause {
        match self {
            Self::Given(clause) => clause,
            Self::Derived(resolvent) => resolvent.clause(),
        }
    }

    /// The resolvent, if the clause was obtained by resolution.
    pub fn resolvent(&self) -> Option<&Rc<Resolvent>> {
        match self {
            Self::Given(_) => None,
            Self::Derived(resolvent) => Some(resolvent),
        }
    }
}

impl From<Clause> for Knowledge {
    fn from(clause: Clause) -> Self {
        Knowledge::Given(Rc::new(clause))
    }
}

impl From<Rc<Resolvent>> for Knowledge {
    fn from(resolvent: Rc<Resolvent>) -> Self {
        Knowledge::Derived(resolvent)
    }
}

impl From<Resolvent> for Knowledge {
    fn from(resolvent: Resolvent) -> Self {
        Knowledge::Derived(Rc::new(resolvent))
    }
}

// Comparisons are by clause, and so the borrow of knowledge as a clause is consistent.

impl PartialEq for Knowledge {
    fn eq(&self, other: &Self) -> bool {
        self.clause() == other.clause()
    }
}

impl Eq for Knowledge {}

impl PartialOrd for Knowledge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Knowledge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.clause().cmp(other.clause())
    }
}

impl std::hash::Hash for Knowledge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.clause().hash(state)
    }
}

impl Borrow<Clause> for Knowledge {
    fn borrow(&self) -> &Clause {
        self.clause()
    }
}

impl std::fmt::Display for Knowledge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[(&str, bool)]) -> Clause {
        literals
            .iter()
            .map(|(variable, negated)| Literal::new(*variable, *negated))
            .collect()
    }

    #[test]
    fn new_knowledge() {
        let a_or_b = Knowledge::from(clause(&[("a", false), ("b", false)]));
        let not_a = Knowledge::from(clause(&[("a", true)]));

        let b = Resolvent::new(clause(&[("b", false)]), a_or_b.clone(), not_a.clone());
        assert!(b.is_new_knowledge());

        let restated = Resolvent::new(
            clause(&[("a", false), ("b", false), ("a", true)]),
            a_or_b.clone(),
            not_a.clone(),
        );
        assert!(!restated.is_new_knowledge());

        let foreign = Resolvent::new(clause(&[("c", false)]), a_or_b, not_a);
        assert!(!foreign.is_new_knowledge());
    }

    #[test]
    fn knowledge_by_clause() {
        let given = Knowledge::from(clause(&[("c", false)]));
        let derived = Knowledge::from(Resolvent::new(
            clause(&[("C", false)]),
            Knowledge::from(clause(&[("c", false), ("d", false)])),
            Knowledge::from(clause(&[("d", true)])),
        ));

        assert_eq!(given, derived);
        assert!(given.resolvent().is_none());
        assert!(derived.resolvent().is_some());

        let known = BTreeSet::from([given]);
        assert!(known.contains(derived.clause()));

        // Shared resolvents are the same resolvent.
        let shared = derived.resolvent().cloned().expect("derived");
        let again = Knowledge::from(shared.clone());
        assert!(again
            .resolvent()
            .is_some_and(|resolvent| Rc::ptr_eq(resolvent, &shared)));
    }
}
