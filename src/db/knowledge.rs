/*!
A database of knowledge --- the premises, goal, and working set of a resolution.

The database instantiates a control strategy: it owns the (mutable) knowledge base and enumerates the pairs of clauses to resolve during a round of saturation.

# Fields

- Premises \
  Clauses asserted by the user, through [add_premise](KnowledgeDB::add_premise).
- Goal, and negated goal \
  The clause to be established, and the unit clauses obtained by [negating](crate::structures::clause::Clause::negate_as_unit_clauses) the goal.
- Resolution clauses \
  The working set of a resolution: premises, the negated goal, and any retained acquired knowledge, after simplification.
- Temporary knowledge \
  Resolvents obtained during the current round of saturation, not yet added to the working set.
- Acquired knowledge \
  Resolvents added to the working set in some earlier round.

# Invariants

- Every acquired resolvent is a member of the resolution clauses.
  If simplification removes an acquired resolvent from the resolution clauses, the resolvent is also removed from the acquired knowledge.
- Every parent of an acquired resolvent is a premise, a unit clause of the negated goal, or an acquired resolvent obtained earlier.
  Removing a premise removes every acquired resolvent which depends on the premise, and changing the goal while keeping acquired knowledge removes every acquired resolvent which depends on the old negated goal.
- Within a resolution, any clause removed from the resolution clauses by simplification is never acquired again.
  Simplification never revives a clause, and so this changes nothing but ensures each round of saturation adds some clause not seen before.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

use std::{
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::{
    config::{Config, ControlStrategy},
    misc::log::targets,
    reports::MutationReport,
    simplification::SimplificationStrategy,
    structures::{
        clause::Clause,
        resolvent::{Knowledge, Resolvent},
    },
    types::err::{self},
};

/// A database of knowledge.
pub struct KnowledgeDB {
    /// Which pairs of clauses to resolve.
    control_strategy: ControlStrategy,

    /// Simplifications of the resolution clauses, applied in order.
    simplification: Vec<SimplificationStrategy>,

    premises: BTreeSet<Clause>,

    goal: Option<Clause>,

    negated_goal: BTreeSet<Clause>,

    resolution_clauses: BTreeSet<Knowledge>,

    temporary_knowledge: BTreeMap<Clause, Rc<Resolvent>>,

    acquired_knowledge: BTreeMap<Clause, Rc<Resolvent>>,

    /// Clauses removed from the resolution clauses by simplification during the current resolution.
    discarded: BTreeSet<Clause>,
}

impl KnowledgeDB {
    pub fn new(config: &Config) -> Self {
        Self {
            control_strategy: config.control_strategy.value,
            simplification: config.simplification.clone(),

            premises: BTreeSet::default(),
            goal: None,
            negated_goal: BTreeSet::default(),

            resolution_clauses: BTreeSet::default(),
            temporary_knowledge: BTreeMap::default(),
            acquired_knowledge: BTreeMap::default(),
            discarded: BTreeSet::default(),
        }
    }

    /// The premises, in order.
    pub fn premises(&self) -> impl Iterator<Item = &Clause> {
        self.premises.iter()
    }

    /// Whether the clause is a premise.
    pub fn is_premise(&self, clause: &Clause) -> bool {
        self.premises.contains(clause)
    }

    /// The most recent goal, if any goal has been given.
    pub fn goal(&self) -> Option<&Clause> {
        self.goal.as_ref()
    }

    /// The unit clauses of the negated goal, in order.
    pub fn negated_goal(&self) -> impl Iterator<Item = &Clause> {
        self.negated_goal.iter()
    }

    /// The working set of the current (or most recent) resolution.
    pub fn resolution_clauses(&self) -> impl Iterator<Item = &Knowledge> {
        self.resolution_clauses.iter()
    }

    /// Resolvents added to the working set in some earlier round.
    pub fn acquired_knowledge(&self) -> impl Iterator<Item = &Rc<Resolvent>> {
        self.acquired_knowledge.values()
    }

    /// Resolvents obtained during the current round.
    pub fn temporary_knowledge(&self) -> impl Iterator<Item = &Rc<Resolvent>> {
        self.temporary_knowledge.values()
    }

    /// Sets the goal, and the negated goal.
    pub fn set_goal(&mut self, goal: Clause) {
        self.negated_goal = goal.negate_as_unit_clauses();
        self.goal = Some(goal);
    }

    /// Adds a clause to the premises.
    ///
    /// The working set is unchanged until the next resolution is [prepared](KnowledgeDB::prepare_for_resolution).
    pub fn add_premise(&mut self, premise: Clause) -> MutationReport {
        log::debug!(target: targets::KNOWLEDGE, "Premise added: {premise}");
        self.premises.insert(premise);
        MutationReport { succeeded: true }
    }

    /// Removes a clause from the premises, together with all acquired knowledge which depends on the clause.
    ///
    /// If the clause is not a premise, nothing happens and the removal is noted as unsuccessful.
    pub fn remove_premise(&mut self, premise: &Clause) -> MutationReport {
        if !self.premises.remove(premise) {
            log::debug!(target: targets::KNOWLEDGE, "Not a premise: {premise}");
            return MutationReport { succeeded: false };
        }

        let dependents = self.remove_dependent_knowledge(BTreeSet::from([premise.clone()]));
        log::debug!(target: targets::KNOWLEDGE, "Premise removed: {premise}, with {dependents} dependents");

        MutationReport { succeeded: true }
    }

    /// Removes all acquired knowledge with some ancestor in `roots`, and returns a count of the knowledge removed.
    ///
    /// Ancestry is followed through the parents of each resolvent, and so includes resolvents which simplification has since removed from the acquired knowledge.
    /// Dependence is a fixpoint of the 'has a parent in' relation, where each pass marks the resolvents with a parent marked by some earlier pass.
    fn remove_dependent_knowledge(&mut self, roots: BTreeSet<Clause>) -> usize {
        let mut ancestry = BTreeMap::<Clause, Rc<Resolvent>>::default();
        let mut stack = self.acquired_knowledge.values().cloned().collect::<Vec<_>>();

        while let Some(resolvent) = stack.pop() {
            if ancestry.contains_key(resolvent.clause()) {
                continue;
            }
            for parent in resolvent.parents() {
                if let Some(derived) = parent.resolvent() {
                    stack.push(derived.clone());
                }
            }
            ancestry.insert(resolvent.clause().clone(), resolvent);
        }

        let mut removed = roots;
        loop {
            let dependent = ancestry
                .iter()
                .filter(|(clause, resolvent)| {
                    !removed.contains(*clause)
                        && resolvent
                            .parents()
                            .iter()
                            .any(|parent| removed.contains(parent.clause()))
                })
                .map(|(clause, _)| clause.clone())
                .collect::<Vec<_>>();

            if dependent.is_empty() {
                break;
            }
            removed.extend(dependent);
        }

        let before = self.acquired_knowledge.len();
        self.acquired_knowledge.retain(|clause, _| {
            let keep = !removed.contains(clause);
            if !keep {
                log::trace!(target: targets::KNOWLEDGE, "Dependent knowledge removed: {clause}");
            }
            keep
        });

        before - self.acquired_knowledge.len()
    }

    /// Resets the database for a resolution, and returns the goal of the resolution.
    ///
    /// If a goal is given it replaces any previous goal, otherwise the previous goal is used.
    /// Temporary knowledge is always cleared, and acquired knowledge is cleared unless `keep_acquired_knowledge` is set.
    /// The resolution clauses are then rebuilt from the premises, any acquired knowledge, and the negated goal, and simplified.
    pub fn prepare_for_resolution(
        &mut self,
        goal: Option<Clause>,
        keep_acquired_knowledge: bool,
    ) -> Result<Clause, err::ErrorKind> {
        if let Some(goal) = goal {
            if keep_acquired_knowledge {
                let fresh_negation = goal.negate_as_unit_clauses();
                let stale = self
                    .negated_goal
                    .difference(&fresh_negation)
                    .filter(|clause| !self.premises.contains(*clause))
                    .cloned()
                    .collect::<BTreeSet<_>>();

                if !stale.is_empty() {
                    let dependents = self.remove_dependent_knowledge(stale);
                    log::debug!(target: targets::KNOWLEDGE, "Goal revised, with {dependents} dependents removed");
                }
            }
            self.set_goal(goal);
        }

        let goal = match &self.goal {
            Some(goal) => goal.clone(),
            None => return Err(err::ErrorKind::from(err::StateError::NoGoal)),
        };

        if !keep_acquired_knowledge {
            self.acquired_knowledge.clear();
        }
        self.temporary_knowledge.clear();
        self.discarded.clear();

        self.resolution_clauses.clear();
        for premise in &self.premises {
            self.resolution_clauses.insert(Knowledge::from(premise.clone()));
        }
        for resolvent in self.acquired_knowledge.values() {
            self.resolution_clauses.insert(Knowledge::from(resolvent.clone()));
        }
        for unit in &self.negated_goal {
            self.resolution_clauses.insert(Knowledge::from(unit.clone()));
        }

        self.simplify_resolution_clauses();

        log::debug!(target: targets::KNOWLEDGE, "Prepared {} resolution clauses for: {goal}", self.resolution_clauses.len());
        Ok(goal)
    }

    /// Whether some temporary knowledge is not already a resolution clause.
    pub fn found_any_new_knowledge(&self) -> bool {
        self.temporary_knowledge
            .keys()
            .any(|clause| !self.resolution_clauses.contains(clause))
    }

    /// Adds the resolvents to the temporary knowledge.
    ///
    /// Resolvents already discarded by simplification during the current resolution are skipped.
    pub fn acquire_temporary_knowledge(&mut self, resolvents: impl IntoIterator<Item = Resolvent>) {
        for resolvent in resolvents {
            if self.discarded.contains(resolvent.clause()) {
                log::trace!(target: targets::KNOWLEDGE, "Skipped discarded resolvent: {resolvent}");
                continue;
            }

            let clause = resolvent.clause().clone();
            self.temporary_knowledge
                .entry(clause)
                .or_insert_with(|| Rc::new(resolvent));
        }
    }

    /// Adds the temporary knowledge to the resolution clauses, simplifies, and acquires any temporary knowledge which survives simplification.
    ///
    /// A resolvent equal to some resolution clause is acquired, though the resolution clause is kept as is.
    /// So, a premise (or unit of the negated goal) obtained again by resolution joins the set of support.
    /// Knowledge already acquired keeps the parents it was first acquired with.
    pub fn consolidate_knowledge(&mut self) {
        let temporary = std::mem::take(&mut self.temporary_knowledge);

        for resolvent in temporary.values() {
            self.resolution_clauses.insert(Knowledge::from(resolvent.clone()));
        }

        let removed = self.simplify_resolution_clauses();

        let mut acquired = 0;
        for (clause, resolvent) in temporary {
            if self.resolution_clauses.contains(&clause) {
                self.acquired_knowledge.entry(clause).or_insert(resolvent);
                acquired += 1;
            }
        }

        log::debug!(target: targets::KNOWLEDGE, "Acquired {acquired} resolvents, discarded {} clauses", removed.len());
        self.discarded.extend(removed);
    }

    /// Applies the simplification strategies to the resolution clauses, and returns the clauses removed.
    ///
    /// Acquired knowledge removed from the resolution clauses is also removed from the acquired knowledge.
    fn simplify_resolution_clauses(&mut self) -> Vec<Clause> {
        if self.simplification.is_empty() {
            return Vec::default();
        }

        let working = std::mem::take(&mut self.resolution_clauses);
        let simplified = SimplificationStrategy::simplify_all(&self.simplification, working.clone());

        let removed = working
            .difference(&simplified)
            .map(|knowledge| knowledge.clause().clone())
            .collect::<Vec<_>>();

        self.acquired_knowledge
            .retain(|clause, _| simplified.contains(clause));
        self.resolution_clauses = simplified;

        removed
    }

    /// Whether the knowledge belongs to the set of support --- the negated goal and any acquired knowledge.
    fn supports(&self, knowledge: &Knowledge) -> bool {
        self.acquired_knowledge.contains_key(knowledge.clause())
            || self.negated_goal.contains(knowledge.clause())
    }

    /// The resolution clauses which are acquired knowledge or unit clauses of the negated goal.
    pub fn support_set(&self) -> impl Iterator<Item = &Knowledge> {
        self.resolution_clauses
            .iter()
            .filter(|knowledge| self.supports(knowledge))
    }

    /// The pairs of resolution clauses to resolve during a round of saturation, on the control strategy.
    ///
    /// - [SaturationByLevels](ControlStrategy::SaturationByLevels) \
    ///   All (unordered) pairs of distinct resolution clauses.
    /// - [SupportSet](ControlStrategy::SupportSet) \
    ///   Each resolution clause outside the set of support paired with each clause in the support set, followed by all (unordered) pairs of distinct clauses in the support set.
    pub fn new_clause_pairs(&self) -> Vec<(Knowledge, Knowledge)> {
        match self.control_strategy {
            ControlStrategy::SaturationByLevels => {
                let members = self.resolution_clauses.iter().collect::<Vec<_>>();
                combinations(&members)
            }

            ControlStrategy::SupportSet => {
                let (support, others): (Vec<&Knowledge>, Vec<&Knowledge>) = self
                    .resolution_clauses
                    .iter()
                    .partition(|knowledge| self.supports(knowledge));

                let mut pairs = Vec::with_capacity(others.len() * support.len());
                for other in &others {
                    for supporting in &support {
                        pairs.push(((*other).clone(), (*supporting).clone()));
                    }
                }
                pairs.extend(combinations(&support));
                pairs
            }
        }
    }
}

/// All pairs of distinct members, each pair ordered as the members are.
fn combinations(members: &[&Knowledge]) -> Vec<(Knowledge, Knowledge)> {
    members
        .iter()
        .enumerate()
        .flat_map(|(index, left)| {
            members[index + 1..]
                .iter()
                .map(move |right| ((*left).clone(), (*right).clone()))
        })
        .collect()
}
