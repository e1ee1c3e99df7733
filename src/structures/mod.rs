//! Key structures, such as literals, clauses, and resolvents.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! Within a [context](crate::context) there are three formulas of note, each held by the [knowledge database](crate::db::knowledge):
//! - The premises, as asserted by the user.
//! - The negated goal, as the unit clauses obtained by negating each literal of a goal.
//! - The working set, from which pairs of clauses are drawn for resolution.
//!
//! ## Entailment
//!
//! The premises entail a goal whenever the conjunction of the premises and the negated goal is unsatisfiable.
//! And, as resolution is refutation complete, unsatisfiability is witnessed by a derivation of the empty clause.

pub mod clause;
pub mod literal;
pub mod resolvent;
pub mod task;
