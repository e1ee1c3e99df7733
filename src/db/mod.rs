//! Databases for holding information relevant to a resolution.
//!
//!   - [The knowledge database](crate::db::knowledge)
//!     + The premises and goal of a context, together with the working set of a resolution.
//!       From an external perspective there are two important kinds of clause:
//!       * Given clauses \
//!         Premises, added to the context from some external source, and the unit clauses of the negation of a goal.
//!       * Acquired clauses \
//!         Clauses added to the working set by resolution.
//!         Every acquired clause is a consequence of the given clauses, and records the pair of clauses it was resolved from.

pub mod knowledge;
