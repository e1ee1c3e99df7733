//! Tasks, aka. the requests which may be made of a [context](crate::context).
//!
//! Each task pairs a clause with an operator:
//! - An inquiry (`?`) of whether the premises entail the clause.
//! - The addition (`+`) of the clause as a premise.
//! - The removal (`-`) of the clause from the premises.

use crate::structures::clause::Clause;

/// The operator of an inquiry.
pub const INQUIRY: char = '?';

/// The operator of a premise addition.
pub const PREMISE_ADDITION: char = '+';

/// The operator of a premise removal.
pub const PREMISE_REMOVAL: char = '-';

/// A request of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Whether the premises entail the clause.
    Inquiry(Clause),

    /// Add the clause to the premises.
    PremiseAddition(Clause),

    /// Remove the clause from the premises, together with any knowledge derived from it.
    PremiseRemoval(Clause),
}

impl Task {
    /// The clause of the task.
    pub fn clause(&self) -> &Clause {
        match self {
            Self::Inquiry(clause) | Self::PremiseAddition(clause) | Self::PremiseRemoval(clause) => {
                clause
            }
        }
    }

    /// The operator of the task.
    pub fn operator(&self) -> char {
        match self {
            Self::Inquiry(_) => INQUIRY,
            Self::PremiseAddition(_) => PREMISE_ADDITION,
            Self::PremiseRemoval(_) => PREMISE_REMOVAL,
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.clause(), self.operator())
    }
}
