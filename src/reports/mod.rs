/*!
Reports for the context.

- [MutationReport] notes whether a mutation of the knowledge database succeeded.
- [ResolutionReport] notes the outcome of a resolution, together with a proof on refutation.
- [TaskReport] wraps either of the above, for the task which led to the report.
*/

mod resolution;
pub use resolution::{DerivationStep, Outcome, Proof, ResolutionReport, SEPARATOR};

use crate::structures::clause::Clause;

/// Whether a mutation of the knowledge database succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationReport {
    pub succeeded: bool,
}

/// The report of a task.
#[derive(Clone, Debug)]
pub enum TaskReport {
    Inquiry(ResolutionReport),

    PremiseAddition {
        clause: Clause,
        mutation: MutationReport,
    },

    PremiseRemoval {
        clause: Clause,
        mutation: MutationReport,
    },
}

impl TaskReport {
    /// The short form of an inquiry, and otherwise the (only) form of a mutation.
    pub fn short_str(&self) -> String {
        match self {
            Self::Inquiry(report) => report.short_str(),
            mutation => mutation.to_string(),
        }
    }

    /// Whether the report is of an inquiry.
    pub fn is_inquiry(&self) -> bool {
        matches!(self, Self::Inquiry(_))
    }
}

impl std::fmt::Display for TaskReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inquiry(report) => write!(f, "{report}"),

            Self::PremiseAddition { clause, mutation } => match mutation.succeeded {
                true => write!(f, "added {clause}"),
                false => write!(f, "failed to add {clause}"),
            },

            Self::PremiseRemoval { clause, mutation } => match mutation.succeeded {
                true => write!(f, "removed {clause}"),
                false => write!(f, "failed to remove {clause}"),
            },
        }
    }
}
