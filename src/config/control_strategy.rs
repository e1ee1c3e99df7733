/*!
Ways to choose which pairs of clauses are resolved during a saturation round.

See [new_clause_pairs](crate::db::knowledge::KnowledgeDB::new_clause_pairs) for the pairs given by each strategy.
*/

use std::str::FromStr;

/// Supported control strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlStrategy {
    /// Resolve every pair of distinct clauses in the working set.
    ///
    /// Complete, though expensive, as the number of pairs is quadratic in the size of the working set.
    SaturationByLevels,

    /// Resolve only pairs which involve at least one clause from the 'set of support' --- the unit clauses of the negated goal and any acquired knowledge.
    ///
    /// A pair of premises is resolved only if one of the premises has also been obtained by resolution, and so joined the set of support.
    SupportSet,
}

impl std::fmt::Display for ControlStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SaturationByLevels => write!(f, "SaturationByLevels"),
            Self::SupportSet => write!(f, "SupportSet"),
        }
    }
}

impl FromStr for ControlStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SaturationByLevels" => Ok(Self::SaturationByLevels),

            "SupportSet" => Ok(Self::SupportSet),

            _unkown_string => Err(()),
        }
    }
}
