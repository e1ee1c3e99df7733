/*!
Ways to compute the resolvent of a pair of clauses.

Both rules are sound, though they differ on whether tautologies may be returned.
The rule [suited](ResolutionRule::suited_to) to a sequence of simplification strategies is the non-tautology rule if tautologies are removed by some strategy, and otherwise the tautology-preserving rule.

See [apply](ResolutionRule::apply) for details.
*/

use std::str::FromStr;

use crate::simplification::SimplificationStrategy;

/// Supported resolution rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionRule {
    /// Keep the literals common to both clauses, and the literals unique to either clause which are not complementary.
    NonTautology,

    /// Keep each literal of every pair of literals from the two clauses, unless the pair is complementary.
    TautologyPreserving,
}

impl ResolutionRule {
    /// The rule to use alongside the given simplification strategies.
    pub fn suited_to(strategies: &[SimplificationStrategy]) -> Self {
        match strategies.contains(&SimplificationStrategy::InsignificantClauseRemoval) {
            true => Self::NonTautology,
            false => Self::TautologyPreserving,
        }
    }
}

impl std::fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonTautology => write!(f, "NonTautology"),
            Self::TautologyPreserving => write!(f, "TautologyPreserving"),
        }
    }
}

impl FromStr for ResolutionRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NonTautology" => Ok(Self::NonTautology),

            "TautologyPreserving" => Ok(Self::TautologyPreserving),

            _unkown_string => Err(()),
        }
    }
}
