use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// The count of resolutions accumulates across every resolution within a context, while all other counts are reset at the start of each resolution.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every resolution requested.
    pub resolutions: usize,

    /// A count of saturation rounds.
    pub rounds: usize,

    /// A count of the pairs of clauses resolved.
    pub pairs: usize,

    /// A count of the resolvents which were new knowledge, when obtained.
    pub resolvents: usize,

    /// The time taken during the most recent resolution.
    pub time: Duration,
}
