/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [search loop](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [knowledge database](crate::db::knowledge)
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to [simplification](crate::simplification)
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to reconstructing a proof from a derivation
    pub const PROOF: &str = "proof";

    /// Logs related to reading clauses and tasks from text
    pub const PARSE: &str = "parse";
}
