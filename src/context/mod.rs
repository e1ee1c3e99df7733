/*!
The context --- to which premises are added (and from which premises are removed) and within which resolutions take place.

A context bundles a [configuration](crate::config), some [counters](Counters), and a [knowledge database](crate::db::knowledge).
Procedures on a context, such as [resolve](Context::resolve) and [perform](Context::perform), are found in [procedures](crate::procedures).

# Example
```rust
# use otter_refute::context::Context;
# use otter_refute::config::Config;
# use otter_refute::structures::clause::Clause;
let premises = ["a", "~a v b", "~b v c"]
    .iter()
    .map(|s| s.parse::<Clause>())
    .collect::<Result<Vec<_>, _>>()
    .unwrap();

let mut the_context = Context::from_premises(Config::default(), premises);

let report = the_context.resolve(Some("c".parse().unwrap()), false).unwrap();
assert!(report.goal_is_true());
assert_eq!(report.short_str(), "c is true");

let report = the_context.resolve(Some("d".parse().unwrap()), false).unwrap();
assert!(!report.goal_is_true());
```
*/

mod counters;
pub use counters::Counters;

use crate::{config::Config, db::knowledge::KnowledgeDB, structures::clause::Clause};

/// The context of a resolution.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/resolution.
    pub counters: Counters,

    /// The knowledge database.
    /// See [db::knowledge](crate::db::knowledge) for details.
    pub knowledge_db: KnowledgeDB,
}

impl Context {
    /// Creates a context from some given configuration, without premises or goal.
    pub fn from_config(config: Config) -> Self {
        Self {
            knowledge_db: KnowledgeDB::new(&config),
            counters: Counters::default(),
            config,
        }
    }

    /// Creates a context from some given configuration, with the given premises.
    pub fn from_premises(config: Config, premises: impl IntoIterator<Item = Clause>) -> Self {
        let mut context = Self::from_config(config);
        for premise in premises {
            context.knowledge_db.add_premise(premise);
        }
        context
    }
}
