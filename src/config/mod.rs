/*!
Configuration of a context.

All configuration for a context is contained within [Config].
The [knowledge database](crate::db::knowledge) clones the parts of the configuration it requires (the control strategy and the simplification strategies).

# Example

```rust
# use otter_refute::config::{Config, ControlStrategy, ResolutionRule};
# use otter_refute::simplification::SimplificationStrategy;
let mut config = Config::default();
config.control_strategy.value = ControlStrategy::SaturationByLevels;
config.simplification = vec![SimplificationStrategy::RedundantClauseRemoval];
config.resolution_rule.value = ResolutionRule::suited_to(&config.simplification);

assert_eq!(config.resolution_rule.value, ResolutionRule::TautologyPreserving);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod control_strategy;
pub use control_strategy::ControlStrategy;

mod resolution_rule;
pub use resolution_rule::ResolutionRule;

use crate::simplification::SimplificationStrategy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which pairs of clauses are resolved during a saturation round.
    pub control_strategy: ConfigOption<ControlStrategy>,

    /// How a pair of clauses is resolved.
    pub resolution_rule: ConfigOption<ResolutionRule>,

    /// Simplifications of the working set, applied in order.
    pub simplification: Vec<SimplificationStrategy>,

    /// Keep knowledge acquired during one inquiry for the next inquiry.
    pub keep_acquired_knowledge: ConfigOption<bool>,
}

impl Default for Config {
    /// The default configuration mirrors a set of support search, with both simplifications applied.
    fn default() -> Self {
        let simplification = vec![
            SimplificationStrategy::RedundantClauseRemoval,
            SimplificationStrategy::InsignificantClauseRemoval,
        ];

        Config {
            control_strategy: ConfigOption {
                name: "control_strategy",
                value: ControlStrategy::SupportSet,
            },

            resolution_rule: ConfigOption {
                name: "resolution_rule",
                value: ResolutionRule::suited_to(&simplification),
            },

            simplification,

            keep_acquired_knowledge: ConfigOption {
                name: "keep_acquired_knowledge",
                value: false,
            },
        }
    }
}
