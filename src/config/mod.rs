/*!
Configuration of a context.

All configuration for a context is contained within [Config], and each parameter is a [ConfigOption] carrying its name and permitted range.

For the moment the only parameter is the step limit.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The maximum number of pairwise resolution steps permitted during a solve.
    ///
    /// One step is the examination of one pair of clauses, whether or not the pair has any resolvents.
    /// A solve which reaches the limit ends in the [Exhausted](ContextState::Exhausted) state, and reports [Unknown](crate::reports::Report::Unknown).
    pub step_limit: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration decides each formula of the test library while keeping pathological formulas from running without bound.
    fn default() -> Self {
        Config {
            step_limit: ConfigOption {
                name: "step_limit",
                min: 0,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 10_000,
            },
        }
    }
}
