use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of resolution steps made during the current (or most recent) solve.
    ///
    /// One step is the examination of one pair of clauses.
    /// The step limit applies to this count, which resets when a solve begins.
    pub fresh_steps: usize,

    /// A count of every resolution step made, across all solves of the context.
    pub total_steps: usize,

    /// A count of every round of pair enumeration, across all solves of the context.
    pub total_rounds: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            fresh_steps: 0,
            total_steps: 0,

            total_rounds: 0,

            time: Duration::from_secs(0),
        }
    }
}
