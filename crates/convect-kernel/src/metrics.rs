//! Per-step timing metrics.

use indexmap::IndexMap;

/// Wall-clock timings collected while advancing one step.
///
/// All durations are in microseconds. `sweep_us` is keyed by sweep name
/// with insertion order equal to execution order, so iterating the map
/// replays the step sequence.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Total time for the step, in microseconds.
    pub total_us: u64,
    /// Per-sweep execution times, in execution order.
    pub sweep_us: IndexMap<&'static str, u64>,
}
