//! Per-tick metrics for the tick engine.
//!
//! [`TickMetrics`] captures timing and resolver counters for a single
//! tick.

/// Timing and resolver counters collected during a single tick.
///
/// All durations are in microseconds. The engine populates these fields
/// after each tick; consumers read them from the most recent tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent in the Scan phase, in microseconds.
    pub scan_us: u64,
    /// Time spent in the Resolve phase, in microseconds.
    pub resolve_us: u64,
    /// Non-Void cells visited during Scan.
    pub occupied_cells: usize,
    /// Requests staged into the ledger.
    pub staged: usize,
    /// Staging attempts refused for pointing off-grid.
    pub rejected_out_of_bounds: u32,
    /// Requests dropped by the Filter invariant policy.
    pub filtered: usize,
    /// Destinations with more than one contender.
    pub contested_destinations: usize,
    /// Requests written to the grid.
    pub committed: usize,
    /// Contenders dropped before the draw because a slot they touch was
    /// already written this tick.
    pub dropped_by_claim: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.scan_us, 0);
        assert_eq!(m.resolve_us, 0);
        assert_eq!(m.occupied_cells, 0);
        assert_eq!(m.staged, 0);
        assert_eq!(m.rejected_out_of_bounds, 0);
        assert_eq!(m.filtered, 0);
        assert_eq!(m.contested_destinations, 0);
        assert_eq!(m.committed, 0);
        assert_eq!(m.dropped_by_claim, 0);
    }
}
