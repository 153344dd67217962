//! This module contains the [RollupConfig] type.

/// The Rollup configuration.
///
/// The subset of the chain configuration read by the batch-validity checker.
/// All fields are fixed for the lifetime of a call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollupConfig {
    /// The block time of the L2, in seconds.
    pub block_time: u64,
    /// Sequencer batches may not be more than `max_sequencer_drift` seconds
    /// after the L1 timestamp of their origin.
    ///
    /// Note: When L1 has many 1 second consecutive blocks, and L2 grows at fixed 2 seconds,
    /// the L2 time may still grow beyond this difference.
    pub max_sequencer_drift: u64,
    /// The sequencer window size: the maximum number of L1 blocks a batch may
    /// be delayed past its epoch before it must be dropped.
    pub seq_window_size: u64,
    /// The L1 chain ID
    pub l1_chain_id: u64,
    /// The L2 chain ID
    pub l2_chain_id: u64,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            block_time: 2,
            max_sequencer_drift: 600,
            seq_window_size: 3600,
            l1_chain_id: 1,
            l2_chain_id: 10,
        }
    }
}

impl RollupConfig {
    /// Returns the timestamp of the next L2 block after the given safe head timestamp.
    pub const fn next_timestamp(&self, safe_head_time: u64) -> u64 {
        safe_head_time + self.block_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_timestamp() {
        let cfg = RollupConfig { block_time: 2, ..Default::default() };
        assert_eq!(cfg.next_timestamp(100), 102);
    }
}
