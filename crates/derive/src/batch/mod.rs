//! This module contains the batch types and the batch-validity checker.

use kopi_finality::HeaderVerifier;
use kopi_primitives::{BlockInfo, L2BlockInfo, RollupConfig};

mod validity;
pub use validity::BatchValidity;

mod single_batch;
pub use single_batch::SingleBatch;

mod finality;

/// A batch with its L1 inclusion block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWithInclusionBlock {
    /// The inclusion block
    pub inclusion_block: BlockInfo,
    /// The batch
    pub batch: SingleBatch,
}

impl BatchWithInclusionBlock {
    /// Creates a new batch with inclusion block.
    pub const fn new(inclusion_block: BlockInfo, batch: SingleBatch) -> Self {
        Self { inclusion_block, batch }
    }

    /// Validates the batch can be applied on top of the specified L2 safe head.
    /// The first entry of the l1_blocks should match the origin of the l2_safe_head.
    /// One or more consecutive l1_blocks should be provided.
    /// In case of only a single L1 block, the decision whether a batch is valid may have to stay
    /// undecided.
    pub async fn check_batch<V: HeaderVerifier>(
        &self,
        cfg: &RollupConfig,
        l1_blocks: &[BlockInfo],
        l2_safe_head: L2BlockInfo,
        finality_enabled: bool,
        verifier: &mut V,
    ) -> BatchValidity {
        self.batch
            .check_batch(cfg, l1_blocks, l2_safe_head, &self.inclusion_block, finality_enabled, verifier)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kopi_finality::test_utils::TestHeaderVerifier;

    #[tokio::test]
    async fn test_batch_with_inclusion_block_forwards() {
        let batch = SingleBatch { timestamp: 104, ..Default::default() };
        let wrapped = BatchWithInclusionBlock::new(BlockInfo::default(), batch);
        let safe_head = L2BlockInfo {
            block_info: BlockInfo { timestamp: 100, ..Default::default() },
            ..Default::default()
        };
        let l1_blocks = vec![BlockInfo::default()];
        let cfg = RollupConfig { block_time: 2, ..Default::default() };
        let mut verifier = TestHeaderVerifier::default();
        // Timestamp past the next slot: deferred to a future window.
        let validity =
            wrapped.check_batch(&cfg, &l1_blocks, safe_head, false, &mut verifier).await;
        assert_eq!(validity, BatchValidity::Future);
    }
}
