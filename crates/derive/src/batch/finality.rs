//! Validation of batches against the fast-finality network.
//!
//! A batch checked here has already passed the core validity gates. The
//! extension confirms that the batch's declared window of finality network
//! blocks is bracketed by verifiable headers, and that an empty batch is
//! justified by one of the two permitted no-activity conditions.

use crate::batch::{BatchValidity, SingleBatch};
use kopi_finality::HeaderVerifier;
use kopi_primitives::{BlockInfo, L2BlockInfo, RollupConfig};
use tracing::{info, warn};

impl SingleBatch {
    /// Checks the batch against the fast-finality network. Invoked only
    /// after the core gates of [SingleBatch::check_batch] have passed.
    ///
    /// The batch's justification headers are verified through the injected
    /// [HeaderVerifier]; a verification error is absorbed as
    /// [BatchValidity::Future] so the caller retries once the verifier's
    /// view catches up.
    pub async fn check_batch_finality<V: HeaderVerifier>(
        &self,
        cfg: &RollupConfig,
        l1_blocks: &[BlockInfo],
        l2_safe_head: L2BlockInfo,
        verifier: &mut V,
    ) -> BatchValidity {
        let Some(prev_l1_origin) = l1_blocks.first() else {
            warn!(target: "batch-finality", "missing L1 block input, cannot proceed with batch checking");
            return BatchValidity::Undecided;
        };

        // Finality network batches must carry a justification.
        let Some(jst) = &self.justification else {
            warn!(target: "batch-finality", "dropping batch without justification");
            return BatchValidity::Drop;
        };

        // A window starting at the network's genesis block has no previous
        // block to bracket it with.
        let Some(prev_height) = jst.first_block_number.checked_sub(1) else {
            warn!(target: "batch-finality", "dropping batch with justification window starting at genesis");
            return BatchValidity::Drop;
        };

        // Validate the headers that represent the beginning of the L2 block
        // range of this batch.
        let start_headers = [jst.prev_batch_last_block.clone(), jst.first_block.clone()];
        let start_heights = [prev_height, jst.first_block_number];
        if let Err(err) = verifier.verify_headers(&start_headers, &start_heights).await {
            // The headers may simply not be available yet, e.g. the
            // verifier's L1 client is behind; retry later.
            // TODO: drop the batch if the header is invalid instead of unavailable.
            info!(target: "batch-finality", "could not verify start headers: {err}");
            return BatchValidity::Future;
        }

        // The per-slot window of finality network block time this batch claims.
        let window_start = l2_safe_head.block_info.timestamp + cfg.block_time;
        let window_end = window_start + cfg.block_time;

        // First, check for cases where it is valid to have an empty batch.
        let Some(payload) = &jst.payload else {
            // If the finality network did not produce any blocks in this
            // window, an empty batch is valid. In this case, the L1 origin
            // must be the same as the previous block's.
            if jst.first_block.timestamp >= window_end {
                if self.epoch_num != prev_l1_origin.number {
                    warn!(
                        target: "batch-finality",
                        "empty batch over inactive window must keep L1 origin, epoch: {}, expected: {}",
                        self.epoch_num,
                        prev_l1_origin.number
                    );
                    return BatchValidity::Drop;
                }
                return BatchValidity::Accept;
            }

            // An empty batch is also valid if the network's L1 anchor jumped
            // past a block. In this case, the L1 origin must increase by one.
            let skipped_l1_block =
                jst.first_block.l1_head > jst.prev_batch_last_block.l1_head + 1;
            if skipped_l1_block {
                if self.epoch_num != prev_l1_origin.number + 1 {
                    warn!(
                        target: "batch-finality",
                        "empty batch over skipped L1 anchor must advance L1 origin, epoch: {}, expected: {}",
                        self.epoch_num,
                        prev_l1_origin.number + 1
                    );
                    return BatchValidity::Drop;
                }
                return BatchValidity::Accept;
            }

            // At this point, there is no valid reason to have an empty payload.
            warn!(target: "batch-finality", "dropping empty batch with no valid justification");
            return BatchValidity::Drop;
        };

        // Validate the headers representing the end of the batch window.
        let num_blocks = payload.num_blocks();
        let end_headers = [payload.last_block.clone(), payload.next_batch_first_block.clone()];
        let end_heights =
            [jst.first_block_number + num_blocks, jst.first_block_number + num_blocks + 1];
        if let Err(err) = verifier.verify_headers(&end_headers, &end_heights).await {
            // TODO: drop the batch if there is a true validation error.
            info!(target: "batch-finality", "could not verify end headers: {err}");
            return BatchValidity::Future;
        }

        // Check that the claimed range of finality network blocks falls
        // exactly within the window.
        let valid_range = jst.prev_batch_last_block.timestamp < window_start
            && jst.first_block.timestamp >= window_start
            && payload.last_block.timestamp < window_end
            && payload.next_batch_first_block.timestamp >= window_end;
        if !valid_range {
            warn!(
                target: "batch-finality",
                "dropping batch with block range outside its window, window_start: {window_start}, window_end: {window_end}"
            );
            return BatchValidity::Drop;
        }

        // TODO: validate the NMT inclusion proofs against the committed
        // transactions root.

        BatchValidity::Accept
    }
}
