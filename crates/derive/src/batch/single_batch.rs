//! This module contains the [SingleBatch] type and the core validity checker.

use crate::{batch::BatchValidity, errors::BatchDecodingError};
use alloc::vec::Vec;
use alloy_primitives::BlockHash;
use alloy_rlp::{Decodable, Encodable};
use kopi_finality::{HeaderVerifier, Justification};
use kopi_primitives::{BlockID, BlockInfo, L2BlockInfo, RawTransaction, RollupConfig};
use tracing::{info, trace, warn};

/// Represents a single batch: a single encoded L2 block
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SingleBatch {
    /// Block hash of the previous L2 block
    pub parent_hash: BlockHash,
    /// The batch epoch number. Same as the first L1 block number in the epoch.
    pub epoch_num: u64,
    /// The block hash of the first L1 block in the epoch
    pub epoch_hash: BlockHash,
    /// The L2 block timestamp of this batch
    pub timestamp: u64,
    /// The L2 block transactions in this batch
    pub transactions: Vec<RawTransaction>,
    /// The finality network window evidence; only present when batches are
    /// validated against the fast-finality network
    pub justification: Option<Justification>,
}

impl Encodable for SingleBatch {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.parent_hash.encode(out);
        self.epoch_num.encode(out);
        self.epoch_hash.encode(out);
        self.timestamp.encode(out);
        self.transactions.encode(out);
        match &self.justification {
            Some(justification) => {
                1u8.encode(out);
                justification.encode(out);
            }
            None => 0u8.encode(out),
        }
    }
}

impl Decodable for SingleBatch {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let parent_hash = Decodable::decode(buf)?;
        let epoch_num = Decodable::decode(buf)?;
        let epoch_hash = Decodable::decode(buf)?;
        let timestamp = Decodable::decode(buf)?;
        let transactions = Decodable::decode(buf)?;
        let justification = match u8::decode(buf)? {
            0 => None,
            1 => Some(Justification::decode(buf)?),
            _ => return Err(alloy_rlp::Error::Custom("invalid presence flag")),
        };

        Ok(Self { parent_hash, epoch_num, epoch_hash, timestamp, transactions, justification })
    }
}

impl SingleBatch {
    /// Attempts to decode a batch from a reader, checking for an empty buffer
    /// up front.
    pub fn decode_batch(r: &mut &[u8]) -> Result<Self, BatchDecodingError> {
        if r.is_empty() {
            return Err(BatchDecodingError::EmptyBuffer);
        }
        Ok(Self::decode(r)?)
    }

    /// If any transactions are empty or deposited transaction types.
    pub fn has_invalid_transactions(&self) -> bool {
        self.transactions.iter().any(|tx| tx.is_empty() || tx.is_deposit())
    }

    /// Returns the [BlockID] of the batch's epoch.
    pub const fn epoch(&self) -> BlockID {
        BlockID { hash: self.epoch_hash, number: self.epoch_num }
    }

    /// Checks if the batch can be applied on top of the given L2 safe head,
    /// given the contextual L1 blocks the batch was included in.
    ///
    /// The first entry of `l1_blocks` must match the origin of the L2 safe
    /// head. One or more consecutive L1 blocks should be provided. In case of
    /// only a single L1 block, the decision whether a batch is valid may have
    /// to stay [BatchValidity::Undecided].
    pub async fn check_batch<V: HeaderVerifier>(
        &self,
        cfg: &RollupConfig,
        l1_blocks: &[BlockInfo],
        l2_safe_head: L2BlockInfo,
        inclusion_block: &BlockInfo,
        finality_enabled: bool,
        verifier: &mut V,
    ) -> BatchValidity {
        trace!(
            target: "single-batch",
            batch_timestamp = self.timestamp,
            parent_hash = %self.parent_hash,
            batch_epoch = %self.epoch(),
            txs = self.transactions.len(),
            "checking batch"
        );

        // Sanity check input consistency: without any L1 blocks in view no
        // determination can be made.
        if l1_blocks.is_empty() {
            warn!(target: "single-batch", "missing L1 block input, cannot proceed with batch checking");
            return BatchValidity::Undecided;
        }
        let epoch = l1_blocks[0];

        // Batches occupy fixed-size time slots on top of the safe head.
        let next_timestamp = l2_safe_head.block_info.timestamp + cfg.block_time;
        if self.timestamp > next_timestamp {
            trace!(
                target: "single-batch",
                "received out-of-order batch for future processing after next batch, next_timestamp: {next_timestamp}"
            );
            return BatchValidity::Future;
        }
        if self.timestamp < next_timestamp {
            warn!(target: "single-batch", "dropping batch with old timestamp, min_timestamp: {next_timestamp}");
            return BatchValidity::Drop;
        }

        // Dependent on the above timestamp check. If the timestamp is correct,
        // then it must build on top of the safe head.
        if self.parent_hash != l2_safe_head.block_info.hash {
            warn!(
                target: "single-batch",
                "ignoring batch with mismatching parent hash, current_safe_head: {}",
                l2_safe_head.block_info.hash
            );
            return BatchValidity::Drop;
        }

        // Filter out batches that were included too late.
        if self.epoch_num + cfg.seq_window_size < inclusion_block.number {
            warn!(target: "single-batch", "batch was included too late, sequence window expired");
            return BatchValidity::Drop;
        }

        // Check the L1 origin of the batch.
        let mut batch_origin = epoch;
        if self.epoch_num < epoch.number {
            warn!(target: "single-batch", "dropped batch, epoch is too old, minimum: {}", epoch.id());
            return BatchValidity::Drop;
        } else if self.epoch_num == epoch.number {
            // Batch is sticking to the current epoch, continue.
        } else if self.epoch_num == epoch.number + 1 {
            // With only 1 l1 block we cannot look at the next L1 origin.
            // Note: This means that we are unable to determine validity of a batch
            // without more information. In this case we should bail out until we have
            // more information otherwise the eager algorithm may diverge from a non-eager
            // algorithm.
            if l1_blocks.len() < 2 {
                info!(
                    target: "single-batch",
                    "eager batch wants to advance epoch, but could not without more L1 blocks, current_epoch: {}",
                    epoch.id()
                );
                return BatchValidity::Undecided;
            }
            batch_origin = l1_blocks[1];
        } else {
            warn!(
                target: "single-batch",
                "batch is for future epoch too far ahead, while it has the next timestamp, so it must be invalid, current_epoch: {}",
                epoch.id()
            );
            return BatchValidity::Drop;
        }

        // Guard against L1 reorgs presenting a same-numbered block with a
        // different identity.
        if self.epoch_hash != batch_origin.hash {
            warn!(
                target: "single-batch",
                "batch is for different L1 chain, epoch hash does not match, expected: {}",
                batch_origin.id()
            );
            return BatchValidity::Drop;
        }

        if self.timestamp < batch_origin.timestamp {
            warn!(
                target: "single-batch",
                "batch timestamp is less than L1 origin timestamp, l2_timestamp: {}, l1_timestamp: {}, origin: {}",
                self.timestamp,
                batch_origin.timestamp,
                batch_origin.id()
            );
            return BatchValidity::Drop;
        }

        // Check if we ran out of sequencer time drift.
        let Some(max) = batch_origin.timestamp.checked_add(cfg.max_sequencer_drift) else {
            warn!(target: "single-batch", "max sequencer drift overflows, dropping batch");
            return BatchValidity::Drop;
        };
        if self.timestamp > max {
            if self.transactions.is_empty() {
                // If the sequencer is co-operating by producing an empty batch,
                // then allow the batch if it was the right thing to do to maintain the L2 time >=
                // L1 time invariant. We only check batches that do not advance the
                // epoch, to ensure epoch advancement regardless of time drift is allowed.
                if epoch.number == batch_origin.number {
                    if l1_blocks.len() < 2 {
                        info!(
                            target: "single-batch",
                            "without the next L1 origin we cannot determine yet if this empty batch that exceeds the time drift is still valid"
                        );
                        return BatchValidity::Undecided;
                    }
                    let next_origin = l1_blocks[1];
                    // Check if the next L1 origin could have been adopted.
                    if self.timestamp >= next_origin.timestamp {
                        info!(
                            target: "single-batch",
                            "batch exceeded sequencer time drift without adopting next origin, and next L1 origin would have been valid"
                        );
                        return BatchValidity::Drop;
                    }
                    info!(target: "single-batch", "continuing with empty batch before late L1 block to preserve L2 time invariant");
                }
            } else {
                // If the sequencer is ignoring the time drift rule, then drop the batch and force
                // an empty batch instead, as the sequencer is not allowed to include anything past
                // this point without moving to the next epoch.
                warn!(
                    target: "single-batch",
                    "batch exceeded sequencer time drift, sequencer must adopt new L1 origin to include transactions again, max_time: {max}"
                );
                return BatchValidity::Drop;
            }
        }

        // We can do this check earlier, but it's a more intensive one, so we do it last.
        for (i, tx) in self.transactions.iter().enumerate() {
            if tx.is_empty() {
                warn!(
                    target: "single-batch",
                    "transaction data must not be empty, but found empty tx, tx_index: {i}"
                );
                return BatchValidity::Drop;
            }
            if tx.is_deposit() {
                warn!(
                    target: "single-batch",
                    "sequencers may not embed any deposits into batch data, but found tx that has one, tx_index: {i}"
                );
                return BatchValidity::Drop;
            }
        }

        if finality_enabled {
            return self.check_batch_finality(cfg, l1_blocks, l2_safe_head, verifier).await;
        }
        BatchValidity::Accept
    }
}
