//! This module contains the block reference types.

use alloy_primitives::B256;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// L1 Block Header Info
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct BlockInfo {
    /// The block hash
    pub hash: B256,
    /// The block number
    pub number: u64,
    /// The parent block hash
    pub parent_hash: B256,
    /// The block timestamp
    pub timestamp: u64,
}

impl BlockInfo {
    /// Instantiates a new [BlockInfo].
    pub const fn new(hash: B256, number: u64, parent_hash: B256, timestamp: u64) -> Self {
        Self { hash, number, parent_hash, timestamp }
    }

    /// Returns the block ID.
    pub const fn id(&self) -> BlockID {
        BlockID { hash: self.hash, number: self.number }
    }
}

impl core::fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "BlockInfo {{ hash: {}, number: {}, parent_hash: {}, timestamp: {} }}",
            self.hash, self.number, self.parent_hash, self.timestamp
        )
    }
}

/// A Block ID identifies a block by its hash and number
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct BlockID {
    /// The block hash
    pub hash: B256,
    /// The block number
    pub number: u64,
}

impl core::fmt::Display for BlockID {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{ hash: {}, number: {} }}", self.hash, self.number)
    }
}

/// L2 Block Header Info
///
/// A snapshot of the L2 safe head: the base block reference plus the L1
/// origin the block was derived against.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct L2BlockInfo {
    /// The base [BlockInfo]
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub block_info: BlockInfo,
    /// The L1 origin [BlockID]
    #[cfg_attr(feature = "serde", serde(rename = "l1origin"))]
    pub l1_origin: BlockID,
    /// The distance to the first block of the associated epoch
    #[cfg_attr(feature = "serde", serde(rename = "sequenceNumber"))]
    pub seq_num: u64,
}

impl L2BlockInfo {
    /// Instantiates a new [L2BlockInfo].
    pub const fn new(block_info: BlockInfo, l1_origin: BlockID, seq_num: u64) -> Self {
        Self { block_info, l1_origin, seq_num }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_block_id_from_info() {
        let info = BlockInfo {
            hash: b256!("f77577bbaf8f76b3e2ebadbd50c7328326d3ba4cc2a0575b94f29864703bdffd"),
            number: 42,
            parent_hash: B256::ZERO,
            timestamp: 1717000000,
        };
        assert_eq!(info.id(), BlockID { hash: info.hash, number: 42 });
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_l2_block_info_serde_roundtrip() {
        let l2_info = L2BlockInfo {
            block_info: BlockInfo {
                hash: B256::with_last_byte(1),
                number: 10,
                parent_hash: B256::with_last_byte(2),
                timestamp: 100,
            },
            l1_origin: BlockID { hash: B256::with_last_byte(3), number: 9 },
            seq_num: 0,
        };
        let raw = serde_json::to_string(&l2_info).unwrap();
        let decoded: L2BlockInfo = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, l2_info);
    }
}
