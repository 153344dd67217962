//! This module contains the finality network header types.

use crate::commit::{Commitment, CommitmentBuilder, Committable};
use alloy_primitives::{Bytes, B256, U256};
use alloy_rlp::{Decodable, Encodable};

/// The transactions root of a finality network block: a namespaced Merkle
/// tree root committing to the ordered transactions of the block.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NmtRoot {
    /// The raw root bytes
    pub root: Bytes,
}

impl Committable for NmtRoot {
    fn commit(&self) -> Commitment {
        CommitmentBuilder::new("NMT_ROOT").var_size_field("root", &self.root).finalize()
    }
}

impl Encodable for NmtRoot {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.root.encode(out)
    }
}

impl Decodable for NmtRoot {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self { root: Bytes::decode(buf)? })
    }
}

/// The L1 block reference a finality network header commits to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct L1BlockInfo {
    /// The L1 block number
    pub number: u64,
    /// The L1 block timestamp
    pub timestamp: U256,
    /// The L1 block hash
    pub hash: B256,
}

impl Committable for L1BlockInfo {
    fn commit(&self) -> Commitment {
        CommitmentBuilder::new("L1BLOCK")
            .u64_field("number", self.number)
            .fixed_size_field("timestamp", &self.timestamp.to_be_bytes::<32>())
            .fixed_size_field("hash", self.hash.as_slice())
            .finalize()
    }
}

impl Encodable for L1BlockInfo {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let payload_length =
            self.number.length() + self.timestamp.length() + self.hash.length();
        alloy_rlp::Header { list: true, payload_length }.encode(out);
        self.number.encode(out);
        self.timestamp.encode(out);
        self.hash.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length =
            self.number.length() + self.timestamp.length() + self.hash.length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl Decodable for L1BlockInfo {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = alloy_rlp::Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let number = u64::decode(buf)?;
        let timestamp = U256::decode(buf)?;
        let hash = B256::decode(buf)?;
        Ok(Self { number, timestamp, hash })
    }
}

/// A finality network block header.
///
/// Headers are content-addressed: [Header::commit] maps a header to a
/// fixed-width digest, and structurally equal headers always commit to the
/// same digest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    /// The transactions root of the block
    pub transactions_root: NmtRoot,
    /// The block timestamp
    pub timestamp: u64,
    /// The height of the L1 head the block was built against
    pub l1_head: u64,
    /// The finalized L1 block reference, if one was known
    pub l1_finalized: Option<L1BlockInfo>,
}

impl Committable for Header {
    fn commit(&self) -> Commitment {
        CommitmentBuilder::new("BLOCK")
            .field("transactions_root", self.transactions_root.commit())
            .u64_field("timestamp", self.timestamp)
            .u64_field("l1_head", self.l1_head)
            .optional_field("l1_finalized", self.l1_finalized.as_ref())
            .finalize()
    }
}

impl Header {
    fn rlp_payload_length(&self) -> usize {
        let mut length = self.transactions_root.length()
            + self.timestamp.length()
            + self.l1_head.length()
            + (self.l1_finalized.is_some() as u8).length();
        if let Some(info) = &self.l1_finalized {
            length += info.length();
        }
        length
    }
}

impl Encodable for Header {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let payload_length = self.rlp_payload_length();
        alloy_rlp::Header { list: true, payload_length }.encode(out);
        self.transactions_root.encode(out);
        self.timestamp.encode(out);
        self.l1_head.encode(out);
        match &self.l1_finalized {
            Some(info) => {
                1u8.encode(out);
                info.encode(out);
            }
            None => 0u8.encode(out),
        }
    }

    fn length(&self) -> usize {
        let payload_length = self.rlp_payload_length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl Decodable for Header {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = alloy_rlp::Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let transactions_root = NmtRoot::decode(buf)?;
        let timestamp = u64::decode(buf)?;
        let l1_head = u64::decode(buf)?;
        let l1_finalized = match u8::decode(buf)? {
            0 => None,
            1 => Some(L1BlockInfo::decode(buf)?),
            _ => return Err(alloy_rlp::Error::Custom("invalid presence flag")),
        };
        Ok(Self { transactions_root, timestamp, l1_head, l1_finalized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};
    use alloy_primitives::b256;

    fn reference_nmt_root() -> NmtRoot {
        NmtRoot { root: Bytes::from(vec![0u8; 48]) }
    }

    fn reference_l1_block_info() -> L1BlockInfo {
        L1BlockInfo {
            number: 123,
            timestamp: U256::from(0x456),
            hash: b256!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"),
        }
    }

    fn reference_header() -> Header {
        Header {
            transactions_root: reference_nmt_root(),
            timestamp: 789,
            l1_head: 124,
            l1_finalized: Some(reference_l1_block_info()),
        }
    }

    fn remove_whitespace(s: &str) -> String {
        s.split_whitespace().collect()
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_nmt_root_json() {
        let data = remove_whitespace(
            r#"{
                "root": "0x000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"
            }"#,
        );

        let encoded = serde_json::to_string(&reference_nmt_root()).unwrap();
        assert_eq!(encoded, data);

        let decoded: NmtRoot = serde_json::from_str(&data).unwrap();
        assert_eq!(decoded, reference_nmt_root());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_l1_block_info_json() {
        let data = remove_whitespace(
            r#"{
                "number": 123,
                "timestamp": "0x456",
                "hash": "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
            }"#,
        );

        let encoded = serde_json::to_string(&reference_l1_block_info()).unwrap();
        assert_eq!(encoded, data);

        let decoded: L1BlockInfo = serde_json::from_str(&data).unwrap();
        assert_eq!(decoded, reference_l1_block_info());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_header_json_roundtrip() {
        let header = reference_header();
        let raw = serde_json::to_string(&header).unwrap();
        let decoded: Header = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.commit(), header.commit());
    }

    #[test]
    fn test_header_rlp_roundtrip_preserves_commitment() {
        let header = reference_header();
        let mut buf = Vec::new();
        header.encode(&mut buf);
        let decoded = Header::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.commit(), header.commit());
    }

    #[test]
    fn test_header_rlp_roundtrip_without_finalized() {
        let header = Header { l1_finalized: None, ..reference_header() };
        let mut buf = Vec::new();
        header.encode(&mut buf);
        let decoded = Header::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_l1_block_info_rlp_roundtrip() {
        let info = reference_l1_block_info();
        let mut buf = Vec::new();
        info.encode(&mut buf);
        let decoded = L1BlockInfo::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn test_commitments_deterministic() {
        assert_eq!(reference_nmt_root().commit(), reference_nmt_root().commit());
        assert_eq!(reference_l1_block_info().commit(), reference_l1_block_info().commit());
        assert_eq!(reference_header().commit(), reference_header().commit());
    }

    #[test]
    fn test_header_commitment_binds_fields() {
        let header = reference_header();
        let mut perturbed = header.clone();
        perturbed.timestamp += 1;
        assert_ne!(perturbed.commit(), header.commit());

        let mut perturbed = header.clone();
        perturbed.l1_finalized = None;
        assert_ne!(perturbed.commit(), header.commit());

        let mut perturbed = header.clone();
        perturbed.transactions_root = NmtRoot { root: Bytes::from(vec![1u8; 48]) };
        assert_ne!(perturbed.commit(), header.commit());
    }
}
