//! This module contains the justification evidence carried by batches.
//!
//! A batch that claims a window of finality network blocks carries a
//! [Justification]: the headers bracketing the start of its window, and, when
//! the network produced blocks in-window, a [Payload] with one inclusion
//! proof per block and the headers bracketing the end of the window.

use crate::header::Header;
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Encodable};

/// An opaque namespaced Merkle tree inclusion proof for one finality network
/// block's transactions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NmtProof(pub Bytes);

impl Encodable for NmtProof {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.0.encode(out)
    }
}

impl Decodable for NmtProof {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self(Bytes::decode(buf)?))
    }
}

/// The in-window evidence of a non-empty batch: one inclusion proof per
/// finality network block in the window, plus the headers bracketing the end
/// of the window.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Payload {
    /// One inclusion proof per finality network block in the window
    pub nmt_proofs: Vec<NmtProof>,
    /// The header of the last finality network block in the window
    pub last_block: Header,
    /// The header of the first finality network block after the window
    pub next_batch_first_block: Header,
}

impl Payload {
    /// Returns the number of finality network blocks covered by the payload.
    pub fn num_blocks(&self) -> u64 {
        self.nmt_proofs.len() as u64
    }

    fn rlp_payload_length(&self) -> usize {
        self.nmt_proofs.length() + self.last_block.length() + self.next_batch_first_block.length()
    }
}

impl Encodable for Payload {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let payload_length = self.rlp_payload_length();
        alloy_rlp::Header { list: true, payload_length }.encode(out);
        self.nmt_proofs.encode(out);
        self.last_block.encode(out);
        self.next_batch_first_block.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.rlp_payload_length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl Decodable for Payload {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = alloy_rlp::Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let nmt_proofs = Vec::<NmtProof>::decode(buf)?;
        let last_block = Header::decode(buf)?;
        let next_batch_first_block = Header::decode(buf)?;
        Ok(Self { nmt_proofs, last_block, next_batch_first_block })
    }
}

/// Bracketing evidence for a batch's finality network block-time window.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Justification {
    /// The header of the last finality network block before the window
    pub prev_batch_last_block: Header,
    /// The height of the first finality network block in the window
    pub first_block_number: u64,
    /// The header of the first finality network block in the window
    pub first_block: Header,
    /// The in-window evidence; absent when the finality network produced no
    /// blocks in the window
    pub payload: Option<Payload>,
}

impl Justification {
    fn rlp_payload_length(&self) -> usize {
        let mut length = self.prev_batch_last_block.length()
            + self.first_block_number.length()
            + self.first_block.length()
            + (self.payload.is_some() as u8).length();
        if let Some(payload) = &self.payload {
            length += payload.length();
        }
        length
    }
}

impl Encodable for Justification {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let payload_length = self.rlp_payload_length();
        alloy_rlp::Header { list: true, payload_length }.encode(out);
        self.prev_batch_last_block.encode(out);
        self.first_block_number.encode(out);
        self.first_block.encode(out);
        match &self.payload {
            Some(payload) => {
                1u8.encode(out);
                payload.encode(out);
            }
            None => 0u8.encode(out),
        }
    }

    fn length(&self) -> usize {
        let payload_length = self.rlp_payload_length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl Decodable for Justification {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = alloy_rlp::Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let prev_batch_last_block = Header::decode(buf)?;
        let first_block_number = u64::decode(buf)?;
        let first_block = Header::decode(buf)?;
        let payload = match u8::decode(buf)? {
            0 => None,
            1 => Some(Payload::decode(buf)?),
            _ => return Err(alloy_rlp::Error::Custom("invalid presence flag")),
        };
        Ok(Self { prev_batch_last_block, first_block_number, first_block, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_header;
    use alloc::vec;

    fn sample_justification(payload: Option<Payload>) -> Justification {
        Justification {
            prev_batch_last_block: sample_header(90, 7),
            first_block_number: 11,
            first_block: sample_header(100, 8),
            payload,
        }
    }

    #[test]
    fn test_justification_rlp_roundtrip_empty_window() {
        let jst = sample_justification(None);
        let mut buf = vec![];
        jst.encode(&mut buf);
        let decoded = Justification::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, jst);
    }

    #[test]
    fn test_justification_rlp_roundtrip_with_payload() {
        let payload = Payload {
            nmt_proofs: vec![NmtProof(Bytes::from(vec![0xde, 0xad])), NmtProof(Bytes::new())],
            last_block: sample_header(102, 8),
            next_batch_first_block: sample_header(104, 9),
        };
        let jst = sample_justification(Some(payload));
        let mut buf = vec![];
        jst.encode(&mut buf);
        let decoded = Justification::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, jst);
        assert_eq!(decoded.payload.unwrap().num_blocks(), 2);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_justification_json_roundtrip() {
        let payload = Payload {
            nmt_proofs: vec![NmtProof(Bytes::from(vec![0x01]))],
            last_block: sample_header(102, 8),
            next_batch_first_block: sample_header(104, 9),
        };
        let jst = sample_justification(Some(payload));
        let raw = serde_json::to_string(&jst).unwrap();
        let decoded: Justification = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, jst);
    }
}
