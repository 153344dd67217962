//! Contains the [RawTransaction] type.

use crate::params::DEPOSIT_TX_TYPE;
use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Encodable};

/// A raw transaction
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct RawTransaction(pub Bytes);

impl RawTransaction {
    /// Returns if the transaction is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns if the transaction is a protocol deposit
    pub fn is_deposit(&self) -> bool {
        !self.0.is_empty() && self.0[0] == DEPOSIT_TX_TYPE
    }
}

impl<T: Into<Bytes>> From<T> for RawTransaction {
    fn from(bytes: T) -> Self {
        Self(bytes.into())
    }
}

impl Encodable for RawTransaction {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.0.encode(out)
    }
}

impl Decodable for RawTransaction {
    /// Decodes RLP encoded bytes into [RawTransaction] bytes
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let tx_bytes = Bytes::decode(buf)?;
        Ok(Self(tx_bytes))
    }
}

impl AsRef<[u8]> for RawTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_raw_transaction_rlp_roundtrip() {
        let tx = RawTransaction(Bytes::from(vec![0x02, 0xaa, 0xbb]));
        let mut buf = vec![];
        tx.encode(&mut buf);
        let decoded = RawTransaction::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_raw_transaction_deposit_detection() {
        assert!(RawTransaction(Bytes::from(vec![DEPOSIT_TX_TYPE])).is_deposit());
        assert!(!RawTransaction(Bytes::from(vec![0x02])).is_deposit());
        assert!(!RawTransaction(Bytes::new()).is_deposit());
        assert!(RawTransaction(Bytes::new()).is_empty());
    }
}
