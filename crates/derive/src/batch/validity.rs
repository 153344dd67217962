//! Contains the [BatchValidity] verdict type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Batch Validity
///
/// The verdict of checking a batch against the current L2 safe head and the
/// L1 view. Every code path through the checker terminates in exactly one of
/// these four values; there is no separate error channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchValidity {
    /// The batch is invalid now and in the future, unless we reorg
    Drop,
    /// The batch is valid and should be processed
    Accept,
    /// We are lacking L1 information until we can proceed batch filtering
    Undecided,
    /// The batch may be valid, but cannot be processed yet and should be checked again later
    Future,
}

impl BatchValidity {
    /// Returns if the batch is dropped.
    pub const fn is_drop(&self) -> bool {
        matches!(self, Self::Drop)
    }

    /// Returns if the batch is accepted.
    pub const fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Returns if the batch is undecided.
    pub const fn is_undecided(&self) -> bool {
        matches!(self, Self::Undecided)
    }

    /// Returns if the batch is future.
    pub const fn is_future(&self) -> bool {
        matches!(self, Self::Future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_validity_predicates() {
        assert!(BatchValidity::Drop.is_drop());
        assert!(BatchValidity::Accept.is_accept());
        assert!(BatchValidity::Undecided.is_undecided());
        assert!(BatchValidity::Future.is_future());
        assert!(!BatchValidity::Accept.is_drop());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_batch_validity_serde_roundtrip() {
        let validity = BatchValidity::Undecided;
        let raw = serde_json::to_string(&validity).unwrap();
        let decoded: BatchValidity = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, validity);
    }
}
