//! This module contains batch decoding errors.

/// An error encountered while decoding a batch from its wire encoding.
///
/// Validity checking itself never surfaces errors; every checking outcome is
/// a [BatchValidity] value. Decoding is the only fallible surface.
///
/// [BatchValidity]: crate::batch::BatchValidity
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum BatchDecodingError {
    /// The buffer is empty.
    #[display("Empty buffer")]
    EmptyBuffer,
    /// An RLP decoding error.
    #[display("RLP error: {_0}")]
    AlloyRlpError(alloy_rlp::Error),
}

impl From<alloy_rlp::Error> for BatchDecodingError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::AlloyRlpError(err)
    }
}

impl core::error::Error for BatchDecodingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_batch_decoding_error_display() {
        assert_eq!(BatchDecodingError::EmptyBuffer.to_string(), "Empty buffer");
        let err = BatchDecodingError::from(alloy_rlp::Error::UnexpectedString);
        assert!(err.to_string().starts_with("RLP error"));
    }
}
