//! Test utilities for the finality network interfaces.

use crate::{header::Header, traits::HeaderVerifier};
use alloc::{boxed::Box, vec::Vec};
use alloy_primitives::Bytes;
use async_trait::async_trait;

/// An error returned by the [TestHeaderVerifier].
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
#[display("header verification unavailable")]
pub struct TestHeaderVerifierError;

impl core::error::Error for TestHeaderVerifierError {}

/// A mock [HeaderVerifier] that records calls and replays queued outcomes.
///
/// Outcomes are consumed front-to-back, one per `verify_headers` call; when
/// the queue is exhausted every call succeeds.
#[derive(Debug, Default, Clone)]
pub struct TestHeaderVerifier {
    /// Holds verify calls with args for assertions.
    pub verify_calls: Vec<(Vec<Header>, Vec<u64>)>,
    /// A queue of outcomes to return from `verify_headers`.
    pub outcomes: Vec<Result<(), TestHeaderVerifierError>>,
}

impl TestHeaderVerifier {
    /// Creates a verifier that replays the given outcomes in order.
    pub fn with_outcomes(outcomes: Vec<Result<(), TestHeaderVerifierError>>) -> Self {
        Self { verify_calls: Vec::new(), outcomes }
    }
}

#[async_trait]
impl HeaderVerifier for TestHeaderVerifier {
    type Error = TestHeaderVerifierError;

    async fn verify_headers(
        &mut self,
        headers: &[Header],
        heights: &[u64],
    ) -> Result<(), Self::Error> {
        self.verify_calls.push((headers.to_vec(), heights.to_vec()));
        if self.outcomes.is_empty() {
            return Ok(());
        }
        self.outcomes.remove(0)
    }
}

/// Builds a [Header] with the given timestamp and L1 anchor height.
pub fn sample_header(timestamp: u64, l1_head: u64) -> Header {
    Header {
        transactions_root: crate::header::NmtRoot { root: Bytes::from(alloc::vec![0u8; 48]) },
        timestamp,
        l1_head,
        l1_finalized: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verifier_replays_outcomes() {
        let mut verifier = TestHeaderVerifier::with_outcomes(alloc::vec![
            Err(TestHeaderVerifierError),
            Ok(()),
        ]);
        let headers = alloc::vec![sample_header(1, 1)];
        assert!(verifier.verify_headers(&headers, &[1]).await.is_err());
        assert!(verifier.verify_headers(&headers, &[1]).await.is_ok());
        // Queue exhausted: subsequent calls succeed.
        assert!(verifier.verify_headers(&headers, &[1]).await.is_ok());
        assert_eq!(verifier.verify_calls.len(), 3);
        assert_eq!(verifier.verify_calls[0].1, alloc::vec![1]);
    }
}
