//! Traits for verifying finality network headers.

use crate::header::Header;
use alloc::{boxed::Box, string::ToString};
use async_trait::async_trait;
use core::fmt::Display;

/// Describes the functionality of a client that can verify finality network
/// headers against their canonical chain.
///
/// The single I/O-bearing dependency of batch validation. Implementations
/// typically consult contract state on L1 and may be arbitrarily far behind
/// the network head; an error therefore means the headers could not be
/// verified *right now*, and the caller retries later rather than treating
/// the batch as invalid.
#[async_trait]
pub trait HeaderVerifier {
    /// The error type for the [HeaderVerifier].
    type Error: Display + ToString;

    /// Verifies that each header is the canonical finality network header at
    /// its paired height. `headers` and `heights` must have equal lengths.
    async fn verify_headers(
        &mut self,
        headers: &[Header],
        heights: &[u64],
    ) -> Result<(), Self::Error>;
}
