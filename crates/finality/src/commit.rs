//! Content-addressed commitments for finality network types.
//!
//! A commitment binds a structured value to a fixed-width digest. The digest
//! is computed over a domain-tagged, length-framed encoding of the value's
//! fields, so that structurally equal values always commit to the same digest
//! and values of different types never collide on tag.

use alloc::vec::Vec;
use alloy_primitives::{keccak256, B256};

/// A 32-byte content-addressed digest of a finality network value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(pub B256);

impl Commitment {
    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl core::fmt::Display for Commitment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A type that can be bound to a [Commitment].
pub trait Committable {
    /// Computes the commitment of the value.
    fn commit(&self) -> Commitment;
}

/// Accumulates domain-tagged, length-framed field encodings and finalizes
/// them into a [Commitment].
///
/// Field names participate in the preimage, so reordering or renaming fields
/// changes the digest. Variable-size payloads are length-framed to keep the
/// encoding injective.
#[derive(Debug, Clone)]
pub struct CommitmentBuilder {
    buf: Vec<u8>,
}

impl CommitmentBuilder {
    /// Creates a new builder for the given domain tag.
    pub fn new(tag: &str) -> Self {
        let mut buf = Vec::new();
        Self::write_framed(&mut buf, tag.as_bytes());
        Self { buf }
    }

    fn write_framed(buf: &mut Vec<u8>, bytes: &[u8]) {
        buf.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
        buf.extend_from_slice(bytes);
    }

    fn name(mut self, name: &str) -> Self {
        Self::write_framed(&mut self.buf, name.as_bytes());
        self
    }

    /// Appends a `u64` field.
    pub fn u64_field(self, name: &str, value: u64) -> Self {
        let mut this = self.name(name);
        this.buf.extend_from_slice(&value.to_be_bytes());
        this
    }

    /// Appends a fixed-width byte field.
    pub fn fixed_size_field(self, name: &str, value: &[u8]) -> Self {
        let mut this = self.name(name);
        this.buf.extend_from_slice(value);
        this
    }

    /// Appends a variable-size byte field, length-framed.
    pub fn var_size_field(self, name: &str, value: &[u8]) -> Self {
        let mut this = self.name(name);
        Self::write_framed(&mut this.buf, value);
        this
    }

    /// Appends a nested commitment field.
    pub fn field(self, name: &str, value: Commitment) -> Self {
        let mut this = self.name(name);
        this.buf.extend_from_slice(value.as_bytes());
        this
    }

    /// Appends an optional nested commitment field with an explicit
    /// presence marker, so `None` and an absent field stay distinguishable.
    pub fn optional_field<T: Committable>(self, name: &str, value: Option<&T>) -> Self {
        let mut this = self.name(name);
        match value {
            Some(value) => {
                this.buf.push(1);
                this.buf.extend_from_slice(value.commit().as_bytes());
            }
            None => this.buf.push(0),
        }
        this
    }

    /// Finalizes the accumulated fields into a [Commitment].
    pub fn finalize(self) -> Commitment {
        Commitment(keccak256(&self.buf))
    }
}
