//! This module contains protocol constants shared by the derivation crates.

/// The EIP-2718 type byte reserved for protocol deposit transactions.
/// Sequencer batches must never contain a transaction with this leading byte.
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;
