#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![no_std]

#[allow(unused_extern_crates)]
extern crate alloc;

pub mod block;
pub mod params;
pub mod raw_tx;
pub mod rollup_config;

/// The prelude exports common types.
pub mod prelude {
    pub use crate::{
        block::{BlockID, BlockInfo, L2BlockInfo},
        params::DEPOSIT_TX_TYPE,
        raw_tx::RawTransaction,
        rollup_config::RollupConfig,
    };
}

pub use block::{BlockID, BlockInfo, L2BlockInfo};
pub use params::DEPOSIT_TX_TYPE;
pub use raw_tx::RawTransaction;
pub use rollup_config::RollupConfig;
