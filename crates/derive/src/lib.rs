#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]

extern crate alloc;

pub mod batch;
pub mod errors;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::{
        batch::{BatchValidity, BatchWithInclusionBlock, SingleBatch},
        errors::BatchDecodingError,
    };
    pub use kopi_finality::prelude::*;
    pub use kopi_primitives::prelude::*;
}
