#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod commit;
pub mod header;
pub mod justification;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// The prelude exports common types and traits.
pub mod prelude {
    pub use crate::{
        commit::{Commitment, CommitmentBuilder, Committable},
        header::{Header, L1BlockInfo, NmtRoot},
        justification::{Justification, NmtProof, Payload},
        traits::HeaderVerifier,
    };
}

pub use commit::{Commitment, CommitmentBuilder, Committable};
pub use header::{Header, L1BlockInfo, NmtRoot};
pub use justification::{Justification, NmtProof, Payload};
pub use traits::HeaderVerifier;
