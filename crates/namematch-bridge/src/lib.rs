#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! C ABI transport for name matcher results.
//!
//! The matcher runs on the Rust side; its consumer may live behind a language
//! boundary with no shared allocator. Results therefore cross as opaque handles
//! with a strict ownership protocol:
//!
//! 1. The producer builds a [`BridgedResolvedLocVector`], one record per requested
//!    position, and gives it away as an opaque pointer-sized value.
//! 2. The consumer reifies the value exactly once and either drains then releases
//!    it, or takes and releases it in one step.
//!
//! On the Rust side handles are move-only, so the second take does not compile. At
//! the C ABI ([`ffi`]) null and misaligned handles abort, and debug builds keep a
//! ledger of live allocations that also catches double release.

pub mod ffi;

mod error;
mod ledger;
mod owned;
mod string;
mod types;

#[cfg(test)]
mod ffi_tests;
#[cfg(test)]
mod string_tests;

pub use error::{BridgeError, Result};
pub use string::BridgedStringRef;
pub use types::{
    BridgedCharSourceRange, BridgedCharSourceRangeVector, BridgedResolvedLoc,
    BridgedResolvedLocArray, BridgedResolvedLocVector, BridgedResolvedLocView,
    BridgedSourceFile, BridgedSourceLoc, NO_TRAILING_LABEL,
};
