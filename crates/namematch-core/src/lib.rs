#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Resolved-location data model for the name matcher.
//!
//! Three layers:
//! - **Positions**: `SourceLoc` / `CharSourceRange`, byte offsets into one UTF-8 buffer
//! - **Records**: `ResolvedLoc`, one classified position with its label ranges
//! - **Results**: `ResolvedLocVector`, the ordered output of one matcher run
//!
//! The crate has no parser and no allocator tricks. Producers build records with
//! [`ResolvedLoc::new`], consumers read them back; the opaque-handle transport lives
//! in `namematch-bridge`.

mod invariants;
mod range;
mod resolved_loc;
mod vector;

#[cfg(test)]
mod resolved_loc_tests;

pub use range::{CharSourceRange, SourceLoc};
pub use resolved_loc::{
    CALL_LABEL_EXTENT, CallLabelExtent, LabelRangeType, ResolvedLoc, ResolvedLocContext,
};
pub use vector::ResolvedLocVector;
