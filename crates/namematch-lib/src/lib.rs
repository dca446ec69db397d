//! Namematch: syntactic name matching for IDE rename and related-identifier queries.
//!
//! A [`SourceFile`] is parsed once into a lossless syntax tree. The [`NameMatcher`]
//! then classifies raw byte positions into [`ResolvedLoc`] records: which base name a
//! position belongs to, the label ranges that travel with that name, whether the
//! position sits in an active `#if` region, and in which lexical context it appears.
//!
//! # Example
//!
//! ```
//! use namematch_lib::{SourceFile, SourceLoc, run_name_matcher};
//!
//! let file = SourceFile::parse("foo(a: 2)").expect("out of fuel");
//! let resolved = run_name_matcher(&file, &[SourceLoc::new(4)]);
//!
//! let loc = resolved.get(0).unwrap();
//! assert_eq!(loc.base_name(file.source()), "foo");
//! assert_eq!(loc.label_text(0, file.source()), Some("a: "));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod matcher;
pub mod parser;
pub mod source_file;

/// Result type for passes that produce both output and diagnostics.
///
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use config::{BuildConfiguration, Version};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use matcher::{NameMatcher, ResolvedLocPrinter, run_name_matcher};
pub use source_file::{SourceFile, SourceFileBuilder};

pub use namematch_core::{
    CALL_LABEL_EXTENT, CallLabelExtent, CharSourceRange, LabelRangeType, ResolvedLoc,
    ResolvedLocContext, ResolvedLocVector, SourceLoc,
};

/// Errors that can occur while parsing a source file or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("invalid build configuration: {0}")]
    InvalidConfiguration(#[from] serde_json::Error),

    #[error("invalid version `{0}`")]
    InvalidVersion(String),

    /// Byte offsets are 32-bit; larger buffers cannot be addressed.
    #[error("source of {0} bytes exceeds the 4 GiB limit")]
    SourceTooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
