//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{LabelRangeType, ResolvedLoc};

impl ResolvedLoc {
    pub(crate) fn ensure_invariants(&self) {
        let labels = self.label_ranges();

        if self.label_type() == LabelRangeType::None {
            assert!(
                labels.is_empty(),
                "ResolvedLoc: label type None with {} label ranges",
                labels.len()
            );
            assert!(
                self.first_trailing_label().is_none(),
                "ResolvedLoc: label type None with a trailing label index"
            );
        }

        if let Some(index) = self.first_trailing_label() {
            assert!(
                (index as usize) < labels.len(),
                "ResolvedLoc: trailing label index {index} out of bounds for {} labels",
                labels.len()
            );
        }

        if let Some(first) = labels.first() {
            assert!(
                self.range().start() <= first.start(),
                "ResolvedLoc: label range {first} precedes base name {}",
                self.range()
            );
        }

        assert!(
            labels.windows(2).all(|w| w[0].start() <= w[1].start()),
            "ResolvedLoc: label ranges are not in source order"
        );
    }
}
