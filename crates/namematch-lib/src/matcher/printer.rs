use std::fmt::Write;

use namematch_core::{ResolvedLoc, ResolvedLocContext, ResolvedLocVector};

/// Textual dump of matcher output, one record per line followed by its labels.
///
/// ```text
/// 0: CallArg "foo" @0..3 trailing=1 inactive
///   "a: " @4..7
///   "" @10..10
/// 1: unresolved
/// ```
pub struct ResolvedLocPrinter<'a> {
    locs: &'a ResolvedLocVector,
    source: &'a str,
    labels: bool,
}

impl<'a> ResolvedLocPrinter<'a> {
    pub fn new(locs: &'a ResolvedLocVector, source: &'a str) -> Self {
        Self {
            locs,
            source,
            labels: true,
        }
    }

    pub fn with_labels(mut self, value: bool) -> Self {
        self.labels = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for (index, loc) in self.locs.iter().enumerate() {
            self.format_loc(index, loc, w)?;
        }
        Ok(())
    }

    fn format_loc(&self, index: usize, loc: &ResolvedLoc, w: &mut impl Write) -> std::fmt::Result {
        if loc.is_unresolved() {
            return writeln!(w, "{index}: unresolved");
        }

        write!(
            w,
            "{}: {:?} {:?} @{}",
            index,
            loc.label_type(),
            self.text(loc.range()),
            loc.range()
        )?;
        if let Some(trailing) = loc.first_trailing_label() {
            write!(w, " trailing={trailing}")?;
        }
        if !loc.is_active() {
            w.write_str(" inactive")?;
        }
        if loc.context() != ResolvedLocContext::Default {
            write!(w, " [{:?}]", loc.context())?;
        }
        writeln!(w)?;

        if self.labels {
            for label in loc.label_ranges() {
                writeln!(w, "  {:?} @{}", self.text(*label), label)?;
            }
        }
        Ok(())
    }

    fn text(&self, range: namematch_core::CharSourceRange) -> &'a str {
        let (start, end) = (range.start().index(), range.end().index());
        self.source.get(start..end).unwrap_or("<out of bounds>")
    }
}
