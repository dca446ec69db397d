//! The resolved-location record.

use crate::range::{CharSourceRange, SourceLoc};

/// What kind of labels a resolved location carries.
///
/// Together with the label ranges, this tells a renamer every textual piece it has
/// to rewrite and whether first and second names may be collapsed into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LabelRangeType {
    /// Not a labelled construct. Label ranges are always empty.
    #[default]
    None = 0,

    /// `foo([a: ]2)` or `.foo([a: ]String)`. Extent follows [`CALL_LABEL_EXTENT`].
    CallArg = 1,

    /// `func f([a b]: Int)`. First name through second name, no surrounding trivia.
    Param = 2,

    /// `subscript([a a]: Int)`. Same extent as `Param`, but the names never collapse.
    NoncollapsibleParam = 3,

    /// `#selector(foo.func([a]:))`. The name only, without the colon.
    Selector = 4,
}

impl LabelRangeType {
    /// Checked conversion from an ABI discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::CallArg),
            2 => Some(Self::Param),
            3 => Some(Self::NoncollapsibleParam),
            4 => Some(Self::Selector),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Lexical context a position was resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ResolvedLocContext {
    #[default]
    Default = 0,
    /// Inside `#selector(...)`.
    Selector = 1,
    Comment = 2,
    StringLiteral = 3,
}

impl ResolvedLocContext {
    /// Checked conversion from an ABI discriminant.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Default),
            1 => Some(Self::Selector),
            2 => Some(Self::Comment),
            3 => Some(Self::StringLiteral),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// How far a call-site label range reaches past the label name.
///
/// Producers and consumers must agree on this; both read [`CALL_LABEL_EXTENT`]
/// instead of hard-coding an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallLabelExtent {
    /// `foo([a:] 2)`: label name through the colon.
    Colon,
    /// `foo([a: ]2)`: label name through the colon and the trivia after it,
    /// up to but not including the next newline.
    ColonTrivia,
}

/// The single call-label extent policy used by the matcher.
pub const CALL_LABEL_EXTENT: CallLabelExtent = CallLabelExtent::ColonTrivia;

/// A source position classified into its syntactic role.
///
/// Immutable after construction. A record is created by the matcher, moved into a
/// [`ResolvedLocVector`](crate::ResolvedLocVector), and moved out again on drain;
/// it is never shared between owners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResolvedLoc {
    range: CharSourceRange,
    label_ranges: Vec<CharSourceRange>,
    first_trailing_label: Option<u32>,
    label_type: LabelRangeType,
    is_active: bool,
    context: ResolvedLocContext,
}

impl ResolvedLoc {
    /// Creates a record, taking ownership of `label_ranges`.
    ///
    /// Panics when the arguments break the record invariants (unlabelled kind with
    /// labels, trailing index out of bounds, labels before the base name or out of
    /// source order). Those are producer bugs, not runtime conditions.
    pub fn new(
        range: CharSourceRange,
        label_ranges: Vec<CharSourceRange>,
        first_trailing_label: Option<u32>,
        label_type: LabelRangeType,
        is_active: bool,
        context: ResolvedLocContext,
    ) -> Self {
        let loc = Self {
            range,
            label_ranges,
            first_trailing_label,
            label_type,
            is_active,
            context,
        };
        loc.ensure_invariants();
        loc
    }

    /// Unlabelled record for a plain name occurrence.
    pub fn unlabelled(
        range: CharSourceRange,
        is_active: bool,
        context: ResolvedLocContext,
    ) -> Self {
        Self::new(
            range,
            Vec::new(),
            None,
            LabelRangeType::None,
            is_active,
            context,
        )
    }

    /// Range of the base name.
    #[inline]
    pub fn range(&self) -> CharSourceRange {
        self.range
    }

    #[inline]
    pub fn label_ranges(&self) -> &[CharSourceRange] {
        &self.label_ranges
    }

    /// Index into [`label_ranges`](Self::label_ranges) of the first trailing-closure label.
    #[inline]
    pub fn first_trailing_label(&self) -> Option<u32> {
        self.first_trailing_label
    }

    #[inline]
    pub fn label_type(&self) -> LabelRangeType {
        self.label_type
    }

    /// Whether the position lies in an active `#if` region.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn context(&self) -> ResolvedLocContext {
        self.context
    }

    /// Labels written inside the parentheses (or the selector), before any trailing closure.
    pub fn argument_labels(&self) -> &[CharSourceRange] {
        match self.first_trailing_label {
            Some(index) => &self.label_ranges[..index as usize],
            None => &self.label_ranges,
        }
    }

    /// Labels belonging to trailing closures. Empty without trailing closures.
    pub fn trailing_labels(&self) -> &[CharSourceRange] {
        match self.first_trailing_label {
            Some(index) => &self.label_ranges[index as usize..],
            None => &[],
        }
    }

    /// True for the "nothing resolved here" sentinel.
    pub fn is_unresolved(&self) -> bool {
        self.label_type == LabelRangeType::None && self.range.is_empty()
    }

    /// Base-name text in `source`.
    pub fn base_name<'s>(&self, source: &'s str) -> &'s str {
        self.range.text(source)
    }

    /// Text of the label at `index`, or `None` past the last label.
    pub fn label_text<'s>(&self, index: usize, source: &'s str) -> Option<&'s str> {
        self.label_ranges.get(index).map(|r| r.text(source))
    }

    /// Start of the base name.
    pub fn start(&self) -> SourceLoc {
        self.range.start()
    }

    /// Consumes the record, returning its owned label ranges.
    pub fn into_label_ranges(self) -> Vec<CharSourceRange> {
        self.label_ranges
    }
}
