//! Classification of byte positions into resolved locations.
//!
//! The matcher is purely syntactic. For each position it takes the token at that
//! offset (the one starting there, at a boundary) and walks outwards to the innermost
//! name site whose span contains the position:
//!
//! - calls report the callee's base name plus one label per argument and trailing
//!   closure (`CallArg`),
//! - `func`/`init` declarations and enum cases with associated values report their
//!   parameter names (`Param`), `subscript` reports `NoncollapsibleParam`,
//! - compound names such as `foo(a:b:)` report one range per piece (`Selector`),
//! - any other identifier reports just itself.
//!
//! Positions inside comments and string literals resolve to the identifier under
//! them without structure. Anything else yields the default record.

mod active;
mod printer;
mod sites;


pub use printer::ResolvedLocPrinter;

use namematch_core::{
    CharSourceRange, ResolvedLoc, ResolvedLocContext, ResolvedLocVector, SourceLoc,
};
use rowan::TextSize;

use crate::config::BuildConfiguration;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::source_file::SourceFile;

use active::ActiveRegions;

/// Resolves positions in one source file.
///
/// Holds only borrows; independent matchers may run in parallel on the same file.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher<'f> {
    file: &'f SourceFile,
    config: &'f BuildConfiguration,
}

impl<'f> NameMatcher<'f> {
    /// Uses the build configuration the file was parsed with.
    pub fn new(file: &'f SourceFile) -> Self {
        Self {
            file,
            config: file.build_configuration(),
        }
    }

    /// Overrides the configuration used to decide which `#if` clauses are active.
    pub fn build_configuration(mut self, config: &'f BuildConfiguration) -> Self {
        self.config = config;
        self
    }

    /// One record per position, in input order.
    pub fn resolve(&self, positions: &[SourceLoc]) -> ResolvedLocVector {
        let root = self.file.syntax();
        let regions = ActiveRegions::compute(&root, self.config);

        let mut resolved = ResolvedLocVector::with_capacity(positions.len());
        for &loc in positions {
            resolved.append(self.resolve_loc(&root, &regions, loc));
        }
        log::debug!(
            "resolved {} positions in {}",
            positions.len(),
            self.file.name()
        );
        resolved
    }

    fn resolve_loc(
        &self,
        root: &SyntaxNode,
        regions: &ActiveRegions,
        loc: SourceLoc,
    ) -> ResolvedLoc {
        let len = self.file.len();
        if loc.index() >= len {
            if loc.index() > len {
                log::warn!(
                    "position {} is past the end of {} ({} bytes)",
                    loc,
                    self.file.name(),
                    len
                );
            }
            return ResolvedLoc::default();
        }

        let offset = TextSize::from(loc.offset());
        let Some(token) = root.token_at_offset(offset).right_biased() else {
            return ResolvedLoc::default();
        };
        let is_active = regions.is_active(offset);

        match token.kind() {
            kind if kind.is_comment() => {
                return identifier_loc(&token, loc, is_active, ResolvedLocContext::Comment);
            }
            SyntaxKind::StrVal => {
                return identifier_loc(&token, loc, is_active, ResolvedLocContext::StringLiteral);
            }
            _ => {}
        }

        let Some(site) = sites::find_site(&token, offset) else {
            log::trace!("no name site at {} ({:?})", loc, token.kind());
            return ResolvedLoc::default();
        };
        let context = if in_selector(&token) {
            ResolvedLocContext::Selector
        } else {
            ResolvedLocContext::Default
        };
        ResolvedLoc::new(
            site.range,
            site.labels,
            site.first_trailing_label,
            site.label_type,
            is_active,
            context,
        )
    }
}

/// Resolves `positions` with the file's own build configuration.
pub fn run_name_matcher(file: &SourceFile, positions: &[SourceLoc]) -> ResolvedLocVector {
    NameMatcher::new(file).resolve(positions)
}

fn in_selector(token: &SyntaxToken) -> bool {
    token
        .parent_ancestors()
        .any(|node| node.kind() == SyntaxKind::SelectorExpr)
}

/// Identifier under `loc` inside a comment or string body.
fn identifier_loc(
    token: &SyntaxToken,
    loc: SourceLoc,
    is_active: bool,
    context: ResolvedLocContext,
) -> ResolvedLoc {
    let token_start = u32::from(token.text_range().start());
    let at = (loc.offset() - token_start) as usize;
    match identifier_run(token.text(), at) {
        Some(run) => ResolvedLoc::unlabelled(
            CharSourceRange::from_offsets(
                token_start + run.start as u32,
                token_start + run.end as u32,
            ),
            is_active,
            context,
        ),
        None => ResolvedLoc::default(),
    }
}

/// Byte range of the identifier characters around `at`, if `at` is on one.
fn identifier_run(text: &str, at: usize) -> Option<std::ops::Range<usize>> {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    if !text.is_char_boundary(at) {
        return None;
    }
    if !text[at..].chars().next().is_some_and(is_ident) {
        return None;
    }
    let start = text[..at]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident(c))
        .last()
        .map_or(at, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .find(|&(_, c)| !is_ident(c))
        .map_or(text.len(), |(i, _)| at + i);
    Some(start..end)
}
