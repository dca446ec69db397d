//! Which parts of a file survive `#if` clause selection.

use rowan::{TextRange, TextSize};

use crate::config::BuildConfiguration;
use crate::parser::ast::{IfConfigClause, IfConfigDecl};
use crate::parser::{SyntaxKind, SyntaxNode};

/// Bodies of every clause that was not selected.
///
/// A clause's directive and condition are not part of its body, so they are
/// governed by the enclosing clauses only.
#[derive(Debug, Default)]
pub(super) struct ActiveRegions {
    inactive: Vec<TextRange>,
}

impl ActiveRegions {
    pub(super) fn compute(root: &SyntaxNode, config: &BuildConfiguration) -> Self {
        let mut inactive = Vec::new();
        for decl in root.descendants().filter_map(IfConfigDecl::cast) {
            let selected = selected_clause(&decl, config);
            log::trace!(
                "#if at {:?}: selected clause {:?}",
                decl.as_cst().text_range(),
                selected
            );
            for (index, clause) in decl.clauses().enumerate() {
                if Some(index) != selected {
                    inactive.push(clause_body(&clause));
                }
            }
        }
        Self { inactive }
    }

    pub(super) fn is_active(&self, offset: TextSize) -> bool {
        !self.inactive.iter().any(|range| range.contains(offset))
    }
}

/// First clause whose condition holds, else the `#else` clause.
fn selected_clause(decl: &IfConfigDecl, config: &BuildConfiguration) -> Option<usize> {
    decl.clauses().position(|clause| match clause.condition() {
        Some(condition) => condition.expr().is_some_and(|expr| config.evaluate(&expr)),
        None => clause
            .directive()
            .is_some_and(|d| d.kind() == SyntaxKind::PoundElse),
    })
}

fn clause_body(clause: &IfConfigClause) -> TextRange {
    let range = clause.as_cst().text_range();
    let header_end = clause
        .condition()
        .map(|c| c.as_cst().text_range().end())
        .or_else(|| clause.directive().map(|d| d.text_range().end()))
        .unwrap_or(range.start());
    TextRange::new(header_end, range.end())
}
