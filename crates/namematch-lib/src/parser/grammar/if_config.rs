use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::token_sets::EXPR_FIRST;
use crate::parser::cst::{SyntaxKind, TokenSet};

const CLAUSE_CONTINUATION: TokenSet =
    TokenSet::new(&[SyntaxKind::PoundElseif, SyntaxKind::PoundElse]);

impl Parser<'_> {
    /// `#if cond ... #elseif cond ... #else ... #endif`
    ///
    /// Clause bodies are ordinary item lists; the directive decides nothing about
    /// parsing, only about which clause is active.
    pub(super) fn parse_if_config(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::IfConfigDecl);
        self.push_delimiter(SyntaxKind::PoundIf);
        self.if_config_depth += 1;

        self.parse_if_config_clause();
        let mut seen_else = false;
        while self.currently_is_one_of(CLAUSE_CONTINUATION) {
            if seen_else {
                self.error_msg(
                    DiagnosticKind::UnexpectedToken,
                    "`#else` must be the last clause",
                );
            }
            seen_else |= self.currently_is(SyntaxKind::PoundElse);
            self.parse_if_config_clause();
        }

        self.if_config_depth -= 1;
        self.close_delimiter(SyntaxKind::PoundEndif, "`#if`");
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_if_config_clause(&mut self) {
        self.start_node(SyntaxKind::IfConfigClause);
        let directive = self.current();
        self.bump();
        if directive != SyntaxKind::PoundElse {
            self.start_node(SyntaxKind::IfConfigCondition);
            if self.currently_is_one_of(EXPR_FIRST) && !self.newline_before_current() {
                self.with_restrictions(Restrictions::DIRECTIVE, |p| p.parse_expr());
            } else {
                self.error(DiagnosticKind::ExpectedCondition);
            }
            self.finish_node();
        }
        self.parse_item_list(None);
        self.finish_node();
    }
}
