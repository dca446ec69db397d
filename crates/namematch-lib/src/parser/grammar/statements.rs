use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::EXPR_FIRST;

impl Parser<'_> {
    /// `return` with an optional value on the same line.
    pub(super) fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump();
        if !self.newline_before_current() && self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        self.finish_node();
    }

    pub(super) fn parse_if_stmt(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.parse_condition_list();
        self.parse_required_block("`if` body");
        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            if self.currently_is(SyntaxKind::KwIf) {
                self.parse_if_stmt();
            } else {
                self.parse_required_block("`else` body");
            }
            self.finish_node();
        }
        self.finish_node();
        self.exit_recursion();
    }

    pub(super) fn parse_guard_stmt(&mut self) {
        self.start_node(SyntaxKind::GuardStmt);
        self.bump();
        self.parse_condition_list();
        if !self.eat_token(SyntaxKind::KwElse) {
            self.error_msg(
                DiagnosticKind::ExpectedKeyword,
                "`else` after `guard` condition",
            );
        }
        self.parse_required_block("`guard` body");
        self.finish_node();
    }

    pub(super) fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.parse_condition_list();
        self.parse_required_block("`while` body");
        self.finish_node();
    }

    /// `for item in sequence where item > 0 { ... }`
    pub(super) fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump();
        self.eat_token(SyntaxKind::KwCase);
        self.parse_pattern();
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
        if self.eat_token(SyntaxKind::KwIn) {
            self.with_restrictions(Restrictions::CONDITION, |p| {
                p.parse_expr_or_error("sequence after `in`");
                if p.currently_is(SyntaxKind::Id) && p.current_text() == "where" {
                    p.bump();
                    p.parse_expr_or_error("after `where`");
                }
            });
        } else {
            self.error_msg(DiagnosticKind::ExpectedKeyword, "`in` after `for` pattern");
        }
        self.parse_required_block("`for` body");
        self.finish_node();
    }

    /// Comma-separated boolean conditions and optional bindings.
    fn parse_condition_list(&mut self) {
        self.start_node(SyntaxKind::ConditionList);
        self.with_restrictions(Restrictions::CONDITION, |p| {
            loop {
                match p.current() {
                    SyntaxKind::KwLet | SyntaxKind::KwVar | SyntaxKind::KwCase => {
                        p.parse_optional_binding()
                    }
                    SyntaxKind::BraceOpen => {
                        p.error(DiagnosticKind::ExpectedCondition);
                        break;
                    }
                    kind if EXPR_FIRST.contains(kind) => p.parse_expr(),
                    _ => {
                        p.error(DiagnosticKind::ExpectedCondition);
                        break;
                    }
                }
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.finish_node();
    }

    /// `let x = optional`, `var y: T = z`, `let shorthand`, `case .some(x) = value`
    fn parse_optional_binding(&mut self) {
        self.start_node(SyntaxKind::OptionalBinding);
        let introducer = self.current();
        self.bump();
        if introducer == SyntaxKind::KwCase {
            self.parse_expr_or_error("pattern after `case`");
        } else {
            self.parse_pattern();
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer();
        }
        self.finish_node();
    }
}
