use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CLAUSE_END, EXPR_FIRST, NOMINAL_KEYWORDS};

/// Contextual keywords that prefix a declaration without changing its shape.
const DECL_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "open",
    "package",
    "static",
    "final",
    "override",
    "mutating",
    "nonmutating",
    "convenience",
    "required",
    "lazy",
    "weak",
    "unowned",
    "indirect",
    "dynamic",
    "optional",
    "nonisolated",
];

impl Parser<'_> {
    pub fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SourceFile);
        self.parse_item_list(None);
        self.eat_trivia();
        self.finish_node();
    }

    /// Declarations and statements until `end` or EOF.
    ///
    /// Inside an `#if` clause, stops (without consuming) at the directive or brace
    /// that belongs to an enclosing construct.
    pub(super) fn parse_item_list(&mut self, end: Option<SyntaxKind>) {
        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();
            if Some(kind) == end {
                break;
            }
            if CLAUSE_END.contains(kind) {
                if self.if_config_depth > 0 {
                    break;
                }
                self.error_and_bump(DiagnosticKind::StrayDirective);
                continue;
            }
            match kind {
                SyntaxKind::BraceClose if end.is_none() && self.if_config_depth > 0 => break,
                SyntaxKind::BraceClose => {
                    self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "unmatched `}`");
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose
                    if self.closes_open_delimiter(kind) =>
                {
                    break;
                }
                SyntaxKind::Semicolon => self.bump(),
                _ => self.parse_item(),
            }
        }
    }

    fn closes_open_delimiter(&self, close: SyntaxKind) -> bool {
        let open = match close {
            SyntaxKind::ParenClose => SyntaxKind::ParenOpen,
            _ => SyntaxKind::BracketOpen,
        };
        self.delimiter_stack.iter().any(|d| d.kind == open)
    }

    fn parse_item(&mut self) {
        match self.current() {
            SyntaxKind::AtName => self.parse_attribute(),
            SyntaxKind::KwImport => self.parse_import_decl(),
            SyntaxKind::KwLet | SyntaxKind::KwVar => self.parse_var_decl(),
            SyntaxKind::KwFunc => self.parse_func_decl(),
            SyntaxKind::KwInit => self.parse_init_decl(),
            SyntaxKind::KwSubscript => self.parse_subscript_decl(),
            // `class func` / `class var`: a modifier, not a class declaration
            SyntaxKind::KwClass if self.class_is_modifier() => self.bump(),
            kind if NOMINAL_KEYWORDS.contains(kind) => self.parse_nominal_decl(),
            SyntaxKind::KwCase => self.parse_enum_case_decl(),
            SyntaxKind::KwReturn => self.parse_return_stmt(),
            SyntaxKind::KwIf => self.parse_if_stmt(),
            SyntaxKind::KwGuard => self.parse_guard_stmt(),
            SyntaxKind::KwWhile => self.parse_while_stmt(),
            SyntaxKind::KwFor => self.parse_for_stmt(),
            SyntaxKind::PoundIf => self.parse_if_config(),
            SyntaxKind::Id if self.at_decl_modifier() => self.bump(),
            kind if EXPR_FIRST.contains(kind) => self.parse_expr(),
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::InvalidCharacter),
            _ => self.error_and_bump_msg(
                DiagnosticKind::UnexpectedToken,
                "expected a declaration or statement",
            ),
        }
    }

    fn class_is_modifier(&mut self) -> bool {
        matches!(
            self.peek_nth(1),
            SyntaxKind::KwFunc
                | SyntaxKind::KwVar
                | SyntaxKind::KwLet
                | SyntaxKind::KwSubscript
                | SyntaxKind::KwInit
        )
    }

    fn at_decl_modifier(&mut self) -> bool {
        if !DECL_MODIFIERS.contains(&self.current_text()) {
            return false;
        }
        let next = self.peek_nth(1);
        next == SyntaxKind::Id || next == SyntaxKind::KwClass || next.is_keyword()
    }

    /// `@name` with optional glued `(...)` arguments.
    pub(super) fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::Attribute);
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) && !self.has_trivia_before_current() {
            self.bump_balanced(SyntaxKind::ParenOpen, SyntaxKind::ParenClose, "attribute");
        }
        self.finish_node();
    }

    pub(super) fn parse_code_block(&mut self) {
        self.parse_braced_items(SyntaxKind::CodeBlock, "block");
    }

    pub(super) fn parse_member_block(&mut self) {
        self.parse_braced_items(SyntaxKind::MemberBlock, "member block");
    }

    fn parse_braced_items(&mut self, kind: SyntaxKind, construct: &str) {
        self.assert_current(SyntaxKind::BraceOpen);
        if !self.enter_recursion() {
            return;
        }
        self.start_node(kind);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        self.parse_block_contents();
        self.close_delimiter(SyntaxKind::BraceClose, construct);
        self.finish_node();
        self.exit_recursion();
    }

    /// Items up to the closing brace. Braces reset expression restrictions and `#if` nesting.
    pub(super) fn parse_block_contents(&mut self) {
        let saved_depth = std::mem::take(&mut self.if_config_depth);
        self.with_restrictions(Restrictions::default(), |p| {
            p.parse_item_list(Some(SyntaxKind::BraceClose))
        });
        self.if_config_depth = saved_depth;
    }

    /// Body that must follow a statement header or a declaration signature.
    pub(super) fn parse_required_block(&mut self, what: &str) {
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_code_block();
        } else {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("expected `{{` to open {what}"),
            );
        }
    }

    /// Consumes `open ... close` without structure, counting nested pairs.
    pub(super) fn bump_balanced(&mut self, open: SyntaxKind, close: SyntaxKind, construct: &str) {
        self.assert_current(open);
        self.push_delimiter(open);
        self.bump();
        let mut depth = 0u32;
        while !self.should_stop() {
            let kind = self.current();
            if kind == close {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if kind == open {
                depth += 1;
            }
            self.bump();
        }
        self.close_delimiter(close, construct);
    }
}
