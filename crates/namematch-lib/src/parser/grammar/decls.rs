use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::token_sets::{LIST_RECOVERY, NOMINAL_KEYWORDS};
use crate::parser::cst::{SyntaxKind, TokenSet};

const EFFECT_SPECIFIERS: &[&str] = &["async", "throws", "rethrows", "reasync"];

const IMPORT_KINDS: TokenSet = NOMINAL_KEYWORDS.union(TokenSet::new(&[
    SyntaxKind::KwFunc,
    SyntaxKind::KwLet,
    SyntaxKind::KwVar,
]));

impl Parser<'_> {
    /// `import Foundation`, `import struct Foo.Bar`
    pub(super) fn parse_import_decl(&mut self) {
        self.start_node(SyntaxKind::ImportDecl);
        self.bump();
        if self.currently_is_one_of(IMPORT_KINDS) {
            self.bump();
        }
        if self.currently_is(SyntaxKind::Id) {
            self.bump();
            while self.currently_is(SyntaxKind::Dot) && self.next_is(SyntaxKind::Id) {
                self.bump();
                self.bump();
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedName, "module name after `import`");
        }
        self.finish_node();
    }

    /// `let a = 1, b: Int`, `var (x, y) = point`, `var total: Int { ... }`
    pub(super) fn parse_var_decl(&mut self) {
        self.start_node(SyntaxKind::VarDecl);
        self.bump();
        loop {
            if !self.parse_pattern() {
                break;
            }
            if self.currently_is(SyntaxKind::Colon) {
                self.parse_type_annotation();
            }
            if self.currently_is(SyntaxKind::Equals) {
                self.parse_initializer();
            }
            if self.currently_is(SyntaxKind::BraceOpen) && !self.newline_before_current() {
                self.parse_code_block();
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// Returns false (after reporting) when nothing pattern-like is present.
    pub(super) fn parse_pattern(&mut self) -> bool {
        match self.current() {
            SyntaxKind::Id => {
                self.start_node(SyntaxKind::BindingName);
                self.bump();
                self.finish_node();
                true
            }
            SyntaxKind::Underscore => {
                self.bump();
                true
            }
            SyntaxKind::ParenOpen => {
                self.parse_tuple_pattern();
                true
            }
            // `case let x`, `for var item in ...`
            SyntaxKind::KwLet | SyntaxKind::KwVar => {
                self.bump();
                self.parse_pattern()
            }
            _ => {
                self.error_msg(DiagnosticKind::ExpectedName, "binding pattern");
                false
            }
        }
    }

    fn parse_tuple_pattern(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::TuplePattern);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        loop {
            if self.should_stop() || self.currently_is_one_of(LIST_RECOVERY) {
                break;
            }
            if !self.parse_pattern() || !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::ParenClose, "tuple pattern");
        self.finish_node();
        self.exit_recursion();
    }

    pub(super) fn parse_type_annotation(&mut self) {
        self.start_node(SyntaxKind::TypeAnnotation);
        self.bump(); // ':'
        self.parse_type();
        self.finish_node();
    }

    pub(super) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::Initializer);
        self.bump(); // '='
        self.parse_expr_or_error("after `=`");
        self.finish_node();
    }

    /// `func name<T>(a b: Int) async throws -> R where ... { ... }`
    pub(super) fn parse_func_decl(&mut self) {
        self.start_node(SyntaxKind::FuncDecl);
        self.bump();
        match self.current() {
            SyntaxKind::Id => {
                self.bump();
                self.parse_generic_clause_opt();
            }
            // operator implementations: `static func == (lhs: Self, rhs: Self)`
            SyntaxKind::Operator => self.bump(),
            _ => self.error_msg(DiagnosticKind::ExpectedName, "function name"),
        }
        self.parse_signature();
        self.parse_where_clause_opt();
        self.parse_body_opt();
        self.finish_node();
    }

    /// `init(a: Int)`, `init?(...)`, `init!(...)`
    pub(super) fn parse_init_decl(&mut self) {
        self.start_node(SyntaxKind::InitDecl);
        self.bump();
        if self.currently_is(SyntaxKind::Operator)
            && !self.has_trivia_before_current()
            && matches!(self.current_text(), "?" | "!")
        {
            self.bump();
        }
        self.parse_generic_clause_opt();
        self.parse_signature();
        self.parse_where_clause_opt();
        self.parse_body_opt();
        self.finish_node();
    }

    /// `subscript(index: Int) -> Element { get set }`
    pub(super) fn parse_subscript_decl(&mut self) {
        self.start_node(SyntaxKind::SubscriptDecl);
        self.bump();
        self.parse_generic_clause_opt();
        self.parse_signature();
        self.parse_where_clause_opt();
        self.parse_body_opt();
        self.finish_node();
    }

    fn parse_signature(&mut self) {
        self.parse_param_clause();
        self.parse_effects_opt();
        if self.currently_is(SyntaxKind::Arrow) {
            self.start_node(SyntaxKind::ReturnClause);
            self.bump();
            self.parse_type();
            self.finish_node();
        }
    }

    fn parse_body_opt(&mut self) {
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_code_block();
        }
    }

    pub(super) fn parse_effects_opt(&mut self) {
        while self.currently_is(SyntaxKind::Id)
            && EFFECT_SPECIFIERS.contains(&self.current_text())
        {
            self.bump();
            // typed throws: `throws(ParseError)`
            if self.currently_is(SyntaxKind::ParenOpen) && !self.has_trivia_before_current() {
                self.bump_balanced(SyntaxKind::ParenOpen, SyntaxKind::ParenClose, "thrown type");
            }
        }
    }

    pub(super) fn parse_generic_clause_opt(&mut self) {
        if self.at_type_generic_args() {
            self.parse_generic_args();
        }
    }

    /// `where T: Equatable, U == Int`. Requirements are kept flat.
    pub(super) fn parse_where_clause_opt(&mut self) {
        if !(self.currently_is(SyntaxKind::Id) && self.current_text() == "where") {
            return;
        }
        self.bump();
        loop {
            if self.should_stop()
                || self.currently_is(SyntaxKind::BraceOpen)
                || self.currently_is(SyntaxKind::BraceClose)
            {
                break;
            }
            if self.newline_before_current()
                && !self.currently_is(SyntaxKind::Comma)
                && self.previous_kind() != Some(SyntaxKind::Comma)
            {
                break;
            }
            if self.currently_is(SyntaxKind::Id) {
                self.parse_type_ref();
            } else {
                self.bump();
            }
        }
    }

    pub(super) fn parse_param_clause(&mut self) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error(DiagnosticKind::ExpectedParameterClause);
            return;
        }
        self.start_node(SyntaxKind::ParamClause);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.with_restrictions(Restrictions::default(), |p| {
            loop {
                if p.should_stop() || p.currently_is_one_of(LIST_RECOVERY) {
                    break;
                }
                p.parse_param();
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(SyntaxKind::ParenClose, "parameter list");
        self.finish_node();
    }

    /// `a b: Int = 0`, `_ x: Int...`, or a bare type for unlabelled associated values.
    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);
        while self.currently_is(SyntaxKind::AtName) {
            self.parse_attribute();
        }
        if self.at_labelled_element() {
            self.bump();
            if !self.currently_is(SyntaxKind::Colon) {
                self.bump();
            }
            self.bump(); // ':'
        }
        self.parse_type();
        if self.currently_is(SyntaxKind::Operator)
            && !self.has_trivia_before_current()
            && self.current_text() == "..."
        {
            self.bump();
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.start_node(SyntaxKind::DefaultArgument);
            self.bump();
            self.parse_expr_or_error("default value");
            self.finish_node();
        }
        self.finish_node();
    }

    /// `name:` or `first second:` ahead.
    pub(super) fn at_labelled_element(&mut self) -> bool {
        if !self.current().is_label() {
            return false;
        }
        let next = self.peek_nth(1);
        next == SyntaxKind::Colon || (next.is_label() && self.peek_nth(2) == SyntaxKind::Colon)
    }

    /// `struct Name<T>: Proto { ... }`, `extension Array: Proto where ... { ... }`
    pub(super) fn parse_nominal_decl(&mut self) {
        self.start_node(SyntaxKind::NominalDecl);
        let keyword = self.current();
        self.bump();
        if keyword == SyntaxKind::KwExtension {
            self.parse_type();
        } else if self.currently_is(SyntaxKind::Id) {
            self.bump();
            self.parse_generic_clause_opt();
        } else {
            self.error_msg(DiagnosticKind::ExpectedName, "type name");
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.start_node(SyntaxKind::InheritanceClause);
            self.bump();
            loop {
                self.parse_type();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.finish_node();
        }
        self.parse_where_clause_opt();
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_member_block();
        } else {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `{` to open member block",
            );
        }
        self.finish_node();
    }

    /// `case a, b(x: Int), c = 3`
    pub(super) fn parse_enum_case_decl(&mut self) {
        self.start_node(SyntaxKind::EnumCaseDecl);
        self.bump();
        loop {
            self.start_node(SyntaxKind::EnumCaseElement);
            if self.currently_is(SyntaxKind::Id) {
                self.bump();
            } else {
                self.error_msg(DiagnosticKind::ExpectedName, "enum case name");
            }
            if self.currently_is(SyntaxKind::ParenOpen) && !self.newline_before_current() {
                self.parse_param_clause();
            }
            if self.currently_is(SyntaxKind::Equals) {
                self.parse_initializer();
            }
            self.finish_node();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }
}
