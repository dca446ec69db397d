//! Expression grammar.
//!
//! Binary operators use Pratt parsing. Whitespace decides operator fixity: an operator
//! with trivia on both sides (or neither) is infix, one glued only to its left operand
//! is postfix, one glued only to its right operand is prefix.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_FIRST, LIST_RECOVERY, LITERALS};

const ASSIGNMENT_BP: (u8, u8) = (2, 1);
const TERNARY_BP: (u8, u8) = (4, 3);
const CAST_BP: (u8, u8) = (15, 16);

fn infix_binding_power(op: &str) -> (u8, u8) {
    match op {
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "<<=" | ">>=" => {
            ASSIGNMENT_BP
        }
        "??" => (6, 5),
        "||" => (7, 8),
        "&&" => (9, 10),
        "==" | "!=" | "===" | "!==" | "<" | "<=" | ">" | ">=" | "~=" => (11, 12),
        "..." | "..<" => (19, 20),
        "+" | "-" | "&+" | "&-" | "|" | "^" => (21, 22),
        "*" | "/" | "%" | "&*" | "&" => (23, 24),
        "<<" | ">>" => (25, 26),
        // user-defined operators
        _ => (17, 18),
    }
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(0);
    }

    /// Parses an expression, or reports one missing `context` without consuming anything.
    pub(super) fn parse_expr_or_error(&mut self, context: &str) {
        let closure_allowed = !self.restrictions.no_trailing_closure;
        if self.currently_is_one_of(EXPR_FIRST)
            && (closure_allowed || !self.currently_is(SyntaxKind::BraceOpen))
        {
            self.parse_expr();
        } else {
            self.error_msg(
                DiagnosticKind::ExpectedExpression,
                format!("expected expression {context}"),
            );
        }
    }

    fn parse_expr_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_unary();

        loop {
            if self.should_stop() {
                break;
            }
            if self.restrictions.line_bounded && self.newline_before_current() {
                break;
            }
            match self.current() {
                SyntaxKind::Id if matches!(self.current_text(), "as" | "is") => {
                    if CAST_BP.0 < min_bp {
                        break;
                    }
                    self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                    self.bump();
                    // `as?`, `as!`
                    if self.currently_is(SyntaxKind::Operator)
                        && !self.has_trivia_before_current()
                        && matches!(self.current_text(), "?" | "!")
                    {
                        self.bump();
                    }
                    self.parse_type();
                    self.finish_node();
                }
                SyntaxKind::Operator | SyntaxKind::Equals if self.at_infix_operator() => {
                    let op = self.current_text();
                    if op == "?" {
                        if TERNARY_BP.0 < min_bp {
                            break;
                        }
                        self.start_node_at(checkpoint, SyntaxKind::TernaryExpr);
                        self.bump();
                        self.parse_expr_bp(0);
                        self.expect(SyntaxKind::Colon, "`:` in ternary expression");
                        self.parse_expr_bp(TERNARY_BP.1);
                        self.finish_node();
                        continue;
                    }
                    let (l_bp, r_bp) = infix_binding_power(op);
                    if l_bp < min_bp {
                        break;
                    }
                    self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                    self.bump();
                    self.parse_expr_bp(r_bp);
                    self.finish_node();
                }
                _ => break,
            }
        }
        self.exit_recursion();
    }

    fn at_infix_operator(&mut self) -> bool {
        self.has_trivia_before_current() == self.has_trivia_after_current()
    }

    /// `x!`, `x?` glued to the operand. `a!b` stays infix.
    fn at_postfix_operator(&mut self) -> bool {
        if !self.currently_is(SyntaxKind::Operator) || self.has_trivia_before_current() {
            return false;
        }
        if !self.current_text().chars().all(|c| c == '!' || c == '?') {
            return false;
        }
        if self.has_trivia_after_current() {
            return true;
        }
        let next = self.nth_raw(1);
        !matches!(
            next,
            SyntaxKind::Id
                | SyntaxKind::IntLiteral
                | SyntaxKind::FloatLiteral
                | SyntaxKind::DoubleQuote
        ) && !LITERALS.contains(next)
    }

    fn parse_unary(&mut self) {
        match self.current() {
            // operator reference: `reduce(0, +)`
            SyntaxKind::Operator
                if matches!(
                    self.peek_nth(1),
                    SyntaxKind::ParenClose | SyntaxKind::Comma | SyntaxKind::BracketClose
                ) =>
            {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Operator => {
                if !self.enter_recursion() {
                    return;
                }
                self.start_node(SyntaxKind::PrefixExpr);
                self.bump();
                self.parse_unary();
                self.finish_node();
                self.exit_recursion();
            }
            SyntaxKind::Id if self.at_effect_marker() => {
                if !self.enter_recursion() {
                    return;
                }
                self.start_node(SyntaxKind::PrefixExpr);
                self.bump();
                // `try?`, `try!`
                if self.currently_is(SyntaxKind::Operator)
                    && !self.has_trivia_before_current()
                    && matches!(self.current_text(), "?" | "!")
                {
                    self.bump();
                }
                self.parse_unary();
                self.finish_node();
                self.exit_recursion();
            }
            _ => self.parse_postfix_expr(),
        }
    }

    fn at_effect_marker(&mut self) -> bool {
        if !matches!(self.current_text(), "try" | "await") {
            return false;
        }
        // `try(x)` is a call
        let next = self.peek_nth(1);
        EXPR_FIRST.contains(next) && next != SyntaxKind::ParenOpen
    }

    fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.parse_primary() {
            return;
        }
        loop {
            if self.should_stop() {
                break;
            }
            let newline = self.newline_before_current();
            match self.current() {
                SyntaxKind::Dot if !(newline && self.restrictions.line_bounded) => {
                    self.start_node_at(checkpoint, SyntaxKind::MemberExpr);
                    self.bump();
                    self.parse_member_name();
                    self.finish_node();
                }
                SyntaxKind::ParenOpen if !newline => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    self.parse_delimited_args(
                        SyntaxKind::ArgList,
                        SyntaxKind::ParenOpen,
                        SyntaxKind::ParenClose,
                        "argument list",
                    );
                    if self.at_trailing_closure() {
                        self.parse_trailing_closures();
                    }
                    self.finish_node();
                }
                SyntaxKind::BracketOpen if !newline => {
                    self.start_node_at(checkpoint, SyntaxKind::SubscriptExpr);
                    self.parse_delimited_args(
                        SyntaxKind::ArgList,
                        SyntaxKind::BracketOpen,
                        SyntaxKind::BracketClose,
                        "subscript",
                    );
                    self.finish_node();
                }
                SyntaxKind::BraceOpen if self.at_trailing_closure() => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    self.parse_trailing_closures();
                    self.finish_node();
                }
                SyntaxKind::Operator if self.at_postfix_operator() => {
                    self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
                    self.bump();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    /// Name after `.`: identifier, keyword, or tuple index, with optional
    /// generic arguments and compound argument labels.
    fn parse_member_name(&mut self) {
        let kind = self.current();
        match kind {
            SyntaxKind::Id | SyntaxKind::IntLiteral | SyntaxKind::FloatLiteral => self.bump(),
            _ if kind.is_keyword() => self.bump(),
            _ => {
                self.error_msg(DiagnosticKind::ExpectedName, "member name after `.`");
                return;
            }
        }
        if self.at_expr_generic_args() {
            self.parse_generic_args();
        }
        if self.at_compound_name() {
            self.parse_decl_name_args();
        }
    }

    /// `(label:label:)` directly after a name.
    fn at_compound_name(&mut self) -> bool {
        if !self.currently_is(SyntaxKind::ParenOpen) || self.newline_before_current() {
            return false;
        }
        let mut n = 1;
        loop {
            if !self.peek_nth(n).is_label() || self.peek_nth(n + 1) != SyntaxKind::Colon {
                return false;
            }
            n += 2;
            if self.peek_nth(n) == SyntaxKind::ParenClose {
                return true;
            }
        }
    }

    fn parse_decl_name_args(&mut self) {
        self.start_node(SyntaxKind::DeclNameArgs);
        self.bump(); // '('
        while self.current().is_label() {
            self.start_node(SyntaxKind::DeclNameArg);
            self.bump();
            self.bump(); // ':'
            self.finish_node();
        }
        self.expect(SyntaxKind::ParenClose, "`)` to close compound name");
        self.finish_node();
    }

    /// Returns false when nothing was consumed.
    fn parse_primary(&mut self) -> bool {
        match self.current() {
            SyntaxKind::Id => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                if self.at_expr_generic_args() {
                    self.parse_generic_args();
                }
                if self.at_compound_name() {
                    self.parse_decl_name_args();
                }
                self.finish_node();
            }
            kind if LITERALS.contains(kind) => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::DoubleQuote => {
                self.start_node(SyntaxKind::StringExpr);
                self.bump();
                self.parse_string_segments();
                self.expect(SyntaxKind::DoubleQuote, "closing `\"`");
                self.finish_node();
            }
            SyntaxKind::Underscore => {
                self.start_node(SyntaxKind::DiscardExpr);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::ParenOpen => self.parse_delimited_args(
                SyntaxKind::TupleExpr,
                SyntaxKind::ParenOpen,
                SyntaxKind::ParenClose,
                "parenthesized expression",
            ),
            SyntaxKind::BracketOpen => self.parse_array_expr(),
            SyntaxKind::BraceOpen => self.parse_closure_expr(),
            // implicit member: `.red`, `.init(x: 1)`
            SyntaxKind::Dot => {
                self.start_node(SyntaxKind::MemberExpr);
                self.bump();
                self.parse_member_name();
                self.finish_node();
            }
            SyntaxKind::PoundSelector => {
                self.start_node(SyntaxKind::SelectorExpr);
                self.bump();
                if self.currently_is(SyntaxKind::ParenOpen) {
                    self.parse_delimited_args(
                        SyntaxKind::ArgList,
                        SyntaxKind::ParenOpen,
                        SyntaxKind::ParenClose,
                        "`#selector`",
                    );
                } else {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "expected `(` after `#selector`",
                    );
                }
                self.finish_node();
            }
            SyntaxKind::PoundIdent => self.parse_macro_expr(),
            _ => {
                self.error(DiagnosticKind::ExpectedExpression);
                return false;
            }
        }
        true
    }

    /// `#file`, `#available(iOS 15, *)`, `#expect(value == 1)`
    fn parse_macro_expr(&mut self) {
        self.start_node(SyntaxKind::MacroExpr);
        let name = self.current_text();
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) && !self.has_trivia_before_current() {
            // platform lists are not expressions
            if matches!(name, "#available" | "#unavailable") {
                self.bump_balanced(SyntaxKind::ParenOpen, SyntaxKind::ParenClose, "availability");
            } else {
                self.parse_delimited_args(
                    SyntaxKind::ArgList,
                    SyntaxKind::ParenOpen,
                    SyntaxKind::ParenClose,
                    "macro arguments",
                );
            }
        }
        self.finish_node();
    }

    /// Comma-separated `Arg`s between `open` and `close`.
    fn parse_delimited_args(
        &mut self,
        node: SyntaxKind,
        open: SyntaxKind,
        close: SyntaxKind,
        construct: &str,
    ) {
        self.assert_current(open);
        if !self.enter_recursion() {
            return;
        }
        self.start_node(node);
        self.push_delimiter(open);
        self.bump();
        self.with_restrictions(Restrictions::default(), |p| {
            loop {
                if p.should_stop() || p.currently_is_one_of(LIST_RECOVERY) {
                    break;
                }
                p.parse_arg();
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(close, construct);
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_arg(&mut self) {
        self.start_node(SyntaxKind::Arg);
        if self.current().is_label() && self.next_is(SyntaxKind::Colon) {
            self.start_node(SyntaxKind::ArgLabel);
            self.bump();
            self.bump(); // ':'
            self.finish_node();
        }
        self.parse_expr_or_error("as argument");
        self.finish_node();
    }

    /// Text and `\(...)` segments between the quotes of a string literal.
    fn parse_string_segments(&mut self) {
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::StrVal => self.bump(),
                SyntaxKind::InterpolationOpen => self.parse_interpolation(),
                _ => break,
            }
        }
    }

    fn parse_interpolation(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::Interpolation);
        // closed by a plain `)`
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        // `\(value, format: spec)` takes arguments like a call
        self.with_restrictions(Restrictions::default(), |p| {
            loop {
                if p.should_stop() || p.currently_is_one_of(LIST_RECOVERY) {
                    break;
                }
                p.parse_arg();
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(SyntaxKind::ParenClose, "string interpolation");
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_array_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::ArrayExpr);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();
        self.with_restrictions(Restrictions::default(), |p| {
            // empty dictionary `[:]`
            if p.currently_is(SyntaxKind::Colon) && p.next_is(SyntaxKind::BracketClose) {
                p.bump();
                return;
            }
            loop {
                if p.should_stop() || p.currently_is_one_of(LIST_RECOVERY) {
                    break;
                }
                p.parse_expr_or_error("as element");
                if p.eat_token(SyntaxKind::Colon) {
                    p.parse_expr_or_error("as dictionary value");
                }
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(SyntaxKind::BracketClose, "collection literal");
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_closure_expr(&mut self) {
        self.assert_current(SyntaxKind::BraceOpen);
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::ClosureExpr);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        if self.at_closure_signature() {
            self.parse_closure_signature();
        }
        self.parse_block_contents();
        self.close_delimiter(SyntaxKind::BraceClose, "closure");
        self.finish_node();
        self.exit_recursion();
    }

    /// Looks for `in` before anything that cannot appear in a closure signature.
    fn at_closure_signature(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        let mut seen = 0;
        for token in &self.tokens[self.pos..] {
            if token.kind.is_trivia() {
                continue;
            }
            match token.kind {
                SyntaxKind::KwIn => return seen > 0,
                SyntaxKind::Id
                | SyntaxKind::Underscore
                | SyntaxKind::Comma
                | SyntaxKind::Colon
                | SyntaxKind::Dot
                | SyntaxKind::Arrow
                | SyntaxKind::Operator
                | SyntaxKind::AtName
                | SyntaxKind::Equals
                | SyntaxKind::ParenOpen
                | SyntaxKind::ParenClose
                | SyntaxKind::BracketOpen
                | SyntaxKind::BracketClose => {}
                _ => return false,
            }
            seen += 1;
            if seen >= 64 {
                return false;
            }
        }
        false
    }

    /// `[weak self] (a: Int, b) async throws -> Int in`, `a, b in`
    fn parse_closure_signature(&mut self) {
        self.start_node(SyntaxKind::ClosureSignature);
        while self.currently_is(SyntaxKind::AtName) {
            self.parse_attribute();
        }
        if self.currently_is(SyntaxKind::BracketOpen) {
            self.bump_balanced(SyntaxKind::BracketOpen, SyntaxKind::BracketClose, "capture list");
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_clause();
        } else {
            loop {
                match self.current() {
                    SyntaxKind::Id => {
                        self.start_node(SyntaxKind::BindingName);
                        self.bump();
                        self.finish_node();
                    }
                    SyntaxKind::Underscore => self.bump(),
                    _ => break,
                }
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }
        self.parse_effects_opt();
        if self.currently_is(SyntaxKind::Arrow) {
            self.start_node(SyntaxKind::ReturnClause);
            self.bump();
            self.parse_type();
            self.finish_node();
        }
        self.expect(SyntaxKind::KwIn, "`in` after closure signature");
        self.finish_node();
    }

    fn at_trailing_closure(&mut self) -> bool {
        self.currently_is(SyntaxKind::BraceOpen)
            && !self.restrictions.no_trailing_closure
            && !self.newline_before_current()
    }

    /// `{ ... } label: { ... }`. Only the first closure is unlabelled.
    fn parse_trailing_closures(&mut self) {
        self.start_node(SyntaxKind::TrailingClosure);
        self.parse_closure_expr();
        self.finish_node();

        while self.current().is_label()
            && self.next_is(SyntaxKind::Colon)
            && self.peek_nth(2) == SyntaxKind::BraceOpen
        {
            self.start_node(SyntaxKind::TrailingClosure);
            self.start_node(SyntaxKind::ArgLabel);
            self.bump();
            self.bump(); // ':'
            self.finish_node();
            self.parse_closure_expr();
            self.finish_node();
        }
    }
}
