use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::LIST_RECOVERY;
use crate::parser::lexer::token_text;

/// Ownership and opaqueness specifiers written in front of a type.
const TYPE_SPECIFIERS: &[&str] = &["inout", "some", "any", "borrowing", "consuming", "sending"];

/// Net count of `<` minus `>` in an operator token.
pub(super) fn angle_balance(text: &str) -> i32 {
    text.chars()
        .map(|c| match c {
            '<' => 1,
            '>' => -1,
            _ => 0,
        })
        .sum()
}

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        while self.currently_is(SyntaxKind::AtName) {
            self.parse_attribute();
        }
        while self.currently_is(SyntaxKind::Id)
            && TYPE_SPECIFIERS.contains(&self.current_text())
            && matches!(
                self.peek_nth(1),
                SyntaxKind::Id | SyntaxKind::ParenOpen | SyntaxKind::BracketOpen
            )
        {
            self.bump();
        }

        let checkpoint = self.checkpoint();
        match self.current() {
            SyntaxKind::Id => self.parse_type_ref(),
            SyntaxKind::BracketOpen => self.parse_collection_type(),
            SyntaxKind::ParenOpen => self.parse_tuple_or_function_type(checkpoint),
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                self.exit_recursion();
                return;
            }
        }

        // `T?`, `T!`, `T??`
        while self.currently_is(SyntaxKind::Operator)
            && !self.has_trivia_before_current()
            && self.current_text().chars().all(|c| c == '?' || c == '!')
        {
            self.start_node_at(checkpoint, SyntaxKind::OptionalType);
            self.bump();
            self.finish_node();
        }
        self.exit_recursion();
    }

    /// `Name`, `Outer.Inner`, `Array<Element>`
    pub(super) fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        self.bump();
        self.parse_generic_clause_opt();
        while self.currently_is(SyntaxKind::Dot)
            && !self.has_trivia_before_current()
            && self.next_is(SyntaxKind::Id)
        {
            self.bump();
            self.bump();
            self.parse_generic_clause_opt();
        }
        self.finish_node();
    }

    /// `[Element]` or `[Key: Value]`
    fn parse_collection_type(&mut self) {
        self.start_node(SyntaxKind::ArrayType);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();
        self.parse_type();
        if self.eat_token(SyntaxKind::Colon) {
            self.parse_type();
        }
        self.close_delimiter(SyntaxKind::BracketClose, "collection type");
        self.finish_node();
    }

    /// `(Int, label: String)`, optionally followed by `async throws -> Result`.
    fn parse_tuple_or_function_type(&mut self, checkpoint: Checkpoint) {
        self.start_node(SyntaxKind::TupleType);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        loop {
            if self.should_stop() || self.currently_is_one_of(LIST_RECOVERY) {
                break;
            }
            if self.at_labelled_element() {
                self.bump();
                if !self.currently_is(SyntaxKind::Colon) {
                    self.bump();
                }
                self.bump(); // ':'
            }
            self.parse_type();
            if self.currently_is(SyntaxKind::Operator) && self.current_text() == "..." {
                self.bump();
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::ParenClose, "tuple type");
        self.finish_node();

        self.parse_effects_opt();
        if self.currently_is(SyntaxKind::Arrow) {
            self.start_node_at(checkpoint, SyntaxKind::FunctionType);
            self.bump();
            self.parse_type();
            self.finish_node();
        }
    }

    /// A glued `<` that opens generic arguments or parameters.
    pub(super) fn at_type_generic_args(&mut self) -> bool {
        self.currently_is(SyntaxKind::Operator)
            && !self.has_trivia_before_current()
            && self.current_text().starts_with('<')
    }

    /// Same as [`at_type_generic_args`](Self::at_type_generic_args), but in expression
    /// position `<` is only generic when a balanced list is directly followed by `(` or `.`.
    pub(super) fn at_expr_generic_args(&mut self) -> bool {
        if !self.at_type_generic_args() {
            return false;
        }
        let mut balance = 0i32;
        for (i, token) in self.tokens[self.pos..].iter().enumerate().take(32) {
            match token.kind {
                SyntaxKind::Operator => {
                    let text = token_text(self.source, token);
                    if !text.chars().all(|c| matches!(c, '<' | '>' | '?' | '!')) {
                        return false;
                    }
                    balance += angle_balance(text);
                    if balance <= 0 {
                        let after = self.tokens.get(self.pos + i + 1).map(|t| t.kind);
                        return matches!(after, Some(SyntaxKind::ParenOpen | SyntaxKind::Dot));
                    }
                }
                SyntaxKind::Id
                | SyntaxKind::Comma
                | SyntaxKind::Dot
                | SyntaxKind::Colon
                | SyntaxKind::BracketOpen
                | SyntaxKind::BracketClose
                | SyntaxKind::Whitespace => {}
                _ => return false,
            }
        }
        false
    }

    /// `<T: Equatable, U>` kept flat: names become `TypeRef`s, everything else stays a token.
    ///
    /// A closing `>` may be glued to other operator characters (`>>`, `>?`), so the
    /// clause ends when the angle count drops to zero rather than on a `>` token.
    pub(super) fn parse_generic_args(&mut self) {
        self.start_node(SyntaxKind::GenericArgs);
        let mut balance = 0i32;
        loop {
            if self.should_stop() {
                break;
            }
            match self.current() {
                SyntaxKind::Operator => {
                    balance += angle_balance(self.current_text());
                    self.bump();
                    if balance <= 0 {
                        break;
                    }
                }
                SyntaxKind::Id => {
                    self.start_node(SyntaxKind::TypeRef);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::BraceOpen | SyntaxKind::BraceClose | SyntaxKind::Semicolon => break,
                _ => self.bump(),
            }
        }
        if balance > 0 {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `>` to close generic arguments",
            );
        }
        self.finish_node();
    }
}
