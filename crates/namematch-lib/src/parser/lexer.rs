//! Lexer for the source language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Unterminated string literals end up as garbage
//! too; the parser reports them once.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Splits `StringLiteral` tokens into quote + segments + quote, lexing interpolated code
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }

                let span = lexer.span();
                if kind == SyntaxKind::StringLiteral {
                    split_string_literal(source, span, &mut tokens);
                } else {
                    tokens.push(Token::new(kind, range_to_text_range(span)));
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Splits a string literal token into: quote + segments + quote.
///
/// Text segments become `StrVal`; each `\( ... )` segment becomes `InterpolationOpen`,
/// the tokens of the embedded code, and the closing `ParenClose`. An interpolation
/// without its closing paren stays string text. Empty literals produce no `StrVal`.
fn split_string_literal(source: &str, span: Range<usize>, tokens: &mut Vec<Token>) {
    let start = span.start;
    let end = span.end;

    tokens.push(Token::new(
        SyntaxKind::DoubleQuote,
        range_to_text_range(start..start + 1),
    ));

    let bytes = source.as_bytes();
    let content_end = end - 1;
    let mut text_start = start + 1;
    let mut i = text_start;
    while i < content_end {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) != Some(&b'(') {
            // any other escape, including `\\`
            i += 2;
            continue;
        }
        let Some(close) = interpolation_close(bytes, i + 2, content_end) else {
            break;
        };
        if text_start < i {
            tokens.push(Token::new(
                SyntaxKind::StrVal,
                range_to_text_range(text_start..i),
            ));
        }
        tokens.push(Token::new(
            SyntaxKind::InterpolationOpen,
            range_to_text_range(i..i + 2),
        ));
        let inner = i + 2;
        let shift = TextSize::from(inner as u32);
        tokens.extend(lex(&source[inner..close]).into_iter().map(|t| {
            Token::new(
                t.kind,
                TextRange::new(t.span.start() + shift, t.span.end() + shift),
            )
        }));
        tokens.push(Token::new(
            SyntaxKind::ParenClose,
            range_to_text_range(close..close + 1),
        ));
        i = close + 1;
        text_start = i;
    }

    if text_start < content_end {
        tokens.push(Token::new(
            SyntaxKind::StrVal,
            range_to_text_range(text_start..content_end),
        ));
    }

    tokens.push(Token::new(
        SyntaxKind::DoubleQuote,
        range_to_text_range(content_end..end),
    ));
}

/// Offset of the `)` balancing an interpolation whose code starts at `from`.
fn interpolation_close(bytes: &[u8], from: usize, limit: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &b) in bytes[from..limit].iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' if depth == 0 => return Some(from + offset),
            b')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
