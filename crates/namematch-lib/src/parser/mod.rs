//! Parser infrastructure for the source language.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Every byte of the input, trivia included, ends up in the tree, so byte positions handed
//! in by an editor map directly onto tokens.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: calls, member accesses and binary operators wrap their
//!   already-parsed left operand retroactively
//! - Whitespace-sensitive operators: fixity is decided by the trivia around an operator
//!
//! # Recovery Strategy
//!
//! The parser is resilient and always produces a tree:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Closing delimiters and `#if` directives are synchronization points for lists
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    Arg, ArgLabel, ArgList, CallExpr, DeclNameArg, DeclNameArgs, EnumCaseElement, FuncDecl,
    IfConfigClause, IfConfigCondition, IfConfigDecl, InitDecl, MemberExpr, NameRef, Param,
    ParamClause, Root, SelectorExpr, SubscriptDecl, TrailingClosure,
};

pub use core::Parser;

use crate::PassResult;
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    exec_fuel_consumed: u32,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    pub fn into_cst(self) -> rowan::GreenNode {
        self.cst
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }
}

/// Main entry point. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> PassResult<Parse> {
    parse_with_parser(Parser::new(source, lex(source)))
}

/// Parse with a pre-configured parser (for custom fuel limits).
pub(crate) fn parse_with_parser(mut parser: Parser) -> PassResult<Parse> {
    parser.parse_source_file();
    let (cst, diagnostics, exec_fuel_consumed) = parser.finish()?;
    Ok((
        Parse {
            cst,
            exec_fuel_consumed,
        },
        diagnostics,
    ))
}
