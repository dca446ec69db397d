//! Evaluation of `#if` conditions.
//!
//! Conditions are evaluated straight off the syntax tree. Anything the evaluator does
//! not understand is treated as false and logged, matching how an unknown flag behaves.

use super::{BuildConfiguration, Version};
use crate::parser::ast::{Arg, CallExpr, NameRef};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

impl BuildConfiguration {
    /// Evaluates the expression of an `IfConfigCondition`.
    pub fn evaluate(&self, expr: &SyntaxNode) -> bool {
        let value = self.eval_node(expr);
        log::trace!("#if {} => {}", expr.text(), value);
        value
    }

    fn eval_node(&self, node: &SyntaxNode) -> bool {
        match node.kind() {
            SyntaxKind::Literal => match first_token(node).map(|t| t.kind()) {
                Some(SyntaxKind::KwTrue) => true,
                Some(SyntaxKind::KwFalse) => false,
                _ => self.unsupported(node),
            },
            SyntaxKind::NameRef => NameRef::cast(node.clone())
                .and_then(|n| n.name())
                .is_some_and(|name| self.custom_conditions.contains(name.text())),
            SyntaxKind::PrefixExpr => {
                let is_not = first_token(node).is_some_and(|t| t.text() == "!");
                match node.first_child() {
                    Some(operand) if is_not => !self.eval_node(&operand),
                    _ => self.unsupported(node),
                }
            }
            SyntaxKind::BinaryExpr => self.eval_binary(node),
            SyntaxKind::TupleExpr => {
                let mut args = node.children().filter_map(Arg::cast);
                match (args.next(), args.next()) {
                    (Some(arg), None) if arg.label().is_none() => match arg.value() {
                        Some(value) => self.eval_node(&value),
                        None => self.unsupported(node),
                    },
                    _ => self.unsupported(node),
                }
            }
            SyntaxKind::CallExpr => self.eval_platform_condition(node),
            _ => self.unsupported(node),
        }
    }

    fn eval_binary(&self, node: &SyntaxNode) -> bool {
        let op = node
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Operator);
        let mut operands = node.children();
        let (Some(op), Some(lhs), Some(rhs)) = (op, operands.next(), operands.next()) else {
            return self.unsupported(node);
        };
        match op.text() {
            "&&" => self.eval_node(&lhs) && self.eval_node(&rhs),
            "||" => self.eval_node(&lhs) || self.eval_node(&rhs),
            _ => self.unsupported(node),
        }
    }

    /// `os(iOS)`, `arch(arm64)`, `canImport(UIKit)`, `swift(>=5.9)`, ...
    fn eval_platform_condition(&self, node: &SyntaxNode) -> bool {
        let Some(call) = CallExpr::cast(node.clone()) else {
            return false;
        };
        let callee = call
            .callee()
            .and_then(NameRef::cast)
            .and_then(|n| n.name());
        let args: Vec<Arg> = call
            .arg_list()
            .map(|list| list.args().collect())
            .unwrap_or_default();
        let (Some(callee), Some(first)) = (callee, args.first()) else {
            return self.unsupported(node);
        };
        let argument = compact_text(first);

        match callee.text() {
            "os" => self.target_os.as_deref() == Some(argument.as_str()),
            "arch" => self.target_arch.as_deref() == Some(argument.as_str()),
            "targetEnvironment" => self.target_environment.as_deref() == Some(argument.as_str()),
            "canImport" => self.importable_modules.contains(&argument),
            "swift" => self.compare_version(&self.language_version, &argument, node),
            "compiler" => self.compare_version(&self.compiler_version, &argument, node),
            _ => self.unsupported(node),
        }
    }

    fn compare_version(&self, actual: &Version, argument: &str, node: &SyntaxNode) -> bool {
        let (at_least, text) = if let Some(rest) = argument.strip_prefix(">=") {
            (true, rest)
        } else if let Some(rest) = argument.strip_prefix('<') {
            (false, rest)
        } else {
            return self.unsupported(node);
        };
        match Version::parse(text) {
            Ok(required) if at_least => *actual >= required,
            Ok(required) => *actual < required,
            Err(err) => {
                log::warn!("#if {}: {}", node.text(), err);
                false
            }
        }
    }

    fn unsupported(&self, node: &SyntaxNode) -> bool {
        log::warn!("unsupported #if condition `{}`, treating as false", node.text());
        false
    }
}

fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| !t.kind().is_trivia())
}

/// Argument value text with all whitespace removed.
fn compact_text(arg: &Arg) -> String {
    let Some(value) = arg.value() else {
        return String::new();
    };
    value
        .text()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
