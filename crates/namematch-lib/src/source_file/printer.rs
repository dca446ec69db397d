use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::ast::{
    CallExpr, EnumCaseElement, FuncDecl, IfConfigDecl, InitDecl, ParamClause, SubscriptDecl,
};
use crate::parser::{SyntaxKind, SyntaxNode};

use super::SourceFile;

/// Renders a parsed file either as the raw CST or as an outline of the named
/// constructs the matcher understands.
pub struct SourcePrinter<'f> {
    file: &'f SourceFile,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'f> SourcePrinter<'f> {
    pub fn new(file: &'f SourceFile) -> Self {
        Self {
            file,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(&self.file.syntax(), 0, w)
        } else {
            self.format_outline(w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// One line per call, declaration, and `#if` block, nested by containment.
    fn format_outline(&self, w: &mut impl Write) -> std::fmt::Result {
        let root = self.file.syntax();
        writeln!(w, "SourceFile{}", self.span_str(root.text_range()))?;
        self.format_outline_children(&root, 1, w)
    }

    fn format_outline_children(
        &self,
        node: &SyntaxNode,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for child in node.children() {
            match self.outline_line(&child) {
                Some(line) => {
                    let prefix = "  ".repeat(indent);
                    let span = self.span_str(child.text_range());
                    writeln!(w, "{}{}{}", prefix, line, span)?;
                    self.format_outline_children(&child, indent + 1, w)?;
                }
                None => self.format_outline_children(&child, indent, w)?,
            }
        }
        Ok(())
    }

    fn outline_line(&self, node: &SyntaxNode) -> Option<String> {
        let line = match node.kind() {
            SyntaxKind::CallExpr => {
                let call = CallExpr::cast(node.clone())?;
                let name = call.base_name().map(|t| t.text().to_string());
                let labels: Vec<String> = call
                    .arg_list()
                    .into_iter()
                    .flat_map(|list| list.args().collect::<Vec<_>>())
                    .map(|arg| {
                        arg.label()
                            .and_then(|l| l.name())
                            .map_or_else(|| "_".to_string(), |t| t.text().to_string())
                    })
                    .collect();
                let trailing = call.trailing_closures().count();
                let mut line = format!(
                    "Call {}({})",
                    name.as_deref().unwrap_or("?"),
                    labels.iter().map(|l| format!("{l}:")).collect::<String>()
                );
                if trailing > 0 {
                    write!(line, " +{trailing} trailing").ok()?;
                }
                line
            }
            SyntaxKind::FuncDecl => {
                let decl = FuncDecl::cast(node.clone())?;
                decl_line("Func", decl.name().map(|t| t.text().to_string()), decl.param_clause())
            }
            SyntaxKind::InitDecl => {
                let decl = InitDecl::cast(node.clone())?;
                decl_line("Init", Some("init".to_string()), decl.param_clause())
            }
            SyntaxKind::SubscriptDecl => {
                let decl = SubscriptDecl::cast(node.clone())?;
                decl_line("Subscript", Some("subscript".to_string()), decl.param_clause())
            }
            SyntaxKind::EnumCaseElement => {
                let element = EnumCaseElement::cast(node.clone())?;
                decl_line(
                    "Case",
                    element.name().map(|t| t.text().to_string()),
                    element.param_clause(),
                )
            }
            SyntaxKind::IfConfigDecl => {
                let decl = IfConfigDecl::cast(node.clone())?;
                let clauses: Vec<String> = decl
                    .clauses()
                    .filter_map(|c| c.directive())
                    .map(|t| t.text().to_string())
                    .collect();
                format!("IfConfig {}", clauses.join(" "))
            }
            _ => return None,
        };
        Some(line)
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

fn decl_line(what: &str, name: Option<String>, params: Option<ParamClause>) -> String {
    let name = name.as_deref().unwrap_or("?").to_string();
    let Some(params) = params else {
        return format!("{what} {name}");
    };
    let labels: String = params
        .params()
        .map(|param| match param.names().first() {
            Some(label) => format!("{}:", label.text()),
            None => "_:".to_string(),
        })
        .collect();
    format!("{what} {name}({labels})")
}
