//! Name sites: syntax nodes that own a base name and the labels travelling with it.

use namematch_core::{CALL_LABEL_EXTENT, CallLabelExtent, CharSourceRange, LabelRangeType};
use rowan::{TextRange, TextSize};

use crate::parser::ast::{
    ArgLabel, CallExpr, DeclNameArgs, EnumCaseElement, FuncDecl, InitDecl, MemberExpr, NameRef,
    Param, ParamClause, SubscriptDecl,
};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct NameSite {
    pub range: CharSourceRange,
    pub labels: Vec<CharSourceRange>,
    pub first_trailing_label: Option<u32>,
    pub label_type: LabelRangeType,
    /// Positions inside this span resolve to the site.
    span: TextRange,
}

impl NameSite {
    fn plain(name: &SyntaxToken) -> Self {
        Self {
            range: char_range(name.text_range()),
            labels: Vec::new(),
            first_trailing_label: None,
            label_type: LabelRangeType::None,
            span: name.text_range(),
        }
    }
}

/// Innermost site around `token` whose span contains `offset`.
///
/// The walk never leaves the innermost code block, member block or closure: a
/// keyword inside a body does not belong to the call or declaration around it.
pub(super) fn find_site(token: &SyntaxToken, offset: TextSize) -> Option<NameSite> {
    for node in token.parent_ancestors() {
        if matches!(
            node.kind(),
            SyntaxKind::CodeBlock
                | SyntaxKind::MemberBlock
                | SyntaxKind::ClosureExpr
                | SyntaxKind::Interpolation
        ) {
            return None;
        }
        if let Some(site) = site_at(&node, token)
            && site.span.contains(offset)
        {
            return Some(site);
        }
    }
    None
}

fn site_at(node: &SyntaxNode, token: &SyntaxToken) -> Option<NameSite> {
    match node.kind() {
        SyntaxKind::CallExpr => call_site(&CallExpr::cast(node.clone())?),
        SyntaxKind::NameRef => {
            let name_ref = NameRef::cast(node.clone())?;
            reference_site(node, &name_ref.name()?, name_ref.decl_name_args())
        }
        SyntaxKind::MemberExpr => {
            let member = MemberExpr::cast(node.clone())?;
            reference_site(node, &member.name()?, member.decl_name_args())
        }
        SyntaxKind::FuncDecl => {
            let decl = FuncDecl::cast(node.clone())?;
            Some(decl_site(&decl.name()?, decl.param_clause(), LabelRangeType::Param))
        }
        SyntaxKind::InitDecl => {
            let decl = InitDecl::cast(node.clone())?;
            Some(decl_site(&decl.name()?, decl.param_clause(), LabelRangeType::Param))
        }
        SyntaxKind::SubscriptDecl => {
            let decl = SubscriptDecl::cast(node.clone())?;
            Some(decl_site(
                &decl.name()?,
                decl.param_clause(),
                LabelRangeType::NoncollapsibleParam,
            ))
        }
        SyntaxKind::EnumCaseElement => {
            let element = EnumCaseElement::cast(node.clone())?;
            let name = element.name()?;
            Some(match element.param_clause() {
                Some(params) => decl_site(&name, Some(params), LabelRangeType::Param),
                None => NameSite::plain(&name),
            })
        }
        SyntaxKind::TypeRef | SyntaxKind::BindingName => {
            let is_name = token.kind() == SyntaxKind::Id && token.parent().as_ref() == Some(node);
            is_name.then(|| NameSite::plain(token))
        }
        SyntaxKind::NominalDecl => {
            let name = node
                .children_with_tokens()
                .filter_map(|it| it.into_token())
                .find(|t| t.kind() == SyntaxKind::Id)?;
            (&name == token).then(|| NameSite::plain(token))
        }
        _ => None,
    }
}

/// `foo`, `x.foo`, or a compound name such as `foo(a:b:)`.
fn reference_site(
    node: &SyntaxNode,
    name: &SyntaxToken,
    args: Option<DeclNameArgs>,
) -> Option<NameSite> {
    if let Some(args) = args {
        return Some(selector_site(name, &args));
    }
    // the callee of a call is reported as the call
    if is_callee(node) {
        return None;
    }
    Some(NameSite::plain(name))
}

fn is_callee(node: &SyntaxNode) -> bool {
    node.parent()
        .filter(|p| p.kind() == SyntaxKind::CallExpr)
        .and_then(|p| p.first_child())
        .is_some_and(|callee| &callee == node)
}

fn call_site(call: &CallExpr) -> Option<NameSite> {
    let base = call.base_name()?;

    let mut labels: Vec<CharSourceRange> = call
        .arg_list()
        .map(|list| {
            list.args()
                .map(|arg| {
                    arg.label()
                        .and_then(|label| call_label_range(&label))
                        .unwrap_or_else(|| empty_at(arg.as_cst().text_range().start()))
                })
                .collect()
        })
        .unwrap_or_default();

    let argument_count = labels.len() as u32;
    let mut first_trailing_label = None;
    for closure in call.trailing_closures() {
        first_trailing_label.get_or_insert(argument_count);
        let range = closure
            .label()
            .and_then(|label| call_label_range(&label))
            .unwrap_or_else(|| empty_at(closure.as_cst().text_range().start()));
        labels.push(range);
    }

    let span = TextRange::new(base.text_range().start(), call.as_cst().text_range().end());
    Some(NameSite {
        range: char_range(base.text_range()),
        labels,
        first_trailing_label,
        label_type: LabelRangeType::CallArg,
        span,
    })
}

/// Label name through its colon, plus the trivia after the colon up to the line end.
fn call_label_range(label: &ArgLabel) -> Option<CharSourceRange> {
    let name = label.name()?;
    let colon = label.colon()?;
    let mut end = colon.text_range().end();

    if let CallLabelExtent::ColonTrivia = CALL_LABEL_EXTENT {
        let mut next = colon.next_token();
        while let Some(token) = next {
            let same_line = match token.kind() {
                SyntaxKind::Whitespace | SyntaxKind::LineComment => true,
                SyntaxKind::BlockComment => !token.text().contains('\n'),
                _ => false,
            };
            if !same_line {
                break;
            }
            end = token.text_range().end();
            next = token.next_token();
        }
    }

    Some(char_range(TextRange::new(name.text_range().start(), end)))
}

fn decl_site(
    name: &SyntaxToken,
    params: Option<ParamClause>,
    label_type: LabelRangeType,
) -> NameSite {
    let (labels, end) = match params {
        Some(clause) => (
            clause.params().map(|p| param_label_range(&p)).collect(),
            clause.as_cst().text_range().end(),
        ),
        None => (Vec::new(), name.text_range().end()),
    };
    NameSite {
        range: char_range(name.text_range()),
        labels,
        first_trailing_label: None,
        label_type,
        span: TextRange::new(name.text_range().start(), end),
    }
}

/// First name through second name; empty at the parameter start when unlabelled.
fn param_label_range(param: &Param) -> CharSourceRange {
    let names = param.names();
    match (names.first(), names.last()) {
        (Some(first), Some(last)) => char_range(TextRange::new(
            first.text_range().start(),
            last.text_range().end(),
        )),
        _ => empty_at(param.as_cst().text_range().start()),
    }
}

fn selector_site(name: &SyntaxToken, args: &DeclNameArgs) -> NameSite {
    let labels = args
        .args()
        .filter_map(|arg| arg.name())
        .map(|t| char_range(t.text_range()))
        .collect();
    NameSite {
        range: char_range(name.text_range()),
        labels,
        first_trailing_label: None,
        label_type: LabelRangeType::Selector,
        span: TextRange::new(name.text_range().start(), args.as_cst().text_range().end()),
    }
}

pub(super) fn char_range(range: TextRange) -> CharSourceRange {
    CharSourceRange::from_offsets(range.start().into(), range.end().into())
}

fn empty_at(offset: TextSize) -> CharSourceRange {
    CharSourceRange::empty(u32::from(offset).into())
}
