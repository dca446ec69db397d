//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors for the parts the
//! name matcher cares about. Cast is infallible for correct `SyntaxKind`.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, SourceFile);
ast_node!(CallExpr, CallExpr);
ast_node!(ArgList, ArgList);
ast_node!(Arg, Arg);
ast_node!(ArgLabel, ArgLabel);
ast_node!(TrailingClosure, TrailingClosure);
ast_node!(NameRef, NameRef);
ast_node!(MemberExpr, MemberExpr);
ast_node!(DeclNameArgs, DeclNameArgs);
ast_node!(DeclNameArg, DeclNameArg);
ast_node!(FuncDecl, FuncDecl);
ast_node!(InitDecl, InitDecl);
ast_node!(SubscriptDecl, SubscriptDecl);
ast_node!(EnumCaseElement, EnumCaseElement);
ast_node!(ParamClause, ParamClause);
ast_node!(Param, Param);
ast_node!(IfConfigDecl, IfConfigDecl);
ast_node!(IfConfigClause, IfConfigClause);
ast_node!(IfConfigCondition, IfConfigCondition);
ast_node!(SelectorExpr, SelectorExpr);

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|it| it.into_token())
}

fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

impl Root {
    pub fn if_configs(&self) -> impl Iterator<Item = IfConfigDecl> + '_ {
        self.0.descendants().filter_map(IfConfigDecl::cast)
    }
}

impl CallExpr {
    /// The called expression: a `NameRef`, `MemberExpr`, or anything else.
    pub fn callee(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.0.children().find_map(ArgList::cast)
    }

    pub fn trailing_closures(&self) -> impl Iterator<Item = TrailingClosure> + '_ {
        self.0.children().filter_map(TrailingClosure::cast)
    }

    /// Token naming the callee (`foo` in `a.foo(x)`), when there is one.
    pub fn base_name(&self) -> Option<SyntaxToken> {
        let callee = self.callee()?;
        if let Some(name_ref) = NameRef::cast(callee.clone()) {
            return name_ref.name();
        }
        MemberExpr::cast(callee)?.name()
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0.children().filter_map(Arg::cast)
    }
}

impl Arg {
    pub fn label(&self) -> Option<ArgLabel> {
        self.0.children().find_map(ArgLabel::cast)
    }

    /// First node after the label.
    pub fn value(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() != SyntaxKind::ArgLabel)
    }
}

impl ArgLabel {
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| t.kind().is_label())
    }

    pub fn colon(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Colon)
    }
}

impl TrailingClosure {
    pub fn label(&self) -> Option<ArgLabel> {
        self.0.children().find_map(ArgLabel::cast)
    }

    pub fn closure(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::ClosureExpr)
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| !t.kind().is_trivia())
    }

    pub fn decl_name_args(&self) -> Option<DeclNameArgs> {
        self.0.children().find_map(DeclNameArgs::cast)
    }
}

impl MemberExpr {
    /// `None` for implicit member expressions such as `.red`.
    pub fn base(&self) -> Option<SyntaxNode> {
        self.0.first_child().filter(|n| {
            !matches!(n.kind(), SyntaxKind::DeclNameArgs | SyntaxKind::GenericArgs)
        })
    }

    /// The token after the dot.
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::Dot)
            .skip(1)
            .find(|t| !t.kind().is_trivia())
    }

    pub fn decl_name_args(&self) -> Option<DeclNameArgs> {
        self.0.children().find_map(DeclNameArgs::cast)
    }
}

impl DeclNameArgs {
    pub fn args(&self) -> impl Iterator<Item = DeclNameArg> + '_ {
        self.0.children().filter_map(DeclNameArg::cast)
    }
}

impl DeclNameArg {
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| t.kind().is_label())
    }
}

impl FuncDecl {
    /// Identifier or operator following `func`.
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::KwFunc)
            .skip(1)
            .find(|t| matches!(t.kind(), SyntaxKind::Id | SyntaxKind::Operator))
    }

    pub fn param_clause(&self) -> Option<ParamClause> {
        self.0.children().find_map(ParamClause::cast)
    }
}

impl InitDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::KwInit)
    }

    pub fn param_clause(&self) -> Option<ParamClause> {
        self.0.children().find_map(ParamClause::cast)
    }
}

impl SubscriptDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::KwSubscript)
    }

    pub fn param_clause(&self) -> Option<ParamClause> {
        self.0.children().find_map(ParamClause::cast)
    }
}

impl EnumCaseElement {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Id)
    }

    pub fn param_clause(&self) -> Option<ParamClause> {
        self.0.children().find_map(ParamClause::cast)
    }
}

impl ParamClause {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    /// External and internal names, in source order. Empty for unlabelled parameters.
    pub fn names(&self) -> Vec<SyntaxToken> {
        let has_colon = tokens(&self.0).any(|t| t.kind() == SyntaxKind::Colon);
        if !has_colon {
            return Vec::new();
        }
        tokens(&self.0)
            .take_while(|t| t.kind() != SyntaxKind::Colon)
            .filter(|t| t.kind().is_label())
            .collect()
    }
}

impl IfConfigDecl {
    pub fn clauses(&self) -> impl Iterator<Item = IfConfigClause> + '_ {
        self.0.children().filter_map(IfConfigClause::cast)
    }
}

impl IfConfigClause {
    /// `#if`, `#elseif` or `#else`.
    pub fn directive(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| t.kind().is_pound_directive())
    }

    pub fn condition(&self) -> Option<IfConfigCondition> {
        self.0.children().find_map(IfConfigCondition::cast)
    }
}

impl IfConfigCondition {
    pub fn expr(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }
}
