//! Syntax kinds for the source language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SourceLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    /// `->` in function signatures. Wins over `Operator` on equal length.
    #[token("->")]
    Arrow,

    /// Assignment and default values. `==` lexes as `Operator`.
    #[token("=", priority = 3)]
    Equals,

    /// Wildcard. Outranks `Id`, which also matches a lone `_`.
    #[token("_", priority = 3)]
    Underscore,

    /// Any run of operator characters (`+`, `&&`, `!`, `?`, `>=`) and the range operators.
    #[regex(r"[-+*/%<>!&|^~?=]+")]
    #[token("...")]
    #[token("..<")]
    Operator,

    #[token("#if")]
    PoundIf,

    #[token("#elseif")]
    PoundElseif,

    #[token("#else")]
    PoundElse,

    #[token("#endif")]
    PoundEndif,

    #[token("#selector")]
    PoundSelector,

    /// Other pound keywords: `#file`, `#available`, ...
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    PoundIdent,

    /// Attributes such as `@objc` or `@available`.
    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    AtName,

    #[token("func")]
    KwFunc,

    #[token("init")]
    KwInit,

    #[token("subscript")]
    KwSubscript,

    #[token("let")]
    KwLet,

    #[token("var")]
    KwVar,

    #[token("struct")]
    KwStruct,

    #[token("class")]
    KwClass,

    #[token("enum")]
    KwEnum,

    #[token("protocol")]
    KwProtocol,

    #[token("extension")]
    KwExtension,

    #[token("case")]
    KwCase,

    #[token("import")]
    KwImport,

    #[token("return")]
    KwReturn,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("guard")]
    KwGuard,

    #[token("while")]
    KwWhile,

    #[token("for")]
    KwFor,

    #[token("in")]
    KwIn,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("nil")]
    KwNil,

    /// Identifier. Defined after keywords so they take precedence.
    /// Backtick-escaped keywords (`` `default` ``) are identifiers too.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*`")]
    #[regex(r"\$[0-9]+")]
    Id,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*")]
    IntLiteral,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*(?:[eE][+-]?[0-9]+)?")]
    FloatLiteral,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[doc(hidden)]
    StringLiteral, // Lexer-internal only

    DoubleQuote,
    /// String content between quotes
    StrVal,
    /// `\(` opening an interpolated segment; produced by the lexer
    InterpolationOpen,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    CodeBlock,
    MemberBlock,
    Attribute,

    ImportDecl,
    VarDecl,
    BindingName,
    TuplePattern,
    TypeAnnotation,
    Initializer,
    FuncDecl,
    InitDecl,
    SubscriptDecl,
    ParamClause,
    Param,
    DefaultArgument,
    ReturnClause,
    NominalDecl,
    InheritanceClause,
    EnumCaseDecl,
    EnumCaseElement,

    IfConfigDecl,
    IfConfigClause,
    IfConfigCondition,

    ReturnStmt,
    IfStmt,
    ElseClause,
    GuardStmt,
    WhileStmt,
    ForStmt,
    ConditionList,
    OptionalBinding,

    NameRef,
    DeclNameArgs,
    DeclNameArg,
    MemberExpr,
    CallExpr,
    SubscriptExpr,
    ArgList,
    Arg,
    ArgLabel,
    TrailingClosure,
    ClosureExpr,
    ClosureSignature,
    SelectorExpr,
    MacroExpr,
    Literal,
    StringExpr,
    Interpolation,
    DiscardExpr,
    TupleExpr,
    ArrayExpr,
    PrefixExpr,
    PostfixExpr,
    BinaryExpr,
    TernaryExpr,

    TypeRef,
    GenericArgs,
    OptionalType,
    ArrayType,
    TupleType,
    FunctionType,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwFunc as u16..=KwNil as u16).contains(&(self as u16))
    }

    /// Tokens usable as argument or parameter labels: identifiers, `_`, and keywords.
    #[inline]
    pub fn is_label(self) -> bool {
        matches!(self, Id | Underscore) || self.is_keyword()
    }

    #[inline]
    pub fn is_pound_directive(self) -> bool {
        matches!(self, PoundIf | PoundElseif | PoundElse | PoundEndif)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceLang {}

impl Language for SourceLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SourceLang>;
pub type SyntaxToken = rowan::SyntaxToken<SourceLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can start an expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        Id,
        IntLiteral,
        FloatLiteral,
        KwTrue,
        KwFalse,
        KwNil,
        DoubleQuote,
        Underscore,
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Dot,
        PoundSelector,
        PoundIdent,
        Operator,
    ]);

    pub const LITERALS: TokenSet =
        TokenSet::new(&[IntLiteral, FloatLiteral, KwTrue, KwFalse, KwNil]);

    pub const NOMINAL_KEYWORDS: TokenSet =
        TokenSet::new(&[KwStruct, KwClass, KwEnum, KwProtocol, KwExtension]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    /// Directives that end an `#if` clause body.
    pub const CLAUSE_END: TokenSet = TokenSet::new(&[PoundElseif, PoundElse, PoundEndif]);

    /// Closers that end a comma-separated list without being consumed by it.
    pub const LIST_RECOVERY: TokenSet = TokenSet::new(&[
        ParenClose,
        BracketClose,
        BraceClose,
        PoundElseif,
        PoundElse,
        PoundEndif,
    ]);

    /// Tokens that begin a declaration or statement.
    pub const ITEM_FIRST: TokenSet = TokenSet::new(&[
        KwImport, KwLet, KwVar, KwFunc, KwInit, KwSubscript, KwStruct, KwClass, KwEnum,
        KwProtocol, KwExtension, KwCase, KwReturn, KwIf, KwGuard, KwWhile, KwFor, PoundIf,
        AtName,
    ]);
}
