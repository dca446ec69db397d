use crate::SourceFile;

#[test]
fn member_call_with_trailing_closure() {
    let res = SourceFile::expect_valid_cst("a.b(x: 1) { }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        MemberExpr
          NameRef
            Id "a"
          Dot "."
          Id "b"
        ArgList
          ParenOpen "("
          Arg
            ArgLabel
              Id "x"
              Colon ":"
            Literal
              IntLiteral "1"
          ParenClose ")"
        TrailingClosure
          ClosureExpr
            BraceOpen "{"
            BraceClose "}"
    "#);
}

#[test]
fn binary_precedence() {
    let res = SourceFile::expect_valid_cst("x = a + b * c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      BinaryExpr
        NameRef
          Id "x"
        Equals "="
        BinaryExpr
          NameRef
            Id "a"
          Operator "+"
          BinaryExpr
            NameRef
              Id "b"
            Operator "*"
            NameRef
              Id "c"
    "#);
}

#[test]
fn prefix_and_postfix_operators() {
    let res = SourceFile::expect_valid_cst("!done && value!");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      BinaryExpr
        PrefixExpr
          Operator "!"
          NameRef
            Id "done"
        Operator "&&"
        PostfixExpr
          NameRef
            Id "value"
          Operator "!"
    "#);
}

#[test]
fn ternary() {
    let res = SourceFile::expect_valid_cst("c ? a : b");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TernaryExpr
        NameRef
          Id "c"
        Operator "?"
        NameRef
          Id "a"
        Colon ":"
        NameRef
          Id "b"
    "#);
}

#[test]
fn conditional_cast() {
    let res = SourceFile::expect_valid_cst("x as? Int");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      BinaryExpr
        NameRef
          Id "x"
        Id "as"
        Operator "?"
        TypeRef
          Id "Int"
    "#);
}

#[test]
fn closure_with_shorthand_parameters() {
    let res = SourceFile::expect_valid_cst("{ a, b in a + b }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ClosureExpr
        BraceOpen "{"
        ClosureSignature
          BindingName
            Id "a"
          Comma ","
          BindingName
            Id "b"
          KwIn "in"
        BinaryExpr
          NameRef
            Id "a"
          Operator "+"
          NameRef
            Id "b"
        BraceClose "}"
    "#);
}

#[test]
fn collection_literals() {
    let res = SourceFile::expect_valid_cst("[1, 2]\n[:]");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ArrayExpr
        BracketOpen "["
        Literal
          IntLiteral "1"
        Comma ","
        Literal
          IntLiteral "2"
        BracketClose "]"
      ArrayExpr
        BracketOpen "["
        Colon ":"
        BracketClose "]"
    "#);
}

#[test]
fn selector_with_compound_member() {
    let res = SourceFile::expect_valid_cst("#selector(foo.bar(a:))");

    insta::assert_snapshot!(res, @r##"
    SourceFile
      SelectorExpr
        PoundSelector "#selector"
        ArgList
          ParenOpen "("
          Arg
            MemberExpr
              NameRef
                Id "foo"
              Dot "."
              Id "bar"
              DeclNameArgs
                ParenOpen "("
                DeclNameArg
                  Id "a"
                  Colon ":"
                ParenClose ")"
          ParenClose ")"
    "##);
}

#[test]
fn generic_call() {
    let res = SourceFile::expect_valid_cst("Array<Int>(repeating: 0)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        NameRef
          Id "Array"
          GenericArgs
            Operator "<"
            TypeRef
              Id "Int"
            Operator ">"
        ArgList
          ParenOpen "("
          Arg
            ArgLabel
              Id "repeating"
              Colon ":"
            Literal
              IntLiteral "0"
          ParenClose ")"
    "#);
}

#[test]
fn operator_reference_argument() {
    let res = SourceFile::expect_valid_cst("reduce(0, +)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        NameRef
          Id "reduce"
        ArgList
          ParenOpen "("
          Arg
            Literal
              IntLiteral "0"
          Comma ","
          Arg
            NameRef
              Operator "+"
          ParenClose ")"
    "#);
}

#[test]
fn effect_markers() {
    let res = SourceFile::expect_valid_cst("try await load()");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      PrefixExpr
        Id "try"
        PrefixExpr
          Id "await"
          CallExpr
            NameRef
              Id "load"
            ArgList
              ParenOpen "("
              ParenClose ")"
    "#);
}

#[test]
fn string_argument() {
    let res = SourceFile::expect_valid_cst(r#"print("hi")"#);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        NameRef
          Id "print"
        ArgList
          ParenOpen "("
          Arg
            StringExpr
              DoubleQuote "\""
              StrVal "hi"
              DoubleQuote "\""
          ParenClose ")"
    "#);
}

#[test]
fn string_interpolation() {
    let res = SourceFile::expect_valid_cst(r#"print("a \(foo(x: 1))")"#);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        NameRef
          Id "print"
        ArgList
          ParenOpen "("
          Arg
            StringExpr
              DoubleQuote "\""
              StrVal "a "
              Interpolation
                InterpolationOpen "\\("
                Arg
                  CallExpr
                    NameRef
                      Id "foo"
                    ArgList
                      ParenOpen "("
                      Arg
                        ArgLabel
                          Id "x"
                          Colon ":"
                        Literal
                          IntLiteral "1"
                      ParenClose ")"
                ParenClose ")"
              DoubleQuote "\""
          ParenClose ")"
    "#);
}

#[test]
fn newline_separates_call_parens() {
    let res = SourceFile::expect_valid_cst("foo\n(x)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      NameRef
        Id "foo"
      TupleExpr
        ParenOpen "("
        Arg
          NameRef
            Id "x"
        ParenClose ")"
    "#);
}
