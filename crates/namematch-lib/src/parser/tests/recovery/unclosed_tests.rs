use crate::SourceFile;

#[test]
fn missing_paren() {
    let res = SourceFile::expect_invalid("foo(a: 1");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`
      |
    1 | foo(a: 1
      |    -^^^^
      |    |
      |    argument list started here
    ");
}

#[test]
fn missing_brace() {
    let res = SourceFile::expect_invalid("func f() { g()");

    insta::assert_snapshot!(res, @r"
    error: missing closing `}`
      |
    1 | func f() { g()
      |          -^^^^
      |          |
      |          block started here
    ");
}

#[test]
fn missing_bracket() {
    let res = SourceFile::expect_invalid("[1, 2");

    insta::assert_snapshot!(res, @r"
    error: missing closing `]`
      |
    1 | [1, 2
      | -^^^^
      | |
      | collection literal started here
    ");
}

#[test]
fn unclosed_call_keeps_arguments() {
    let file = SourceFile::parse("foo(a: 1, b: 2").unwrap();
    assert!(!file.is_valid());

    insta::assert_snapshot!(file.dump_cst(), @r#"
    SourceFile
      CallExpr
        NameRef
          Id "foo"
        ArgList
          ParenOpen "("
          Arg
            ArgLabel
              Id "a"
              Colon ":"
            Literal
              IntLiteral "1"
          Comma ","
          Arg
            ArgLabel
              Id "b"
              Colon ":"
            Literal
              IntLiteral "2"
    "#);
}
