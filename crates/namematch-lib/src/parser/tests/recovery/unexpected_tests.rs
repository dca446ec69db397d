use crate::SourceFile;

#[test]
fn missing_argument_value() {
    let res = SourceFile::expect_invalid("foo(a: , b: 2)");

    insta::assert_snapshot!(res, @r"
    error: expected expression as argument
      |
    1 | foo(a: , b: 2)
      |        ^
    ");
}

#[test]
fn guard_without_else() {
    let res = SourceFile::expect_invalid("guard x { }");

    insta::assert_snapshot!(res, @r"
    error: expected `else` after `guard` condition
      |
    1 | guard x { }
      |         ^
    ");
}

#[test]
fn if_without_condition() {
    let res = SourceFile::expect_invalid("if { }");

    insta::assert_snapshot!(res, @r"
    error: expected a condition
      |
    1 | if { }
      |    ^
    ");
}

#[test]
fn invalid_character() {
    let res = SourceFile::expect_invalid("f() $");

    insta::assert_snapshot!(res, @r"
    error: invalid character
      |
    1 | f() $
      |     ^
    ");
}

#[test]
fn error_recovery_keeps_later_items() {
    let file = SourceFile::parse("$\nfoo(a: 1)").unwrap();
    assert!(!file.is_valid());

    insta::assert_snapshot!(file.dump_cst(), @r#"
    SourceFile
      Error
        Garbage "$"
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
          ParenClose ")"
    "#);
}
