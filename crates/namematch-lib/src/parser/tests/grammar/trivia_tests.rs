use crate::SourceFile;

#[test]
fn comments_attach_around_items() {
    let res = SourceFile::expect_valid_cst_full("// lead\nf(a: 1) // tail\n");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      LineComment "// lead"
      Newline "\n"
      CallExpr
        NameRef
          Id "f"
        ArgList
          ParenOpen "("
          Arg
            ArgLabel
              Id "a"
              Colon ":"
            Whitespace " "
            Literal
              IntLiteral "1"
          ParenClose ")"
      Whitespace " "
      LineComment "// tail"
      Newline "\n"
    "#);
}

#[test]
fn block_comment_between_label_and_value() {
    let res = SourceFile::expect_valid_cst_full("f(a:/* c */1)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CallExpr
        NameRef
          Id "f"
        ArgList
          ParenOpen "("
          Arg
            ArgLabel
              Id "a"
              Colon ":"
            BlockComment "/* c */"
            Literal
              IntLiteral "1"
          ParenClose ")"
    "#);
}
