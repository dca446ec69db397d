use crate::SourceFile;

#[test]
fn if_else_chain() {
    let res = SourceFile::expect_valid_cst("if a { } else if let b = c { } else { }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      IfStmt
        KwIf "if"
        ConditionList
          NameRef
            Id "a"
        CodeBlock
          BraceOpen "{"
          BraceClose "}"
        ElseClause
          KwElse "else"
          IfStmt
            KwIf "if"
            ConditionList
              OptionalBinding
                KwLet "let"
                BindingName
                  Id "b"
                Initializer
                  Equals "="
                  NameRef
                    Id "c"
            CodeBlock
              BraceOpen "{"
              BraceClose "}"
            ElseClause
              KwElse "else"
              CodeBlock
                BraceOpen "{"
                BraceClose "}"
    "#);
}

#[test]
fn guard_with_binding() {
    let res = SourceFile::expect_valid_cst("guard let x = y else { return }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      GuardStmt
        KwGuard "guard"
        ConditionList
          OptionalBinding
            KwLet "let"
            BindingName
              Id "x"
            Initializer
              Equals "="
              NameRef
                Id "y"
        KwElse "else"
        CodeBlock
          BraceOpen "{"
          ReturnStmt
            KwReturn "return"
          BraceClose "}"
    "#);
}

#[test]
fn for_in_with_where() {
    let res = SourceFile::expect_valid_cst("for case let x in xs where x > 0 { }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ForStmt
        KwFor "for"
        KwCase "case"
        KwLet "let"
        BindingName
          Id "x"
        KwIn "in"
        NameRef
          Id "xs"
        Id "where"
        BinaryExpr
          NameRef
            Id "x"
          Operator ">"
          Literal
            IntLiteral "0"
        CodeBlock
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn while_loop() {
    let res = SourceFile::expect_valid_cst("while i < n { i += 1 }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      WhileStmt
        KwWhile "while"
        ConditionList
          BinaryExpr
            NameRef
              Id "i"
            Operator "<"
            NameRef
              Id "n"
        CodeBlock
          BraceOpen "{"
          BinaryExpr
            NameRef
              Id "i"
            Operator "+="
            Literal
              IntLiteral "1"
          BraceClose "}"
    "#);
}

#[test]
fn trailing_closure_not_taken_in_condition() {
    let res = SourceFile::expect_valid_cst("if check { run() }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      IfStmt
        KwIf "if"
        ConditionList
          NameRef
            Id "check"
        CodeBlock
          BraceOpen "{"
          CallExpr
            NameRef
              Id "run"
            ArgList
              ParenOpen "("
              ParenClose ")"
          BraceClose "}"
    "#);
}
