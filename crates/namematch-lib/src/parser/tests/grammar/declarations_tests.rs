use crate::SourceFile;
use indoc::indoc;

#[test]
fn import() {
    let res = SourceFile::expect_valid_cst("import Foundation");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ImportDecl
        KwImport "import"
        Id "Foundation"
    "#);
}

#[test]
fn variable_bindings() {
    let res = SourceFile::expect_valid_cst("let x: Int = 1, y = 2");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        KwLet "let"
        BindingName
          Id "x"
        TypeAnnotation
          Colon ":"
          TypeRef
            Id "Int"
        Initializer
          Equals "="
          Literal
            IntLiteral "1"
        Comma ","
        BindingName
          Id "y"
        Initializer
          Equals "="
          Literal
            IntLiteral "2"
    "#);
}

#[test]
fn function_with_labelled_parameter() {
    let res = SourceFile::expect_valid_cst("func f(a b: Int = 0) -> Int { return b }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      FuncDecl
        KwFunc "func"
        Id "f"
        ParamClause
          ParenOpen "("
          Param
            Id "a"
            Id "b"
            Colon ":"
            TypeRef
              Id "Int"
            DefaultArgument
              Equals "="
              Literal
                IntLiteral "0"
          ParenClose ")"
        ReturnClause
          Arrow "->"
          TypeRef
            Id "Int"
        CodeBlock
          BraceOpen "{"
          ReturnStmt
            KwReturn "return"
            NameRef
              Id "b"
          BraceClose "}"
    "#);
}

#[test]
fn enum_with_cases() {
    let input = indoc! {"
        enum E: Int {
            case a = 1, b(x: Int)
        }
    "};

    let res = SourceFile::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      NominalDecl
        KwEnum "enum"
        Id "E"
        InheritanceClause
          Colon ":"
          TypeRef
            Id "Int"
        MemberBlock
          BraceOpen "{"
          EnumCaseDecl
            KwCase "case"
            EnumCaseElement
              Id "a"
              Initializer
                Equals "="
                Literal
                  IntLiteral "1"
            Comma ","
            EnumCaseElement
              Id "b"
              ParamClause
                ParenOpen "("
                Param
                  Id "x"
                  Colon ":"
                  TypeRef
                    Id "Int"
                ParenClose ")"
          BraceClose "}"
    "#);
}

#[test]
fn attributes_and_modifiers() {
    let res = SourceFile::expect_valid_cst("@objc public final class C {}");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Attribute
        AtName "@objc"
      Id "public"
      Id "final"
      NominalDecl
        KwClass "class"
        Id "C"
        MemberBlock
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn initializer_and_subscript() {
    let input = indoc! {"
        struct S {
            init?(x: Int) {}
            subscript(i: Int) -> Int { 0 }
        }
    "};

    let res = SourceFile::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      NominalDecl
        KwStruct "struct"
        Id "S"
        MemberBlock
          BraceOpen "{"
          InitDecl
            KwInit "init"
            Operator "?"
            ParamClause
              ParenOpen "("
              Param
                Id "x"
                Colon ":"
                TypeRef
                  Id "Int"
              ParenClose ")"
            CodeBlock
              BraceOpen "{"
              BraceClose "}"
          SubscriptDecl
            KwSubscript "subscript"
            ParamClause
              ParenOpen "("
              Param
                Id "i"
                Colon ":"
                TypeRef
                  Id "Int"
              ParenClose ")"
            ReturnClause
              Arrow "->"
              TypeRef
                Id "Int"
            CodeBlock
              BraceOpen "{"
              Literal
                IntLiteral "0"
              BraceClose "}"
          BraceClose "}"
    "#);
}
