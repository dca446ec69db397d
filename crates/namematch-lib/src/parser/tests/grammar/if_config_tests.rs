use crate::SourceFile;
use indoc::indoc;

#[test]
fn clauses_with_conditions() {
    let input = indoc! {"
        #if DEBUG && !os(iOS)
        foo()
        #elseif swift(>=5.9)
        #else
        bar()
        #endif
    "};

    let res = SourceFile::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      IfConfigDecl
        IfConfigClause
          PoundIf "#if"
          IfConfigCondition
            BinaryExpr
              NameRef
                Id "DEBUG"
              Operator "&&"
              PrefixExpr
                Operator "!"
                CallExpr
                  NameRef
                    Id "os"
                  ArgList
                    ParenOpen "("
                    Arg
                      NameRef
                        Id "iOS"
                    ParenClose ")"
          CallExpr
            NameRef
              Id "foo"
            ArgList
              ParenOpen "("
              ParenClose ")"
        IfConfigClause
          PoundElseif "#elseif"
          IfConfigCondition
            CallExpr
              NameRef
                Id "swift"
              ArgList
                ParenOpen "("
                Arg
                  PrefixExpr
                    Operator ">="
                    Literal
                      FloatLiteral "5.9"
                ParenClose ")"
        IfConfigClause
          PoundElse "#else"
          CallExpr
            NameRef
              Id "bar"
            ArgList
              ParenOpen "("
              ParenClose ")"
        PoundEndif "#endif"
    "##);
}

#[test]
fn clause_inside_member_block() {
    let input = indoc! {"
        struct S {
        #if DEBUG
            func f() {}
        #endif
        }
    "};

    let res = SourceFile::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      NominalDecl
        KwStruct "struct"
        Id "S"
        MemberBlock
          BraceOpen "{"
          IfConfigDecl
            IfConfigClause
              PoundIf "#if"
              IfConfigCondition
                NameRef
                  Id "DEBUG"
              FuncDecl
                KwFunc "func"
                Id "f"
                ParamClause
                  ParenOpen "("
                  ParenClose ")"
                CodeBlock
                  BraceOpen "{"
                  BraceClose "}"
            PoundEndif "#endif"
          BraceClose "}"
    "##);
}

#[test]
fn outline_of_nested_clauses() {
    let input = indoc! {"
        #if A
        #if B
        f(x: 1)
        #endif
        #elseif C
        #endif
    "};

    let res = SourceFile::expect_valid_outline(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      IfConfig #if #elseif
        IfConfig #if
          Call f(x:)
    "##);
}
