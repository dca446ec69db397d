use crate::SourceFile;

#[test]
fn function_type_with_effects() {
    let res = SourceFile::expect_valid_cst("let f: (Int, label: String) async throws -> [Int]");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        KwLet "let"
        BindingName
          Id "f"
        TypeAnnotation
          Colon ":"
          FunctionType
            TupleType
              ParenOpen "("
              TypeRef
                Id "Int"
              Comma ","
              Id "label"
              Colon ":"
              TypeRef
                Id "String"
              ParenClose ")"
            Id "async"
            Id "throws"
            Arrow "->"
            ArrayType
              BracketOpen "["
              TypeRef
                Id "Int"
              BracketClose "]"
    "#);
}

#[test]
fn optional_dictionary() {
    let res = SourceFile::expect_valid_cst("var m: [String: Int]? = nil");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        KwVar "var"
        BindingName
          Id "m"
        TypeAnnotation
          Colon ":"
          OptionalType
            ArrayType
              BracketOpen "["
              TypeRef
                Id "String"
              Colon ":"
              TypeRef
                Id "Int"
              BracketClose "]"
            Operator "?"
        Initializer
          Equals "="
          Literal
            KwNil "nil"
    "#);
}

#[test]
fn generic_member_type() {
    let res = SourceFile::expect_valid_cst("let i: Dictionary<Key, [Value]>.Index");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        KwLet "let"
        BindingName
          Id "i"
        TypeAnnotation
          Colon ":"
          TypeRef
            Id "Dictionary"
            GenericArgs
              Operator "<"
              TypeRef
                Id "Key"
              Comma ","
              BracketOpen "["
              TypeRef
                Id "Value"
              BracketClose "]"
              Operator ">"
            Dot "."
            Id "Index"
    "#);
}
