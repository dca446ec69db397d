use crate::SourceFile;
use crate::parser::ast::{
    CallExpr, EnumCaseElement, FuncDecl, IfConfigDecl, InitDecl, MemberExpr, NameRef,
    SubscriptDecl,
};
use crate::parser::{SyntaxKind, SyntaxNode};

fn parse(src: &str) -> SyntaxNode {
    SourceFile::expect_valid(src).syntax()
}

fn first<T>(root: &SyntaxNode, cast: fn(SyntaxNode) -> Option<T>) -> T {
    root.descendants()
        .find_map(cast)
        .expect("node of the requested kind")
}

fn texts(tokens: impl IntoIterator<Item = crate::parser::SyntaxToken>) -> Vec<String> {
    tokens.into_iter().map(|t| t.text().to_string()).collect()
}

#[test]
fn call_accessors() {
    let root = parse("foo(1, b: 2) { } c: { }");
    let call = first(&root, CallExpr::cast);

    assert_eq!(call.base_name().unwrap().text(), "foo");
    assert_eq!(call.callee().unwrap().kind(), SyntaxKind::NameRef);

    let args: Vec<_> = call.arg_list().unwrap().args().collect();
    assert_eq!(args.len(), 2);
    assert!(args[0].label().is_none());
    assert_eq!(args[0].value().unwrap().text().to_string(), "1");
    let label = args[1].label().unwrap();
    assert_eq!(label.name().unwrap().text(), "b");
    assert_eq!(label.colon().unwrap().text(), ":");
    assert_eq!(args[1].value().unwrap().kind(), SyntaxKind::Literal);

    let closures: Vec<_> = call.trailing_closures().collect();
    assert_eq!(closures.len(), 2);
    assert!(closures[0].label().is_none());
    assert!(closures[0].closure().is_some());
    assert_eq!(closures[1].label().unwrap().name().unwrap().text(), "c");
}

#[test]
fn member_call_base_name() {
    let root = parse("a.b.run(x)");
    let call = first(&root, CallExpr::cast);
    assert_eq!(call.base_name().unwrap().text(), "run");

    let member = MemberExpr::cast(call.callee().unwrap()).unwrap();
    assert_eq!(member.name().unwrap().text(), "run");
    assert_eq!(member.base().unwrap().text().to_string(), "a.b");
}

#[test]
fn implicit_member_has_no_base() {
    let root = parse("let c = .red");
    let member = first(&root, MemberExpr::cast);
    assert!(member.base().is_none());
    assert_eq!(member.name().unwrap().text(), "red");
}

#[test]
fn call_without_name() {
    let root = parse("(f)(x)");
    let call = first(&root, CallExpr::cast);
    assert!(call.base_name().is_none());
}

#[test]
fn compound_names() {
    let root = parse("let f = foo(a:_:)");
    let name_ref = root
        .descendants()
        .filter_map(NameRef::cast)
        .find(|n| n.decl_name_args().is_some())
        .unwrap();
    assert_eq!(name_ref.name().unwrap().text(), "foo");
    let pieces: Vec<_> = name_ref
        .decl_name_args()
        .unwrap()
        .args()
        .filter_map(|a| a.name())
        .collect();
    assert_eq!(texts(pieces), ["a", "_"]);
}

#[test]
fn declaration_names_and_params() {
    let root = parse(indoc::indoc! {"
        struct S {
            func move(from a: Int, _ b: Int, c: Int) {}
            static func == (lhs: S, rhs: S) -> Bool { true }
            init?(value: Int) {}
            subscript(index: Int) -> Int { 0 }
        }
    "});

    let funcs: Vec<FuncDecl> = root.descendants().filter_map(FuncDecl::cast).collect();
    assert_eq!(funcs[0].name().unwrap().text(), "move");
    assert_eq!(funcs[1].name().unwrap().text(), "==");

    let params: Vec<Vec<String>> = funcs[0]
        .param_clause()
        .unwrap()
        .params()
        .map(|p| texts(p.names()))
        .collect();
    assert_eq!(params, [vec!["from", "a"], vec!["_", "b"], vec!["c"]]);

    let init = first(&root, InitDecl::cast);
    assert_eq!(init.name().unwrap().text(), "init");
    assert_eq!(init.param_clause().unwrap().params().count(), 1);

    let subscript = first(&root, SubscriptDecl::cast);
    assert_eq!(subscript.name().unwrap().text(), "subscript");
}

#[test]
fn enum_case_elements() {
    let root = parse("enum E { case a, b(Int, y: String) }");
    let elements: Vec<EnumCaseElement> = root
        .descendants()
        .filter_map(EnumCaseElement::cast)
        .collect();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].name().unwrap().text(), "a");
    assert!(elements[0].param_clause().is_none());

    let params: Vec<Vec<String>> = elements[1]
        .param_clause()
        .unwrap()
        .params()
        .map(|p| texts(p.names()))
        .collect();
    assert_eq!(params, [vec![], vec!["y".to_string()]]);
}

#[test]
fn if_config_clauses() {
    let root = parse("#if A\nx()\n#elseif B\ny()\n#else\nz()\n#endif");
    let decl = first(&root, IfConfigDecl::cast);
    let clauses: Vec<_> = decl.clauses().collect();
    assert_eq!(clauses.len(), 3);

    let directives: Vec<_> = clauses.iter().filter_map(|c| c.directive()).collect();
    assert_eq!(texts(directives), ["#if", "#elseif", "#else"]);

    let condition = clauses[1].condition().unwrap().expr().unwrap();
    assert_eq!(condition.text().to_string(), "B");
    assert!(clauses[2].condition().is_none());

    let file = SourceFile::expect_valid("#if A\n#endif\nf()\n#if B\n#endif");
    assert_eq!(file.root().if_configs().count(), 2);
}
