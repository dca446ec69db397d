use crate::SourceFile;
use crate::diagnostics::DiagnosticKind;

#[test]
fn stray_endif() {
    let res = SourceFile::expect_invalid("#endif");

    insta::assert_snapshot!(res, @r"
    error: directive without matching `#if`
      |
    1 | #endif
      | ^^^^^^
    ");
}

#[test]
fn missing_endif() {
    let file = SourceFile::parse("#if A").unwrap();
    let diagnostics = file.diagnostics().filtered();

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.kind(), DiagnosticKind::UnclosedIfConfig);
    assert_eq!(diag.message(), "missing `#endif`");
    assert_eq!(diag.range(), rowan::TextRange::new(0.into(), 5.into()));
}

#[test]
fn missing_condition() {
    let file = SourceFile::parse("#if\nf()\n#endif").unwrap();
    let kinds: Vec<_> = file.diagnostics().filtered().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedCondition]);

    // the clause body still parses
    let outline = file.dump_outline();
    insta::assert_snapshot!(outline, @r"
    SourceFile
      IfConfig #if
        Call f()
    ");
}

#[test]
fn else_must_be_last() {
    let file = SourceFile::parse("#if A\n#else\n#elseif B\n#endif").unwrap();
    let messages: Vec<String> = file
        .diagnostics()
        .filtered()
        .iter()
        .map(|d| d.message().to_string())
        .collect();
    assert_eq!(messages, ["`#else` must be the last clause"]);
}
