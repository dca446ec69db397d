use crate::{
    CharSourceRange, LabelRangeType, ResolvedLoc, ResolvedLocContext, SourceLoc,
};

fn range(start: u32, end: u32) -> CharSourceRange {
    CharSourceRange::from_offsets(start, end)
}

#[test]
fn default_is_unresolved_sentinel() {
    let loc = ResolvedLoc::default();
    assert_eq!(loc.range(), CharSourceRange::empty(SourceLoc::new(0)));
    assert!(loc.label_ranges().is_empty());
    assert_eq!(loc.first_trailing_label(), None);
    assert_eq!(loc.label_type(), LabelRangeType::None);
    assert!(!loc.is_active());
    assert_eq!(loc.context(), ResolvedLocContext::Default);
    assert!(loc.is_unresolved());
}

#[test]
fn call_with_trailing_closure() {
    // foo(a: 1) { }
    let loc = ResolvedLoc::new(
        range(0, 3),
        vec![range(4, 7), CharSourceRange::empty(SourceLoc::new(10))],
        Some(1),
        LabelRangeType::CallArg,
        true,
        ResolvedLocContext::Default,
    );
    assert_eq!(loc.argument_labels(), &[range(4, 7)]);
    assert_eq!(
        loc.trailing_labels(),
        &[CharSourceRange::empty(SourceLoc::new(10))]
    );
    assert!(!loc.is_unresolved());
    assert_eq!(loc.base_name("foo(a: 1) { }"), "foo");
}

#[test]
fn no_trailing_closure_has_no_trailing_labels() {
    let loc = ResolvedLoc::new(
        range(0, 3),
        vec![range(4, 6)],
        None,
        LabelRangeType::CallArg,
        true,
        ResolvedLocContext::Default,
    );
    assert_eq!(loc.argument_labels().len(), 1);
    assert!(loc.trailing_labels().is_empty());
}

#[test]
fn unlabelled_name_is_resolved() {
    let loc = ResolvedLoc::unlabelled(range(4, 5), true, ResolvedLocContext::Comment);
    assert!(!loc.is_unresolved());
    assert_eq!(loc.label_type(), LabelRangeType::None);
}

#[test]
fn into_label_ranges_moves_labels_out() {
    let loc = ResolvedLoc::new(
        range(5, 6),
        vec![range(7, 10)],
        None,
        LabelRangeType::Param,
        true,
        ResolvedLocContext::Default,
    );
    assert_eq!(loc.into_label_ranges(), vec![range(7, 10)]);
}

#[test]
#[should_panic(expected = "label type None with 1 label ranges")]
fn none_with_labels_is_rejected() {
    ResolvedLoc::new(
        range(0, 3),
        vec![range(4, 6)],
        None,
        LabelRangeType::None,
        true,
        ResolvedLocContext::Default,
    );
}

#[test]
#[should_panic(expected = "trailing label index 1 out of bounds for 1 labels")]
fn trailing_index_out_of_bounds_is_rejected() {
    ResolvedLoc::new(
        range(0, 3),
        vec![range(4, 6)],
        Some(1),
        LabelRangeType::CallArg,
        true,
        ResolvedLocContext::Default,
    );
}

#[test]
#[should_panic(expected = "precedes base name")]
fn label_before_base_name_is_rejected() {
    ResolvedLoc::new(
        range(4, 7),
        vec![range(0, 2)],
        None,
        LabelRangeType::CallArg,
        true,
        ResolvedLocContext::Default,
    );
}

#[test]
#[should_panic(expected = "not in source order")]
fn unordered_labels_are_rejected() {
    ResolvedLoc::new(
        range(0, 3),
        vec![range(8, 9), range(4, 5)],
        None,
        LabelRangeType::Selector,
        true,
        ResolvedLocContext::Selector,
    );
}

#[test]
fn enum_discriminants_round_trip() {
    for kind in [
        LabelRangeType::None,
        LabelRangeType::CallArg,
        LabelRangeType::Param,
        LabelRangeType::NoncollapsibleParam,
        LabelRangeType::Selector,
    ] {
        assert_eq!(LabelRangeType::from_raw(kind.as_raw()), Some(kind));
    }
    for context in [
        ResolvedLocContext::Default,
        ResolvedLocContext::Selector,
        ResolvedLocContext::Comment,
        ResolvedLocContext::StringLiteral,
    ] {
        assert_eq!(ResolvedLocContext::from_raw(context.as_raw()), Some(context));
    }
    assert_eq!(LabelRangeType::from_raw(5), None);
    assert_eq!(ResolvedLocContext::from_raw(4), None);
}

#[test]
fn label_text_reads_source() {
    let source = "foo(a: 1, b: 2)";
    let loc = ResolvedLoc::new(
        range(0, 3),
        vec![range(4, 7), range(10, 13)],
        None,
        LabelRangeType::CallArg,
        true,
        ResolvedLocContext::Default,
    );
    assert_eq!(loc.base_name(source), "foo");
    assert_eq!(loc.label_text(0, source), Some("a: "));
    assert_eq!(loc.label_text(1, source), Some("b: "));
    assert_eq!(loc.label_text(2, source), None);
}
