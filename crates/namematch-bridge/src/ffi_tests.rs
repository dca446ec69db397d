use std::ffi::c_void;
use std::ptr;

use namematch_core::{LabelRangeType, ResolvedLocContext};

use crate::ffi::*;
use crate::{
    BridgedCharSourceRange, BridgedResolvedLoc, BridgedResolvedLocView, BridgedSourceLoc,
    BridgedStringRef, NO_TRAILING_LABEL,
};

fn record_view(loc: *const c_void) -> BridgedResolvedLocView {
    let mut view = BridgedResolvedLocView::default();
    unsafe { namematch_resolved_loc_get(loc, &mut view) };
    view
}

fn parse(source: &str, configuration: Option<&str>) -> *mut c_void {
    let name = "main.swift";
    let (config_ptr, config_len) = match configuration {
        Some(json) => (json.as_ptr(), json.len()),
        None => (ptr::null(), 0),
    };
    let mut error = BridgedStringRef::null();
    let file = unsafe {
        namematch_source_file_parse(
            name.as_ptr(),
            name.len(),
            source.as_ptr(),
            source.len(),
            config_ptr,
            config_len,
            &mut error,
        )
    };
    assert!(!file.is_null(), "parse failed: {}", unsafe { error.as_str() });
    file
}

fn parse_error(source: &[u8], configuration: Option<&str>) -> String {
    let (config_ptr, config_len) = match configuration {
        Some(json) => (json.as_ptr(), json.len()),
        None => (ptr::null(), 0),
    };
    let mut error = BridgedStringRef::null();
    let file = unsafe {
        namematch_source_file_parse(
            ptr::null(),
            0,
            source.as_ptr(),
            source.len(),
            config_ptr,
            config_len,
            &mut error,
        )
    };
    assert!(file.is_null());
    let message = unsafe { error.as_str() }.to_string();
    unsafe { namematch_free_bridged_string(error) };
    message
}

fn view_at(vector: *const c_void, index: usize) -> Option<BridgedResolvedLocView> {
    let mut view = BridgedResolvedLocView::default();
    unsafe { namematch_resolved_loc_vector_get(vector, index, &mut view) }.then_some(view)
}

fn bridged_range(start: u32, end: u32) -> BridgedCharSourceRange {
    BridgedCharSourceRange {
        start: BridgedSourceLoc { offset: start },
        byte_length: end - start,
    }
}

#[test]
fn run_name_matcher_end_to_end() {
    let source = "foo(x, a: 1) { } onError: { }";
    let file = parse(source, None);
    let positions = [
        BridgedSourceLoc { offset: 7 },
        BridgedSourceLoc { offset: 3 },
        BridgedSourceLoc { offset: 999 },
    ];

    let vector = unsafe { namematch_run_name_matcher(file, positions.as_ptr(), positions.len()) };
    assert_eq!(unsafe { namematch_resolved_loc_vector_len(vector) }, 3);

    let call = view_at(vector, 0).unwrap();
    assert_eq!(call.range, bridged_range(0, 3));
    assert_eq!(call.label_type, LabelRangeType::CallArg.as_raw());
    assert_eq!(call.first_trailing_label, 2);
    assert!(call.is_active);
    assert_eq!(
        unsafe { call.labels() },
        [
            bridged_range(4, 4),
            bridged_range(7, 10),
            bridged_range(13, 13),
            bridged_range(17, 26),
        ]
    );

    let paren = view_at(vector, 1).unwrap();
    assert_eq!(paren.label_type, LabelRangeType::CallArg.as_raw());
    assert_eq!(paren.range, bridged_range(0, 3));

    let past_end = view_at(vector, 2).unwrap();
    assert_eq!(past_end.label_type, LabelRangeType::None.as_raw());
    assert_eq!(past_end.first_trailing_label, NO_TRAILING_LABEL);
    assert_eq!(past_end.label_count, 0);
    assert!(!past_end.is_active);

    assert!(view_at(vector, 3).is_none());

    unsafe {
        namematch_resolved_loc_vector_release(vector);
        namematch_source_file_release(file);
    }
}

#[test]
fn empty_position_buffer() {
    let file = parse("foo()", None);
    let vector = unsafe { namematch_run_name_matcher(file, ptr::null(), 0) };
    assert_eq!(unsafe { namematch_resolved_loc_vector_len(vector) }, 0);
    unsafe {
        namematch_resolved_loc_vector_release(vector);
        namematch_source_file_release(file);
    }
}

#[test]
fn drain_then_release_hands_out_owned_records() {
    let source = "foo(a: 1)\nbar()";
    let file = parse(source, None);
    let positions = [BridgedSourceLoc { offset: 4 }, BridgedSourceLoc { offset: 10 }];
    let vector = unsafe { namematch_run_name_matcher(file, positions.as_ptr(), 2) };

    let drained = unsafe { namematch_resolved_loc_vector_drain(vector) };
    assert_eq!(drained.count, 2);
    assert_eq!(unsafe { namematch_resolved_loc_vector_len(vector) }, 0);

    let handles = unsafe { drained.handles() }.to_vec();
    #[cfg(debug_assertions)]
    {
        use std::any::type_name;

        use namematch_core::{ResolvedLoc, ResolvedLocVector};

        use crate::ledger::is_live;
        assert!(is_live(vector as usize, type_name::<ResolvedLocVector>()));
        for &handle in &handles {
            assert!(is_live(handle as usize, type_name::<ResolvedLoc>()));
        }
    }

    let foo = record_view(handles[0]);
    assert_eq!(foo.range, bridged_range(0, 3));
    assert_eq!(foo.label_type, LabelRangeType::CallArg.as_raw());
    assert_eq!(unsafe { foo.labels() }, [bridged_range(4, 7)]);
    let bar = record_view(handles[1]);
    assert_eq!(bar.range, bridged_range(10, 13));
    assert_eq!(bar.label_count, 0);

    unsafe {
        for handle in handles {
            namematch_resolved_loc_release(handle);
        }
        namematch_resolved_loc_array_free(drained);
        namematch_resolved_loc_vector_release(vector);
        namematch_source_file_release(file);
    }
}

#[test]
fn take_releases_the_vector() {
    let file = parse("foo(a: 1)", None);
    let positions = [BridgedSourceLoc { offset: 0 }];
    let vector = unsafe { namematch_run_name_matcher(file, positions.as_ptr(), 1) };

    let taken = unsafe { namematch_resolved_loc_vector_take(vector) };

    let handles = unsafe { taken.handles() }.to_vec();
    assert_eq!(handles.len(), 1);
    let loc = unsafe { BridgedResolvedLoc::from_raw(handles[0]) }.take_unbridged();
    assert_eq!(loc.base_name("foo(a: 1)"), "foo");
    assert_eq!(loc.label_text(0, "foo(a: 1)"), Some("a: "));

    unsafe {
        namematch_resolved_loc_array_free(taken);
        namematch_source_file_release(file);
    }
}

#[test]
fn taking_an_empty_vector_gives_an_empty_array() {
    let vector = namematch_resolved_loc_vector_new();
    let taken = unsafe { namematch_resolved_loc_vector_take(vector) };
    assert!(taken.data.is_null());
    assert_eq!(taken.count, 0);
    unsafe { namematch_resolved_loc_array_free(taken) };
}

#[test]
fn configuration_controls_active_clauses() {
    let source = "#if DEBUG\nf()\n#endif";
    let position = [BridgedSourceLoc { offset: 10 }];

    let debug = r#"{"customConditions": ["DEBUG"]}"#;
    for (configuration, active) in [(None, false), (Some(debug), true)] {
        let file = parse(source, configuration);
        let vector = unsafe { namematch_run_name_matcher(file, position.as_ptr(), 1) };
        assert_eq!(view_at(vector, 0).unwrap().is_active, active);
        unsafe {
            namematch_resolved_loc_vector_release(vector);
            namematch_source_file_release(file);
        }
    }
}

#[test]
fn producer_primitives_build_a_vector() {
    let labels = namematch_char_source_range_vector_new();
    unsafe {
        namematch_char_source_range_vector_push(labels, bridged_range(4, 7));
        namematch_char_source_range_vector_push(labels, bridged_range(10, 10));
    }
    let loc = unsafe {
        namematch_resolved_loc_new(
            bridged_range(0, 3),
            labels,
            1,
            LabelRangeType::CallArg.as_raw(),
            true,
            ResolvedLocContext::Selector.as_raw(),
        )
    };
    let unlabelled = unsafe {
        namematch_resolved_loc_new(
            bridged_range(0, 0),
            ptr::null_mut(),
            NO_TRAILING_LABEL,
            LabelRangeType::None.as_raw(),
            false,
            ResolvedLocContext::Comment.as_raw(),
        )
    };

    let vector = namematch_resolved_loc_vector_new();
    unsafe {
        namematch_resolved_loc_vector_append(vector, loc);
        namematch_resolved_loc_vector_append(vector, unlabelled);
    }

    let opaque = unsafe { namematch_resolved_loc_vector_get_opaque_value(vector) };
    assert_eq!(opaque, vector);
    let reified = unsafe { namematch_resolved_loc_vector_from_opaque_value(opaque) };
    assert_eq!(unsafe { namematch_resolved_loc_vector_len(reified) }, 2);

    let first = view_at(reified, 0).unwrap();
    assert_eq!(first.context, ResolvedLocContext::Selector.as_raw());
    assert_eq!(first.label_count, 2);
    let second = view_at(reified, 1).unwrap();
    assert_eq!(second.context, ResolvedLocContext::Comment.as_raw());
    assert_eq!(second.label_count, 0);

    unsafe { namematch_resolved_loc_vector_release(reified) };
}

#[test]
fn unused_handles_can_be_released() {
    let labels = namematch_char_source_range_vector_new();
    unsafe { namematch_char_source_range_vector_release(labels) };

    let loc = unsafe {
        namematch_resolved_loc_new(
            bridged_range(0, 0),
            ptr::null_mut(),
            NO_TRAILING_LABEL,
            LabelRangeType::None.as_raw(),
            false,
            ResolvedLocContext::Default.as_raw(),
        )
    };
    unsafe { namematch_resolved_loc_release(loc) };
}

#[test]
fn diagnostics_are_rendered_with_file_name() {
    let file = parse("$", None);
    let rendered = unsafe { namematch_source_file_render_diagnostics(file, false) };

    insta::assert_snapshot!(unsafe { rendered.as_str() }, @r"
    error: invalid character
     --> main.swift:1:1
      |
    1 | $
      | ^
    ");

    unsafe {
        namematch_free_bridged_string(rendered);
        namematch_source_file_release(file);
    }
}

#[test]
fn clean_file_renders_nothing() {
    let file = parse("foo()", None);
    let rendered = unsafe { namematch_source_file_render_diagnostics(file, false) };
    assert_eq!(unsafe { rendered.as_str() }, "");
    unsafe {
        namematch_free_bridged_string(rendered);
        namematch_source_file_release(file);
    }
}

#[test]
fn invalid_utf8_is_reported() {
    let message = parse_error(&[b'f', 0xff], None);
    assert!(message.starts_with("source is not valid UTF-8"), "{message}");
}

#[test]
fn invalid_configuration_is_reported() {
    let message = parse_error(b"foo()", Some(r#"{"customConditions": 3}"#));
    assert!(message.starts_with("invalid build configuration"), "{message}");
}
