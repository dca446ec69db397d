use crate::BridgedStringRef;

#[test]
fn string_round_trip() {
    let string = BridgedStringRef::from_string("héllo");
    assert_eq!(string.count, "héllo".len());
    assert_eq!(unsafe { string.as_str() }, "héllo");
    // NUL after the text
    assert_eq!(unsafe { *string.data.add(string.count) }, 0);
    unsafe { string.free() };
}

#[test]
fn empty_string_is_not_null() {
    let string = BridgedStringRef::from_string(String::new());
    assert!(!string.is_null());
    assert_eq!(string.count, 0);
    assert_eq!(unsafe { string.as_str() }, "");
    unsafe { string.free() };
}

#[test]
fn null_string() {
    let string = BridgedStringRef::default();
    assert!(string.is_null());
    assert_eq!(unsafe { string.as_str() }, "");
    // freeing null is a no-op
    unsafe { string.free() };
}
