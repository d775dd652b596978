use super::*;

// =============================================================
// Non-browser stubs
// =============================================================

#[test]
fn read_returns_none_outside_browser() {
    assert_eq!(read(), None);
}

#[test]
fn write_and_clear_are_safe_outside_browser() {
    write(Role::Admin);
    clear();
    assert_eq!(read(), None);
}
