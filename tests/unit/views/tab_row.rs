use super::*;
use crate::kernel::session::Session;

#[test]
fn projects_buffers_in_insertion_order() {
    let mut session = Session::new();
    let a = session.create("a.html");
    let b = session.create("b.css");
    session.set_active(a);

    let tabs = tab_row(&session);
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].title, "a.html");
    assert!(tabs[0].active);
    assert_eq!(tabs[1].id, b);
    assert!(!tabs[1].active);
}

#[test]
fn empty_session_has_no_tabs() {
    let session = Session::new();
    assert!(tab_row(&session).is_empty());
}

#[test]
fn exactly_one_tab_is_marked_active() {
    let mut session = Session::new();
    session.create("a");
    session.create("b");
    session.create("c");

    let active_count = tab_row(&session).iter().filter(|t| t.active).count();
    assert_eq!(active_count, 1);
}

#[test]
fn ellipsize_keeps_short_titles() {
    assert_eq!(ellipsize_title("main.rs", 10), "main.rs");
    assert_eq!(ellipsize_title("main.rs", 7), "main.rs");
}

#[test]
fn ellipsize_truncates_on_width() {
    assert_eq!(ellipsize_title("averylongname.html", 8), "averylo…");
    assert_eq!(ellipsize_title("abc", 1), "…");
    assert_eq!(ellipsize_title("abc", 0), "");
}

#[test]
fn ellipsize_respects_wide_characters() {
    // Each CJK char is two columns wide.
    assert_eq!(ellipsize_title("编辑器", 6), "编辑器");
    assert_eq!(ellipsize_title("编辑器", 5), "编辑…");
    assert_eq!(ellipsize_title("编辑器", 4), "编…");
}
