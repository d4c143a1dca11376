use super::*;

#[test]
fn create_appends_and_activates() {
    let mut session = Session::new();
    let a = session.create("a.html");
    let b = session.create("b.css");

    assert_eq!(session.len(), 2);
    assert_eq!(session.active_id(), Some(b));
    let names: Vec<_> = session.buffers().map(|b| b.name.to_string()).collect();
    assert_eq!(names, vec!["a.html", "b.css"]);
    assert!(session.contains(a));
}

#[test]
fn ids_are_unique_and_never_reused() {
    let mut session = Session::new();
    let a = session.create("a");
    let b = session.create("b");
    session.remove(b);
    let c = session.create("c");

    assert_ne!(a, c);
    assert_ne!(b, c);
    assert!(c > b);
}

#[test]
fn set_active_requires_existing_buffer() {
    let mut session = Session::new();
    let a = session.create("a");
    let b = session.create("b");

    assert!(session.set_active(a));
    assert!(!session.set_active(a));
    assert!(!session.set_active(BufferId::new(999)));
    assert_eq!(session.active_id(), Some(a));
    assert!(session.set_active(b));
}

#[test]
fn flush_active_updates_content() {
    let mut session = Session::new();
    let a = session.create("a");

    assert!(session.flush_active("hello"));
    assert_eq!(session.get(a).unwrap().content, "hello");
    assert!(!session.flush_active("hello"));
}

#[test]
fn flush_without_active_is_noop() {
    let mut session = Session::new();
    assert!(!session.flush_active("hello"));
}

#[test]
fn remove_active_activates_last_remaining() {
    let mut session = Session::new();
    let a = session.create("a");
    let b = session.create("b");
    let c = session.create("c");

    assert!(session.remove(c));
    assert_eq!(session.active_id(), Some(b));
    assert!(session.contains(a));
    assert!(!session.contains(c));
}

#[test]
fn remove_inactive_keeps_active() {
    let mut session = Session::new();
    let a = session.create("a");
    let b = session.create("b");
    session.set_active(a);

    assert!(session.remove(b));
    assert_eq!(session.active_id(), Some(a));
}

#[test]
fn remove_last_clears_active() {
    let mut session = Session::new();
    let a = session.create("a");

    assert!(session.remove(a));
    assert!(session.is_empty());
    assert_eq!(session.active_id(), None);
    assert!(!session.remove(a));
}

#[test]
fn remove_keeps_index_lookups_consistent() {
    let mut session = Session::new();
    let a = session.create("a");
    let b = session.create("b");
    let c = session.create("c");

    session.remove(a);
    assert_eq!(session.get(b).unwrap().name, "b");
    assert_eq!(session.get(c).unwrap().name, "c");
}

#[test]
fn records_restore_round_trip() {
    let mut session = Session::new();
    session.create("a.html");
    let b = session.create("b.js");
    session.set_active(b);
    session.flush_active("content b");

    let records = session.records();

    let mut restored = Session::new();
    restored.restore(records.clone());

    assert_eq!(restored.records(), records);
    // Restore activates the first buffer, not the one active at save time.
    assert_eq!(restored.active_id(), records.first().map(|r| BufferId::new(r.id)));

    // The allocator resumes past the highest restored id.
    let next = restored.create("c");
    assert!(next.raw() > b.raw());
}

#[test]
fn restore_skips_duplicate_ids() {
    let mut session = Session::new();
    session.restore(vec![
        BufferRecord {
            id: 7,
            name: "a".to_string(),
            content: String::new(),
        },
        BufferRecord {
            id: 7,
            name: "dup".to_string(),
            content: String::new(),
        },
    ]);

    assert_eq!(session.len(), 1);
    assert_eq!(session.active_id(), Some(BufferId::new(7)));
}
