use super::*;

fn pos(line: usize, col: usize) -> SurfacePos {
    SurfacePos::new(line, col)
}

#[test]
fn set_value_resets_cursor_and_scroll() {
    let mut surface = RopeSurface::new();
    surface.set_value("hello\nworld");
    surface.set_cursor(pos(1, 3));
    surface.scroll_into_view(
        SurfaceRange {
            from: pos(1, 0),
            to: pos(1, 0),
        },
        0,
    );

    surface.set_value("fresh");
    assert_eq!(surface.cursor(), pos(0, 0));
    assert_eq!(surface.scroll_line(), 0);
    assert_eq!(surface.value(), "fresh");
    assert!(surface.selection().is_none());
}

#[test]
fn set_cursor_clamps_line_and_column() {
    let mut surface = RopeSurface::new();
    surface.set_value("ab\ncd");

    surface.set_cursor(pos(10, 10));
    assert_eq!(surface.cursor(), pos(1, 2));

    surface.set_cursor(pos(0, 99));
    assert_eq!(surface.cursor(), pos(0, 2));
}

#[test]
fn cursor_does_not_land_inside_a_grapheme() {
    let mut surface = RopeSurface::new();
    // The flag is one grapheme made of two chars.
    surface.set_value("a\u{1F1EF}\u{1F1F5}b");

    surface.set_cursor(pos(0, 2));
    assert_eq!(surface.cursor(), pos(0, 1));

    surface.set_cursor(pos(0, 3));
    assert_eq!(surface.cursor(), pos(0, 3));
}

#[test]
fn find_forward_from_start() {
    let mut surface = RopeSurface::new();
    surface.set_value("one two one");

    let hit = surface.find_forward("one", pos(0, 0)).unwrap();
    assert_eq!(hit.from, pos(0, 0));
    assert_eq!(hit.to, pos(0, 3));
}

#[test]
fn find_forward_starts_at_given_position() {
    let mut surface = RopeSurface::new();
    surface.set_value("one two one");

    let hit = surface.find_forward("one", pos(0, 1)).unwrap();
    assert_eq!(hit.from, pos(0, 8));
    assert_eq!(hit.to, pos(0, 11));
}

#[test]
fn find_forward_across_lines() {
    let mut surface = RopeSurface::new();
    surface.set_value("alpha\nbeta\ngamma");

    let hit = surface.find_forward("gam", pos(0, 2)).unwrap();
    assert_eq!(hit.from, pos(2, 0));
    assert_eq!(hit.to, pos(2, 3));
}

#[test]
fn find_forward_misses_return_none() {
    let mut surface = RopeSurface::new();
    surface.set_value("alpha");
    assert!(surface.find_forward("zeta", pos(0, 0)).is_none());
    assert!(surface.find_forward("", pos(0, 0)).is_none());
}

#[test]
fn find_forward_reports_char_columns_after_multibyte_text() {
    let mut surface = RopeSurface::new();
    surface.set_value("héllo wörld");

    let hit = surface.find_forward("wörld", pos(0, 0)).unwrap();
    assert_eq!(hit.from, pos(0, 6));
    assert_eq!(hit.to, pos(0, 11));
}

#[test]
fn select_moves_cursor_to_selection_head() {
    let mut surface = RopeSurface::new();
    surface.set_value("hello world");

    let range = SurfaceRange {
        from: pos(0, 6),
        to: pos(0, 11),
    };
    surface.select(range);

    assert_eq!(surface.selection(), Some(range));
    assert_eq!(surface.cursor(), pos(0, 11));

    surface.set_cursor(pos(0, 0));
    assert!(surface.selection().is_none());
}

#[test]
fn scroll_into_view_keeps_margin() {
    let mut surface = RopeSurface::with_viewport_height(10);
    let text = (0..100).map(|i| format!("line {}\n", i)).collect::<String>();
    surface.set_value(&text);

    let range = SurfaceRange {
        from: pos(50, 0),
        to: pos(50, 4),
    };
    surface.scroll_into_view(range, 2);
    // Line 50 sits two lines above the bottom edge.
    assert_eq!(surface.scroll_line(), 43);

    let range = SurfaceRange {
        from: pos(10, 0),
        to: pos(10, 4),
    };
    surface.scroll_into_view(range, 2);
    assert_eq!(surface.scroll_line(), 8);

    // Already visible: no movement.
    let range = SurfaceRange {
        from: pos(12, 0),
        to: pos(12, 4),
    };
    surface.scroll_into_view(range, 2);
    assert_eq!(surface.scroll_line(), 8);
}

#[test]
fn focus_is_sticky() {
    let mut surface = RopeSurface::new();
    assert!(!surface.is_focused());
    surface.focus();
    assert!(surface.is_focused());
}

#[test]
fn line_count_counts_trailing_line() {
    let mut surface = RopeSurface::new();
    surface.set_value("a\nb");
    assert_eq!(surface.line_count(), 2);
    surface.set_value("a\nb\n");
    assert_eq!(surface.line_count(), 3);
    surface.set_value("");
    assert_eq!(surface.line_count(), 1);
}
