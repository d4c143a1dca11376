use crate::kernel::{CursorState, StatusLabel, StatusState};

pub fn status_text(status: &StatusState) -> &'static str {
    match status.label {
        StatusLabel::Ready => "Ready",
        StatusLabel::Unsaved => "Unsaved...",
        StatusLabel::Saved => "Saved",
    }
}

/// 1-based cursor display, e.g. `Ln 3, Col 7`.
pub fn cursor_text(cursor: &CursorState) -> String {
    format!("Ln {}, Col {}", cursor.line + 1, cursor.col + 1)
}
