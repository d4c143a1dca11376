use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::kernel::session::{BufferId, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub id: BufferId,
    pub title: String,
    pub active: bool,
}

/// Tab strip derived from the session; insertion order is display order.
pub fn tab_row(session: &Session) -> Vec<TabLabel> {
    let active = session.active_id();
    session
        .buffers()
        .map(|buffer| TabLabel {
            id: buffer.id,
            title: buffer.name.to_string(),
            active: active == Some(buffer.id),
        })
        .collect()
}

pub fn ellipsize_title(title: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if UnicodeWidthStr::width(title) <= max_width {
        return title.to_string();
    }

    if max_width == 1 {
        return "…".to_string();
    }

    let keep = truncate_to_width(title, max_width - 1);
    if keep == 0 {
        return "…".to_string();
    }

    let mut out = String::with_capacity(keep + 3);
    out.push_str(&title[..keep]);
    out.push('…');
    out
}

/// Byte length of the longest prefix that fits in `max_width` columns.
fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut width = 0usize;
    for (idx, ch) in s.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            return idx;
        }
        width += ch_width;
    }
    s.len()
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_row.rs"]
mod tests;
