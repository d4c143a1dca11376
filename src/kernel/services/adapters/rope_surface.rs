use memchr::memmem;
use ropey::{Rope, RopeSlice};
use unicode_segmentation::UnicodeSegmentation;

use crate::kernel::mode::SurfaceMode;
use crate::kernel::services::ports::{EditingSurface, SurfacePos, SurfaceRange};

/// Rope-backed default implementation of the editing surface port.
///
/// Tracks the pieces of widget state the shell depends on: text, cursor,
/// selection, mode, and a line-based scroll window. Cursor columns are
/// char offsets within the line, snapped to grapheme boundaries so a
/// clamped position never lands inside a cluster.
pub struct RopeSurface {
    rope: Rope,
    cursor: SurfacePos,
    selection: Option<SurfaceRange>,
    mode: SurfaceMode,
    scroll_line: usize,
    viewport_height: usize,
    focused: bool,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: SurfacePos::default(),
            selection: None,
            mode: SurfaceMode::Markup,
            scroll_line: 0,
            viewport_height: 20,
            focused: false,
        }
    }

    pub fn with_viewport_height(height: usize) -> Self {
        let mut surface = Self::new();
        surface.viewport_height = height.max(1);
        surface
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
    }

    pub fn scroll_line(&self) -> usize {
        self.scroll_line
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn clamp(&self, pos: SurfacePos) -> SurfacePos {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let slice = self.rope.line(line);
        let col = pos.col.min(line_len_chars(slice));
        let text = line_text(slice);
        SurfacePos {
            line,
            col: snap_to_grapheme(&text, col),
        }
    }

    fn pos_to_char(&self, pos: SurfacePos) -> usize {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let col = pos.col.min(line_len_chars(self.rope.line(line)));
        self.rope.line_to_char(line) + col
    }

    fn char_to_pos(&self, char_idx: usize) -> SurfacePos {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        SurfacePos {
            line,
            col: char_idx - self.rope.line_to_char(line),
        }
    }
}

impl Default for RopeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EditingSurface for RopeSurface {
    fn value(&self) -> String {
        self.rope.to_string()
    }

    fn set_value(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = SurfacePos::default();
        self.selection = None;
        self.scroll_line = 0;
    }

    fn cursor(&self) -> SurfacePos {
        self.cursor
    }

    fn set_cursor(&mut self, pos: SurfacePos) {
        self.cursor = self.clamp(pos);
        self.selection = None;
    }

    fn mode(&self) -> SurfaceMode {
        self.mode
    }

    fn set_mode(&mut self, mode: SurfaceMode) {
        self.mode = mode;
    }

    fn find_forward(&self, query: &str, from: SurfacePos) -> Option<SurfaceRange> {
        if query.is_empty() {
            return None;
        }

        let text = self.rope.to_string();
        let from_byte = self.rope.char_to_byte(self.pos_to_char(from));
        let idx = memmem::find(&text.as_bytes()[from_byte..], query.as_bytes())?;

        let start_char = self.rope.byte_to_char(from_byte + idx);
        let end_char = start_char + query.chars().count();
        Some(SurfaceRange {
            from: self.char_to_pos(start_char),
            to: self.char_to_pos(end_char),
        })
    }

    fn selection(&self) -> Option<SurfaceRange> {
        self.selection
    }

    fn select(&mut self, range: SurfaceRange) {
        let range = SurfaceRange {
            from: self.clamp(range.from),
            to: self.clamp(range.to),
        };
        self.cursor = range.to;
        self.selection = Some(range);
    }

    fn scroll_into_view(&mut self, range: SurfaceRange, margin: usize) {
        let height = self.viewport_height.max(1);
        let margin = margin.min(height.saturating_sub(1) / 2);
        let line = range.from.line;

        if line < self.scroll_line + margin {
            self.scroll_line = line.saturating_sub(margin);
        } else if line + margin >= self.scroll_line + height {
            self.scroll_line = (line + margin + 1).saturating_sub(height);
        }

        let max_scroll = self.rope.len_lines().saturating_sub(1);
        self.scroll_line = self.scroll_line.min(max_scroll);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }
}

fn line_len_chars(line: RopeSlice<'_>) -> usize {
    let mut len = 0usize;
    let mut it = line.chars().peekable();
    while let Some(ch) = it.next() {
        if ch == '\n' {
            break;
        }
        if ch == '\r' && matches!(it.peek(), Some('\n')) {
            break;
        }
        len += 1;
    }
    len
}

fn line_text(line: RopeSlice<'_>) -> String {
    let mut out = String::with_capacity(line.len_bytes());
    let mut it = line.chars().peekable();
    while let Some(ch) = it.next() {
        if ch == '\n' {
            break;
        }
        if ch == '\r' && matches!(it.peek(), Some('\n')) {
            break;
        }
        out.push(ch);
    }
    out
}

/// Largest grapheme boundary at or before `col` (both in chars).
fn snap_to_grapheme(line: &str, col: usize) -> usize {
    let mut boundary = 0usize;
    for grapheme in line.graphemes(true) {
        let next = boundary + grapheme.chars().count();
        if next > col {
            return boundary;
        }
        boundary = next;
    }
    boundary
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/rope_surface.rs"]
mod tests;
