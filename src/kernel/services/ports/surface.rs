use crate::kernel::mode::SurfaceMode;

/// 0-based line/column position on the editing surface. Columns count
/// chars within the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SurfacePos {
    pub line: usize,
    pub col: usize,
}

impl SurfacePos {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceRange {
    pub from: SurfacePos,
    pub to: SurfacePos,
}

/// Capability interface over the external editing widget.
///
/// The surface owns the live text of the active buffer between flushes;
/// the kernel only reads it back at flush points.
pub trait EditingSurface {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);

    fn cursor(&self) -> SurfacePos;
    /// Out-of-bounds positions are clamped by the implementation.
    fn set_cursor(&mut self, pos: SurfacePos);

    fn mode(&self) -> SurfaceMode;
    fn set_mode(&mut self, mode: SurfaceMode);

    /// First match at or after `from`, or `None`. Literal search.
    fn find_forward(&self, query: &str, from: SurfacePos) -> Option<SurfaceRange>;

    fn selection(&self) -> Option<SurfaceRange>;
    fn select(&mut self, range: SurfaceRange);

    fn scroll_into_view(&mut self, range: SurfaceRange, margin: usize);
    fn focus(&mut self);

    fn line_count(&self) -> usize;
}
