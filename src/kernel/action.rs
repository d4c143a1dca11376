use crate::kernel::session::{BufferId, BufferRecord};

/// How an explicit or structural save resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written through the bound external file; the durable store was skipped.
    WroteBinding,
    /// The whole session was stored under the project key.
    StoredSession,
    /// Nothing durable happened; already logged by the synchronizer.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found,
    Wrapped,
    NotFound,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Result of the load-on-start read; empty means nothing was stored.
    SessionLoaded { records: Vec<BufferRecord> },
    RequestNewFile,
    RequestDeleteFile { id: BufferId },
    RequestFind,
    RequestGoToLine,
    /// `live_text` is the surface content to flush into the previously
    /// active buffer before the switch.
    SwitchBuffer { id: BufferId, live_text: Option<String> },
    Save { live_text: Option<String> },
    SaveFinished { outcome: SaveOutcome },
    FileImported { name: String, content: String },
    SearchFinished { outcome: FindOutcome },
    ToggleSidebar,
    SurfaceEdited,
    CursorMoved { line: usize, col: usize },
    ModalInput(char),
    ModalBackspace,
    ModalCursorLeft,
    ModalCursorRight,
    ModalAccept,
    ModalCancel,
    StatusTimeout { generation: u64 },
}
