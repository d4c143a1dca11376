use crate::kernel::services::ports::ShellConfig;
use crate::kernel::session::{BufferId, Session};

/// Deferred mutation carried by a confirm dialog instead of a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteBuffer { id: BufferId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    NewFileName,
    FindText,
    GoToLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub message: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: PromptKind,
}

impl PromptState {
    pub fn new(message: &str, value: &str, kind: PromptKind) -> Self {
        Self {
            message: message.to_string(),
            value: value.to_string(),
            cursor: value.len(),
            error: None,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Alert { title: String, message: String },
    Confirm { message: String, on_accept: PendingAction },
    Prompt(PromptState),
}

/// One shared modal slot; a new request replaces whatever was open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn alert(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn confirm(&mut self, message: &str, on_accept: PendingAction) {
        self.active = Some(Modal::Confirm {
            message: message.to_string(),
            on_accept,
        });
    }

    pub fn prompt(&mut self, message: &str, default_value: &str, kind: PromptKind) {
        self.active = Some(Modal::Prompt(PromptState::new(message, default_value, kind)));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Ready,
    Unsaved,
    Saved,
}

/// Transient status indicator. `generation` invalidates scheduled resets
/// that were superseded by a newer save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusState {
    pub label: StatusLabel,
    pub generation: u64,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            label: StatusLabel::Ready,
            generation: 0,
        }
    }
}

/// Last reported surface cursor, 0-based. Display is 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_visible: bool,
    pub modal: ModalState,
    pub status: StatusState,
    pub cursor: CursorState,
    pub last_search: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_visible: false,
            modal: ModalState::default(),
            status: StatusState::default(),
            cursor: CursorState::default(),
            last_search: String::new(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: ShellConfig,
    pub session: Session,
    pub ui: UiState,
}

impl AppState {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            ui: UiState::default(),
        }
    }
}
