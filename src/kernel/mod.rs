//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod mode;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::{Action, FindOutcome, SaveOutcome};
pub use effect::Effect;
pub use mode::SurfaceMode;
pub use session::{Buffer, BufferId, BufferRecord, Session};
pub use state::{
    AppState, CursorState, Modal, ModalState, PendingAction, PromptKind, PromptState, StatusLabel,
    StatusState, UiState,
};
pub use store::{DispatchResult, Store};
