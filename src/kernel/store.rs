use super::{Action, AppState, Effect, FindOutcome, StatusLabel};

mod modal;
mod session;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SessionLoaded { records } => self.reduce_session_loaded(records),
            Action::SwitchBuffer { id, live_text } => self.reduce_switch_buffer(id, live_text),
            Action::Save { live_text } => self.reduce_save(live_text),
            Action::SaveFinished { outcome } => self.reduce_save_finished(outcome),
            Action::FileImported { name, content } => self.reduce_file_imported(name, content),
            Action::RequestNewFile => {
                let placeholder = self.state.config.new_file_placeholder.clone();
                self.state.ui.modal.prompt(
                    "Enter new file name:",
                    &placeholder,
                    super::PromptKind::NewFileName,
                );
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::RequestDeleteFile { id } => {
                if !self.state.session.contains(id) {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.modal.confirm(
                    "Delete this file permanently?",
                    super::PendingAction::DeleteBuffer { id },
                );
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::RequestFind => {
                let last = self.state.ui.last_search.clone();
                self.state
                    .ui
                    .modal
                    .prompt("Find Text:", &last, super::PromptKind::FindText);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::RequestGoToLine => {
                self.state
                    .ui
                    .modal
                    .prompt("Enter Line Number:", "", super::PromptKind::GoToLine);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SearchFinished { outcome } => match outcome {
                FindOutcome::Found => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
                FindOutcome::Wrapped => {
                    self.state.ui.modal.alert("WRAPPED", "Restarted from top.");
                    DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    }
                }
                FindOutcome::NotFound => {
                    self.state.ui.modal.alert("NOT FOUND", "Text not found.");
                    DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    }
                }
            },
            Action::ToggleSidebar => {
                self.state.ui.sidebar_visible = !self.state.ui.sidebar_visible;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SurfaceEdited => {
                if self.state.session.active_id().is_none() {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let prev = self.state.ui.status.label;
                self.state.ui.status.label = StatusLabel::Unsaved;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: prev != StatusLabel::Unsaved,
                }
            }
            Action::CursorMoved { line, col } => {
                let cursor = &mut self.state.ui.cursor;
                if cursor.line == line && cursor.col == col {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                cursor.line = line;
                cursor.col = col;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ModalInput(_)
            | Action::ModalBackspace
            | Action::ModalCursorLeft
            | Action::ModalCursorRight
            | Action::ModalAccept
            | Action::ModalCancel => self.reduce_modal_action(action),
            Action::StatusTimeout { generation } => {
                let status = &mut self.state.ui.status;
                if generation != status.generation || status.label != StatusLabel::Saved {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                status.label = StatusLabel::Ready;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
