use crate::kernel::{Action, Effect, Modal, PendingAction, PromptKind, SurfaceMode};

impl super::Store {
    pub(super) fn reduce_modal_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ModalInput(ch) => {
                let Some(Modal::Prompt(prompt)) = self.state.ui.modal.active.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                prompt.error = None;
                if prompt.cursor > prompt.value.len() {
                    prompt.cursor = prompt.value.len();
                }
                prompt.value.insert(prompt.cursor, ch);
                prompt.cursor += ch.len_utf8();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ModalBackspace => {
                let Some(Modal::Prompt(prompt)) = self.state.ui.modal.active.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if prompt.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                prompt.error = None;
                let prev = prompt.value[..prompt.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                prompt.value.drain(prev..prompt.cursor);
                prompt.cursor = prev;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ModalCursorLeft => {
                let Some(Modal::Prompt(prompt)) = self.state.ui.modal.active.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if prompt.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let prev = prompt.value[..prompt.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != prompt.cursor;
                prompt.cursor = prev;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::ModalCursorRight => {
                let Some(Modal::Prompt(prompt)) = self.state.ui.modal.active.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if prompt.cursor >= prompt.value.len() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let next = prompt.value[prompt.cursor..]
                    .chars()
                    .next()
                    .map(|ch| prompt.cursor + ch.len_utf8())
                    .unwrap_or(prompt.value.len());
                let changed = next != prompt.cursor;
                prompt.cursor = next;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::ModalAccept => self.reduce_modal_accept(),
            Action::ModalCancel => {
                if !self.state.ui.modal.is_open() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.modal.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-modal action passed to reduce_modal_action"),
        }
    }

    fn reduce_modal_accept(&mut self) -> super::DispatchResult {
        let Some(active) = self.state.ui.modal.active.as_ref() else {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        };

        match active {
            Modal::Alert { .. } => {
                self.state.ui.modal.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Modal::Confirm { on_accept, .. } => {
                let pending = on_accept.clone();
                self.state.ui.modal.reset();
                self.apply_pending(pending)
            }
            Modal::Prompt(prompt) => {
                let kind = prompt.kind;
                let value = prompt.value.trim().to_string();

                if value.is_empty() {
                    let message = match kind {
                        PromptKind::NewFileName => "Name required",
                        PromptKind::FindText => "Search text required",
                        PromptKind::GoToLine => "Line number required",
                    };
                    let Some(Modal::Prompt(prompt)) = self.state.ui.modal.active.as_mut() else {
                        unreachable!("prompt vanished during accept");
                    };
                    let prev = prompt.error.replace(message.to_string());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: prev.as_deref() != prompt.error.as_deref(),
                    };
                }

                self.state.ui.modal.reset();
                self.accept_prompt(kind, value)
            }
        }
    }

    fn apply_pending(&mut self, pending: PendingAction) -> super::DispatchResult {
        match pending {
            PendingAction::DeleteBuffer { id } => {
                let was_active = self.state.session.active_id() == Some(id);
                if !self.state.session.remove(id) {
                    // Buffer disappeared while the dialog was up; closing the
                    // modal is still a state change.
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                let mut effects = Vec::new();
                if was_active {
                    match self.state.session.active_buffer() {
                        Some(buffer) => effects.push(Effect::LoadSurface {
                            text: buffer.content.clone(),
                            mode: SurfaceMode::from_name(&buffer.name),
                        }),
                        None => effects.push(Effect::ClearSurface),
                    }
                }
                effects.push(self.persist_effect());
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
        }
    }

    fn accept_prompt(&mut self, kind: PromptKind, value: String) -> super::DispatchResult {
        match kind {
            PromptKind::NewFileName => {
                let mode = SurfaceMode::from_name(&value);
                self.state.session.create(&value);
                self.state.ui.modal.alert("SUCCESS", "New file created.");
                super::DispatchResult {
                    effects: vec![
                        Effect::LoadSurface {
                            text: String::new(),
                            mode,
                        },
                        self.persist_effect(),
                    ],
                    state_changed: true,
                }
            }
            PromptKind::FindText => {
                self.state.ui.last_search = value.clone();
                super::DispatchResult {
                    effects: vec![Effect::StartFind { query: value }],
                    state_changed: true,
                }
            }
            PromptKind::GoToLine => match value.parse::<i64>() {
                Ok(line) if line > 0 => super::DispatchResult {
                    effects: vec![Effect::MoveCursor {
                        line: (line - 1) as usize,
                    }],
                    state_changed: true,
                },
                _ => {
                    self.state.ui.modal.alert("ERROR", "Invalid line number.");
                    super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    }
                }
            },
        }
    }
}
