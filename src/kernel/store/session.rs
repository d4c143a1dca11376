use crate::kernel::session::BufferRecord;
use crate::kernel::{Effect, SaveOutcome, StatusLabel, SurfaceMode};

impl super::Store {
    pub(super) fn reduce_session_loaded(
        &mut self,
        records: Vec<BufferRecord>,
    ) -> super::DispatchResult {
        if records.is_empty() {
            let name = self.state.config.default_file_name.clone();
            let content = self.state.config.default_file_content.clone();
            let mode = SurfaceMode::from_name(&name);
            self.state.session.insert(&name, content.clone());
            tracing::info!(file = %name, "no stored session, starting with default file");
            return super::DispatchResult {
                effects: vec![Effect::LoadSurface {
                    text: content,
                    mode,
                }],
                state_changed: true,
            };
        }

        self.state.session.restore(records);
        let effects = match self.state.session.active_buffer() {
            Some(buffer) => vec![Effect::LoadSurface {
                text: buffer.content.clone(),
                mode: SurfaceMode::from_name(&buffer.name),
            }],
            None => vec![Effect::ClearSurface],
        };
        tracing::info!(
            buffers = self.state.session.len(),
            "restored session from durable store"
        );
        super::DispatchResult {
            effects,
            state_changed: true,
        }
    }

    pub(super) fn reduce_switch_buffer(
        &mut self,
        id: crate::kernel::BufferId,
        live_text: Option<String>,
    ) -> super::DispatchResult {
        if !self.state.session.contains(id) || self.state.session.active_id() == Some(id) {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        if let Some(text) = live_text {
            self.state.session.flush_active(&text);
        }
        self.state.session.set_active(id);

        let Some(buffer) = self.state.session.get(id) else {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: true,
            };
        };
        super::DispatchResult {
            effects: vec![Effect::LoadSurface {
                text: buffer.content.clone(),
                mode: SurfaceMode::from_name(&buffer.name),
            }],
            state_changed: true,
        }
    }

    pub(super) fn reduce_save(&mut self, live_text: Option<String>) -> super::DispatchResult {
        let mut state_changed = false;
        if let Some(text) = live_text {
            state_changed = self.state.session.flush_active(&text);
        }
        super::DispatchResult {
            effects: vec![Effect::SaveProject {
                records: self.state.session.records(),
            }],
            state_changed,
        }
    }

    pub(super) fn reduce_save_finished(&mut self, outcome: SaveOutcome) -> super::DispatchResult {
        match outcome {
            SaveOutcome::WroteBinding => {
                self.state
                    .ui
                    .modal
                    .alert("FILE UPDATED", "Original file updated.");
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            SaveOutcome::StoredSession => {
                let status = &mut self.state.ui.status;
                status.label = StatusLabel::Saved;
                status.generation = status.generation.saturating_add(1);
                super::DispatchResult {
                    effects: vec![Effect::ScheduleStatusReset {
                        generation: status.generation,
                    }],
                    state_changed: true,
                }
            }
            SaveOutcome::Failed => super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            },
        }
    }

    pub(super) fn reduce_file_imported(
        &mut self,
        name: String,
        content: String,
    ) -> super::DispatchResult {
        let name = if name.trim().is_empty() {
            "untitled".to_string()
        } else {
            name
        };
        let mode = SurfaceMode::from_name(&name);
        self.state.session.insert(&name, content.clone());
        super::DispatchResult {
            effects: vec![
                Effect::LoadSurface {
                    text: content,
                    mode,
                },
                self.persist_effect(),
            ],
            state_changed: true,
        }
    }

    pub(super) fn persist_effect(&self) -> Effect {
        Effect::PersistSession {
            records: self.state.session.records(),
        }
    }
}
