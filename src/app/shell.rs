use std::collections::VecDeque;
use std::time::Duration;

use crate::app::sync::{ExternalBinding, PersistenceSynchronizer};
use crate::kernel::services::bus::ShellBusReceiver;
use crate::kernel::services::ports::{
    DelayScheduler, EditingSurface, ShellConfig, SurfacePos,
};
use crate::kernel::{Action, AppState, BufferId, Effect, FindOutcome, Store};
use crate::views::tab_row::{tab_row, TabLabel};

/// The controller: owns the kernel store, the editing surface, and the
/// persistence synchronizer, and turns effects into host work.
///
/// Every public operation returns whether observable state changed, which
/// is the host's cue to re-project tabs/status/modal.
pub struct EditorShell {
    store: Store,
    surface: Box<dyn EditingSurface>,
    sync: PersistenceSynchronizer,
    scheduler: Box<dyn DelayScheduler>,
    bus_rx: ShellBusReceiver,
}

impl EditorShell {
    pub fn new(
        config: ShellConfig,
        surface: Box<dyn EditingSurface>,
        sync: PersistenceSynchronizer,
        scheduler: Box<dyn DelayScheduler>,
        bus_rx: ShellBusReceiver,
    ) -> Self {
        Self {
            store: Store::new(AppState::new(config)),
            surface,
            sync,
            scheduler,
            bus_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn surface(&self) -> &dyn EditingSurface {
        self.surface.as_ref()
    }

    /// The host edits through this, the way a page types into the widget.
    pub fn surface_mut(&mut self) -> &mut dyn EditingSurface {
        self.surface.as_mut()
    }

    pub fn tabs(&self) -> Vec<TabLabel> {
        tab_row(&self.store.state().session)
    }

    pub fn binding(&self) -> Option<ExternalBinding> {
        self.sync.binding()
    }

    /// Load-on-start: restore the stored session or synthesize the
    /// default single-buffer one.
    pub fn load_session(&mut self) -> bool {
        let records = self.sync.load();
        self.apply(Action::SessionLoaded { records })
    }

    pub fn new_file(&mut self) -> bool {
        self.apply(Action::RequestNewFile)
    }

    pub fn delete_file(&mut self, id: BufferId) -> bool {
        self.apply(Action::RequestDeleteFile { id })
    }

    pub fn switch_to(&mut self, id: BufferId) -> bool {
        let live_text = self.live_text();
        self.apply(Action::SwitchBuffer { id, live_text })
    }

    pub fn save(&mut self) -> bool {
        let live_text = self.live_text();
        self.apply(Action::Save { live_text })
    }

    /// Export the active buffer's live text to a user-chosen destination.
    pub fn download(&mut self) {
        let Some(buffer) = self.store.state().session.active_buffer() else {
            return;
        };
        let name = buffer.name.to_string();
        let text = self.surface.value();
        self.sync.export(&name, &text);
    }

    /// Native open picker; a picked file becomes a new buffer and the new
    /// external binding. Cancellation and failure are silent.
    pub fn open_file(&mut self) -> bool {
        let Some(imported) = self.sync.open() else {
            return false;
        };
        let changed = self.apply(Action::FileImported {
            name: imported.name,
            content: imported.content,
        });
        if let Some(id) = self.store.state().session.active_id() {
            self.sync.bind(imported.handle, id);
        }
        changed
    }

    /// Host-side file selection: content arrives directly, no binding.
    pub fn import_file(&mut self, name: &str, content: String) -> bool {
        self.apply(Action::FileImported {
            name: name.to_string(),
            content,
        })
    }

    pub fn find(&mut self) -> bool {
        self.apply(Action::RequestFind)
    }

    pub fn go_to_line(&mut self) -> bool {
        self.apply(Action::RequestGoToLine)
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.apply(Action::ToggleSidebar)
    }

    pub fn modal_accept(&mut self) -> bool {
        self.apply(Action::ModalAccept)
    }

    pub fn modal_cancel(&mut self) -> bool {
        self.apply(Action::ModalCancel)
    }

    pub fn modal_input(&mut self, ch: char) -> bool {
        self.apply(Action::ModalInput(ch))
    }

    pub fn modal_backspace(&mut self) -> bool {
        self.apply(Action::ModalBackspace)
    }

    pub fn modal_cursor_left(&mut self) -> bool {
        self.apply(Action::ModalCursorLeft)
    }

    pub fn modal_cursor_right(&mut self) -> bool {
        self.apply(Action::ModalCursorRight)
    }

    /// Surface change notification (the widget's change event).
    pub fn notify_edited(&mut self) -> bool {
        self.apply(Action::SurfaceEdited)
    }

    /// Surface cursor-activity notification.
    pub fn notify_cursor(&mut self) -> bool {
        let pos = self.surface.cursor();
        self.apply(Action::CursorMoved {
            line: pos.line,
            col: pos.col,
        })
    }

    /// Applies actions delivered over the bus (scheduled timers). Call on
    /// the host's event-loop tick.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        for action in self.bus_rx.drain_actions() {
            changed |= self.apply(action);
        }
        changed
    }

    fn live_text(&self) -> Option<String> {
        self.store
            .state()
            .session
            .active_id()
            .map(|_| self.surface.value())
    }

    fn apply(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::new();
        queue.push_back(action);

        let mut changed = false;
        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            changed |= result.state_changed;
            for effect in result.effects {
                self.run_effect(effect, &mut queue);
            }
            self.sync.retain_binding(&self.store.state().session);
        }
        changed
    }

    fn run_effect(&mut self, effect: Effect, queue: &mut VecDeque<Action>) {
        match effect {
            Effect::LoadSurface { text, mode } => {
                self.surface.set_value(&text);
                self.surface.set_mode(mode);
            }
            Effect::ClearSurface => {
                self.surface.set_value("");
            }
            Effect::SaveProject { records } => {
                let outcome = self.sync.save(&records);
                queue.push_back(Action::SaveFinished { outcome });
            }
            Effect::PersistSession { records } => {
                let outcome = self.sync.persist(&records);
                queue.push_back(Action::SaveFinished { outcome });
            }
            Effect::StartFind { query } => {
                let outcome = self.run_find(&query);
                queue.push_back(Action::SearchFinished { outcome });
            }
            Effect::MoveCursor { line } => {
                self.surface.set_cursor(SurfacePos::new(line, 0));
                self.surface.focus();
            }
            Effect::ScheduleStatusReset { generation } => {
                let delay = Duration::from_millis(self.store.state().config.status_reset_ms);
                self.scheduler
                    .schedule_action(delay, Action::StatusTimeout { generation });
            }
        }
    }

    /// Forward search from the cursor, retrying once from the top.
    fn run_find(&mut self, query: &str) -> FindOutcome {
        let margin = self.store.state().config.scroll_margin;

        if let Some(range) = self.surface.find_forward(query, self.surface.cursor()) {
            self.surface.select(range);
            self.surface.scroll_into_view(range, margin);
            return FindOutcome::Found;
        }

        if let Some(range) = self.surface.find_forward(query, SurfacePos::default()) {
            self.surface.select(range);
            self.surface.scroll_into_view(range, margin);
            return FindOutcome::Wrapped;
        }

        FindOutcome::NotFound
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;
