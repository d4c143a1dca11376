use crate::kernel::services::ports::{
    DurableStore, ExternalHandle, FileHost, PickOutcome,
};
use crate::kernel::session::{BufferId, BufferRecord, Session};
use crate::kernel::SaveOutcome;

/// Well-known durable-store key holding the whole session.
pub const PROJECT_KEY: &str = "currentProject";

/// Live write target acquired from an open picker, tied to the buffer it
/// imported. Never persisted; dies with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalBinding {
    pub handle: ExternalHandle,
    pub buffer: BufferId,
}

#[derive(Debug)]
pub struct ImportedFile {
    pub handle: ExternalHandle,
    pub name: String,
    pub content: String,
}

/// Reconciles kernel state with the durable store and the optional bound
/// external file. All host failures degrade to the next tier; the only
/// error surface is the log.
pub struct PersistenceSynchronizer {
    durable: Box<dyn DurableStore>,
    files: Box<dyn FileHost>,
    binding: Option<ExternalBinding>,
}

impl PersistenceSynchronizer {
    pub fn new(durable: Box<dyn DurableStore>, files: Box<dyn FileHost>) -> Self {
        Self {
            durable,
            files,
            binding: None,
        }
    }

    pub fn binding(&self) -> Option<ExternalBinding> {
        self.binding
    }

    pub fn bind(&mut self, handle: ExternalHandle, buffer: BufferId) {
        self.binding = Some(ExternalBinding { handle, buffer });
    }

    /// Drops the binding once its buffer has left the session.
    pub fn retain_binding(&mut self, session: &Session) {
        let stale = self
            .binding
            .is_some_and(|binding| !session.contains(binding.buffer));
        if stale {
            tracing::debug!("bound buffer deleted, releasing external binding");
            self.binding = None;
        }
    }

    /// Load-on-start read of the project record. Anything unexpected is
    /// treated as an empty store.
    pub fn load(&mut self) -> Vec<BufferRecord> {
        let value = match self.durable.get(PROJECT_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored session");
                return Vec::new();
            }
        };
        match serde_json::from_value(value) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "stored session does not parse, starting fresh");
                Vec::new()
            }
        }
    }

    /// Explicit save: bound external file first, durable store as the
    /// fallback tier.
    pub fn save(&mut self, records: &[BufferRecord]) -> SaveOutcome {
        if let Some(binding) = self.binding {
            match records.iter().find(|r| r.id == binding.buffer.raw()) {
                Some(record) => match self.files.write_through(binding.handle, &record.content) {
                    Ok(()) => {
                        tracing::info!(file = %record.name, "wrote bound external file");
                        return SaveOutcome::WroteBinding;
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "bound write failed, falling back to durable store");
                    }
                },
                None => {
                    tracing::debug!("bound buffer gone, releasing binding");
                    self.binding = None;
                }
            }
        }
        self.persist(records)
    }

    /// Durable-store tier only; used directly for structural mutations.
    pub fn persist(&mut self, records: &[BufferRecord]) -> SaveOutcome {
        let value = match serde_json::to_value(records) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session");
                return SaveOutcome::Failed;
            }
        };
        match self.durable.put(PROJECT_KEY, value) {
            Ok(()) => SaveOutcome::StoredSession,
            Err(e) => {
                tracing::warn!(error = %e, "failed to store session");
                SaveOutcome::Failed
            }
        }
    }

    /// Runs the open picker and reads the chosen file. `None` covers
    /// cancellation, denial, and read failure alike.
    pub fn open(&mut self) -> Option<ImportedFile> {
        if !self.files.supports_pickers() {
            return None;
        }

        let picked = match self.files.open_picker() {
            Ok(PickOutcome::Picked(picked)) => picked,
            Ok(PickOutcome::Cancelled) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "open picker failed");
                return None;
            }
        };

        match self.files.read_text(picked.handle) {
            Ok(content) => Some(ImportedFile {
                handle: picked.handle,
                name: picked.name,
                content,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "failed to read picked file");
                None
            }
        }
    }

    /// Export protocol: save picker when supported (silently aborting on
    /// cancellation or failure), synthetic download otherwise.
    pub fn export(&mut self, name: &str, text: &str) {
        if self.files.supports_pickers() {
            match self.files.save_picker(name) {
                Ok(PickOutcome::Picked(handle)) => {
                    if let Err(e) = self.files.write_through(handle, text) {
                        tracing::debug!(error = %e, "export write failed");
                    }
                }
                Ok(PickOutcome::Cancelled) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "save picker failed");
                }
            }
            return;
        }

        if let Err(e) = self.files.deliver_download(name, text.as_bytes()) {
            tracing::debug!(error = %e, "download fallback failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/sync.rs"]
mod tests;
