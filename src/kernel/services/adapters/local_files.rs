use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use slotmap::SlotMap;

use crate::kernel::services::ports::files::{
    ExternalHandle, FileError, FileHost, PickOutcome, PickedFile, Result,
};

struct HostState {
    handles: SlotMap<ExternalHandle, PathBuf>,
    pending_picks: VecDeque<PathBuf>,
}

/// Local-filesystem implementation of the host file capability.
///
/// Picker interactions cannot be rendered headlessly, so the embedding
/// host resolves its own chooser UI and queues the chosen path here
/// beforehand; an empty queue reads as the user cancelling. Handles are
/// slotmap keys into a per-session path registry, mirroring how browser
/// file handles stay opaque and die with the page.
///
/// Clones share state, so the embedder can keep one clone for queueing
/// picks while the synchronizer owns another.
#[derive(Clone)]
pub struct LocalFileHost {
    state: Arc<Mutex<HostState>>,
    pickers_enabled: bool,
    download_dir: PathBuf,
}

impl LocalFileHost {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState {
                handles: SlotMap::with_key(),
                pending_picks: VecDeque::new(),
            })),
            pickers_enabled: true,
            download_dir,
        }
    }

    /// Host without picker support; exports go through the download
    /// fallback.
    pub fn without_pickers(download_dir: PathBuf) -> Self {
        let mut host = Self::new(download_dir);
        host.pickers_enabled = false;
        host
    }

    /// Queues the result of the next picker interaction.
    pub fn queue_pick(&self, path: PathBuf) {
        self.lock().pending_picks.push_back(path);
    }

    pub fn handle_path(&self, handle: ExternalHandle) -> Option<PathBuf> {
        self.lock().handles.get(handle).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn map_io(path: &Path, e: io::Error) -> FileError {
        if e.kind() == io::ErrorKind::PermissionDenied {
            FileError::PermissionDenied(path.to_path_buf())
        } else {
            FileError::Io(e)
        }
    }
}

impl FileHost for LocalFileHost {
    fn supports_pickers(&self) -> bool {
        self.pickers_enabled
    }

    fn open_picker(&mut self) -> Result<PickOutcome<PickedFile>> {
        if !self.pickers_enabled {
            return Err(FileError::PickersUnsupported);
        }
        let mut state = self.lock();
        let Some(path) = state.pending_picks.pop_front() else {
            return Ok(PickOutcome::Cancelled);
        };

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        let handle = state.handles.insert(path);
        Ok(PickOutcome::Picked(PickedFile { handle, name }))
    }

    fn save_picker(&mut self, suggested_name: &str) -> Result<PickOutcome<ExternalHandle>> {
        if !self.pickers_enabled {
            return Err(FileError::PickersUnsupported);
        }
        let mut state = self.lock();
        let Some(mut path) = state.pending_picks.pop_front() else {
            return Ok(PickOutcome::Cancelled);
        };

        // A queued directory means "save in here under the suggested name".
        if path.is_dir() {
            path = path.join(suggested_name);
        }
        Ok(PickOutcome::Picked(state.handles.insert(path)))
    }

    fn read_text(&mut self, handle: ExternalHandle) -> Result<String> {
        let path = self
            .lock()
            .handles
            .get(handle)
            .cloned()
            .ok_or(FileError::StaleHandle)?;
        fs::read_to_string(&path).map_err(|e| Self::map_io(&path, e))
    }

    fn write_through(&mut self, handle: ExternalHandle, text: &str) -> Result<()> {
        let path = self
            .lock()
            .handles
            .get(handle)
            .cloned()
            .ok_or(FileError::StaleHandle)?;
        fs::write(&path, text).map_err(|e| Self::map_io(&path, e))
    }

    fn deliver_download(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if !self.download_dir.exists() {
            fs::create_dir_all(&self.download_dir)?;
        }

        // File names come from buffer names; keep them from escaping the
        // download directory.
        let name = name.replace(['/', '\\'], "_");
        let name = if name.is_empty() {
            "download".to_string()
        } else {
            name
        };

        let path = self.download_dir.join(name);
        fs::write(&path, bytes).map_err(|e| Self::map_io(&path, e))?;
        tracing::debug!(path = %path.display(), "delivered download");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/local_files.rs"]
mod tests;
