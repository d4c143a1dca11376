use std::io;
use std::path::PathBuf;

slotmap::new_key_type! {
    /// Opaque handle to a host file, valid only for the session lifetime.
    pub struct ExternalHandle;
}

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    PermissionDenied(PathBuf),
    /// The handle no longer resolves to a host file.
    StaleHandle,
    /// The host exposes no picker capability.
    PickersUnsupported,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FileError::StaleHandle => write!(f, "Stale file handle"),
            FileError::PickersUnsupported => write!(f, "File pickers unsupported"),
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

/// A user decision from a picker interaction. Cancellation is a normal
/// outcome, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome<T> {
    Picked(T),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub handle: ExternalHandle,
    pub name: String,
}

/// Native file-system capability of the host, feature-probed via
/// `supports_pickers`.
pub trait FileHost {
    fn supports_pickers(&self) -> bool;

    fn open_picker(&mut self) -> Result<PickOutcome<PickedFile>>;

    fn save_picker(&mut self, suggested_name: &str) -> Result<PickOutcome<ExternalHandle>>;

    fn read_text(&mut self, handle: ExternalHandle) -> Result<String>;

    /// Replaces the target's content wholesale, like a writable stream
    /// that is written once and closed.
    fn write_through(&mut self, handle: ExternalHandle, text: &str) -> Result<()>;

    /// Synthetic download fallback for hosts without a save picker.
    fn deliver_download(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}
