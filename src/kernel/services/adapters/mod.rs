//! Default adapters for the service ports: local filesystem, JSON storage,
//! rope-backed editing surface, tokio timer.

pub mod json_store;
pub mod local_files;
pub mod rope_surface;
pub mod runtime;

pub use json_store::JsonStore;
pub use local_files::LocalFileHost;
pub use rope_surface::RopeSurface;
pub use runtime::TokioScheduler;

use std::path::PathBuf;

const APP_NAME: &str = "auraedit";
const STORE_DIR: &str = "store";
const LOG_DIR: &str = "logs";
const DOWNLOAD_DIR: &str = "downloads";

fn app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn ensure_dir(sub: &str) -> std::io::Result<PathBuf> {
    let dir = app_data_dir()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine app data directory",
            )
        })?
        .join(sub);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn ensure_store_dir() -> std::io::Result<PathBuf> {
    ensure_dir(STORE_DIR)
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(LOG_DIR)
}

pub fn ensure_download_dir() -> std::io::Result<PathBuf> {
    ensure_dir(DOWNLOAD_DIR)
}
