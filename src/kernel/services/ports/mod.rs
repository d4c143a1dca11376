//! Service ports: traits + data contracts.

pub mod config;
pub mod durable;
pub mod files;
pub mod runtime;
pub mod surface;

pub use config::ShellConfig;
pub use durable::{DurableStore, Result as StoreResult, StoreError};
pub use files::{
    ExternalHandle, FileError, FileHost, PickOutcome, PickedFile, Result as FileResult,
};
pub use runtime::DelayScheduler;
pub use surface::{EditingSurface, SurfacePos, SurfaceRange};
