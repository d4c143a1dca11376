//! auraedit - headless multi-buffer editor shell.
//!
//! Module structure:
//! - kernel: headless core (session, state, action/effect, store, services)
//! - app: controller layer (EditorShell, persistence synchronizer)
//! - views: pure projections (tab strip, status line)

pub mod app;
pub mod kernel;
pub mod logging;
pub mod views;
