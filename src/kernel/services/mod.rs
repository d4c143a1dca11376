//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: fs/runtime specific implementations.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{shell_bus, ShellBusReceiver, ShellBusSender, ShellMessage};
