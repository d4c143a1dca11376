use std::io;
use std::time::Duration;

use crate::kernel::services::bus::ShellBusSender;
use crate::kernel::services::ports::DelayScheduler;
use crate::kernel::Action;

/// Tokio-backed scheduler. Fired actions land on the shell bus and take
/// effect when the host pumps it.
pub struct TokioScheduler {
    runtime: tokio::runtime::Runtime,
    bus: ShellBusSender,
}

impl TokioScheduler {
    pub fn new(bus: ShellBusSender) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, bus })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }
}

impl DelayScheduler for TokioScheduler {
    fn schedule_action(&self, delay: Duration, action: Action) {
        let bus = self.bus.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = bus.send_action(action);
        });
    }
}
