use std::time::Duration;

use crate::kernel::Action;

/// Deferred re-dispatch of an action, used for cosmetic timers like the
/// transient status reset. Delivery goes through the shell bus and takes
/// effect when the host pumps it.
pub trait DelayScheduler {
    fn schedule_action(&self, delay: Duration, action: Action);
}
