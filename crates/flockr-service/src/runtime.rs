//! Background ticker for deferred work
//!
//! Operations already apply due tasks when they take the state lock. The
//! ticker covers idle periods, so a scheduled message or a standup summary
//! lands close to its due time even when nobody is calling in.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::services::ServiceContext;

/// Spawn a task that applies due work every `tick`
///
/// Must be called from within a tokio runtime. Abort the returned handle to
/// stop it.
pub fn spawn_scheduler(ctx: ServiceContext, tick: Duration) -> JoinHandle<()> {
    info!(tick = ?tick, "Starting scheduler");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let fired = ctx.run_due_tasks();
            if fired > 0 {
                debug!(fired, "Scheduler applied due tasks");
            }
        }
    })
}
