use std::time::Duration;

use gatepass_core::GateCore;
use gatepass_core::config::core_config::TaskType;

/// Periodically completes registrations left without a QR code
pub(crate) fn spawn_finalize_pending_registrations(core: GateCore, interval: Duration) {
    tokio::spawn(async move {
        let task_name = TaskType::FinalizePendingRegistrations.to_string();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match core.task_service.run(&task_name).await {
                Ok(result) => tracing::debug!(%result, "Periodic {task_name} finished"),
                Err(error) => tracing::error!(%error, "Periodic {task_name} failed"),
            }
        }
    });
}
