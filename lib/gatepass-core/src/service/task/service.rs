use std::time::Instant;

use serde_json::Value;

use super::TaskService;
use crate::service::error::{MissingProviderError, ServiceError};

impl TaskService {
    /// Runs the task registered under `name`, returning its JSON outcome
    pub async fn run(&self, name: &str) -> Result<Value, ServiceError> {
        let task = self
            .task_provider
            .get_task(name)
            .ok_or_else(|| MissingProviderError::Task(name.to_owned()))?;

        let started = Instant::now();
        let outcome = task.run().await;
        tracing::info!(
            task = name,
            success = outcome.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Task finished"
        );

        outcome
    }
}
