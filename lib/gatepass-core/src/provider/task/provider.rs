use std::collections::HashMap;
use std::sync::Arc;

use super::Task;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TaskProvider: Send + Sync {
    fn get_task(&self, name: &str) -> Option<Arc<dyn Task>>;
}

pub struct TaskProviderImpl {
    tasks: HashMap<String, Arc<dyn Task>>,
}

impl TaskProviderImpl {
    pub fn new(tasks: HashMap<String, Arc<dyn Task>>) -> Self {
        Self { tasks }
    }
}

impl TaskProvider for TaskProviderImpl {
    fn get_task(&self, name: &str) -> Option<Arc<dyn Task>> {
        self.tasks.get(name).cloned()
    }
}
