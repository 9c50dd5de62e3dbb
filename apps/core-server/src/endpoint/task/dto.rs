use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskRequestRestDTO {
    #[schema(example = "FINALIZE_PENDING_REGISTRATIONS")]
    pub name: String,
}

/// Task name followed by the task specific outcome, e.g. `finalized` and `failed` counts
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskResponseRestDTO {
    #[schema(example = "FINALIZE_PENDING_REGISTRATIONS")]
    pub task: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub outcome: serde_json::Value,
}
