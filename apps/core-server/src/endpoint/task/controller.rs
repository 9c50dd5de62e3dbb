use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::{TaskRequestRestDTO, TaskResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/task/v1/run",
    request_body = TaskRequestRestDTO,
    responses(OkOrErrorResponse<TaskResponseRestDTO>),
    tag = "task",
    security(
        ("bearer" = [])
    ),
    summary = "Run maintenance task",
    description = indoc::formatdoc! {"
        Runs a maintenance task by name and returns its outcome.

        `FINALIZE_PENDING_REGISTRATIONS` issues the missing QR codes of drivers
        still in `PENDING_QR` status and reports `finalized` and `failed` counts.
        An unknown name is answered with `BR_0011`.
    "},
)]
pub(crate) async fn post_task(
    state: State<AppState>,
    WithRejection(Json(TaskRequestRestDTO { name }), _): WithRejection<
        Json<TaskRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<TaskResponseRestDTO> {
    let outcome = state.core.task_service.run(name.trim()).await;

    OkOrErrorResponse::from_result(
        outcome.map(|outcome| TaskResponseRestDTO {
            task: name.trim().to_owned(),
            outcome,
        }),
        state,
        "running maintenance task",
    )
}
