use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Router};
use gatepass_core::GateCore;
use gatepass_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, driver, file, misc, scan, scan_log, task};
use crate::middleware::get_http_request_context;
use crate::scheduler::spawn_finalize_pending_registrations;
use crate::{ServerConfig, build_info, dto};

const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

pub(crate) struct InternalAppState {
    pub core: GateCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set non-blocking listener");

    let core = GateCore::new(
        Arc::new(DataLayer::build(db_conn)),
        config.core,
        Some(config.app.core_base_url.to_owned()),
    )
    .expect("Failed to parse config");
    info!(
        "Using {} object storage",
        core.get_config().object_storage.r#type
    );

    let config = Arc::new(config.app);

    if let Some(interval) = config.finalize_pending_interval.filter(|i| !i.is_zero()) {
        info!("Finalizing pending registrations every {}s", interval.as_secs());
        spawn_finalize_pending_registrations(core.clone(), interval);
    }

    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let openapi_documentation = gen_openapi_documentation();
    let max_upload_size = config.max_upload_size.unwrap_or(DEFAULT_MAX_UPLOAD_SIZE);

    let protected = Router::new()
        .route(
            "/api/driver/v1",
            get(driver::controller::get_driver_list).post(driver::controller::post_driver),
        )
        .route("/api/driver/v1/{id}", get(driver::controller::get_driver))
        .route(
            "/api/driver/v1/{id}/scan-log",
            get(driver::controller::get_driver_scan_log_list),
        )
        .route("/api/scan/v1", post(scan::controller::post_scan))
        .route(
            "/api/scan-log/v1",
            get(scan_log::controller::get_scan_log_list),
        )
        .route("/api/task/v1/run", post(task::controller::post_task))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(middleware::from_fn(crate::middleware::bearer_check));

    let unprotected = Router::new().route("/files/{*key}", get(file::controller::get_file));

    let technical_endpoints = Router::new()
        .route("/build-info", get(misc::get_build_info))
        .route("/health", get(misc::health_check))
        .route("/metrics", get(misc::get_metrics));

    Router::new()
        .merge(protected)
        .merge(unprotected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "gatepass",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi_documentation))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::driver::controller::post_driver,
            endpoint::driver::controller::get_driver_list,
            endpoint::driver::controller::get_driver,
            endpoint::driver::controller::get_driver_scan_log_list,

            endpoint::scan::controller::post_scan,

            endpoint::scan_log::controller::get_scan_log_list,

            endpoint::task::controller::post_task,

            endpoint::file::controller::get_file,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::driver::dto::RegisterDriverRequestRestDTO,
                endpoint::driver::dto::RegisterDriverResponseRestDTO,
                endpoint::driver::dto::GetDriverResponseRestDTO,
                endpoint::driver::dto::DriverStatusRestEnum,

                endpoint::scan::dto::VerifyDriverRequestRestDTO,
                endpoint::scan::dto::VerifyDriverResponseRestDTO,

                endpoint::scan_log::dto::GetScanLogResponseRestDTO,
                endpoint::scan_log::dto::ScanLogStatusRestEnum,

                endpoint::task::dto::TaskRequestRestDTO,
                endpoint::task::dto::TaskResponseRestDTO,

                endpoint::misc::BuildInfoRestDTO,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::DriverId,
                shared_types::ScanLogId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "driver_management", description = "Driver registration and lookup"),
            (name = "scan", description = "Gate scans"),
            (name = "task", description = "Maintenance tasks"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearer",
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .description(Some("Gate staff access token"))
                            .build(),
                    ),
                );
            }
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
