use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;

use clap::Parser;
use core_server::router::start_server;
use core_server::{ServerConfig, build_info, metrics};
use gatepass_core::config::core_config::AppConfig;
use sentry::integrations::tracing::EventFilter;
use tracing_subscriber::prelude::*;

const BASE_CONFIG_FILE: &str = "config/config.yml";
const DEFAULT_PORT: u16 = 3000;

/// GatePass vehicle registration and gate verification server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Additional config files, merged over `config/config.yml` in the given order
    #[arg(short, long, value_name = "FILE")]
    config: Vec<PathBuf>,

    /// Do not bring the database schema up to date on startup
    #[arg(long)]
    skip_migrations: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_files: Vec<PathBuf> = std::iter::once(PathBuf::from(BASE_CONFIG_FILE))
        .chain(cli.config)
        .collect();
    let config: AppConfig<ServerConfig> =
        AppConfig::from_files(&config_files).expect("Failed to load configuration");

    let _sentry = init_sentry(&config.app);
    init_tracing(&config.app);
    metrics::setup();

    let listener =
        TcpListener::bind(listen_address(&config.app)).expect("Failed to bind server address");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");

    runtime.block_on(async move {
        let db = sql_data_provider::db_conn(&config.app.database_url, !cli.skip_migrations)
            .await
            .expect("Failed to open database");

        start_server(listener, config, db).await
    })
}

fn listen_address(config: &ServerConfig) -> SocketAddr {
    let ip = config
        .server_ip
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    SocketAddr::new(ip, config.server_port.unwrap_or(DEFAULT_PORT))
}

fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref().filter(|dsn| !dsn.is_empty())?;
    let environment = config.sentry_environment.clone()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(environment.into()),
            max_breadcrumbs: 50,
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));

    // inherited by the per-request hubs
    sentry::configure_scope(|scope| {
        scope.set_tag("service", "gatepass");
        scope.set_tag("version", build_info::PKG_VERSION);
        scope.set_tag("commit", build_info::COMMIT_HASH);
        scope.set_tag("build-time", build_info::BUILD_TIME);
    });

    Some(guard)
}

fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("debug"))
        })
        .expect("Invalid trace level");

    let sentry_layer =
        sentry::integrations::tracing::layer().event_filter(|metadata| match *metadata.level() {
            tracing::Level::ERROR => EventFilter::Event,
            tracing::Level::WARN | tracing::Level::INFO => EventFilter::Breadcrumb,
            _ => EventFilter::Ignore,
        });

    let registry = tracing_subscriber::registry().with(filter).with(sentry_layer);

    if config.trace_json == Some(true) {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
