use crate::cli::ServeArgs;
use crate::infra::{build_reviewer, load_board, AppState};
use crate::routes::with_section_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruit_kit::config::AppConfig;
use recruit_kit::error::AppError;
use recruit_kit::sections::application::ApplicationState;
use recruit_kit::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.positions.take() {
        config.positions.catalog_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog_path = config.positions.catalog_path.as_deref();
    let board = Arc::new(load_board(catalog_path)?);
    // Position ids are only checked when a catalog was actually loaded.
    let application = ApplicationState {
        reviewer: Arc::new(build_reviewer(&config.validation)),
        board: catalog_path.map(|_| board.clone()),
    };
    let open_positions = board.candidates().len();

    let app = with_section_routes(application, board)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, open_positions, "recruiting landing page core ready");

    axum::serve(listener, app).await?;
    Ok(())
}
