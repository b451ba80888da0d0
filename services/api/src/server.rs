use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredStore};
use crate::routes::with_backoffice_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use staffing_backoffice::config::AppConfig;
use staffing_backoffice::error::AppError;
use staffing_backoffice::quality::QualityService;
use staffing_backoffice::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs {
        host,
        port,
        data_dir,
    } = args;
    let config = AppConfig::load()?.with_overrides(host, port, data_dir);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = ConfiguredStore::from_config(&config.storage);
    info!(store = %store.describe(), "record store selected");
    let quality_service = Arc::new(QualityService::new(Arc::new(store)));

    let app = with_backoffice_routes(quality_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.as_str(),
        %addr,
        "staffing backoffice api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
