use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_prediction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use retail_score::config::AppConfig;
use retail_score::error::AppError;
use retail_score::prediction::{HttpScoringClient, PredictionService};
use retail_score::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let backend = Arc::new(HttpScoringClient::new(&config.scoring)?);
    let service = Arc::new(PredictionService::new(backend, config.scoring.context));

    let app = with_prediction_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        upstream = %config.scoring.base_url,
        context = config.scoring.context.label(),
        "outlet scoring front end ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
