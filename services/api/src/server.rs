use crate::cli::ServeArgs;
use crate::infra::{load_desk_or_unloaded, AppState};
use crate::routes::with_faq_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use faq_desk::config::AppConfig;
use faq_desk::error::AppError;
use faq_desk::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(path) = args.faq.take() {
        config.faq.data_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let desk = Arc::new(load_desk_or_unloaded(
        &config.faq.data_path,
        config.faq.reply_templates(),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        desk: desk.clone(),
    };

    let app = with_faq_routes(desk.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        faq_entries = desk.set().len(),
        "faq desk ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
