use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use score_service::config::Config;
use score_service::handlers;
use score_service::metrics;
use score_service::middleware::MetricsMiddleware;
use score_service::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first: it selects the log format
    let config = Config::from_env().context("Failed to load configuration")?;

    telemetry::init_tracing(config.log_format);
    metrics::init_metrics();

    tracing::info!("Starting score-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = %config.app_env,
        bind_address = %config.bind_address(),
        workers = ?config.http_workers,
        json_payload_limit_bytes = config.json_payload_limit_bytes,
        "Configuration loaded"
    );

    let json_payload_limit = config.json_payload_limit_bytes;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(MetricsMiddleware)
            .wrap(TracingLogger::default())
            .configure(|cfg| handlers::configure_routes(cfg, json_payload_limit))
    });

    if let Some(workers) = config.http_workers {
        server = server.workers(workers);
    }

    server
        .bind(config.bind_address())
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
