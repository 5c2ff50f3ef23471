use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::core::Collector;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, TextEncoder,
};

use crate::error::Result;
use crate::models::{ContentType, VoteType};

/// Label used when a vote carries a value outside the known enums
const UNKNOWN_LABEL: &str = "unknown";

/// Register a freshly built collector with the default registry. A collector
/// that cannot be built or registered is logged and left out, so recording
/// becomes a no-op instead of a panic.
fn register<C>(name: &str, built: prometheus::Result<C>) -> Option<C>
where
    C: Collector + Clone + 'static,
{
    match built {
        Ok(collector) => {
            if let Err(e) = prometheus::default_registry().register(Box::new(collector.clone())) {
                tracing::error!("failed to register {} metric: {}", name, e);
            }
            Some(collector)
        }
        Err(e) => {
            tracing::error!("failed to create {} metric: {}", name, e);
            None
        }
    }
}

static SCORE_CALCULATIONS_TOTAL: Lazy<Option<IntCounterVec>> = Lazy::new(|| {
    register(
        "score_calculations_total",
        IntCounterVec::new(
            Opts::new(
                "score_calculations_total",
                "Total number of vote scores calculated",
            ),
            &["content_type", "vote_type"],
        ),
    )
});

static SCORE_REQUESTS_REJECTED_TOTAL: Lazy<Option<IntCounter>> = Lazy::new(|| {
    register(
        "score_requests_rejected_total",
        IntCounter::new(
            "score_requests_rejected_total",
            "Total number of score requests rejected for malformed payloads",
        ),
    )
});

static HTTP_REQUESTS_TOTAL: Lazy<Option<IntCounterVec>> = Lazy::new(|| {
    register(
        "http_requests_total",
        IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests"),
            &["method", "path", "status"],
        ),
    )
});

static HTTP_REQUEST_DURATION_SECONDS: Lazy<Option<HistogramVec>> = Lazy::new(|| {
    register(
        "http_request_duration_seconds",
        HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency")
                .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0]),
            &["method", "path", "status"],
        ),
    )
});

/// Register all collectors up front so `/metrics` lists them before traffic
pub fn init_metrics() {
    Lazy::force(&SCORE_CALCULATIONS_TOTAL);
    Lazy::force(&SCORE_REQUESTS_REJECTED_TOTAL);
    Lazy::force(&HTTP_REQUESTS_TOTAL);
    Lazy::force(&HTTP_REQUEST_DURATION_SECONDS);
}

/// Count a calculated score. Unrecognised values share one label so that
/// arbitrary client input cannot grow the series set.
pub fn record_calculation(content_type: Option<ContentType>, vote_type: Option<VoteType>) {
    let Some(counter) = SCORE_CALCULATIONS_TOTAL.as_ref() else {
        return;
    };

    let content_label = content_type.map(|c| c.as_str()).unwrap_or(UNKNOWN_LABEL);
    let vote_label = vote_type.map(|v| v.as_str()).unwrap_or(UNKNOWN_LABEL);

    counter.with_label_values(&[content_label, vote_label]).inc();
}

#[inline]
pub fn inc_rejected_requests() {
    if let Some(counter) = SCORE_REQUESTS_REJECTED_TOTAL.as_ref() {
        counter.inc();
    }
}

/// Current value of the rejected-request counter
pub fn rejected_requests() -> u64 {
    SCORE_REQUESTS_REJECTED_TOTAL
        .as_ref()
        .map(|c| c.get())
        .unwrap_or(0)
}

pub(crate) fn observe_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(counter) = HTTP_REQUESTS_TOTAL.as_ref() {
        counter.with_label_values(&[method, path, status]).inc();
    }

    if let Some(histogram) = HTTP_REQUEST_DURATION_SECONDS.as_ref() {
        histogram
            .with_label_values(&[method, path, status])
            .observe(duration_secs);
    }
}

#[cfg(test)]
pub(crate) fn http_requests(method: &str, path: &str, status: &str) -> u64 {
    HTTP_REQUESTS_TOTAL
        .as_ref()
        .map(|c| c.with_label_values(&[method, path, status]).get())
        .unwrap_or(0)
}

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> Result<HttpResponse> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).map_err(|e| {
        tracing::error!("failed to encode metrics: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
