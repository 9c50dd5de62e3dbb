use std::sync::OnceLock;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

struct HttpMetrics {
    registry: Registry,
    incoming_requests: IntCounterVec,
    response_time: HistogramVec,
}

fn http_metrics() -> &'static HttpMetrics {
    static METRICS: OnceLock<HttpMetrics> = OnceLock::new();

    METRICS.get_or_init(|| {
        #[allow(clippy::expect_used)]
        let incoming_requests = IntCounterVec::new(
            Opts::new("incoming_requests", "Handled HTTP requests").namespace("gatepass"),
            &["method", "status"],
        )
        .expect("valid request counter definition");

        #[allow(clippy::expect_used)]
        let response_time = HistogramVec::new(
            HistogramOpts::new("response_time", "HTTP response times in seconds")
                .namespace("gatepass"),
            &["path"],
        )
        .expect("valid response time definition");

        HttpMetrics {
            registry: Registry::new(),
            incoming_requests,
            response_time,
        }
    })
}

/// Registers the HTTP metrics, called once on startup
pub fn setup() {
    let metrics = http_metrics();

    for collector in [
        Box::new(metrics.incoming_requests.clone()) as Box<dyn prometheus::core::Collector>,
        Box::new(metrics.response_time.clone()),
    ] {
        if let Err(error) = metrics.registry.register(collector) {
            tracing::warn!(%error, "Failed to register metric");
        }
    }
}

pub(crate) fn track_request(method: &str, path: &str, status: u16, seconds: f64) {
    let metrics = http_metrics();

    metrics
        .incoming_requests
        .with_label_values(&[method, &status.to_string()])
        .inc();
    metrics
        .response_time
        .with_label_values(&[path])
        .observe(seconds);
}

/// HTTP metrics followed by the default registry (process metrics)
pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut output = String::new();

    encoder.encode_utf8(&http_metrics().registry.gather(), &mut output)?;
    encoder.encode_utf8(&prometheus::gather(), &mut output)?;

    Ok(output)
}
