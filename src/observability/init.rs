//! Subscriber setup: `tracing` → OpenTelemetry → OTLP-JSON file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "commentary-otlp.json";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `trace_level` (any `EnvFilter` directive, default
/// `info`). If the data directory cannot be created, tracing stays off and the
/// plugin runs normally. Later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "Commentary"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("Commentary"));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
