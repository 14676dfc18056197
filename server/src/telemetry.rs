//! Telemetry initialization: tracing spans and log events exported over
//! OTLP, plus compact console output.
//!
//! # Design
//! One process-wide initialization at startup, one explicit flush at
//! shutdown via [`TelemetryHandle`]. Export is batched and best-effort;
//! a collector being down never affects request handling.

use anyhow::Result;
use opentelemetry::{global, KeyValue};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Telemetry settings, sourced from the environment:
/// * `OTEL_EXPORTER_OTLP_ENDPOINT` — base endpoint, default `http://localhost:4318`.
/// * `OTEL_SERVICE_NAME` — service name resource attribute, default `todo-api`.
/// * `RUST_ENV` — reported as `deployment.environment`, default `dev`.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub endpoint: String,
    pub service_name: String,
    pub service_version: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4318".to_string()),
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "todo-api".to_string()),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Handle for explicit shutdown of the telemetry providers. Call
/// [`TelemetryHandle::shutdown`] before process exit so final batches of
/// spans and log records are exported.
pub struct TelemetryHandle {
    tracer_provider: SdkTracerProvider,
    logger_provider: SdkLoggerProvider,
}

impl TelemetryHandle {
    /// Flush and shut down both providers, aggregating any exporter errors.
    pub fn shutdown(self) -> Result<()> {
        let mut errs = Vec::new();
        if let Err(e) = self.tracer_provider.shutdown() {
            errs.push(format!("tracer: {e}"));
        }
        if let Err(e) = self.logger_provider.shutdown() {
            errs.push(format!("logger: {e}"));
        }
        if errs.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(errs.join(", "))
        }
    }
}

/// Install the global tracer provider and the `tracing` subscriber stack:
/// `EnvFilter` (default `info`), a compact console layer, the OTLP log
/// bridge, and the OpenTelemetry span layer.
///
/// # Errors
/// Returns an error if an exporter builder fails (e.g. invalid endpoint).
pub fn init(cfg: TelemetryConfig) -> Result<TelemetryHandle> {
    let resource = Resource::builder()
        .with_service_name(cfg.service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", cfg.service_version.clone()),
            KeyValue::new(
                "deployment.environment",
                std::env::var("RUST_ENV").unwrap_or_else(|_| "dev".into()),
            ),
        ])
        .build();

    let base = cfg.endpoint.trim_end_matches('/');
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(format!("{base}/v1/traces"))
        .build()?;
    let log_exporter = LogExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(format!("{base}/v1/logs"))
        .build()?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider.clone());

    let logger_provider = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    let bridge_layer = OpenTelemetryTracingBridge::new(&logger_provider);
    let otel_trace_layer = OpenTelemetryLayer::new(global::tracer("todo-api"));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).compact();

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(bridge_layer)
        .with(otel_trace_layer)
        .init();

    Ok(TelemetryHandle {
        tracer_provider,
        logger_provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_populated() {
        let cfg = TelemetryConfig::default();
        assert!(!cfg.endpoint.is_empty());
        assert!(!cfg.service_name.is_empty());
        assert_eq!(cfg.service_version, env!("CARGO_PKG_VERSION"));
    }
}
