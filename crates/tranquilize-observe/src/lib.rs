//! Observability setup for Tranquilize: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
