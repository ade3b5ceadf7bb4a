//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → commentary-otlp.json
//! ```
//!
//! The Zellij sandbox has no network exporter to talk to, so finished spans
//! are written as OTLP-JSON lines under the plugin data directory
//! (`~/.local/share/zellij/commentary/commentary-otlp.json` on the host).
//! The file rotates at 1 MiB and keeps 3 numbered backups.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: `SpanExporter` implementation and tracer provider
//! - `otlp`: OTLP-JSON encoding
//! - `rotating`: Size-rotated line writer

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
