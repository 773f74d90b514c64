//! Command-line configuration.
//!
//! Everything else (seed data, routes) is fixed at build time. Log filtering
//! follows `RUST_LOG`, defaulting to `info`.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::server::DEFAULT_BODY_LIMIT;

/// In-memory product catalog over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalogo", version, about)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Largest request body, in bytes, before the server answers 413.
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
    pub max_body_bytes: usize,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

/// Installs the global tracing subscriber.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_8080_and_pretty_logs() {
        let args = Args::parse_from(["catalogo"]);
        assert_eq!(args.addr, "0.0.0.0:8080");
        assert_eq!(args.log_format, LogFormat::Pretty);
        assert_eq!(args.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "catalogo", "--addr", "127.0.0.1:9000", "--log-format", "json", "--max-body-bytes", "4096",
        ]);
        assert_eq!(args.addr, "127.0.0.1:9000");
        assert_eq!(args.max_body_bytes, 4096);
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
