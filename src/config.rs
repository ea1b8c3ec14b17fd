//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// In-memory car inventory over HTTP.
#[derive(Clone, Debug, Parser)]
#[command(name = "carlot", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "CARLOT_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax.
    #[arg(long, env = "CARLOT_LOG", default_value = "carlot=info")]
    pub log: String,

    /// Shape of each log line.
    #[arg(long, env = "CARLOT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}
