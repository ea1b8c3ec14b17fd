//! Unified error type.

/// The error type returned by carlot's fallible operations.
///
/// Request-level failures (a missing car, a body that does not decode) are
/// expressed as HTTP [`Response`](crate::Response) values, not as `Error`s.
/// This type surfaces infrastructure failures: binding the listener,
/// accepting a connection, or installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter `{directive}`: {source}")]
    LogFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("log subscriber already installed: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}
