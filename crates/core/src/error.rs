use thiserror::Error;

/// Top-level error type used across the entire library.
///
/// The appearance model itself is total — construction and resolution never
/// fail.  Errors only arise at the I/O edge (loading an appearance file from
/// disk).
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
