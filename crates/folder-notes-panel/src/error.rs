use thiserror::Error;

/// Failures reported by the host collaborator
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("host unavailable: {0}")]
    Unavailable(String),
}
