use lt_tracking::TrackingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tracking session is no longer running")]
    SessionClosed,

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error("tracking session task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
