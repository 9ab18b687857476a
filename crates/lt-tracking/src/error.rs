use lt_services::{AuthorizationStatus, ServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("a trip is already being tracked")]
    AlreadyTracking,

    #[error("no location fix received yet")]
    NoFix,

    #[error("location permission insufficient: {0}")]
    PermissionDenied(AuthorizationStatus),

    #[error("region monitoring is not available on this device")]
    MonitoringUnavailable,

    #[error("collaborator failed: {0}")]
    Service(#[from] ServiceError),
}

pub type TrackingResult<T> = Result<T, TrackingError>;
