//! Collaborator error type.

use thiserror::Error;

use lt_core::GeoPoint;

/// Failures reported by external collaborators.
///
/// None of these are fatal to tracking; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("geocoding failed: {0}")]
    Geocode(String),

    #[error("region monitoring failed for {identifier}: {reason}")]
    Geofence { identifier: String, reason: String },

    #[error("notification could not be scheduled: {0}")]
    Notification(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
