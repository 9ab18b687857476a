//! Tracking configuration.
//!
//! Typically built with `Default` and tweaked in code, or loaded from a JSON
//! file by the application crate when the `serde` feature is on.  Missing
//! fields fall back to their defaults.

use std::time::Duration;

use crate::{CoreError, CoreResult, TransportMode};

/// Top-level configuration shared by the animator, region monitor, and
/// runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackingConfig {
    /// Period of the position-update tick.  Also the duration of each
    /// marker move animation, so consecutive moves join up.  Default: 2500.
    pub tick_interval_ms: u64,

    /// Duration of the marker rotation animation.  Default: 1000.
    pub rotate_animation_ms: u64,

    /// Mode sent with every route request.
    pub transport_mode: TransportMode,

    /// When `true`, a tick that moves the marker while a route request is
    /// still outstanding does not issue another one.
    pub skip_route_while_in_flight: bool,

    /// Padding in points around the route when the map zooms to it.
    pub route_edge_padding: f64,

    /// Radius of the geofence armed around the vehicle.  Default: 300 m.
    pub geofence_radius_m: f64,

    /// Identifier the geofence is registered under.
    pub geofence_identifier: String,

    /// Delay before a geofence notification is delivered.  Default: 1000.
    pub notification_delay_ms: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:           2_500,
            rotate_animation_ms:        1_000,
            transport_mode:             TransportMode::Automobile,
            skip_route_while_in_flight: false,
            route_edge_padding:         30.0,
            geofence_radius_m:          300.0,
            geofence_identifier:        "driver_location".to_string(),
            notification_delay_ms:      1_000,
        }
    }
}

impl TrackingConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[inline]
    pub fn rotate_animation(&self) -> Duration {
        Duration::from_millis(self.rotate_animation_ms)
    }

    #[inline]
    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_delay_ms)
    }

    /// Reject values the runtime cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be > 0".into()));
        }
        if !(self.geofence_radius_m.is_finite() && self.geofence_radius_m > 0.0) {
            return Err(CoreError::Config(format!(
                "geofence_radius_m must be a positive number, got {}",
                self.geofence_radius_m
            )));
        }
        if self.geofence_identifier.is_empty() {
            return Err(CoreError::Config("geofence_identifier must not be empty".into()));
        }
        if !(self.route_edge_padding.is_finite() && self.route_edge_padding >= 0.0) {
            return Err(CoreError::Config(format!(
                "route_edge_padding must be a non-negative number, got {}",
                self.route_edge_padding
            )));
        }
        Ok(())
    }
}
