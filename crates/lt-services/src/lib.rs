//! `lt-services` — contracts for the platform services the tracker talks to.
//!
//! Nothing in here renders a map or reads a GPS chip.  Each module declares
//! the trait an external collaborator implements, the value types that cross
//! the boundary, and (where one is cheap to provide) a default in-process
//! implementation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`location`]   | `LocationService`, `LocationEvents`, `AuthorizationStatus`    |
//! | [`directions`] | `DirectionsService`, `RouteRequest`, `Route`, `StraightLineDirections` |
//! | [`map`]        | `MapSurface`, `MarkerPose`, `MapRegion`, `NoopMap`            |
//! | [`geocode`]    | `Geocoder`, `Placemark`                                       |
//! | [`geofence`]   | `GeofenceService`, `CircularRegion`, `SoftwareGeofence`       |
//! | [`notify`]     | `NotificationService`, `Notification`                         |
//! | [`error`]      | `ServiceError`, `ServiceResult<T>`                            |

pub mod directions;
pub mod error;
pub mod geocode;
pub mod geofence;
pub mod location;
pub mod map;
pub mod notify;

#[cfg(test)]
mod tests;

pub use directions::{DirectionsService, Route, RouteRequest, StraightLineDirections};
pub use error::{ServiceError, ServiceResult};
pub use geocode::{Geocoder, Placemark};
pub use geofence::{CircularRegion, GeofenceService, RegionEvent, SoftwareGeofence};
pub use location::{AuthorizationStatus, LocationEvents, LocationEventsFanout, LocationService};
pub use map::{MapRegion, MapSurface, MarkerPose, NoopMap};
pub use notify::{Notification, NotificationService};
