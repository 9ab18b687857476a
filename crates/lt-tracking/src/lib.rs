//! `lt-tracking` — the live-tracking core.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`tracker`]  | `PositionTracker` — last-write-wins holder of the latest fix     |
//! | [`marker`]   | `MobileMarkerState` — marker position, one-slot history, heading |
//! | [`effect`]   | `TripEffect`, `RouteTicket` — what the animator asks for         |
//! | [`animator`] | `TripAnimator` — Idle/Tracking state machine driven by ticks     |
//! | [`geocode`]  | `GeocodeAdapter` — coordinate → optional place name              |
//! | [`address`]  | `AddressPicker` — address label under the map pin                |
//! | [`region`]   | `RegionMonitor` — geofence around the vehicle + notifications    |
//! | [`error`]    | `TrackingError`, `TrackingResult<T>`                             |
//!
//! # Design notes
//!
//! The animator never talks to a collaborator directly.  Each call returns a
//! `Vec<TripEffect>`; the caller (normally `lt-runtime`) applies map effects
//! to a `MapSurface` and dispatches route requests to a `DirectionsService`,
//! then hands completions back through `TripAnimator::on_route_result`.
//! Keeping the state machine synchronous makes every transition testable
//! without a clock.

pub mod address;
pub mod animator;
pub mod effect;
pub mod error;
pub mod geocode;
pub mod marker;
pub mod region;
pub mod tracker;


pub use address::AddressPicker;
pub use animator::{RouteSummary, TripAnimator, TripPhase, TripSnapshot};
pub use effect::{RouteTicket, TripEffect};
pub use error::{TrackingError, TrackingResult};
pub use geocode::GeocodeAdapter;
pub use marker::MobileMarkerState;
pub use region::RegionMonitor;
pub use tracker::PositionTracker;
