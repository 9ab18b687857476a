//! `lt-core` — foundational types for the `live_track` workspace.
//!
//! This crate is a dependency of every other `lt-*` crate.  It has no `lt-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, forward projection    |
//! | [`heading`]     | `bearing`, `CompassPoint` labels                      |
//! | [`time`]        | `Tick`                                                |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`config`]      | `TrackingConfig`                                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod heading;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackingConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use heading::{CompassPoint, bearing, heading_to_compass_8point};
pub use time::Tick;
pub use transport::TransportMode;
