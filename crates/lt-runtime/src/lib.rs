//! `lt-runtime` — the tokio session that drives a trip in real time.
//!
//! # Session loop
//!
//! ```text
//! loop select:
//!   command       — Start(dest)  → animator.start, apply effects, arm tick
//!                   Stop         → animator.stop, apply effects, cancel tick
//!                   Snapshot     → reply with TripSnapshot
//!                   Shutdown     → stop, return the map surface
//!   tick          — animator.tick, apply effects
//!   route outcome — animator.on_route_result, apply effects
//!
//! apply:  map effects          → MapSurface
//!         RequestRoute(ticket) → spawn_blocking(DirectionsService)
//!                                → outcome posted back with the same ticket
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lt_runtime::spawn_session;
//! use lt_services::{NoopMap, StraightLineDirections};
//! use lt_tracking::{PositionTracker, TripAnimator};
//!
//! let tracker = PositionTracker::new();
//! let animator = TripAnimator::new(tracker.clone(), TrackingConfig::default());
//! let session = spawn_session(animator, StraightLineDirections::default(), NoopMap);
//! session.start(destination).await?;
//! // ... location feed calls tracker.update(..)
//! session.stop().await?;
//! let _map = session.shutdown().await?;
//! ```

pub mod error;
pub mod observer;
pub mod schedule;
pub mod session;


pub use error::{RuntimeError, RuntimeResult};
pub use observer::{NoopObserver, SessionObserver};
pub use schedule::TickSchedule;
pub use session::{DEFAULT_COMMAND_BUFFER, SessionBuilder, SessionHandle, spawn_session};
