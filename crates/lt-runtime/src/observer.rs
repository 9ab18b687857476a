//! Session observer trait for status displays and data collection.

use lt_core::{GeoPoint, Tick};
use lt_tracking::{RouteSummary, TripSnapshot};

/// Callbacks invoked by the session task as the trip progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks run on the session task; keep
/// them short.
///
/// # Example — ETA printer
///
/// ```rust,ignore
/// struct EtaPrinter;
///
/// impl SessionObserver for EtaPrinter {
///     fn on_route(&mut self, route: &RouteSummary) {
///         println!("{:.0} m to go, about {:.0} s", route.distance_m, route.expected_travel_secs);
///     }
/// }
/// ```
pub trait SessionObserver: Send + 'static {
    /// A trip started toward `destination`.
    fn on_trip_start(&mut self, _destination: GeoPoint) {}

    /// A tick ran.  `moved` is `false` when the position was unchanged.
    fn on_tick(&mut self, _tick: Tick, _moved: bool) {}

    /// A new route was drawn.
    fn on_route(&mut self, _route: &RouteSummary) {}

    /// The trip ended.  `last` is the state just before stopping.
    fn on_trip_end(&mut self, _last: &TripSnapshot) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
