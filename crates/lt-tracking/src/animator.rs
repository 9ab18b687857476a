//! The trip animator: moves one marker toward a destination, tick by tick.

use log::{debug, info, warn};

use lt_core::{GeoPoint, Tick, TrackingConfig, heading_to_compass_8point};
use lt_services::{Route, RouteRequest, ServiceResult};

use crate::{MobileMarkerState, PositionTracker, RouteTicket, TrackingError, TrackingResult, TripEffect};

/// Whether a trip is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TripPhase {
    Idle,
    Tracking,
}

/// Summary of the route currently drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub ticket:               RouteTicket,
    pub distance_m:           f64,
    pub expected_travel_secs: f64,
}

/// Read-only view of the animator for status displays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct TripSnapshot {
    pub phase:       TripPhase,
    pub destination: Option<GeoPoint>,
    pub marker:      Option<MobileMarkerState>,
    pub ticks:       Tick,
    pub last_route:  Option<RouteSummary>,
}

/// Everything that exists only while tracking.
struct Trip {
    id:            u32,
    destination:   GeoPoint,
    marker:        MobileMarkerState,
    ticks:         Tick,
    /// Next `RouteTicket::seq` to hand out.
    next_seq:      u64,
    /// Highest seq whose outcome came back, success or failure.
    completed_seq: Option<u64>,
    /// Requests issued this trip whose outcome has not come back.
    outstanding:   usize,
    /// Frame the camera on the next route drawn.
    fit_pending:   bool,
    last_route:    Option<RouteSummary>,
}

/// Idle/Tracking state machine for the mobile marker.
///
/// # Lifecycle
///
/// ```text
/// Idle ──start(dest)──► Tracking ──stop()──► Idle
///                         │  ▲
///                   tick()│  │on_route_result(ticket, result)
///                         ▼  │
///                       effects
/// ```
///
/// Every method returns the [`TripEffect`]s the caller must carry out.  The
/// caller owns pacing: it calls [`tick`][Self::tick] once per
/// `config.tick_interval()` while [`phase`][Self::phase] is `Tracking`, and
/// never runs two calls concurrently.
pub struct TripAnimator {
    tracker:       PositionTracker,
    config:        TrackingConfig,
    trip:          Option<Trip>,
    trips_started: u32,
}

impl TripAnimator {
    pub fn new(tracker: PositionTracker, config: TrackingConfig) -> Self {
        Self {
            tracker,
            config,
            trip: None,
            trips_started: 0,
        }
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    pub fn phase(&self) -> TripPhase {
        if self.trip.is_some() { TripPhase::Tracking } else { TripPhase::Idle }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.trip.is_some()
    }

    pub fn snapshot(&self) -> TripSnapshot {
        match &self.trip {
            None => TripSnapshot {
                phase:       TripPhase::Idle,
                destination: None,
                marker:      None,
                ticks:       Tick::ZERO,
                last_route:  None,
            },
            Some(trip) => TripSnapshot {
                phase:       TripPhase::Tracking,
                destination: Some(trip.destination),
                marker:      Some(trip.marker),
                ticks:       trip.ticks,
                last_route:  trip.last_route,
            },
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Begin tracking toward `destination` from the tracker's latest fix.
    ///
    /// The marker starts facing north.  Returns the marker placement and the
    /// first route request.
    ///
    /// # Errors
    ///
    /// [`TrackingError::AlreadyTracking`] if a trip is in progress,
    /// [`TrackingError::NoFix`] if the tracker has never received a fix.
    pub fn start(&mut self, destination: GeoPoint) -> TrackingResult<Vec<TripEffect>> {
        if self.trip.is_some() {
            return Err(TrackingError::AlreadyTracking);
        }
        let origin = self.tracker.last_fix().ok_or(TrackingError::NoFix)?;

        self.trips_started = self.trips_started.wrapping_add(1);
        let mut trip = Trip {
            id:            self.trips_started,
            destination,
            marker:        MobileMarkerState::at(origin),
            ticks:         Tick::ZERO,
            next_seq:      0,
            completed_seq: None,
            outstanding:   0,
            fit_pending:   true,
            last_route:    None,
        };
        info!(
            "trip {}: tracking from {origin} to {destination} ({:.0} m)",
            trip.id,
            origin.distance_m(destination)
        );

        let effects = vec![
            TripEffect::PlaceMarker(trip.marker.pose()),
            self.issue_route(&mut trip),
        ];
        self.trip = Some(trip);
        Ok(effects)
    }

    /// One position-update cycle.
    ///
    /// No effects when idle or when the tracker still reports the marker's
    /// position.  Otherwise the marker advances, its heading is recomputed
    /// from the previous position, a route request is issued (unless
    /// `skip_route_while_in_flight` holds one back), and the marker is
    /// animated over one tick interval.
    pub fn tick(&mut self) -> Vec<TripEffect> {
        let now = self.tracker.current_position();
        let Some(mut trip) = self.trip.take() else {
            return vec![];
        };
        trip.ticks = trip.ticks.next();

        let effects = if trip.marker.advance(now) {
            let (compass, heading) = heading_to_compass_8point(trip.marker.heading_degrees);
            debug!(
                "trip {} {}: marker {} → {} heading {heading:.1}° ({compass})",
                trip.id, trip.ticks, trip.marker.previous_position, trip.marker.position
            );

            let mut effects = Vec::with_capacity(2);
            if self.config.skip_route_while_in_flight && trip.outstanding > 0 {
                debug!(
                    "trip {} {}: {} route request(s) outstanding, not requesting another",
                    trip.id, trip.ticks, trip.outstanding
                );
            } else {
                effects.push(self.issue_route(&mut trip));
            }
            effects.push(TripEffect::MoveMarker {
                pose:            trip.marker.pose(),
                move_duration:   self.config.tick_interval(),
                rotate_duration: self.config.rotate_animation(),
            });
            effects
        } else {
            debug!("trip {} {}: position unchanged", trip.id, trip.ticks);
            vec![]
        };

        self.trip = Some(trip);
        effects
    }

    /// Stop tracking.  The destination and marker state are discarded;
    /// outstanding route requests are left to finish and their results
    /// ignored.  Stopping while idle does nothing.
    pub fn stop(&mut self) -> Vec<TripEffect> {
        match self.trip.take() {
            None => vec![],
            Some(trip) => {
                info!(
                    "trip {}: stopped after {} ({} route request(s) still outstanding)",
                    trip.id, trip.ticks, trip.outstanding
                );
                vec![TripEffect::RemoveMarker, TripEffect::ClearRoute]
            }
        }
    }

    /// Deliver the outcome of the request tagged `ticket`.
    ///
    /// Draws the route if the ticket belongs to the current trip and is newer
    /// than every outcome already delivered.  Results after `stop`, from an
    /// earlier trip, or older than a completed request are dropped.  Failures
    /// are logged and leave the current overlay in place, but still count as
    /// completed: an older request that succeeds after a newer one failed
    /// would draw a route from a position the marker has left.
    pub fn on_route_result(&mut self, ticket: RouteTicket, result: ServiceResult<Route>) -> Vec<TripEffect> {
        let Some(trip) = self.trip.as_mut() else {
            debug!("route {ticket}: arrived after stop, ignored");
            return vec![];
        };
        if ticket.trip != trip.id {
            debug!("route {ticket}: belongs to an earlier trip, ignored");
            return vec![];
        }
        trip.outstanding = trip.outstanding.saturating_sub(1);

        if trip.completed_seq.is_some_and(|done| ticket.seq <= done) {
            debug!("route {ticket}: stale, a newer request already completed");
            return vec![];
        }
        trip.completed_seq = Some(ticket.seq);

        let route = match result {
            Ok(route) => route,
            Err(e) => {
                warn!("route {ticket}: {e}; keeping previous overlay");
                return vec![];
            }
        };

        trip.last_route = Some(RouteSummary {
            ticket,
            distance_m:           route.distance_m(),
            expected_travel_secs: route.expected_travel_secs,
        });
        let fit = if trip.fit_pending {
            trip.fit_pending = false;
            route.bounds()
        } else {
            None
        };
        debug!(
            "route {ticket}: {} vertices, eta {:.0} s",
            route.polyline.len(),
            route.expected_travel_secs
        );
        vec![TripEffect::ShowRoute { polyline: route.polyline, fit }]
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn issue_route(&self, trip: &mut Trip) -> TripEffect {
        let ticket = RouteTicket { trip: trip.id, seq: trip.next_seq };
        trip.next_seq += 1;
        trip.outstanding += 1;
        TripEffect::RequestRoute {
            ticket,
            request: RouteRequest {
                origin:      trip.marker.position,
                destination: trip.destination,
                mode:        self.config.transport_mode,
            },
        }
    }
}
