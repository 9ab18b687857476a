//! The session task: owns the animator and map, paces ticks, dispatches
//! route requests.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use lt_core::GeoPoint;
use lt_services::{DirectionsService, MapSurface, Route, RouteRequest, ServiceResult};
use lt_tracking::{RouteTicket, TrackingResult, TripAnimator, TripEffect, TripSnapshot};

use crate::{NoopObserver, RuntimeError, RuntimeResult, SessionObserver, TickSchedule};

/// Default depth of the command channel.
pub const DEFAULT_COMMAND_BUFFER: usize = 16;

type RouteOutcome = (RouteTicket, ServiceResult<Route>);

enum Command {
    Start {
        destination: GeoPoint,
        reply:       oneshot::Sender<TrackingResult<()>>,
    },
    Stop {
        reply: oneshot::Sender<()>,
    },
    Snapshot {
        reply: oneshot::Sender<TripSnapshot>,
    },
    Shutdown,
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for a tracking session.
///
/// # Required inputs
///
/// - [`TripAnimator`] — carries the tracker and the `TrackingConfig`
/// - `D: DirectionsService` — e.g. [`lt_services::StraightLineDirections`]
/// - `M: MapSurface` — the map the marker and route are drawn on
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                    |
/// |----------------------|----------------------------|
/// | `.observer(o)`       | [`NoopObserver`]           |
/// | `.command_buffer(n)` | [`DEFAULT_COMMAND_BUFFER`] |
///
/// # Example
///
/// ```rust,ignore
/// let animator = TripAnimator::new(tracker.clone(), config);
/// let session = SessionBuilder::new(animator, StraightLineDirections::default(), map)
///     .observer(EtaPrinter)
///     .spawn();
/// session.start(destination).await?;
/// ```
pub struct SessionBuilder<D: DirectionsService, M: MapSurface, O: SessionObserver = NoopObserver> {
    animator:       TripAnimator,
    directions:     D,
    map:            M,
    observer:       O,
    command_buffer: usize,
}

impl<D, M> SessionBuilder<D, M, NoopObserver>
where
    D: DirectionsService + 'static,
    M: MapSurface + 'static,
{
    pub fn new(animator: TripAnimator, directions: D, map: M) -> Self {
        Self {
            animator,
            directions,
            map,
            observer: NoopObserver,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl<D, M, O> SessionBuilder<D, M, O>
where
    D: DirectionsService + 'static,
    M: MapSurface + 'static,
    O: SessionObserver,
{
    /// Receive progress callbacks on the session task.
    pub fn observer<O2: SessionObserver>(self, observer: O2) -> SessionBuilder<D, M, O2> {
        SessionBuilder {
            animator:       self.animator,
            directions:     self.directions,
            map:            self.map,
            observer,
            command_buffer: self.command_buffer,
        }
    }

    /// Depth of the command channel.  Clamped to at least 1.
    pub fn command_buffer(mut self, depth: usize) -> Self {
        self.command_buffer = depth.max(1);
        self
    }

    /// Spawn the session onto the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn(self) -> SessionHandle<M> {
        let (commands_tx, commands_rx) = mpsc::channel(self.command_buffer);
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let schedule = TickSchedule::new(self.animator.config().tick_interval());

        let session = Session {
            animator:   self.animator,
            directions: Arc::new(self.directions),
            map:        self.map,
            observer:   self.observer,
            schedule,
            results_tx,
        };
        let task = tokio::spawn(session.run(commands_rx, results_rx));
        SessionHandle { commands: commands_tx, task }
    }
}

/// Spawn a session with no observer.
pub fn spawn_session<D, M>(animator: TripAnimator, directions: D, map: M) -> SessionHandle<M>
where
    D: DirectionsService + 'static,
    M: MapSurface + 'static,
{
    SessionBuilder::new(animator, directions, map).spawn()
}

// ── SessionHandle ─────────────────────────────────────────────────────────────

/// Sends commands to a running session.
///
/// Dropping the handle without [`shutdown`][Self::shutdown] also ends the
/// session once its command channel drains.
pub struct SessionHandle<M> {
    commands: mpsc::Sender<Command>,
    task:     JoinHandle<M>,
}

impl<M> SessionHandle<M> {
    /// Start a trip toward `destination` and arm the tick.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::Tracking`] if the animator refuses to start
    /// (already tracking, no fix yet); [`RuntimeError::SessionClosed`] if
    /// the session task has ended.
    pub async fn start(&self, destination: GeoPoint) -> RuntimeResult<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Start { destination, reply }).await?;
        rx.await.map_err(|_| RuntimeError::SessionClosed)??;
        Ok(())
    }

    /// Stop the current trip, if any, and cancel the tick.
    pub async fn stop(&self) -> RuntimeResult<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Stop { reply }).await?;
        rx.await.map_err(|_| RuntimeError::SessionClosed)
    }

    pub async fn snapshot(&self) -> RuntimeResult<TripSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        rx.await.map_err(|_| RuntimeError::SessionClosed)
    }

    /// Stop any trip, end the session task, and hand back the map surface.
    pub async fn shutdown(self) -> RuntimeResult<M> {
        // A closed channel means the task already ended; joining reports how.
        let _ = self.commands.send(Command::Shutdown).await;
        Ok(self.task.await?)
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    async fn send(&self, command: Command) -> RuntimeResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| RuntimeError::SessionClosed)
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// State owned by the session task.
///
/// One task handles commands, ticks, and route completions in turn, so two
/// ticks never overlap and the animator needs no lock.
struct Session<D: DirectionsService, M: MapSurface, O: SessionObserver> {
    animator:   TripAnimator,
    directions: Arc<D>,
    map:        M,
    observer:   O,
    schedule:   TickSchedule,
    results_tx: mpsc::UnboundedSender<RouteOutcome>,
}

impl<D, M, O> Session<D, M, O>
where
    D: DirectionsService + 'static,
    M: MapSurface + 'static,
    O: SessionObserver,
{
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut results:  mpsc::UnboundedReceiver<RouteOutcome>,
    ) -> M {
        debug!("session: running (tick every {:?})", self.schedule.period());
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    None | Some(Command::Shutdown) => break,
                    Some(command) => self.handle(command),
                },
                _ = self.schedule.tick() => self.on_tick(),
                Some((ticket, outcome)) = results.recv() => self.on_route(ticket, outcome),
            }
        }
        self.stop_trip();
        debug!("session: shut down");
        self.map
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Start { destination, reply } => {
                let outcome = self.start_trip(destination);
                if let Err(e) = &outcome {
                    warn!("session: cannot start trip: {e}");
                }
                let _ = reply.send(outcome);
            }
            Command::Stop { reply } => {
                self.stop_trip();
                let _ = reply.send(());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.animator.snapshot());
            }
            Command::Shutdown => {}
        }
    }

    fn start_trip(&mut self, destination: GeoPoint) -> TrackingResult<()> {
        let effects = self.animator.start(destination)?;
        self.apply(effects);
        self.schedule.arm();
        self.observer.on_trip_start(destination);
        Ok(())
    }

    fn stop_trip(&mut self) {
        if !self.animator.is_tracking() {
            return;
        }
        let last = self.animator.snapshot();
        self.schedule.cancel();
        let effects = self.animator.stop();
        self.apply(effects);
        self.observer.on_trip_end(&last);
        info!("session: trip ended after {}", last.ticks);
    }

    fn on_tick(&mut self) {
        let effects = self.animator.tick();
        let moved = !effects.is_empty();
        self.apply(effects);
        self.observer.on_tick(self.animator.snapshot().ticks, moved);
    }

    fn on_route(&mut self, ticket: RouteTicket, outcome: ServiceResult<Route>) {
        let effects = self.animator.on_route_result(ticket, outcome);
        if effects.is_empty() {
            return;
        }
        self.apply(effects);
        if let Some(route) = self.animator.snapshot().last_route {
            self.observer.on_route(&route);
        }
    }

    /// Carry out animator effects in order.
    fn apply(&mut self, effects: Vec<TripEffect>) {
        let padding = self.animator.config().route_edge_padding;
        for effect in effects {
            if effect.apply_to_map(&mut self.map, padding) {
                continue;
            }
            if let TripEffect::RequestRoute { ticket, request } = effect {
                self.dispatch(ticket, request);
            }
        }
    }

    /// Run the directions call on the blocking pool and post the outcome
    /// back to the session.
    fn dispatch(&self, ticket: RouteTicket, request: RouteRequest) {
        let directions = Arc::clone(&self.directions);
        let results = self.results_tx.clone();
        debug!("route {ticket}: requested {} → {}", request.origin, request.destination);
        tokio::task::spawn_blocking(move || {
            let outcome = directions.calculate(&request);
            if results.send((ticket, outcome)).is_err() {
                debug!("route {ticket}: session gone, result dropped");
            }
        });
    }
}
