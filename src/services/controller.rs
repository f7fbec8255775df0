// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Sequences the session:
//! 1. Request the position once (`start`)
//! 2. Open the map centered on it and listen for clicks
//! 3. Open the form at each clicked location
//! 4. Validate a submission, log the workout, place its marker and list entry
//!
//! Host events go through [`ActivityController::handle`], which runs to
//! completion before the next event is processed.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    Coordinates, MapView, MarkerPopup, TileLayer, Workout, WorkoutId, WorkoutKind, WorkoutView,
};
use crate::services::validation::validate_submission;
use crate::surfaces::{
    FormSurface, ListSurface, LocationError, LocationSource, MapSurface, Notifier, Surfaces,
};
use chrono::{DateTime, Local};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    AwaitingLocation,
    MapReady,
    FormOpen,
    /// No position; the map never opens. Terminal.
    Degraded,
}

/// Input events forwarded by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LocationResolved(Coordinates),
    LocationFailed(LocationError),
    MapClicked(Coordinates),
    KindChanged(WorkoutKind),
    FormSubmitted,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    MapLoaded { center: Coordinates },
    FormOpened { at: Coordinates },
    FieldsShown(WorkoutKind),
    WorkoutLogged(WorkoutId),
    Ignored,
}

/// Owns the session's workouts and pending click.
pub struct ActivityController<M, F, R, N> {
    config: Config,
    state: SessionState,
    workouts: Vec<Workout>,
    pending_click: Option<Coordinates>,
    surfaces: Surfaces<M, F, R, N>,
    clock: fn() -> DateTime<Local>,
}

impl<M, F, R, N> ActivityController<M, F, R, N>
where
    M: MapSurface,
    F: FormSurface,
    R: ListSurface,
    N: Notifier,
{
    pub fn new(config: &Config, surfaces: Surfaces<M, F, R, N>) -> Self {
        Self {
            config: config.clone(),
            state: SessionState::Uninitialized,
            workouts: Vec::new(),
            pending_click: None,
            surfaces,
            clock: Local::now,
        }
    }

    /// Replace the source of workout creation times.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Workouts in creation order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Location of the last map click not yet used by a workout.
    pub fn pending_click(&self) -> Option<Coordinates> {
        self.pending_click
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surfaces(&self) -> &Surfaces<M, F, R, N> {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut Surfaces<M, F, R, N> {
        &mut self.surfaces
    }

    /// Request the position and open the map, or degrade the session.
    ///
    /// Only the first call does anything; there is no retry.
    ///
    /// With a geolocation timeout configured (the default), this must run
    /// inside a tokio runtime with the time driver enabled.
    pub async fn start<L: LocationSource>(&mut self, source: &mut L) -> Result<Outcome> {
        if self.state != SessionState::Uninitialized {
            tracing::warn!(state = ?self.state, "Session already started, ignoring");
            return Ok(Outcome::Ignored);
        }

        self.state = SessionState::AwaitingLocation;
        tracing::info!(timeout = ?self.config.geolocation_timeout, "Requesting location");

        let result = match self.config.geolocation_timeout {
            Some(limit) => tokio::time::timeout(limit, source.request_location())
                .await
                .unwrap_or(Err(LocationError::Timeout(limit))),
            None => source.request_location().await,
        };

        let event = match result {
            Ok(coordinates) => SessionEvent::LocationResolved(coordinates),
            Err(e) => SessionEvent::LocationFailed(e),
        };
        self.handle(event)
    }

    /// Apply one host event.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Outcome> {
        match (self.state, event) {
            (SessionState::AwaitingLocation, SessionEvent::LocationResolved(center)) => {
                if center.is_valid() {
                    Ok(self.load_map(center))
                } else {
                    self.degrade(LocationError::PositionUnavailable(format!(
                        "out of range: {center}"
                    )))
                }
            }
            (SessionState::AwaitingLocation, SessionEvent::LocationFailed(e)) => self.degrade(e),
            (state, SessionEvent::LocationResolved(_) | SessionEvent::LocationFailed(_)) => {
                tracing::warn!(?state, "Late location result ignored");
                Ok(Outcome::Ignored)
            }

            (SessionState::MapReady | SessionState::FormOpen, SessionEvent::MapClicked(at)) => {
                if !at.is_valid() {
                    tracing::warn!(%at, "Map click at invalid coordinates ignored");
                    return Err(AppError::InvalidClick(at));
                }
                Ok(self.show_form(at))
            }
            (state, SessionEvent::MapClicked(_)) => {
                tracing::warn!(?state, "Map click without a ready map");
                Err(AppError::MapNotReady)
            }

            (_, SessionEvent::KindChanged(kind)) => {
                self.surfaces.form.show_fields_for(kind);
                tracing::debug!(kind = kind.as_str(), "Form fields toggled");
                Ok(Outcome::FieldsShown(kind))
            }

            (SessionState::FormOpen, SessionEvent::FormSubmitted) => self.submit(),
            (state, SessionEvent::FormSubmitted) => {
                tracing::warn!(?state, "Submission without an open form");
                Err(AppError::FormNotOpen)
            }
        }
    }

    /// Append a list entry for an existing workout.
    ///
    /// Entries are not deduplicated: rendering twice gives two entries.
    pub fn render_workout(&mut self, id: WorkoutId) -> Result<()> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id() == id)
            .ok_or(AppError::WorkoutNotFound(id))?;
        let view = WorkoutView::from(&self.workouts[index]);
        self.surfaces.list.append_entry(&view);
        Ok(())
    }

    fn load_map(&mut self, center: Coordinates) -> Outcome {
        let view = MapView {
            center,
            zoom: self.config.map_zoom,
            tile_layer: TileLayer {
                url_template: self.config.tile_url.clone(),
                attribution: self.config.tile_attribution.clone(),
            },
        };
        self.surfaces.map.create_map(&view);
        self.surfaces.map.listen_for_clicks();
        self.surfaces.form.listen_for_changes();
        self.surfaces.form.listen_for_submit();
        self.state = SessionState::MapReady;

        tracing::info!(%center, zoom = view.zoom, "Map loaded");
        Outcome::MapLoaded { center }
    }

    fn degrade(&mut self, cause: LocationError) -> Result<Outcome> {
        self.state = SessionState::Degraded;
        tracing::info!(error = %cause, "Location unavailable, session degraded");
        Err(self.raise(AppError::LocationUnavailable(cause)))
    }

    fn show_form(&mut self, at: Coordinates) -> Outcome {
        // Last click wins
        if let Some(previous) = self.pending_click.replace(at) {
            tracing::debug!(%previous, %at, "Pending click replaced");
        } else {
            tracing::debug!(%at, "Map clicked");
        }
        self.surfaces.form.show();
        self.surfaces.form.focus_distance_field();
        self.state = SessionState::FormOpen;
        Outcome::FormOpened { at }
    }

    fn submit(&mut self) -> Result<Outcome> {
        let Some(at) = self.pending_click else {
            return Err(AppError::FormNotOpen);
        };

        let fields = self.surfaces.form.read_fields();
        let input = validate_submission(&fields).map_err(|e| self.raise(e))?;
        let workout = Workout::new(at, input, (self.clock)())
            .map_err(|e| self.raise(AppError::InvalidMetric(e)))?;
        let id = workout.id();

        let popup = MarkerPopup::for_workout(&workout, &self.config.popup);
        self.surfaces.map.place_marker(workout.coordinates(), &popup);
        self.surfaces.list.append_entry(&WorkoutView::from(&workout));

        tracing::info!(
            workout_id = %id,
            kind = workout.kind().as_str(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout logged"
        );
        self.workouts.push(workout);
        tracing::debug!(workouts = ?self.workouts, "Workout list");

        self.surfaces.form.clear();
        self.surfaces.form.hide();
        self.pending_click = None;
        self.state = SessionState::MapReady;

        Ok(Outcome::WorkoutLogged(id))
    }

    /// Log an error and alert the user if it is user-facing.
    fn raise(&mut self, err: AppError) -> AppError {
        match err.user_notice() {
            Some(notice) => {
                tracing::warn!(error = %err, "Rejected");
                self.surfaces.notifier.alert(notice);
            }
            None => tracing::error!(error = %err, "Unexpected controller error"),
        }
        err
    }
}
