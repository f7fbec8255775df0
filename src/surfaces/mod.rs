// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborators the controller drives: location source, map, form, list
//! and user notices.
//!
//! The host owns the real widgets and forwards their events to
//! [`ActivityController::handle`](crate::services::ActivityController::handle).
//! Everything here is fire-and-forget from the controller's point of view.

pub mod mock;

use crate::models::{Coordinates, MapView, MarkerPopup, WorkoutKind, WorkoutView};
use std::time::Duration;

/// One-shot position provider (e.g. the browser geolocation API).
#[allow(async_fn_in_trait)]
pub trait LocationSource {
    /// Request the current position. Called at most once per session.
    async fn request_location(&mut self) -> Result<Coordinates, LocationError>;
}

/// Interactive map.
pub trait MapSurface {
    /// Create the map at the given viewport.
    fn create_map(&mut self, view: &MapView);

    /// Start forwarding clicks as `SessionEvent::MapClicked`.
    fn listen_for_clicks(&mut self);

    /// Place a marker with an open popup.
    fn place_marker(&mut self, coordinates: Coordinates, popup: &MarkerPopup);
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// "running" or "cycling"
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Workout entry form.
pub trait FormSurface {
    fn read_fields(&self) -> FormFields;
    fn show(&mut self);
    fn hide(&mut self);
    fn focus_distance_field(&mut self);
    /// Start forwarding type changes as `SessionEvent::KindChanged`.
    fn listen_for_changes(&mut self);
    /// Start forwarding submissions as `SessionEvent::FormSubmitted`.
    fn listen_for_submit(&mut self);
    /// Show the cadence row for running or the elevation row for cycling.
    fn show_fields_for(&mut self, kind: WorkoutKind);
    /// Empty every numeric input.
    fn clear(&mut self);
}

/// Workout list.
pub trait ListSurface {
    fn append_entry(&mut self, entry: &WorkoutView);
}

/// User-visible alerts.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// The synchronous collaborators, owned by the controller for the session.
#[derive(Debug, Default)]
pub struct Surfaces<M, F, R, N> {
    pub map: M,
    pub form: F,
    pub list: R,
    pub notifier: N,
}

impl<M, F, R, N> Surfaces<M, F, R, N>
where
    M: MapSurface,
    F: FormSurface,
    R: ListSurface,
    N: Notifier,
{
    pub fn new(map: M, form: F, list: R, notifier: N) -> Self {
        Self {
            map,
            form,
            list,
            notifier,
        }
    }
}

/// Reasons a position could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("No position after {0:?}")]
    Timeout(Duration),

    #[error("Geolocation is not supported")]
    Unsupported,
}
