// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory collaborators that record every request.
//!
//! Used by tests and benchmarks, and usable as a headless host.

use super::{
    FormFields, FormSurface, ListSurface, LocationError, LocationSource, MapSurface, Notifier,
    Surfaces,
};
use crate::models::{Coordinates, MapView, MarkerPopup, WorkoutKind, WorkoutView};
use std::time::Duration;

/// Location source with a scripted answer.
#[derive(Debug, Clone)]
pub struct MockLocationSource {
    response: Option<Result<Coordinates, LocationError>>,
    delay: Option<Duration>,
    /// Number of times `request_location` was called
    pub requests: usize,
}

impl MockLocationSource {
    /// Resolves immediately with `coordinates`.
    pub fn resolving(coordinates: Coordinates) -> Self {
        Self {
            response: Some(Ok(coordinates)),
            delay: None,
            requests: 0,
        }
    }

    /// Fails immediately with `error`.
    pub fn failing(error: LocationError) -> Self {
        Self {
            response: Some(Err(error)),
            delay: None,
            requests: 0,
        }
    }

    /// Never answers.
    pub fn hanging() -> Self {
        Self {
            response: None,
            delay: None,
            requests: 0,
        }
    }

    /// Answer only after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl LocationSource for MockLocationSource {
    async fn request_location(&mut self) -> Result<Coordinates, LocationError> {
        self.requests += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Some(response) => response.clone(),
            None => std::future::pending().await,
        }
    }
}

/// Map that records the viewport, listener registration and markers.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    pub view: Option<MapView>,
    pub listening: bool,
    pub markers: Vec<(Coordinates, MarkerPopup)>,
}

impl MapSurface for RecordingMap {
    fn create_map(&mut self, view: &MapView) {
        self.view = Some(view.clone());
    }

    fn listen_for_clicks(&mut self) {
        self.listening = true;
    }

    fn place_marker(&mut self, coordinates: Coordinates, popup: &MarkerPopup) {
        self.markers.push((coordinates, popup.clone()));
    }
}

/// Form holding typed values and visibility flags.
#[derive(Debug, Clone)]
pub struct RecordingForm {
    pub fields: FormFields,
    pub visible: bool,
    pub distance_focused: bool,
    pub listening_for_changes: bool,
    pub listening_for_submit: bool,
    /// Kind whose specific row is currently shown
    pub shown_kind: WorkoutKind,
    pub clear_count: usize,
}

impl Default for RecordingForm {
    fn default() -> Self {
        Self {
            fields: FormFields {
                kind: WorkoutKind::Running.as_str().to_string(),
                ..FormFields::default()
            },
            visible: false,
            distance_focused: false,
            listening_for_changes: false,
            listening_for_submit: false,
            shown_kind: WorkoutKind::Running,
            clear_count: 0,
        }
    }
}

impl RecordingForm {
    /// Type a running workout into the form.
    pub fn fill_running(&mut self, distance: &str, duration: &str, cadence: &str) {
        self.fields.kind = WorkoutKind::Running.as_str().to_string();
        self.fields.distance = distance.to_string();
        self.fields.duration = duration.to_string();
        self.fields.cadence = cadence.to_string();
    }

    /// Type a cycling workout into the form.
    pub fn fill_cycling(&mut self, distance: &str, duration: &str, elevation: &str) {
        self.fields.kind = WorkoutKind::Cycling.as_str().to_string();
        self.fields.distance = distance.to_string();
        self.fields.duration = duration.to_string();
        self.fields.elevation = elevation.to_string();
    }
}

impl FormSurface for RecordingForm {
    fn read_fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.distance_focused = false;
    }

    fn focus_distance_field(&mut self) {
        self.distance_focused = true;
    }

    fn listen_for_changes(&mut self) {
        self.listening_for_changes = true;
    }

    fn listen_for_submit(&mut self) {
        self.listening_for_submit = true;
    }

    fn show_fields_for(&mut self, kind: WorkoutKind) {
        self.shown_kind = kind;
    }

    fn clear(&mut self) {
        self.fields.distance.clear();
        self.fields.duration.clear();
        self.fields.cadence.clear();
        self.fields.elevation.clear();
        self.clear_count += 1;
    }
}

/// List that keeps every appended entry.
#[derive(Debug, Clone, Default)]
pub struct RecordingList {
    pub entries: Vec<WorkoutView>,
}

impl ListSurface for RecordingList {
    fn append_entry(&mut self, entry: &WorkoutView) {
        self.entries.push(entry.clone());
    }
}

/// Notifier that keeps every alert.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// All-recording surface bundle.
pub type MockSurfaces = Surfaces<RecordingMap, RecordingForm, RecordingList, RecordingNotifier>;

impl MockSurfaces {
    pub fn new_mock() -> Self {
        Surfaces::default()
    }
}
