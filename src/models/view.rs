// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation records handed to the map and list surfaces.
//!
//! Rounding happens here and only here: stored metrics keep full precision.

use crate::config::PopupOptions;
use crate::models::{Coordinates, Workout, WorkoutDetails, WorkoutKind};
use crate::time_utils::format_rfc3339;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Tile source drawn under the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TileLayer {
    /// URL template with `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    /// Attribution HTML shown in the map corner
    pub attribution: String,
}

/// Initial map viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_layer: TileLayer,
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MarkerPopup {
    /// Correlation key with the list entry
    pub workout_id: String,
    pub content: String,
    /// CSS class, "{kind}-popup"
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout, options: &PopupOptions) -> Self {
        let kind = workout.kind();
        Self {
            workout_id: workout.id().to_string(),
            content: format!("{} {}", kind.icon(), workout.description()),
            class_name: format!("{}-popup", kind.as_str()),
            max_width: options.max_width,
            min_width: options.min_width,
            auto_close: options.auto_close,
            close_on_click: options.close_on_click,
        }
    }
}

/// One entry in the workout list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutView {
    /// Correlation key with the map marker
    pub id: String,
    pub kind: WorkoutKind,
    pub icon: String,
    pub description: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Pace or speed, one decimal place
    pub derived_metric: String,
    /// "min/km" or "km/h"
    pub derived_unit: String,
    /// Cadence or elevation gain as entered
    pub kind_metric: f64,
    /// "spm" or "m"
    pub kind_unit: String,
}

impl From<&Workout> for WorkoutView {
    fn from(workout: &Workout) -> Self {
        let (derived_metric, derived_unit, kind_metric, kind_unit) = match *workout.details() {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => (pace_min_per_km, "min/km", cadence_spm, "spm"),
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => (speed_km_per_h, "km/h", elevation_gain_m, "m"),
        };
        let kind = workout.kind();

        Self {
            id: workout.id().to_string(),
            kind,
            icon: kind.icon().to_string(),
            description: workout.description().to_string(),
            created_at: format_rfc3339(&workout.created_at()),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            derived_metric: format_one_decimal(derived_metric),
            derived_unit: derived_unit.to_string(),
            kind_metric,
            kind_unit: kind_unit.to_string(),
        }
    }
}

/// Render a metric with one decimal place.
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}
