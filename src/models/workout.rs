// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout records and their derived metrics.
//!
//! A [`Workout`] is write-once: the id, creation time, description and the
//! derived pace or speed are computed in the constructor and never change.

use crate::models::Coordinates;
use crate::time_utils::format_month_day;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Unique workout identifier, shared by the map marker and the list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(Uuid);

impl WorkoutId {
    /// Time-ordered id, so ids sort in creation order.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Activity discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Form/CSS identifier ("running", "cycling").
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Glyph shown in popups and list entries.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(other.to_string()),
        }
    }
}

/// Numeric field of a workout, used to label validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Distance,
    Duration,
    Cadence,
    ElevationGain,
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricField::Distance => "distance",
            MetricField::Duration => "duration",
            MetricField::Cadence => "cadence",
            MetricField::ElevationGain => "elevation gain",
        })
    }
}

/// A numeric input that cannot be used to build a workout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidMetric {
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: MetricField, raw: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: MetricField },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: MetricField, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: MetricField, value: f64 },
}

impl InvalidMetric {
    pub fn field(&self) -> MetricField {
        match self {
            InvalidMetric::NotANumber { field, .. }
            | InvalidMetric::NotFinite { field }
            | InvalidMetric::Negative { field, .. }
            | InvalidMetric::NotPositive { field, .. } => *field,
        }
    }
}

/// Kind-specific user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KindInput {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl KindInput {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            KindInput::Running { .. } => WorkoutKind::Running,
            KindInput::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Validated numbers for a new workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub distance_km: f64,
    pub duration_min: f64,
    pub kind: KindInput,
}

/// Kind-specific fields and derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

/// Minutes per kilometer.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Kilometers per hour.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// A logged workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    /// Build a workout created at `created_at`.
    ///
    /// Distance and duration must be finite and strictly positive, and the
    /// kind-specific input must be finite. Callers validate form input
    /// first; this is the last check before the derived metrics are computed.
    pub fn new(
        coordinates: Coordinates,
        input: WorkoutInput,
        created_at: DateTime<Local>,
    ) -> Result<Self, InvalidMetric> {
        let distance_km = require_positive(MetricField::Distance, input.distance_km)?;
        let duration_min = require_positive(MetricField::Duration, input.duration_min)?;

        let details = match input.kind {
            KindInput::Running { cadence_spm } => WorkoutDetails::Running {
                cadence_spm: require_finite(MetricField::Cadence, cadence_spm)?,
                pace_min_per_km: pace_min_per_km(distance_km, duration_min),
            },
            KindInput::Cycling { elevation_gain_m } => WorkoutDetails::Cycling {
                elevation_gain_m: require_finite(MetricField::ElevationGain, elevation_gain_m)?,
                speed_km_per_h: speed_km_per_h(distance_km, duration_min),
            },
        };

        let kind = input.kind.kind();
        let description = format!("{} on {}", kind.label(), format_month_day(&created_at));

        Ok(Self {
            id: WorkoutId::generate(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description,
            details,
        })
    }

    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        created_at: DateTime<Local>,
    ) -> Result<Self, InvalidMetric> {
        let input = WorkoutInput {
            distance_km,
            duration_min,
            kind: KindInput::Running { cadence_spm },
        };
        Self::new(coordinates, input, created_at)
    }

    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Local>,
    ) -> Result<Self, InvalidMetric> {
        let input = WorkoutInput {
            distance_km,
            duration_min,
            kind: KindInput::Cycling { elevation_gain_m },
        };
        Self::new(coordinates, input, created_at)
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// "{Kind} on {Month} {Day}", fixed at construction.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Pace in min/km (running only).
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h (cycling only).
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

fn require_finite(field: MetricField, value: f64) -> Result<f64, InvalidMetric> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidMetric::NotFinite { field })
    }
}

fn require_positive(field: MetricField, value: f64) -> Result<f64, InvalidMetric> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidMetric::NotPositive { field, value })
    }
}
