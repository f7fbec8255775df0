// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form input parsing and validation.
//!
//! Every numeric field must parse to a finite, non-negative number, and
//! distance and duration must additionally be strictly positive. The same
//! rule applies to both workout kinds.

use crate::error::{AppError, Result};
use crate::models::{InvalidMetric, KindInput, MetricField, WorkoutInput, WorkoutKind};
use crate::surfaces::FormFields;

/// Parse one raw form value into a finite number.
///
/// Surrounding whitespace is ignored. Empty input is not a number.
pub fn parse_metric(field: MetricField, raw: &str) -> std::result::Result<f64, InvalidMetric> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InvalidMetric::NotANumber {
        field,
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InvalidMetric::NotFinite { field });
    }
    Ok(value)
}

fn non_negative(field: MetricField, value: f64) -> std::result::Result<f64, InvalidMetric> {
    if value < 0.0 {
        Err(InvalidMetric::Negative { field, value })
    } else {
        Ok(value)
    }
}

fn positive(field: MetricField, value: f64) -> std::result::Result<f64, InvalidMetric> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidMetric::NotPositive { field, value })
    }
}

/// Turn submitted form values into a validated workout input.
pub fn validate_submission(fields: &FormFields) -> Result<WorkoutInput> {
    let kind: WorkoutKind = fields.kind.parse().map_err(AppError::UnknownWorkoutKind)?;

    let distance = parse_metric(MetricField::Distance, &fields.distance)?;
    let duration = parse_metric(MetricField::Duration, &fields.duration)?;
    let (field, raw) = match kind {
        WorkoutKind::Running => (MetricField::Cadence, &fields.cadence),
        WorkoutKind::Cycling => (MetricField::ElevationGain, &fields.elevation),
    };
    let specific = parse_metric(field, raw)?;

    let distance_km = positive(
        MetricField::Distance,
        non_negative(MetricField::Distance, distance)?,
    )?;
    let duration_min = positive(
        MetricField::Duration,
        non_negative(MetricField::Duration, duration)?,
    )?;
    let specific = non_negative(field, specific)?;

    let kind = match kind {
        WorkoutKind::Running => KindInput::Running {
            cadence_spm: specific,
        },
        WorkoutKind::Cycling => KindInput::Cycling {
            elevation_gain_m: specific,
        },
    };

    Ok(WorkoutInput {
        distance_km,
        duration_min,
        kind,
    })
}
