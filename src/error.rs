// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session error types and the notices shown to the user.

use crate::models::{Coordinates, InvalidMetric, WorkoutId};
use crate::surfaces::LocationError;

/// Application error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),

    #[error("Invalid metric: {0}")]
    InvalidMetric(#[from] InvalidMetric),

    #[error("Unknown workout type: {0:?}")]
    UnknownWorkoutKind(String),

    #[error("Map click at invalid coordinates: {0}")]
    InvalidClick(Coordinates),

    #[error("Map is not ready for clicks")]
    MapNotReady,

    #[error("Workout form is not open")]
    FormNotOpen,

    #[error("Workout not found: {0}")]
    WorkoutNotFound(WorkoutId),
}

impl AppError {
    /// Notice shown when the position cannot be obtained.
    pub const LOCATION_NOTICE: &'static str = "Could not fetch your current location";

    /// Single message shown for any rejected form submission.
    pub const INVALID_INPUT_NOTICE: &'static str = "Inputs must be positive numbers!!";

    /// The message to show the user, if this error is user-facing.
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            AppError::LocationUnavailable(_) => Some(Self::LOCATION_NOTICE),
            AppError::InvalidMetric(_) | AppError::UnknownWorkoutKind(_) => {
                Some(Self::INVALID_INPUT_NOTICE)
            }
            AppError::InvalidClick(_)
            | AppError::MapNotReady
            | AppError::FormNotOpen
            | AppError::WorkoutNotFound(_) => None,
        }
    }

    /// True if the user can fix this by correcting input and resubmitting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidMetric(_) | AppError::UnknownWorkoutKind(_)
        )
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, AppError>;
