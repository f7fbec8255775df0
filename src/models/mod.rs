// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod coordinates;
pub mod view;
pub mod workout;

pub use coordinates::Coordinates;
pub use view::{MapView, MarkerPopup, TileLayer, WorkoutView};
pub use workout::{
    InvalidMetric, KindInput, MetricField, Workout, WorkoutDetails, WorkoutId, WorkoutInput,
    WorkoutKind,
};
