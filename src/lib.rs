// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Mapper: log runs and rides by clicking where they happened.
//!
//! This crate provides the workout model and the session controller behind
//! an interactive workout map. The host supplies the map, form, list and
//! geolocation through the traits in [`surfaces`] and forwards user events
//! to [`services::ActivityController`].

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod surfaces;
pub mod time_utils;

pub use config::Config;
pub use error::AppError;
pub use services::ActivityController;
