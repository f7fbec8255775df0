// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session logic.

pub mod controller;
pub mod validation;

pub use controller::{ActivityController, Outcome, SessionEvent, SessionState};
pub use validation::{parse_metric, validate_submission};
