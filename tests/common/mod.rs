// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Local, TimeZone};
use workout_mapper::config::{Config, LogFormat};
use workout_mapper::models::Coordinates;
use workout_mapper::services::{ActivityController, SessionState};
use workout_mapper::surfaces::mock::{
    MockLocationSource, MockSurfaces, RecordingForm, RecordingList, RecordingMap,
    RecordingNotifier,
};

/// Controller wired to recording collaborators.
pub type TestController =
    ActivityController<RecordingMap, RecordingForm, RecordingList, RecordingNotifier>;

/// Where the test user is standing.
#[allow(dead_code)]
pub fn home() -> Coordinates {
    Coordinates::new(37.3318, -122.0312)
}

/// Fixed creation time: March 5, noon local time.
#[allow(dead_code)]
pub fn march_fifth() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
        .single()
        .expect("noon is unambiguous")
}

/// Create a controller that has not requested a position yet.
#[allow(dead_code)]
pub fn create_test_controller(config: &Config) -> TestController {
    workout_mapper::logging::init_logging(LogFormat::Compact);
    ActivityController::new(config, MockSurfaces::new_mock()).with_clock(march_fifth)
}

/// Create a controller with the map open at `home()`.
#[allow(dead_code)]
pub async fn create_ready_controller() -> TestController {
    let mut controller = create_test_controller(&Config::default());
    let mut source = MockLocationSource::resolving(home());
    controller
        .start(&mut source)
        .await
        .expect("Location should resolve");
    assert_eq!(controller.state(), SessionState::MapReady);
    controller
}
