// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Click → form → submit flow against recording collaborators.

use workout_mapper::error::AppError;
use workout_mapper::models::{Coordinates, InvalidMetric, MetricField, WorkoutKind};
use workout_mapper::services::{Outcome, SessionEvent, SessionState};

mod common;

#[tokio::test]
async fn test_running_submission_creates_workout() {
    let mut controller = common::create_ready_controller().await;
    let at = Coordinates::new(37.34, -122.04);

    let outcome = controller.handle(SessionEvent::MapClicked(at)).unwrap();
    assert_eq!(outcome, Outcome::FormOpened { at });
    assert_eq!(controller.state(), SessionState::FormOpen);
    assert!(controller.surfaces().form.visible);
    assert!(controller.surfaces().form.distance_focused);

    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    let outcome = controller.handle(SessionEvent::FormSubmitted).unwrap();

    let Outcome::WorkoutLogged(id) = outcome else {
        panic!("expected a logged workout");
    };
    let workout = controller.workout(id).expect("workout should be stored");
    assert_eq!(workout.kind(), WorkoutKind::Running);
    assert_eq!(workout.coordinates(), at);
    assert_eq!(workout.pace_min_per_km(), Some(6.0));
    assert_eq!(workout.description(), "Running on March 5");

    let entries = &controller.surfaces().list.entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].derived_metric, "6.0");
    assert_eq!(entries[0].id, id.to_string());

    let markers = &controller.surfaces().map.markers;
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].0, at);
    assert_eq!(markers[0].1.workout_id, entries[0].id);
    assert_eq!(markers[0].1.content, "🏃‍♂️ Running on March 5");
    assert_eq!(markers[0].1.class_name, "running-popup");

    let form = &controller.surfaces().form;
    assert!(!form.visible);
    assert_eq!(form.clear_count, 1);
    assert!(form.fields.distance.is_empty());
    assert_eq!(controller.state(), SessionState::MapReady);
    assert_eq!(controller.pending_click(), None);
}

#[tokio::test]
async fn test_cycling_submission_derives_speed() {
    let mut controller = common::create_ready_controller().await;
    controller
        .handle(SessionEvent::MapClicked(common::home()))
        .unwrap();
    controller
        .surfaces_mut()
        .form
        .fill_cycling("20", "60", "400");

    let outcome = controller.handle(SessionEvent::FormSubmitted).unwrap();
    assert!(matches!(outcome, Outcome::WorkoutLogged(_)));

    let workout = &controller.workouts()[0];
    assert_eq!(workout.kind(), WorkoutKind::Cycling);
    assert_eq!(workout.speed_km_per_h(), Some(20.0));
    assert_eq!(workout.description(), "Cycling on March 5");

    let entry = &controller.surfaces().list.entries[0];
    assert_eq!(entry.derived_metric, "20.0");
    assert_eq!(entry.derived_unit, "km/h");
    assert_eq!(entry.kind_metric, 400.0);
    assert_eq!(controller.surfaces().map.markers[0].1.class_name, "cycling-popup");
}

#[tokio::test]
async fn test_negative_distance_is_rejected() {
    let mut controller = common::create_ready_controller().await;
    let at = Coordinates::new(37.35, -122.05);
    controller.handle(SessionEvent::MapClicked(at)).unwrap();
    controller
        .surfaces_mut()
        .form
        .fill_running("-1", "30", "160");

    let err = controller.handle(SessionEvent::FormSubmitted).unwrap_err();

    assert_eq!(
        err,
        AppError::InvalidMetric(InvalidMetric::Negative {
            field: MetricField::Distance,
            value: -1.0
        })
    );
    assert!(controller.workouts().is_empty());
    assert!(controller.surfaces().list.entries.is_empty());
    assert!(controller.surfaces().map.markers.is_empty());
    assert_eq!(
        controller.surfaces().notifier.alerts,
        vec![AppError::INVALID_INPUT_NOTICE.to_string()]
    );

    // Form stays open with its input and the click intact
    assert_eq!(controller.state(), SessionState::FormOpen);
    assert!(controller.surfaces().form.visible);
    assert_eq!(controller.surfaces().form.fields.distance, "-1");
    assert_eq!(controller.pending_click(), Some(at));
}

#[tokio::test]
async fn test_non_numeric_input_is_rejected_for_both_kinds() {
    let mut controller = common::create_ready_controller().await;
    controller
        .handle(SessionEvent::MapClicked(common::home()))
        .unwrap();

    controller
        .surfaces_mut()
        .form
        .fill_running("five", "30", "160");
    assert!(matches!(
        controller.handle(SessionEvent::FormSubmitted),
        Err(AppError::InvalidMetric(InvalidMetric::NotANumber { .. }))
    ));

    controller.surfaces_mut().form.fill_cycling("20", "", "400");
    assert!(matches!(
        controller.handle(SessionEvent::FormSubmitted),
        Err(AppError::InvalidMetric(InvalidMetric::NotANumber {
            field: MetricField::Duration,
            ..
        }))
    ));

    assert!(controller.workouts().is_empty());
    assert_eq!(controller.surfaces().notifier.alerts.len(), 2);
    assert_eq!(controller.state(), SessionState::FormOpen);
}

#[tokio::test]
async fn test_resubmission_after_rejection_uses_same_click() {
    let mut controller = common::create_ready_controller().await;
    let at = Coordinates::new(37.36, -122.06);
    controller.handle(SessionEvent::MapClicked(at)).unwrap();

    controller.surfaces_mut().form.fill_running("5", "0", "160");
    assert!(controller.handle(SessionEvent::FormSubmitted).is_err());

    controller
        .surfaces_mut()
        .form
        .fill_running("5", "25", "160");
    controller.handle(SessionEvent::FormSubmitted).unwrap();

    assert_eq!(controller.workouts().len(), 1);
    assert_eq!(controller.workouts()[0].coordinates(), at);
    assert_eq!(controller.workouts()[0].pace_min_per_km(), Some(5.0));
}

#[tokio::test]
async fn test_last_click_wins() {
    let mut controller = common::create_ready_controller().await;
    let first = Coordinates::new(37.40, -122.10);
    let second = Coordinates::new(37.41, -122.11);

    controller.handle(SessionEvent::MapClicked(first)).unwrap();
    controller.handle(SessionEvent::MapClicked(second)).unwrap();
    assert_eq!(controller.pending_click(), Some(second));
    assert_eq!(controller.state(), SessionState::FormOpen);

    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    controller.handle(SessionEvent::FormSubmitted).unwrap();

    assert_eq!(controller.workouts()[0].coordinates(), second);
    assert_eq!(controller.surfaces().map.markers[0].0, second);
}

#[tokio::test]
async fn test_workouts_are_kept_in_insertion_order() {
    let mut controller = common::create_ready_controller().await;
    let spots = [
        Coordinates::new(37.30, -122.00),
        Coordinates::new(37.31, -122.01),
        Coordinates::new(37.32, -122.02),
    ];

    for (i, at) in spots.iter().enumerate() {
        controller.handle(SessionEvent::MapClicked(*at)).unwrap();
        let distance = (i + 1).to_string();
        if i % 2 == 0 {
            controller
                .surfaces_mut()
                .form
                .fill_running(&distance, "30", "170");
        } else {
            controller
                .surfaces_mut()
                .form
                .fill_cycling(&distance, "30", "50");
        }
        controller.handle(SessionEvent::FormSubmitted).unwrap();
    }

    let logged: Vec<_> = controller
        .workouts()
        .iter()
        .map(|w| (w.coordinates(), w.distance_km()))
        .collect();
    assert_eq!(
        logged,
        vec![(spots[0], 1.0), (spots[1], 2.0), (spots[2], 3.0)]
    );

    let list_ids: Vec<_> = controller
        .surfaces()
        .list
        .entries
        .iter()
        .map(|e| e.id.clone())
        .collect();
    let workout_ids: Vec<_> = controller
        .workouts()
        .iter()
        .map(|w| w.id().to_string())
        .collect();
    assert_eq!(list_ids, workout_ids);
}

#[tokio::test]
async fn test_kind_change_toggles_fields_without_state_change() {
    let mut controller = common::create_ready_controller().await;
    controller
        .handle(SessionEvent::MapClicked(common::home()))
        .unwrap();

    let outcome = controller
        .handle(SessionEvent::KindChanged(WorkoutKind::Cycling))
        .unwrap();
    assert_eq!(outcome, Outcome::FieldsShown(WorkoutKind::Cycling));
    assert_eq!(controller.surfaces().form.shown_kind, WorkoutKind::Cycling);
    assert_eq!(controller.state(), SessionState::FormOpen);

    controller
        .handle(SessionEvent::KindChanged(WorkoutKind::Running))
        .unwrap();
    assert_eq!(controller.surfaces().form.shown_kind, WorkoutKind::Running);
    assert_eq!(controller.state(), SessionState::FormOpen);
}

#[tokio::test]
async fn test_submission_without_open_form() {
    let mut controller = common::create_ready_controller().await;
    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");

    let err = controller.handle(SessionEvent::FormSubmitted).unwrap_err();

    assert_eq!(err, AppError::FormNotOpen);
    assert!(controller.workouts().is_empty());
    assert!(controller.surfaces().notifier.alerts.is_empty());
}

#[tokio::test]
async fn test_rendering_twice_duplicates_entry() {
    let mut controller = common::create_ready_controller().await;
    controller
        .handle(SessionEvent::MapClicked(common::home()))
        .unwrap();
    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    let Ok(Outcome::WorkoutLogged(id)) = controller.handle(SessionEvent::FormSubmitted) else {
        panic!("expected a logged workout");
    };

    controller.render_workout(id).unwrap();

    let entries = &controller.surfaces().list.entries;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, entries[1].id);
    assert_eq!(controller.workouts().len(), 1);
}

#[tokio::test]
async fn test_list_entry_serializes_for_the_host() {
    let mut controller = common::create_ready_controller().await;
    controller
        .handle(SessionEvent::MapClicked(common::home()))
        .unwrap();
    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    controller.handle(SessionEvent::FormSubmitted).unwrap();

    let entry = &controller.surfaces().list.entries[0];
    let json = serde_json::to_value(entry).expect("entry should serialize");

    assert_eq!(json["kind"], "running");
    assert_eq!(json["description"], "Running on March 5");
    assert_eq!(json["derived_metric"], "6.0");
    assert_eq!(json["derived_unit"], "min/km");
}

#[tokio::test]
async fn test_invalid_click_is_rejected() {
    let mut controller = common::create_ready_controller().await;
    let bad = Coordinates::new(f64::NAN, 500.0);

    let err = controller.handle(SessionEvent::MapClicked(bad)).unwrap_err();

    assert!(matches!(err, AppError::InvalidClick(_)));
    assert_eq!(controller.state(), SessionState::MapReady);
    assert_eq!(controller.pending_click(), None);
    assert!(!controller.surfaces().form.visible);
    assert!(controller.surfaces().notifier.alerts.is_empty());

    // Submitting afterwards cannot log a workout at the bad location
    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    assert_eq!(
        controller.handle(SessionEvent::FormSubmitted),
        Err(AppError::FormNotOpen)
    );
    assert!(controller.workouts().is_empty());
    assert!(controller.surfaces().map.markers.is_empty());
}

#[tokio::test]
async fn test_invalid_click_keeps_previous_pending_click() {
    let mut controller = common::create_ready_controller().await;
    let good = Coordinates::new(37.34, -122.04);
    controller.handle(SessionEvent::MapClicked(good)).unwrap();

    let err = controller
        .handle(SessionEvent::MapClicked(Coordinates::new(95.0, 0.0)))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidClick(_)));
    assert_eq!(controller.state(), SessionState::FormOpen);
    assert_eq!(controller.pending_click(), Some(good));

    controller
        .surfaces_mut()
        .form
        .fill_running("5", "30", "160");
    controller.handle(SessionEvent::FormSubmitted).unwrap();
    assert_eq!(controller.workouts()[0].coordinates(), good);
}
