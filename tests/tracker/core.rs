use error_defer::Tracker;

#[test]
fn test_resolve_empty_tracker_is_ok() {
    let tracker: Tracker<&str> = Tracker::new();
    assert!(tracker.resolve_if_necessary().is_ok());
    assert!(tracker.into_result().is_ok());
}

#[test]
fn test_new_tracker_has_no_errors() {
    let tracker: Tracker<String> = Tracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.error_count(), 0);
    assert!(tracker.combined().is_none());
}

#[test]
fn test_first_recorded_becomes_primary_rest_suppressed() {
    let mut tracker = Tracker::new();
    tracker.record("error A");
    tracker.record("error B");
    tracker.record("error C");

    let combined = tracker.into_result().unwrap_err();
    assert_eq!(*combined.primary(), "error A");
    assert_eq!(combined.suppressed(), ["error B", "error C"]);
    assert_eq!(combined.suppressed().len(), 2);
}

#[test]
fn test_primary_is_never_replaced() {
    let mut tracker = Tracker::new();
    tracker.record(0);
    for n in 1..10 {
        tracker.record(n);
        assert_eq!(*tracker.combined().unwrap().primary(), 0);
    }

    let suppressed: Vec<i32> = (1..10).collect();
    let combined = tracker.into_result().unwrap_err();
    assert_eq!(combined.suppressed(), suppressed.as_slice());
}

#[test]
fn test_run_catching_failures_are_all_caught() {
    let mut tracker = Tracker::new();
    tracker.run_catching(|| Err::<(), _>("error A"));
    tracker.run_catching(|| Err::<(), _>("error B"));
    tracker.run_catching(|| Err::<(), _>("error C"));
    tracker.run_catching(|| Ok::<_, &str>(()));

    let combined = tracker.into_result().unwrap_err();
    assert_eq!(*combined.primary(), "error A");
    assert_eq!(combined.suppressed(), ["error B", "error C"]);
    assert_eq!(combined.suppressed().len(), 2);
}

#[test]
fn test_run_catching_matches_direct_record() {
    let mut recorded = Tracker::new();
    recorded.record("boom");

    let mut caught = Tracker::new();
    caught.run_catching(|| Err::<(), _>("boom"));

    assert_eq!(recorded, caught);
}

#[test]
fn test_run_catching_success_leaves_tracker_unchanged() {
    let mut tracker = Tracker::new();
    let value = tracker.run_catching(|| Ok::<_, &str>(17));

    assert_eq!(value, Some(17));
    assert!(tracker.is_empty());
    assert!(tracker.into_result().is_ok());
}

#[test]
fn test_run_catching_failure_returns_none() {
    let mut tracker = Tracker::new();
    let value = tracker.run_catching(|| Err::<i32, _>("boom"));

    assert_eq!(value, None);
    assert_eq!(tracker.error_count(), 1);
}

#[test]
fn test_run_catching_invokes_operation_exactly_once() {
    let mut calls = 0;
    let mut tracker = Tracker::new();
    tracker.run_catching(|| {
        calls += 1;
        Err::<(), _>("boom")
    });

    assert_eq!(calls, 1);
}

#[test]
fn test_resolve_is_idempotent() {
    let mut tracker = Tracker::new();
    tracker.record("error A");
    tracker.record("error B");

    let first = tracker.resolve_if_necessary().unwrap_err();
    let second = tracker.resolve_if_necessary().unwrap_err();

    assert_eq!(first, second);
    assert_eq!(*first.primary(), "error A");
    assert_eq!(first.suppressed(), ["error B"]);
    // Observation leaves state intact.
    assert_eq!(tracker.error_count(), 2);
}

#[test]
fn test_error_count_tracks_every_recording() {
    let mut tracker = Tracker::new();
    assert_eq!(tracker.error_count(), 0);

    tracker.record("a");
    assert_eq!(tracker.error_count(), 1);

    tracker.record("b");
    tracker.record("c");
    assert_eq!(tracker.error_count(), 3);
    assert!(!tracker.is_empty());
}

#[test]
fn test_owned_error_types_are_supported() {
    let mut tracker = Tracker::new();
    tracker.run_catching(|| "not a number".parse::<i32>());
    tracker.run_catching(|| "4".parse::<i32>());
    tracker.run_catching(|| "also bad".parse::<i32>());

    let combined = tracker.into_result().unwrap_err();
    assert_eq!(combined.len(), 2);
}
