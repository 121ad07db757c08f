use error_defer::{DeferExt, Tracker};

#[test]
fn test_defer_returns_success_value() {
    let mut tracker = Tracker::new();
    let value = Ok::<_, &str>(11).defer(&mut tracker);

    assert_eq!(value, Some(11));
    assert!(tracker.is_empty());
}

#[test]
fn test_defer_records_error_and_returns_none() {
    let mut tracker = Tracker::new();
    let value = Err::<i32, _>("boom").defer(&mut tracker);

    assert_eq!(value, None);
    let combined = tracker.into_result().unwrap_err();
    assert_eq!(*combined.primary(), "boom");
}

#[test]
fn test_defer_matches_direct_record() {
    let mut deferred = Tracker::new();
    let _ = Err::<(), _>("a").defer(&mut deferred);
    let _ = Err::<(), _>("b").defer(&mut deferred);

    let mut recorded = Tracker::new();
    recorded.record("a");
    recorded.record("b");

    assert_eq!(deferred, recorded);
}

#[test]
fn test_defer_in_filter_map_pipeline() {
    fn half(n: i32) -> Result<i32, String> {
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(format!("{n} is odd"))
        }
    }

    let mut tracker = Tracker::new();
    let halves: Vec<i32> = (0..5).filter_map(|n| half(n).defer(&mut tracker)).collect();

    assert_eq!(halves, [0, 1, 2]);

    let combined = tracker.into_result().unwrap_err();
    assert_eq!(*combined.primary(), "1 is odd");
    assert_eq!(combined.suppressed(), ["3 is odd"]);
}
