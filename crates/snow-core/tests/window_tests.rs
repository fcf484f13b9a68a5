use snow_core::{is_active, ChorusWindows, TimeWindow, WindowError};

#[test]
fn single_window_boundaries_are_inclusive() {
    let windows = ChorusWindows::from_starts(&[90.0], 22.0).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows.as_slice()[0].end(), 112.0);

    assert!(windows.is_active(100.0));
    assert!(!windows.is_active(89.9));
    assert!(windows.is_active(90.0));
    assert!(windows.is_active(112.0));
    assert!(!windows.is_active(112.1));
}

#[test]
fn empty_windows_are_never_active() {
    let windows = ChorusWindows::empty();
    assert!(windows.is_empty());
    for t in [0.0, 1.0, 90.0, 100.0, 1e9] {
        assert!(!windows.is_active(t));
        assert!(!is_active(t, &[]));
    }
}

#[test]
fn matches_any_window_over_a_time_grid() {
    let windows = ChorusWindows::from_pairs(&[(10.0, 12.5), (20.0, 20.0), (30.0, 45.0)]).unwrap();
    for i in 0..=600 {
        let t = i as f64 * 0.1;
        let expected = windows
            .iter()
            .any(|w| w.start() <= t && t <= w.end());
        assert_eq!(windows.is_active(t), expected, "mismatch at t={t}");
    }
    // zero-length window is a single instant
    assert!(windows.is_active(20.0));
    assert!(!windows.is_active(20.05));
}

#[test]
fn default_chorus_covers_bundled_track() {
    let windows = ChorusWindows::default_chorus();
    let spans: Vec<(f64, f64)> = windows.iter().map(|w| (w.start(), w.end())).collect();
    assert_eq!(spans, vec![(90.0, 112.0), (136.0, 158.0), (180.0, 202.0)]);
    assert!(windows.is_active(150.0));
    assert!(!windows.is_active(120.0));
    assert!(!windows.is_active(202.5));
}

#[test]
fn non_finite_time_is_never_active() {
    let windows = ChorusWindows::from_starts(&[0.0], 1e6).unwrap();
    assert!(!windows.is_active(f64::NAN));
    assert!(!windows.is_active(f64::INFINITY));
    assert!(!windows.is_active(f64::NEG_INFINITY));
}

#[test]
fn rejects_malformed_windows() {
    assert_eq!(
        TimeWindow::new(5.0, 4.0),
        Err(WindowError::Inverted {
            start: 5.0,
            end: 4.0
        })
    );
    assert!(matches!(
        TimeWindow::new(f64::NAN, 4.0),
        Err(WindowError::NonFinite(_))
    ));
    assert!(matches!(
        ChorusWindows::from_starts(&[1.0], -2.0),
        Err(WindowError::InvalidDuration(_))
    ));
    assert!(matches!(
        ChorusWindows::from_starts(&[f64::INFINITY], 2.0),
        Err(WindowError::NonFinite(_))
    ));
    assert!(ChorusWindows::from_pairs(&[(1.0, 2.0), (4.0, 3.0)]).is_err());
}

#[test]
fn window_accessors() {
    let w = TimeWindow::new(136.0, 158.0).unwrap();
    assert_eq!(w.start(), 136.0);
    assert_eq!(w.end(), 158.0);
    assert_eq!(w.duration(), 22.0);
    assert!(w.contains(136.0) && w.contains(158.0));
}
