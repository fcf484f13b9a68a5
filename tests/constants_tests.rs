// Host-side checks on the DOM hooks and labels.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_data_attribute_queries() {
    for sel in [
        PLAYER_ROOT,
        AUDIO,
        PLAY_BUTTON,
        PLAY_TEXT,
        SEEK,
        CURRENT_TIME,
        DURATION,
        VOLUME,
        SNOW_CANVAS,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{sel}");
    }
}

#[test]
fn selectors_are_distinct() {
    let all = [
        PLAYER_ROOT,
        AUDIO,
        PLAY_BUTTON,
        PLAY_TEXT,
        SEEK,
        CURRENT_TIME,
        DURATION,
        VOLUME,
        SNOW_CANVAS,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn labels_are_bilingual() {
    assert!(LABEL_PLAY.starts_with("Play"));
    assert!(LABEL_PLAY.contains("再生"));
    assert!(LABEL_PAUSE.starts_with("Pause"));
    assert!(LABEL_PAUSE.contains("一時停止"));
    assert_ne!(STATE_PLAYING, STATE_PAUSED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn seek_range_and_fill_are_sane() {
    assert!(SEEK_MAX > 0.0);
    let parts: Vec<u8> = SNOW_FILL_RGB
        .split(',')
        .map(|s| s.trim().parse().unwrap())
        .collect();
    assert_eq!(parts.len(), 3);
}
