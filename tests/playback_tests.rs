// Playback behaviour through the public player and session APIs

use proptest::prelude::*;
use sortty::config::Settings;
use sortty::display::{DisplayArray, FixedSource, VisualTag};
use sortty::history::{HistorySink, MemoryHistory};
use sortty::player::{Millis, Player};
use sortty::session::{Phase, Session};
use sortty::trace::Algorithm;
use std::rc::Rc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(10);
const STEP: Millis = 10;

/// Play `values` straight through and return the final display
fn play_through(algorithm: Algorithm, values: &[u32]) -> DisplayArray {
    let mut display = DisplayArray::from_values(values);
    let mut player = Player::new();
    player.start(Rc::new(algorithm.generate(values)), 0, DELAY, 0);
    let completion = player.advance(&mut display, Millis::MAX);
    assert!(completion.is_some());
    display
}

#[test]
fn test_bubble_example_final_display() {
    let display = play_through(Algorithm::Bubble, &[5, 3, 8, 1]);
    assert_eq!(display.values(), vec![1, 3, 5, 8]);
    assert_eq!(display.tags(), vec![VisualTag::Sorted; 4]);
}

#[test]
fn test_sorted_cells_keep_tag_during_playback() {
    // Insertion re-compares its sorted prefix; those cells must stay Sorted
    let values = [3, 2, 1];
    let trace = Rc::new(Algorithm::Insertion.generate(&values));
    let mut display = DisplayArray::from_values(&values);
    let mut player = Player::new();
    player.start(trace, 0, DELAY, 0);

    // MarkSorted([0]) at 0, Compare(0, 1) at 10
    let _ = player.advance(&mut display, STEP);
    assert_eq!(
        display.tags(),
        vec![VisualTag::Sorted, VisualTag::Comparing, VisualTag::Default]
    );
}

#[test]
fn test_restart_does_not_interleave() {
    let values = [9, 7, 5, 3, 1];
    let mut display = DisplayArray::from_values(&values);
    let mut player = Player::new();

    player.start(Rc::new(Algorithm::Bubble.generate(&values)), 0, DELAY, 0);
    let _ = player.advance(&mut display, 3 * STEP);

    // A fresh run over a fresh array supersedes the old one entirely
    let mut fresh = DisplayArray::from_values(&values);
    player.start(Rc::new(Algorithm::Quick.generate(&values)), 0, DELAY, 3 * STEP);
    let _ = player.advance(&mut fresh, Millis::MAX);
    assert_eq!(fresh, play_through(Algorithm::Quick, &values));
}

#[test]
fn test_session_full_cycle() {
    let settings = Settings::new(Algorithm::Merge, 6, 95);
    let mut session = Session::new(
        settings,
        FixedSource::new(vec![40, 10, 30, 20, 60, 50]),
        MemoryHistory::new(),
        Some("grace".to_string()),
    );

    assert!(session.start(0));
    let _ = session.tick(12);
    assert!(session.pause());
    let paused_at = session.cursor();
    assert!(paused_at > 0);

    assert!(session.step(100).is_none());
    assert_eq!(session.cursor(), paused_at + 1);

    assert!(session.resume(200));
    let summary = session.tick(Millis::MAX).unwrap();

    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(summary.algorithm, Algorithm::Merge);
    assert_eq!(session.display().values(), vec![10, 20, 30, 40, 50, 60]);

    let recent = session.history().recent(10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].algorithm, "Merge Sort");
    assert_eq!(recent[0].array_size, 6);

    session.reset();
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.cursor(), 0);
}

proptest! {
    #[test]
    fn pause_and_resume_matches_straight_run(
        values in prop::collection::vec(5u32..=95, 1..25),
        algorithm in prop_oneof![
            Just(Algorithm::Bubble),
            Just(Algorithm::Selection),
            Just(Algorithm::Insertion),
            Just(Algorithm::Merge),
            Just(Algorithm::Quick),
        ],
        split in 0.0f64..=1.0,
    ) {
        let trace = Rc::new(algorithm.generate(&values));
        let k = (trace.len() as f64 * split) as usize;

        let mut display = DisplayArray::from_values(&values);
        let mut player = Player::new();
        player.start(Rc::clone(&trace), 0, DELAY, 0);
        if k > 0 {
            let _ = player.advance(&mut display, (k as Millis - 1) * STEP);
        }
        player.pause();
        prop_assert_eq!(player.cursor(), k);

        prop_assert!(player.resume(DELAY, 1_000_000));
        let completion = player.advance(&mut display, Millis::MAX);
        prop_assert!(completion.is_some());
        prop_assert_eq!(display, play_through(algorithm, &values));
    }

    #[test]
    fn stepping_matches_automatic_playback(
        values in prop::collection::vec(5u32..=95, 0..25),
        algorithm in prop_oneof![
            Just(Algorithm::Bubble),
            Just(Algorithm::Selection),
            Just(Algorithm::Insertion),
            Just(Algorithm::Merge),
            Just(Algorithm::Quick),
        ],
    ) {
        let trace = Rc::new(algorithm.generate(&values));
        let mut display = DisplayArray::from_values(&values);
        let mut player = Player::new();
        player.start(Rc::clone(&trace), 0, DELAY, 0);
        player.pause();

        let mut completions = 0;
        for _ in 0..=trace.len() {
            if player.step(&mut display, 0).is_some() {
                completions += 1;
            }
        }
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(display, play_through(algorithm, &values));
    }
}
