use std::collections::BTreeSet;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::*;

use super::*;

fn playing_at(progress: f32) -> PlaybackController {
    let mut player = PlaybackController::default();
    player.toggle_play();
    player.state.progress_percent = progress;
    player
}

#[rstest]
fn starts_with_fixed_defaults() {
    let player = PlaybackController::default();

    assert_eq!(
        player.state(),
        &PlayerState {
            current_track_index: 0,
            status: PlaybackStatus::Paused,
            progress_percent: 0.0,
            volume_percent: 75,
            shuffle_enabled: false,
            repeat_mode: RepeatMode::Off,
            liked_tracks: BTreeSet::from([0, 2]),
        }
    );
    assert_eq!(player.tick_interval(), None);
}

#[rstest]
fn next_n_times_is_cyclic(#[values(0, 1, 2, 3, 4, 5)] start: TrackIndex) {
    let mut player = PlaybackController::default();
    player.select_track(start);

    for _ in 0..TRACK_COUNT {
        player.advance_track(Direction::Next);
    }

    assert_eq!(player.state().current_track_index, start);
}

#[rstest]
fn previous_undoes_next(#[values(0, 1, 2, 3, 4, 5)] start: TrackIndex) {
    let mut player = PlaybackController::default();
    player.select_track(start);

    player.advance_track(Direction::Next);
    player.advance_track(Direction::Previous);
    assert_eq!(player.state().current_track_index, start);

    player.advance_track(Direction::Previous);
    player.advance_track(Direction::Next);
    assert_eq!(player.state().current_track_index, start);
}

#[rstest]
#[case(0, Direction::Previous, 5)]
#[case(5, Direction::Next, 0)]
#[case(2, Direction::Next, 3)]
#[case(2, Direction::Previous, 1)]
fn advance_wraps(#[case] start: TrackIndex, #[case] dir: Direction, #[case] expected: TrackIndex) {
    let mut player = PlaybackController::default();
    player.select_track(start);

    assert_eq!(player.advance_track(dir), expected);
    assert_eq!(player.current_track().id as usize, expected + 1);
}

#[rstest]
fn advance_resets_progress(#[values(Direction::Next, Direction::Previous)] dir: Direction) {
    let mut player = playing_at(42.5);

    player.advance_track(dir);

    assert_eq!(player.state().progress_percent, 0.0);
    assert!(player.is_playing());
}

#[rstest]
fn select_track_sets_index_and_resets_progress(
    #[values(0, 1, 2, 3, 4, 5)] k: TrackIndex,
    #[values(0.0, 37.5, 99.5)] progress: f32,
) {
    let mut player = playing_at(progress);
    player.advance_track(Direction::Next);
    player.state.progress_percent = progress;

    player.select_track(k);

    assert_eq!(player.state().current_track_index, k);
    assert_eq!(player.state().progress_percent, 0.0);
}

#[rstest]
fn select_track_out_of_range_is_ignored() {
    let mut player = playing_at(10.0);
    let before = player.state().clone();

    player.select_track(TRACK_COUNT);

    assert_eq!(player.state(), &before);
}

#[rstest]
fn toggle_like_is_an_involution(#[values(0, 1, 2, 3, 4, 5)] index: TrackIndex) {
    let mut player = PlaybackController::default();
    let before = player.state().liked_tracks.clone();

    let first = player.toggle_like(index);
    assert_eq!(first, !before.contains(&index));
    assert_eq!(player.is_liked(index), first);

    player.toggle_like(index);
    assert_eq!(player.state().liked_tracks, before);
}

#[rstest]
fn toggle_like_out_of_range_is_ignored() {
    let mut player = PlaybackController::default();

    assert!(!player.toggle_like(99));
    assert_eq!(player.state().liked_tracks, BTreeSet::from([0, 2]));
}

#[rstest]
fn toggle_play_twice_restores_and_stops_timer() {
    let mut player = PlaybackController::default();

    assert_eq!(player.toggle_play(), PlaybackStatus::Playing);
    assert_eq!(player.tick_interval(), Some(Duration::from_millis(100)));

    assert_eq!(player.toggle_play(), PlaybackStatus::Paused);
    assert_eq!(player.tick_interval(), None);
}

#[rstest]
fn even_toggles_leave_no_timer(#[values(2, 4, 10)] toggles: usize) {
    let mut player = PlaybackController::default();
    for _ in 0..toggles {
        player.toggle_play();
    }

    assert!(!player.is_playing());
    assert!(player.tick_interval().is_none());
}

#[rstest]
fn tick_steps_progress_by_half_percent() {
    let mut player = playing_at(0.0);

    assert_eq!(player.tick(), TickOutcome::Progressed(0.5));
    assert_eq!(player.tick(), TickOutcome::Progressed(1.0));
    assert_eq!(player.state().progress_percent, 1.0);
}

#[rstest]
fn tick_while_paused_is_ignored() {
    let mut player = PlaybackController::default();
    player.state.progress_percent = 30.0;

    assert_eq!(player.tick(), TickOutcome::Idle);
    assert_eq!(player.state().progress_percent, 30.0);
}

#[rstest]
fn tick_reaching_exactly_100_does_not_advance() {
    let mut player = playing_at(99.5);

    assert_eq!(player.tick(), TickOutcome::Progressed(100.0));
    assert_eq!(player.state().current_track_index, 0);
}

#[rstest]
fn tick_past_100_auto_advances() {
    let mut player = playing_at(99.6);

    assert_eq!(player.tick(), TickOutcome::Advanced { to: 1 });
    assert_eq!(player.state().current_track_index, 1);
    assert_eq!(player.state().progress_percent, 0.0);
    assert!(player.is_playing());
}

#[rstest]
fn auto_advance_wraps_from_last_track() {
    let mut player = playing_at(0.0);
    player.select_track(5);
    player.state.progress_percent = 100.0;

    assert_eq!(player.tick(), TickOutcome::Advanced { to: 0 });
}

#[rstest]
fn two_hundred_one_ticks_advance_exactly_once() {
    let mut player = PlaybackController::default();
    player.toggle_play();

    let advances = (0..201)
        .map(|_| player.tick())
        .filter(|o| matches!(o, TickOutcome::Advanced { .. }))
        .count();

    assert_eq!(advances, 1);
    assert_eq!(player.state().current_track_index, 1);
    assert_eq!(player.state().progress_percent, 0.0);
    assert!(player.is_playing());
}

#[tokio::test(start_paused = true)]
async fn interval_driven_ticks_advance_once() {
    let mut player = PlaybackController::default();
    player.toggle_play();

    let period = player.tick_interval().unwrap();
    let mut interval = tokio::time::interval(period);
    // First tick of a tokio interval completes immediately.
    interval.tick().await;
    let start = tokio::time::Instant::now();

    let mut advances = 0;
    for _ in 0..201 {
        interval.tick().await;
        if let TickOutcome::Advanced { .. } = player.tick() {
            advances += 1;
        }
    }

    assert_eq!(advances, 1);
    assert_eq!(start.elapsed(), period * 201);
    assert_eq!(player.state().current_track_index, 1);
}

#[rstest]
fn repeat_mode_has_period_three() {
    let mut player = PlaybackController::default();

    let seen: Vec<RepeatMode> = (0..6).map(|_| player.cycle_repeat_mode()).collect();

    assert_eq!(
        seen,
        vec![
            RepeatMode::All,
            RepeatMode::One,
            RepeatMode::Off,
            RepeatMode::All,
            RepeatMode::One,
            RepeatMode::Off,
        ]
    );
}

#[rstest]
fn shuffle_and_repeat_do_not_change_advance_order() {
    let mut player = playing_at(0.0);
    player.toggle_shuffle();
    player.cycle_repeat_mode();
    player.cycle_repeat_mode();

    assert_eq!(player.advance_track(Direction::Next), 1);
    player.state.progress_percent = 100.0;
    assert_eq!(player.tick(), TickOutcome::Advanced { to: 2 });
}

#[rstest]
fn shuffle_toggles() {
    let mut player = PlaybackController::default();

    assert!(player.toggle_shuffle());
    assert!(!player.toggle_shuffle());
}

#[rstest]
#[case(0, 0)]
#[case(40, 40)]
#[case(100, 100)]
#[case(250, 100)]
fn volume_is_clamped(#[case] requested: u8, #[case] expected: u8) {
    let mut player = PlaybackController::default();
    player.set_volume(requested);
    assert_eq!(player.state().volume_percent, expected);
}

#[rstest]
#[case(0.0, "0:00")]
#[case(50.0, "1:51")]
#[case(100.0, "3:42")]
fn elapsed_uses_reference_duration(#[case] progress: f32, #[case] expected: &str) {
    let mut player = PlaybackController::default();
    player.state.progress_percent = progress;
    assert_eq!(player.displayed_elapsed_time(), expected);

    // Same label regardless of which track is current.
    player.select_track(5);
    player.state.progress_percent = progress;
    assert_eq!(player.displayed_elapsed_time(), expected);
}

#[rstest]
fn custom_settings_drop_out_of_range_likes() {
    let settings = Settings {
        initial_liked: BTreeSet::from([1, 7]),
        initial_volume: 130,
        ..Settings::default()
    };

    let player = PlaybackController::new(settings);

    assert_eq!(player.state().liked_tracks, BTreeSet::from([1]));
    assert_eq!(player.state().volume_percent, 100);
}
