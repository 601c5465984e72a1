// Host-side tests for the music player state machine.

use folio_core::constants::{DEFAULT_VOLUME, VOLUME_STORAGE_KEY};
use folio_core::*;

fn playlist() -> Playlist {
    Playlist::from_files(["one.mp3", "two.mp3", "three (2).mp3"]).unwrap()
}

fn player() -> MusicPlayer {
    MusicPlayer::new(playlist(), 0.5)
}

#[test]
fn empty_playlist_is_rejected() {
    let err = Playlist::from_files(Vec::<String>::new()).unwrap_err();
    assert_eq!(err, FolioError::EmptyPlaylist);
}

#[test]
fn skip_next_wraps_after_len_calls() {
    let mut p = player();
    let start = p.state().current_index;
    for _ in 0..p.playlist().len() {
        p.skip_next();
    }
    assert_eq!(p.state().current_index, start);
}

#[test]
fn skip_next_never_stops_at_end() {
    let mut p = player();
    p.skip_next();
    p.skip_next();
    assert_eq!(p.state().current_index, 2);
    let fx = p.skip_next();
    assert_eq!(p.state().current_index, 0);
    assert_eq!(fx.as_slice(), &[PlayerEffect::LoadSource("/music/one.mp3".into())]);
}

#[test]
fn track_change_while_playing_plays_immediately() {
    let mut p = player();
    p.toggle_play();
    let fx = p.track_ended();
    assert_eq!(
        fx.as_slice(),
        &[
            PlayerEffect::LoadSource("/music/two.mp3".into()),
            PlayerEffect::Play
        ]
    );
}

#[test]
fn natural_end_uses_the_skip_path() {
    let mut a = player();
    let mut b = player();
    a.toggle_play();
    b.toggle_play();
    assert_eq!(a.track_ended(), b.skip_next());
    assert_eq!(a.state(), b.state());
}

#[test]
fn positive_volume_clears_mute() {
    for v in [0.01_f32, 0.3, 0.5, 1.0, 3.0] {
        let mut p = player();
        p.toggle_mute();
        assert!(p.state().is_muted);
        p.set_volume(v);
        assert!(!p.state().is_muted, "volume {v} should unmute");
    }
}

#[test]
fn zero_volume_keeps_mute() {
    let mut p = player();
    p.toggle_mute();
    p.set_volume(0.0);
    assert!(p.state().is_muted);
    assert!(p.shows_muted());
}

#[test]
fn muted_effective_volume_is_zero() {
    let mut p = player();
    p.set_volume(0.8);
    let fx = p.toggle_mute();
    assert_eq!(p.effective_volume(), 0.0);
    assert_eq!(
        fx.as_slice(),
        &[
            PlayerEffect::ApplyVolume(0.0),
            PlayerEffect::PersistVolume(0.8)
        ]
    );
    p.toggle_mute();
    assert_eq!(p.effective_volume(), 0.8);
}

#[test]
fn volume_is_clamped_and_nan_ignored() {
    let mut p = player();
    p.set_volume(1.7);
    assert_eq!(p.state().volume, 1.0);
    assert!(p.set_volume(f32::NAN).is_empty());
    assert_eq!(p.state().volume, 1.0);
}

#[test]
fn persisted_volume_is_restored() {
    let mut store = MemoryVolumeStore::default();
    store.save("0.7");
    let p = MusicPlayer::with_store(playlist(), &store);
    assert!((p.state().volume - 0.7).abs() < 1e-6);
    assert!((p.effective_volume() - 0.7).abs() < 1e-6);
}

#[test]
fn missing_or_garbage_volume_uses_default() {
    let empty = MemoryVolumeStore::default();
    assert_eq!(load_volume(&empty), DEFAULT_VOLUME);
    let garbage = MemoryVolumeStore {
        value: Some("loud".into()),
    };
    assert_eq!(load_volume(&garbage), DEFAULT_VOLUME);
    assert_eq!(
        parse_volume("loud"),
        Err(FolioError::InvalidVolume("loud".into()))
    );
    assert_eq!(parse_volume(" 2.5 "), Ok(1.0));
}

#[test]
fn volume_round_trips_through_store() {
    let mut store = MemoryVolumeStore::default();
    let mut p = player();
    for fx in p.set_volume(0.35) {
        if let PlayerEffect::PersistVolume(v) = fx {
            store.save(&format_volume(v));
        }
    }
    assert_eq!(store.load().as_deref(), Some("0.35"));
    assert!(!VOLUME_STORAGE_KEY.is_empty());
}

#[test]
fn rejected_play_resumes_on_next_gesture() {
    let mut p = player();
    let fx = p.toggle_play();
    assert_eq!(fx.as_slice(), &[PlayerEffect::Play]);
    p.play_rejected();
    assert!(p.state().is_playing);
    assert!(p.state().awaiting_gesture);

    let fx = p.user_gesture(true);
    assert_eq!(fx.as_slice(), &[PlayerEffect::Play]);
    p.play_started();
    assert!(!p.state().awaiting_gesture);

    // Once audio runs, further gestures do nothing.
    assert!(p.user_gesture(false).is_empty());
}

#[test]
fn gesture_while_paused_does_not_start_playback() {
    let mut p = player();
    assert!(p.user_gesture(true).is_empty());
    p.play_rejected();
    assert!(!p.state().awaiting_gesture);
}

#[test]
fn open_close_does_not_touch_playback() {
    let mut p = player();
    p.toggle_play();
    assert!(p.state().is_open);
    assert!(!p.toggle_open());
    assert!(p.state().is_playing);
    p.open();
    assert!(p.state().is_open);
    p.close();
    assert!(!p.state().is_open);
    assert!(p.state().is_playing);
}

#[test]
fn startup_binds_source_and_volume() {
    let p = MusicPlayer::new(playlist(), 0.25);
    assert_eq!(
        p.startup().as_slice(),
        &[
            PlayerEffect::LoadSource("/music/one.mp3".into()),
            PlayerEffect::ApplyVolume(0.25)
        ]
    );
    assert!(!p.state().is_playing);
    assert_eq!(p.state().current_index, 0);
}

#[test]
fn titles_are_cleaned() {
    let mut p = player();
    p.skip_next();
    p.skip_next();
    assert_eq!(p.current_title(), "three");
    let t = Track::new("x.mp3").with_title("Custom");
    assert_eq!(t.display_title(), "Custom");
}
