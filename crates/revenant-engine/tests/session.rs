//! End-to-end session scenarios: record a live actor through the
//! manager's tick driver, stop with or without saving, then replay
//! through a synthetic actor and verify the reproduced stream.

use std::rc::Rc;

use revenant_core::{ActorId, FactionId, InputCommand, PlaybackError, Vec3};
use revenant_engine::{PlayState, Recording, RecordingManager};
use revenant_test_utils::MockHost;

// ── Helpers ─────────────────────────────────────────────────────

/// Scripted per-tick input: distinct command number and movement per tick
/// so stream equality checks are meaningful.
fn scripted_command(tick: u32) -> InputCommand {
    InputCommand {
        command_number: 1000 + tick,
        tick_count: tick,
        forward_move: (tick % 3) as f32 * 125.0,
        buttons: 1 << (tick % 8),
        random_seed: tick.wrapping_mul(0x9E37),
        ..Default::default()
    }
}

/// Drive `ticks` recording ticks for `source`, rescripting its state
/// before each one.
fn record_ticks(mgr: &mut RecordingManager, host: &mut MockHost, source: ActorId, ticks: u32) {
    for tick in 0..ticks {
        host.set_actor_position(source, Vec3::new(tick as f32 * 10.0, 0.0, 0.0));
        host.set_last_command(source, scripted_command(tick));
        mgr.on_tick(host);
    }
}

fn recorded_session(host: &mut MockHost, ticks: u32) -> (RecordingManager, Rc<Recording>) {
    let mut mgr = RecordingManager::new();
    let source = host.add_actor("subject", FactionId(2));
    mgr.get_or_create_recorder(source).start(&*host).unwrap();
    record_ticks(&mut mgr, host, source, ticks);
    mgr.stop_recorder(source, true);
    let recording = Rc::clone(&mgr.recordings()[0]);
    (mgr, recording)
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn hundred_tick_session_records_and_replays_exactly() {
    let mut host = MockHost::new(); // 0.015 s per tick
    let (mut mgr, recording) = recorded_session(&mut host, 100);

    assert!(recording.is_playable());
    assert_eq!(recording.len(), 100);
    assert!((recording.duration() - 1.5).abs() < 1e-9);
    assert_eq!(recording.session().name, "subject");
    assert_eq!(recording.environment_id(), "mock-env");
    assert_eq!(recording.map_id(), "test_map");

    let bot = mgr
        .start_playback(&mut host, &recording, None, false)
        .unwrap();
    let mut driven = 0;
    while mgr.player(bot).unwrap().state() == PlayState::Playing {
        mgr.on_tick(&mut host);
        driven += 1;
        assert!(driven <= 100, "player failed to stop");
    }
    assert_eq!(driven, 100);
    assert_eq!(mgr.player(bot).unwrap().tick(), 99);

    // The injected stream is the recorded stream, tick for tick.
    assert_eq!(host.injected.len(), 100);
    for (tick, (_, cmd)) in host.injected.iter().enumerate() {
        assert_eq!(cmd, &scripted_command(tick as u32));
    }

    // With adjust disabled, only the unconditional tick-0 correction ran.
    assert_eq!(host.corrections.len(), 1);
    assert_eq!(host.corrections[0].1, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn drift_correction_recovers_a_lagging_bot() {
    let mut host = MockHost::new();
    let (mut mgr, recording) = recorded_session(&mut host, 20);

    // Mock bots never move on their own, so with correction enabled the
    // bot is teleported whenever the recorded path pulls more than 50
    // units ahead of the last correction point.
    let bot = mgr
        .start_playback(&mut host, &recording, None, true)
        .unwrap();
    for _ in 0..20 {
        mgr.on_tick(&mut host);
    }
    assert_eq!(mgr.player(bot).unwrap().state(), PlayState::Stopped);

    // Recorded x advances 10/tick; corrections land at tick 0 and then
    // every 6th tick (drift 60 > 50), each onto the recorded position.
    let expected: Vec<f32> = vec![0.0, 60.0, 120.0, 180.0];
    let got: Vec<f32> = host.corrections.iter().map(|(_, p)| p.x).collect();
    assert_eq!(got, expected);
}

#[test]
fn unsaved_stop_keeps_the_collection_empty() {
    let mut host = MockHost::new();
    let mut mgr = RecordingManager::new();
    let source = host.add_actor("subject", FactionId(1));
    mgr.get_or_create_recorder(source).start(&host).unwrap();
    record_ticks(&mut mgr, &mut host, source, 10);
    mgr.stop_recorder(source, false);
    assert!(mgr.recordings().is_empty());
}

#[test]
fn source_destroyed_mid_recording_discards_the_capture() {
    let mut host = MockHost::new();
    let mut mgr = RecordingManager::new();
    let source = host.add_actor("subject", FactionId(1));
    mgr.get_or_create_recorder(source).start(&host).unwrap();
    record_ticks(&mut mgr, &mut host, source, 5);

    host.destroy_actor(source);
    mgr.on_actor_destroyed(&mut host, source);

    assert!(mgr.recorder(source).is_none());
    assert!(mgr.recordings().is_empty());

    // The tick driver keeps running without the recorder.
    mgr.on_tick(&mut host);
}

#[test]
fn playback_can_be_paused_and_resumed_mid_run() {
    let mut host = MockHost::new();
    let (mut mgr, recording) = recorded_session(&mut host, 10);
    let bot = mgr
        .start_playback(&mut host, &recording, None, false)
        .unwrap();

    for _ in 0..4 {
        mgr.on_tick(&mut host);
    }
    mgr.pause_all_players();
    for _ in 0..3 {
        mgr.on_tick(&mut host); // no progress while paused
    }
    assert_eq!(mgr.player(bot).unwrap().tick(), 4);
    assert_eq!(host.injected.len(), 4);

    mgr.player_mut(bot).unwrap().resume();
    for _ in 0..6 {
        mgr.on_tick(&mut host);
    }
    assert_eq!(mgr.player(bot).unwrap().state(), PlayState::Stopped);
    assert_eq!(host.injected.len(), 10);
}

#[test]
fn concurrent_recorders_and_player_share_one_tick() {
    let mut host = MockHost::new();
    let (mut mgr, recording) = recorded_session(&mut host, 6);
    let bot = mgr
        .start_playback(&mut host, &recording, None, false)
        .unwrap();

    let a = host.add_actor("alpha", FactionId(1));
    let b = host.add_actor("bravo", FactionId(2));
    mgr.get_or_create_recorder(a).start(&host).unwrap();
    mgr.get_or_create_recorder(b).start(&host).unwrap();

    for _ in 0..6 {
        mgr.on_tick(&mut host);
    }

    assert_eq!(mgr.player(bot).unwrap().state(), PlayState::Stopped);
    mgr.stop_recorder(a, true);
    mgr.stop_recorder(b, true);
    assert_eq!(mgr.recordings().len(), 3);
    assert_eq!(mgr.recordings()[1].len(), 6);
    assert_eq!(mgr.recordings()[2].len(), 6);
    assert_eq!(mgr.recordings()[1].session().name, "alpha");
    assert_eq!(mgr.recordings()[2].session().name, "bravo");
}

#[test]
fn empty_recording_is_saved_but_not_playable() {
    // Stopping immediately after start saves a zero-snapshot recording;
    // the manager refuses to play it before touching the host.
    let mut host = MockHost::new();
    let mut mgr = RecordingManager::new();
    let source = host.add_actor("subject", FactionId(1));
    mgr.get_or_create_recorder(source).start(&host).unwrap();
    mgr.stop_recorder(source, true); // zero ticks captured

    assert!(!mgr.recordings()[0].is_playable());
    let empty = Rc::clone(&mgr.recordings()[0]);
    assert_eq!(
        mgr.create_player(&mut host, &empty, None, true),
        Err(PlaybackError::NotPlayable)
    );
}

#[test]
fn shutdown_sweep_releases_every_bot() {
    let mut host = MockHost::new();
    let (mut mgr, recording) = recorded_session(&mut host, 4);

    let first = mgr
        .start_playback(&mut host, &recording, None, false)
        .unwrap();
    // A second, independently created player for the same recording is
    // impossible through start_playback; create one for a second saved
    // recording instead.
    let source = host.add_actor("other", FactionId(1));
    mgr.get_or_create_recorder(source).start(&host).unwrap();
    record_ticks(&mut mgr, &mut host, source, 4);
    mgr.stop_recorder(source, true);
    let second_rec = Rc::clone(&mgr.recordings()[1]);
    let second = mgr
        .start_playback(&mut host, &second_rec, None, false)
        .unwrap();

    mgr.clear_players(&mut host);
    assert_eq!(mgr.players().count(), 0);
    assert!(host.removed.contains(&first));
    assert!(host.removed.contains(&second));
    assert!(!host.is_live(first));
    assert!(!host.is_live(second));
}
