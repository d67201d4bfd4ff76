//! The recording data model: snapshot sequence plus session metadata.

use std::time::SystemTime;

use revenant_core::{ActorState, SessionInfo};

use crate::snapshot::Snapshot;

/// An ordered, eventually-immutable sequence of [`Snapshot`]s plus the
/// metadata captured when recording started.
///
/// Snapshot order is playback order: exactly one snapshot is appended
/// per active recording tick and entries are never removed or
/// reordered. A recording is playable iff it holds at least one
/// snapshot.
#[derive(Clone, Debug)]
pub struct Recording {
    created_at: SystemTime,
    environment_id: String,
    map_id: String,
    tick_interval: f64,
    session: SessionInfo,
    snapshots: Vec<Snapshot>,
}

impl Recording {
    /// Create an empty recording from metadata sampled at start time.
    ///
    /// `tick_interval` is the host's seconds-per-tick cadence at
    /// creation time; the host contract requires it to be strictly
    /// positive.
    pub fn new(
        session: SessionInfo,
        environment_id: String,
        map_id: String,
        tick_interval: f64,
    ) -> Self {
        debug_assert!(tick_interval > 0.0, "host tick_interval must be positive");
        Self {
            created_at: SystemTime::now(),
            environment_id,
            map_id,
            tick_interval,
            session,
            snapshots: Vec::new(),
        }
    }

    /// Whether the recording can be played: true iff it has at least
    /// one snapshot.
    pub fn is_playable(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Duration in seconds: snapshot count times the tick interval.
    pub fn duration(&self) -> f64 {
        self.snapshots.len() as f64 * self.tick_interval
    }

    /// Capture a snapshot from a live actor-state sample and append it.
    ///
    /// Constant-time; never removes or reorders existing entries. Only
    /// reachable while the owning recorder still holds the recording
    /// mutably, i.e. before it is frozen for playback.
    pub fn append_snapshot(&mut self, state: &ActorState) {
        self.snapshots.push(Snapshot::capture(state));
    }

    /// Number of captured snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshots have been captured.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshots in playback order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// When recording started, for listing/selection front ends.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Simulation variant/branch identifier at recording time.
    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Map identifier at recording time.
    pub fn map_id(&self) -> &str {
        &self.map_id
    }

    /// Seconds per tick at recording time.
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    /// Session metadata of the recorded actor.
    pub fn session(&self) -> &SessionInfo {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use revenant_core::{ActorState, FactionId, InputCommand, Vec3};

    fn test_session() -> SessionInfo {
        SessionInfo {
            name: "subject".into(),
            stable_id: "STEAM_0:1:42".into(),
            faction: FactionId(2),
        }
    }

    fn test_recording(tick_interval: f64) -> Recording {
        Recording::new(
            test_session(),
            "mock-env".into(),
            "test_map".into(),
            tick_interval,
        )
    }

    fn sample_at(x: f32) -> ActorState {
        ActorState {
            position: Vec3::new(x, 0.0, 0.0),
            orientation: Default::default(),
            velocity: Vec3::new(1.0, 0.0, 0.0),
            last_command: InputCommand {
                forward_move: 250.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn empty_recording_is_not_playable() {
        let rec = test_recording(0.015);
        assert!(!rec.is_playable());
        assert_eq!(rec.duration(), 0.0);
    }

    #[test]
    fn playable_after_first_snapshot() {
        let mut rec = test_recording(0.015);
        rec.append_snapshot(&sample_at(0.0));
        assert!(rec.is_playable());
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn duration_is_len_times_interval() {
        let mut rec = test_recording(0.015);
        for i in 0..100 {
            rec.append_snapshot(&sample_at(i as f32));
            assert!((rec.duration() - rec.len() as f64 * 0.015).abs() < 1e-12);
        }
        assert!((rec.duration() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn append_preserves_order() {
        let mut rec = test_recording(0.1);
        for i in 0..10 {
            rec.append_snapshot(&sample_at(i as f32));
        }
        for (i, snap) in rec.snapshots().iter().enumerate() {
            assert_eq!(snap.position.x, i as f32);
        }
    }

    proptest! {
        #[test]
        fn duration_law_holds_after_every_append(
            interval in 0.001f64..0.2,
            ticks in 0usize..200,
        ) {
            let mut rec = test_recording(interval);
            let mut prev = 0.0;
            for i in 0..ticks {
                rec.append_snapshot(&sample_at(i as f32));
                let d = rec.duration();
                prop_assert!((d - rec.len() as f64 * interval).abs() < 1e-12);
                prop_assert!(d >= prev);
                prev = d;
            }
        }
    }
}
