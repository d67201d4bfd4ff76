//! The player state machine: replays a frozen recording onto a
//! synthetic actor.

use std::rc::Rc;

use revenant_core::{ActorControl, ActorId, ActorQuery, ControllerId, Host};

use crate::recording::Recording;

/// Squared drift threshold above which playback forcibly corrects the
/// synthetic actor's kinematics: 50 units of separation.
pub const DRIFT_THRESHOLD_SQR: f32 = 2500.0;

/// Player lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Not advancing. Initial state.
    Paused,
    /// Replaying one snapshot per tick.
    Playing,
    /// Terminal. The cursor rests on the final snapshot.
    Stopped,
}

/// Replays one [`Recording`] through one synthetic actor, tick by tick.
///
/// Input injection drives the actor's motion; a hybrid correction
/// policy keeps it on the recorded trajectory. Tick 0 always corrects
/// (to place the actor at the recorded start), and later ticks correct
/// only when correction is enabled and the actor has drifted more than
/// 50 units from the recorded position. Hard-teleporting every tick
/// would look robotic; never correcting would drift unboundedly.
#[derive(Debug)]
pub struct Player {
    tick: usize,
    recording: Rc<Recording>,
    state: PlayState,
    actor: ActorId,
    controller: ControllerId,
    adjust: bool,
    torn_down: bool,
}

impl Player {
    /// Create a paused player bound to a synthetic actor and its input
    /// controller.
    ///
    /// The recording must be playable; the manager checks this before
    /// allocating any host resources.
    pub fn new(
        recording: Rc<Recording>,
        actor: ActorId,
        controller: ControllerId,
        adjust: bool,
    ) -> Self {
        debug_assert!(recording.is_playable(), "player needs a playable recording");
        Self {
            tick: 0,
            recording,
            state: PlayState::Paused,
            actor,
            controller,
            adjust,
            torn_down: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Cursor into the recording's snapshot sequence.
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// The synthetic actor this player drives.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// The recording being replayed.
    pub fn recording(&self) -> &Rc<Recording> {
        &self.recording
    }

    /// Whether drift correction is enabled.
    pub fn adjusts(&self) -> bool {
        self.adjust
    }

    /// Start (or restart) playback from the first snapshot: move the
    /// synthetic actor to the recorded session's faction, force a
    /// respawn, and begin playing.
    pub fn start(&mut self, host: &mut dyn Host) {
        self.tick = 0;
        host.set_faction(self.actor, self.recording.session().faction);
        host.force_respawn(self.actor);
        self.resume();
    }

    /// `Paused -> Playing`. Idempotent while playing.
    pub fn resume(&mut self) {
        self.state = PlayState::Playing;
    }

    /// `Playing -> Paused`. Idempotent while paused.
    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Stop playback, jumping the cursor to the final snapshot without
    /// replaying the ticks in between.
    pub fn stop(&mut self) {
        self.tick = self.recording.len() - 1;
        self.state = PlayState::Stopped;
    }

    /// Seconds of recording not yet played.
    pub fn remaining_time(&self) -> f64 {
        self.recording.duration() - self.played_time()
    }

    /// Seconds of recording already played.
    pub fn played_time(&self) -> f64 {
        self.tick as f64 * self.recording.tick_interval()
    }

    /// Per-tick replay hook. No-op unless in the `Playing` state.
    ///
    /// Injects the current snapshot's command, applies the hybrid
    /// correction policy, then advances the cursor; reaching the final
    /// snapshot transitions to `Stopped` with the cursor frozen there.
    pub fn on_tick(&mut self, host: &mut dyn Host) {
        if self.state != PlayState::Playing {
            return;
        }

        let recording = Rc::clone(&self.recording);
        let snapshot = &recording.snapshots()[self.tick];
        snapshot.apply_command(&mut *host, self.controller);

        let drifted = self.adjust
            && host
                .actor_position(self.actor)
                .is_some_and(|p| p.distance_sqr(snapshot.position) > DRIFT_THRESHOLD_SQR);
        if self.tick == 0 || drifted {
            snapshot.apply_kinematics(&mut *host, self.actor);
        }

        if self.tick + 1 < recording.len() {
            self.tick += 1;
        } else {
            self.state = PlayState::Stopped;
        }
    }

    /// Release the synthetic actor back to the host: strip all
    /// capabilities, then remove it from the simulation.
    ///
    /// Idempotent; runs the host calls exactly once per player, on
    /// whichever teardown path reaches it first (explicit removal,
    /// actor-destroyed notification, or shutdown sweep).
    pub fn teardown(&mut self, host: &mut dyn ActorControl) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        host.strip_capabilities(self.actor);
        host.remove_actor(self.actor);
    }
}
