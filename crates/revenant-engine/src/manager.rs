//! The registry that owns all recorders, players, and completed
//! recordings, driven once per simulation tick by the host.

use std::rc::Rc;

use indexmap::IndexMap;

use revenant_core::{ActorControl, ActorId, Host, PlaybackError};

use crate::player::Player;
use crate::recorder::Recorder;
use crate::recording::Recording;

/// Owns the recorder and player registries plus the completed-recordings
/// collection, and multiplexes the host's two inbound notifications
/// ([`on_tick`](RecordingManager::on_tick),
/// [`on_actor_destroyed`](RecordingManager::on_actor_destroyed)) across
/// them.
///
/// One instance per simulation session, constructed at session start and
/// dropped at session end; there is no ambient global state. Registries
/// are keyed by actor identity, so there is at most one recorder per source actor
/// and one player per synthetic actor. `IndexMap` keeps iteration in
/// insertion order, so per-tick fan-out is deterministic.
#[derive(Debug, Default)]
pub struct RecordingManager {
    recorders: IndexMap<ActorId, Recorder>,
    players: IndexMap<ActorId, Player>,
    recordings: Vec<Rc<Recording>>,
}

impl RecordingManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Recorders ───────────────────────────────────────────────

    /// The recorder for a source actor, creating a fresh paused one if
    /// none is registered.
    pub fn get_or_create_recorder(&mut self, source: ActorId) -> &mut Recorder {
        self.recorders
            .entry(source)
            .or_insert_with(|| Recorder::new(source))
    }

    /// The recorder for a source actor, if one is registered.
    pub fn recorder(&self, source: ActorId) -> Option<&Recorder> {
        self.recorders.get(&source)
    }

    /// Mutable access to the recorder for a source actor.
    pub fn recorder_mut(&mut self, source: ActorId) -> Option<&mut Recorder> {
        self.recorders.get_mut(&source)
    }

    /// Unregister the recorder for a source actor, if any.
    ///
    /// Does not stop or save it: a caller that wants the capture kept
    /// must [`stop_recorder`](RecordingManager::stop_recorder) first,
    /// otherwise the in-progress recording is discarded with the entry.
    pub fn remove_recorder(&mut self, source: ActorId) -> Option<Recorder> {
        self.recorders.shift_remove(&source)
    }

    /// Stop the recorder for a source actor and, when `save` is true,
    /// register its frozen recording into the completed collection.
    ///
    /// Registration is idempotent: stopping twice, or saving a
    /// recording that is already in the collection, never
    /// double-registers. A recorder that was never started stops with
    /// nothing to save. No-op when no recorder is registered.
    pub fn stop_recorder(&mut self, source: ActorId, save: bool) {
        let finished = match self.recorders.get_mut(&source) {
            Some(recorder) => {
                recorder.stop();
                recorder.finished_recording().cloned()
            }
            None => None,
        };
        if save {
            if let Some(recording) = finished {
                self.register_recording(recording);
            }
        }
    }

    // ── Completed recordings ────────────────────────────────────

    /// Add a frozen recording to the completed collection unless that
    /// exact recording (by identity, not content) is already present.
    pub fn register_recording(&mut self, recording: Rc<Recording>) {
        if !self.recordings.iter().any(|r| Rc::ptr_eq(r, &recording)) {
            self.recordings.push(recording);
        }
    }

    /// The completed recordings, in registration order (display order
    /// for selection front ends).
    pub fn recordings(&self) -> &[Rc<Recording>] {
        &self.recordings
    }

    /// Remove one recording from the completed collection, by identity.
    /// Returns whether it was present.
    pub fn remove_recording(&mut self, recording: &Rc<Recording>) -> bool {
        let before = self.recordings.len();
        self.recordings.retain(|r| !Rc::ptr_eq(r, recording));
        self.recordings.len() != before
    }

    // ── Players ─────────────────────────────────────────────────

    /// The player driving a given synthetic actor, if any.
    pub fn player(&self, actor: ActorId) -> Option<&Player> {
        self.players.get(&actor)
    }

    /// Mutable access to the player driving a given synthetic actor.
    pub fn player_mut(&mut self, actor: ActorId) -> Option<&mut Player> {
        self.players.get_mut(&actor)
    }

    /// All live players, in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// The synthetic actor of a live player already bound to this exact
    /// recording (by identity, not content equality).
    pub fn get_player_for(&self, recording: &Rc<Recording>) -> Option<ActorId> {
        self.players
            .values()
            .find(|p| Rc::ptr_eq(p.recording(), recording))
            .map(|p| p.actor())
    }

    /// Create a player for a recording: allocate a synthetic actor from
    /// the host (named `name`, or a generated replay-bot name), obtain
    /// its input controller, and register the paused player keyed by
    /// the actor's identity.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::NotPlayable`] for an empty recording (checked
    /// before any host resource is touched);
    /// [`PlaybackError::ActorAllocationFailed`] if the host cannot
    /// allocate an actor; [`PlaybackError::ControllerUnavailable`] if
    /// no controller can be obtained, the freshly created actor is
    /// removed again, so no orphan is ever left registered anywhere.
    pub fn create_player(
        &mut self,
        host: &mut dyn Host,
        recording: &Rc<Recording>,
        name: Option<&str>,
        adjust: bool,
    ) -> Result<ActorId, PlaybackError> {
        if !recording.is_playable() {
            return Err(PlaybackError::NotPlayable);
        }

        let name = match name {
            Some(n) => n.to_string(),
            None => replay_actor_name(recording),
        };
        let actor = host
            .create_synthetic_actor(&name)
            .ok_or(PlaybackError::ActorAllocationFailed { name })?;
        let controller = match host.input_controller(actor) {
            Some(c) => c,
            None => {
                host.remove_actor(actor);
                return Err(PlaybackError::ControllerUnavailable { actor });
            }
        };

        self.players
            .insert(actor, Player::new(Rc::clone(recording), actor, controller, adjust));
        Ok(actor)
    }

    /// Start playback of a recording: reuse the live player already
    /// bound to it, or create one, then start it. Returns the synthetic
    /// actor's identity.
    ///
    /// # Errors
    ///
    /// Propagates [`create_player`](RecordingManager::create_player)
    /// failures when a new player is needed.
    pub fn start_playback(
        &mut self,
        host: &mut dyn Host,
        recording: &Rc<Recording>,
        name: Option<&str>,
        adjust: bool,
    ) -> Result<ActorId, PlaybackError> {
        let actor = match self.get_player_for(recording) {
            Some(actor) => actor,
            None => self.create_player(&mut *host, recording, name, adjust)?,
        };
        if let Some(player) = self.players.get_mut(&actor) {
            player.start(host);
        }
        Ok(actor)
    }

    /// Stop, tear down, and unregister the player for a synthetic
    /// actor, if one is registered.
    pub fn remove_player(&mut self, host: &mut dyn Host, actor: ActorId) {
        if let Some(mut player) = self.players.shift_remove(&actor) {
            player.stop();
            player.teardown(&mut *host);
        }
    }

    /// Pause every live player (global playback pause).
    pub fn pause_all_players(&mut self) {
        for player in self.players.values_mut() {
            player.pause();
        }
    }

    /// Tear down and unregister every live player: the shutdown sweep,
    /// and the "stop and clear" front-end command.
    pub fn clear_players(&mut self, host: &mut dyn Host) {
        for (_, mut player) in self.players.drain(..) {
            player.stop();
            player.teardown(&mut *host);
        }
    }

    // ── Host entry points ───────────────────────────────────────

    /// Per-tick driver: every live recorder captures, then every live
    /// player replays. Recorders run first so a player never observes a
    /// half-written tick, and both groups run in fixed registration
    /// order.
    pub fn on_tick(&mut self, host: &mut dyn Host) {
        for recorder in self.recorders.values_mut() {
            recorder.on_tick(&*host);
        }
        for player in self.players.values_mut() {
            player.on_tick(&mut *host);
        }
    }

    /// Actor-destroyed hook: unconditionally drop whichever registry
    /// entries are keyed by this identity (typically at most one of the
    /// two matches). An unsaved in-progress recording is discarded; a
    /// player is torn down, which the host tolerates even though the
    /// actor is already gone.
    pub fn on_actor_destroyed(&mut self, host: &mut dyn Host, actor: ActorId) {
        self.remove_recorder(actor);
        self.remove_player(host, actor);
    }
}

/// Generated display name for a replay bot.
fn replay_actor_name(recording: &Recording) -> String {
    format!("{} (replay bot)", recording.session().name)
}
