//! The recorder state machine: captures one snapshot per tick from a
//! live actor.

use std::rc::Rc;

use revenant_core::{ActorId, ActorQuery, Host, RecorderError, SessionContext};

use crate::recording::Recording;

/// Recorder lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    /// Not capturing. Initial state.
    Paused,
    /// Capturing one snapshot per tick.
    Recording,
    /// Terminal. Recording the same source again requires a new
    /// recorder instance.
    Stopped,
}

/// Captures a live actor's state into a [`Recording`], one snapshot per
/// simulation tick while in the `Recording` state.
///
/// While capture is live the recording is exclusively owned here and
/// mutable; [`stop()`](Recorder::stop) freezes it into an
/// `Rc<Recording>`, after which no `&mut` path to it exists.
#[derive(Debug)]
pub struct Recorder {
    source: ActorId,
    state: RecorderState,
    active: Option<Recording>,
    finished: Option<Rc<Recording>>,
}

impl Recorder {
    /// Create a paused recorder for the given source actor.
    pub fn new(source: ActorId) -> Self {
        Self {
            source,
            state: RecorderState::Paused,
            active: None,
            finished: None,
        }
    }

    /// The actor this recorder captures from.
    pub fn source(&self) -> ActorId {
        self.source
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// Start (or restart) capturing. Any prior in-progress recording is
    /// discarded and a fresh one is created from the source actor's
    /// current session info and the host's current environment, map,
    /// and tick cadence.
    ///
    /// # Errors
    ///
    /// [`RecorderError::Stopped`] if the recorder has been stopped;
    /// [`RecorderError::SourceUnavailable`] if the source actor can no
    /// longer be queried. The recorder state is unchanged on error.
    pub fn start(&mut self, host: &dyn Host) -> Result<(), RecorderError> {
        if self.state == RecorderState::Stopped {
            return Err(RecorderError::Stopped);
        }
        let session = host
            .session_info(self.source)
            .ok_or(RecorderError::SourceUnavailable { actor: self.source })?;
        self.active = Some(Recording::new(
            session,
            host.environment_id().to_string(),
            host.map_id().to_string(),
            host.tick_interval(),
        ));
        self.finished = None;
        self.state = RecorderState::Recording;
        Ok(())
    }

    /// Suspend capture. Idempotent while not stopped.
    ///
    /// # Errors
    ///
    /// [`RecorderError::Stopped`] if the recorder has been stopped.
    pub fn pause(&mut self) -> Result<(), RecorderError> {
        if self.state == RecorderState::Stopped {
            return Err(RecorderError::Stopped);
        }
        self.state = RecorderState::Paused;
        Ok(())
    }

    /// Resume capture. Idempotent while not stopped.
    ///
    /// # Errors
    ///
    /// [`RecorderError::Stopped`] if the recorder has been stopped.
    pub fn resume(&mut self) -> Result<(), RecorderError> {
        if self.state == RecorderState::Stopped {
            return Err(RecorderError::Stopped);
        }
        self.state = RecorderState::Recording;
        Ok(())
    }

    /// Stop the recorder and freeze the in-progress recording, if any.
    ///
    /// Unconditional and permissive: stopping a recorder that was never
    /// started simply transitions to `Stopped` with nothing to freeze.
    /// Calling it again is a no-op.
    pub fn stop(&mut self) {
        self.state = RecorderState::Stopped;
        if let Some(recording) = self.active.take() {
            self.finished = Some(Rc::new(recording));
        }
    }

    /// The frozen recording, available once [`stop()`](Recorder::stop)
    /// ran on a capture that was actually started.
    pub fn finished_recording(&self) -> Option<&Rc<Recording>> {
        self.finished.as_ref()
    }

    /// The in-progress recording, while capture is live.
    pub fn active_recording(&self) -> Option<&Recording> {
        self.active.as_ref()
    }

    /// Per-tick capture hook. No-op unless in the `Recording` state.
    ///
    /// Appends exactly one snapshot from the source actor's current
    /// state. A source that can no longer be queried (destroyed
    /// mid-tick) appends nothing; the host's destruction notification
    /// performs the cleanup.
    pub fn on_tick(&mut self, host: &dyn ActorQuery) {
        if self.state != RecorderState::Recording {
            return;
        }
        if let (Some(recording), Some(sample)) =
            (self.active.as_mut(), host.actor_state(self.source))
        {
            recording.append_snapshot(&sample);
        }
    }
}
