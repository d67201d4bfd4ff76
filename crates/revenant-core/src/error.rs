//! Error types for the Revenant replay framework.
//!
//! All failures are synchronous and surfaced to the immediate caller;
//! nothing is retried internally. Every state-machine transition either
//! fully completes or leaves the object in its prior state.

use std::error::Error;
use std::fmt;

use crate::id::ActorId;

/// Errors from recorder state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderError {
    /// `pause()` or `resume()` was called on a stopped recorder.
    ///
    /// Stopped is terminal; recording the same source again requires a
    /// fresh recorder instance.
    Stopped,
    /// The source actor could not be queried when starting a recording.
    SourceUnavailable {
        /// The actor that could not be queried.
        actor: ActorId,
    },
}

impl fmt::Display for RecorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "recorder is stopped"),
            Self::SourceUnavailable { actor } => {
                write!(f, "source actor {actor} is unavailable")
            }
        }
    }
}

impl Error for RecorderError {}

/// Errors from playback setup.
///
/// Returned by player creation; if synthetic-actor or controller
/// acquisition fails, no player is registered and no synthetic actor is
/// left behind in the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// The recording has no snapshots and cannot be played.
    NotPlayable,
    /// The host could not allocate a synthetic actor.
    ActorAllocationFailed {
        /// The requested actor name.
        name: String,
    },
    /// The host could not supply an input-injection controller for the
    /// newly created synthetic actor.
    ControllerUnavailable {
        /// The synthetic actor the controller was requested for.
        actor: ActorId,
    },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlayable => write!(f, "recording has no snapshots"),
            Self::ActorAllocationFailed { name } => {
                write!(f, "failed to create synthetic actor '{name}'")
            }
            Self::ControllerUnavailable { actor } => {
                write!(f, "failed to get input controller for actor {actor}")
            }
        }
    }
}

impl Error for PlaybackError {}
