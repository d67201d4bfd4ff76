//! Revenant: tick-synchronized actor recording and replay.
//!
//! Captures a live actor's per-tick motion and input state during a
//! simulated session and later replays the captured sequence through a
//! synthetic actor, reproducing the original trajectory and input
//! stream tick-for-tick.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Revenant sub-crates. For most users, adding `revenant` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! The host simulation implements the capability traits in
//! [`types`](crate::types) and forwards its per-tick and
//! actor-destroyed notifications to a [`RecordingManager`]:
//!
//! ```
//! use revenant::prelude::*;
//! use revenant_test_utils::MockHost;
//!
//! let mut host = MockHost::new();
//! let mut manager = RecordingManager::new();
//!
//! // Record a live actor for a few ticks.
//! let subject = host.add_actor("subject", FactionId(2));
//! manager.get_or_create_recorder(subject).start(&host).unwrap();
//! for _ in 0..10 {
//!     manager.on_tick(&mut host);
//! }
//! manager.stop_recorder(subject, true);
//!
//! // Replay it through a synthetic actor until exhaustion.
//! let recording = manager.recordings()[0].clone();
//! let bot = manager.start_playback(&mut host, &recording, None, true).unwrap();
//! for _ in 0..10 {
//!     manager.on_tick(&mut host);
//! }
//! assert_eq!(manager.player(bot).unwrap().state(), PlayState::Stopped);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `revenant-core` | IDs, input schema, errors, host traits |
//! | [`engine`] | `revenant-engine` | Recording, Recorder, Player, manager |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and host capability traits (`revenant-core`).
pub mod types {
    pub use revenant_core::*;
}

/// Recorder/player state machines and the manager (`revenant-engine`).
pub mod engine {
    pub use revenant_engine::*;
}

/// The most commonly used items in one import.
pub mod prelude {
    pub use revenant_core::{
        ActorControl, ActorId, ActorQuery, ActorState, Angles, ControllerId, FactionId, Host,
        InputCommand, PlaybackError, RecorderError, SessionContext, SessionInfo, Vec3,
    };
    pub use revenant_engine::{
        PlayState, Player, Recorder, RecorderState, Recording, RecordingManager, Snapshot,
    };
}

pub use revenant_core::{
    ActorId, ControllerId, FactionId, Host, InputCommand, PlaybackError, RecorderError,
};
pub use revenant_engine::{PlayState, Player, Recorder, RecorderState, Recording, RecordingManager};
