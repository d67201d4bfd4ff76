//! Recorder and player state machines for the Revenant replay framework.
//!
//! Captures a live actor's per-tick motion and input into a [`Recording`]
//! and replays it tick-for-tick through a host-provided synthetic actor.
//!
//! # Architecture
//!
//! - [`Recording`]: ordered snapshot sequence plus session metadata
//! - [`Recorder`]: captures one snapshot per tick from a live actor
//! - [`Player`]: replays a frozen recording onto a synthetic actor
//! - [`RecordingManager`]: owns all recorders, players, and completed
//!   recordings; the host drives it through exactly two entry points,
//!   [`on_tick()`](RecordingManager::on_tick) and
//!   [`on_actor_destroyed()`](RecordingManager::on_actor_destroyed)
//!
//! # Ownership model
//!
//! A recording is exclusively owned (and appended to) by its recorder
//! while capture is live. Stopping the recorder freezes it into an
//! `Rc<Recording>`; from then on it is read-only and may be shared by
//! the completed-recordings collection and any number of players. The
//! single-writer-then-many-readers discipline is enforced by the type
//! system, not by locks: there is no `&mut` path to a frozen recording.
//!
//! Everything runs synchronously inside the host's per-tick callback on
//! one thread; no operation suspends or blocks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod manager;
pub mod player;
pub mod recorder;
pub mod recording;
pub mod snapshot;

pub use manager::RecordingManager;
pub use player::{PlayState, Player, DRIFT_THRESHOLD_SQR};
pub use recorder::{Recorder, RecorderState};
pub use recording::Recording;
pub use snapshot::Snapshot;
