//! Core types and host capability traits for the Revenant replay framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Revenant workspace:
//! typed identifiers, the closed input-command schema, actor state and
//! session types, error types, and the host capability traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod math;
pub mod traits;

pub use command::{ActorState, InputCommand, SessionInfo};
pub use error::{PlaybackError, RecorderError};
pub use id::{ActorId, ControllerId, FactionId};
pub use math::{Angles, Vec3};
pub use traits::{ActorControl, ActorQuery, Host, SessionContext};
