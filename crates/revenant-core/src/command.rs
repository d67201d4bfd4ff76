//! The closed input-command schema, actor state samples, and session info.

use crate::id::FactionId;
use crate::math::{Angles, Vec3};

/// One tick's worth of actor input, as processed by the host simulation.
///
/// The field set is closed: it mirrors the host's fixed per-tick command
/// layout and nothing else. Game-specific extension fields are
/// deliberately not captured; adding one is a versioned schema change,
/// not ad-hoc attribute copying.
///
/// # Examples
///
/// ```
/// use revenant_core::{Angles, InputCommand};
///
/// let cmd = InputCommand {
///     command_number: 512,
///     tick_count: 9001,
///     view_angles: Angles::new(0.0, 90.0, 0.0),
///     forward_move: 250.0,
///     side_move: 0.0,
///     up_move: 0.0,
///     buttons: 0b10,
///     impulse: 0,
///     weapon_select: 0,
///     weapon_subtype: 0,
///     random_seed: 0xFEED,
///     mouse_dx: 4,
///     mouse_dy: -1,
///     has_been_predicted: false,
/// };
///
/// assert_eq!(cmd.tick_count, 9001);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputCommand {
    /// Monotonic per-client command sequence number.
    pub command_number: u32,
    /// Host tick index at which the command was issued.
    pub tick_count: u32,
    /// View direction at the time of the command.
    pub view_angles: Angles,
    /// Forward/backward movement axis, in host units per second.
    pub forward_move: f32,
    /// Strafe movement axis, in host units per second.
    pub side_move: f32,
    /// Vertical movement axis, in host units per second.
    pub up_move: f32,
    /// Pressed-button bitmask.
    pub buttons: u32,
    /// One-shot impulse slot (0 = none).
    pub impulse: u8,
    /// Weapon selection identifier (0 = no change).
    pub weapon_select: u32,
    /// Weapon selection sub-type.
    pub weapon_subtype: u32,
    /// Seed for the host's deterministic per-command randomness.
    pub random_seed: u32,
    /// Horizontal mouse delta for this tick.
    pub mouse_dx: i16,
    /// Vertical mouse delta for this tick.
    pub mouse_dy: i16,
    /// Whether client-side prediction already ran this command.
    pub has_been_predicted: bool,
}

/// A point-in-time sample of a live actor, as returned by the host's
/// actor query capability.
///
/// One of these is taken per active recording tick and transcribed into
/// a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    /// Current position.
    pub position: Vec3,
    /// Current orientation.
    pub orientation: Angles,
    /// Current velocity.
    pub velocity: Vec3,
    /// The most recent input command the host processed for this actor.
    pub last_command: InputCommand,
}

/// Session metadata captured once when a recording starts.
///
/// # Examples
///
/// ```
/// use revenant_core::{FactionId, SessionInfo};
///
/// let session = SessionInfo {
///     name: "kestrel".into(),
///     stable_id: "STEAM_0:1:123456".into(),
///     faction: FactionId(2),
/// };
/// assert_eq!(session.faction, FactionId(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfo {
    /// Display name of the recorded actor.
    pub name: String,
    /// Stable identity string, unchanged across reconnects.
    pub stable_id: String,
    /// Team/faction the actor belonged to at recording start.
    pub faction: FactionId,
}
