//! Host capability traits consumed by the replay engine.
//!
//! The engine never talks to a concrete simulation. Everything it needs
//! from the host is expressed as three small capability traits plus the
//! [`Host`] supertrait that engine entry points accept as `&mut dyn Host`.
//! Queries return `Option` so a stale actor reference degrades into a
//! skipped operation instead of a panic; the host's actor-destroyed
//! notification performs the actual cleanup.

use crate::command::{ActorState, InputCommand, SessionInfo};
use crate::id::{ActorId, ControllerId, FactionId};
use crate::math::{Angles, Vec3};

/// Read-only access to live actor state.
pub trait ActorQuery {
    /// Sample an actor's current kinematic state and last processed
    /// input command.
    ///
    /// Returns `None` if the actor ID is unknown or no longer live.
    fn actor_state(&self, actor: ActorId) -> Option<ActorState>;

    /// An actor's current position only.
    ///
    /// Cheaper than [`actor_state`](ActorQuery::actor_state) for the
    /// per-tick drift check, which needs nothing else.
    fn actor_position(&self, actor: ActorId) -> Option<Vec3>;

    /// Session metadata for an actor (name, stable identity, faction).
    ///
    /// Returns `None` if the actor ID is unknown or no longer live.
    fn session_info(&self, actor: ActorId) -> Option<SessionInfo>;
}

/// Read-only access to ambient session parameters.
///
/// Sampled once at recording start and frozen into the recording; the
/// engine never assumes these stay constant across a session.
pub trait SessionContext {
    /// Identifier of the simulation variant/branch in effect.
    fn environment_id(&self) -> &str;

    /// Identifier of the currently loaded map.
    fn map_id(&self) -> &str;

    /// Seconds per simulation tick. Contract: strictly positive.
    fn tick_interval(&self) -> f64;
}

/// Mutating access to actors and the synthetic-actor lifecycle.
pub trait ActorControl {
    /// Create a synthetic actor with the given display name.
    ///
    /// Returns `None` if the host cannot allocate one (server full,
    /// bots disabled, etc.).
    fn create_synthetic_actor(&mut self, name: &str) -> Option<ActorId>;

    /// Obtain the input-injection controller for a synthetic actor.
    ///
    /// Returns `None` if the host cannot supply one.
    fn input_controller(&mut self, actor: ActorId) -> Option<ControllerId>;

    /// Inject one input command through a controller, to be executed
    /// for the current tick.
    fn run_command(&mut self, controller: ControllerId, command: &InputCommand);

    /// Forcibly set an actor's position, orientation, and velocity.
    fn set_kinematics(&mut self, actor: ActorId, position: Vec3, orientation: Angles, velocity: Vec3);

    /// Move an actor to a team/faction.
    fn set_faction(&mut self, actor: ActorId, faction: FactionId);

    /// Force a (re)spawn of an actor.
    fn force_respawn(&mut self, actor: ActorId);

    /// Strip all capabilities/items from an actor.
    ///
    /// Must tolerate an already-destroyed actor: teardown can race the
    /// host's own destruction notification mid-tick.
    fn strip_capabilities(&mut self, actor: ActorId);

    /// Remove an actor from the simulation.
    ///
    /// Must tolerate an already-destroyed actor, as above.
    fn remove_actor(&mut self, actor: ActorId);
}

/// The full host capability surface, as accepted by engine entry points.
pub trait Host: ActorQuery + SessionContext + ActorControl {}

impl<T: ActorQuery + SessionContext + ActorControl> Host for T {}
