//! Per-tick captures of actor state.

use revenant_core::{ActorControl, ActorId, ActorState, Angles, ControllerId, InputCommand, Vec3};

/// One tick's captured actor state: kinematics plus the input command
/// the host processed that tick.
///
/// Created once per active recording tick, never mutated afterwards.
/// Both operations side-effect an external actor through host
/// capabilities, not the snapshot itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Position at capture time.
    pub position: Vec3,
    /// Orientation at capture time.
    pub orientation: Angles,
    /// Velocity at capture time.
    pub velocity: Vec3,
    /// The input command processed for this tick.
    pub command: InputCommand,
}

impl Snapshot {
    /// Transcribe a host actor-state sample into a snapshot.
    pub fn capture(state: &ActorState) -> Self {
        Self {
            position: state.position,
            orientation: state.orientation,
            velocity: state.velocity,
            command: state.last_command.clone(),
        }
    }

    /// Forward the stored input command to a synthetic actor's
    /// controller, to be executed for the current tick.
    ///
    /// Failure is the controller's concern, not the snapshot's.
    pub fn apply_command(&self, host: &mut dyn ActorControl, controller: ControllerId) {
        host.run_command(controller, &self.command);
    }

    /// Forcibly set an actor's kinematics to the stored values.
    ///
    /// Used only for correction events, not every tick.
    pub fn apply_kinematics(&self, host: &mut dyn ActorControl, actor: ActorId) {
        host.set_kinematics(actor, self.position, self.orientation, self.velocity);
    }
}
