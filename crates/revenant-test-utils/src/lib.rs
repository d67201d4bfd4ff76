//! Test utilities and mock host types for Revenant development.
//!
//! Provides [`MockHost`], an in-memory implementation of the host
//! capability traits ([`ActorQuery`], [`SessionContext`],
//! [`ActorControl`]) with call recording, so engine tests can script
//! actor state per tick and assert on the host-side effects of
//! recording and playback.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use revenant_core::{
    ActorControl, ActorId, ActorQuery, ActorState, Angles, ControllerId, FactionId, InputCommand,
    SessionContext, SessionInfo, Vec3,
};

/// One scripted actor inside the mock host.
#[derive(Clone, Debug)]
pub struct MockActor {
    pub state: ActorState,
    pub session: SessionInfo,
}

/// Mock implementation of the full host capability surface.
///
/// Live actors are registered with [`add_actor`](MockHost::add_actor)
/// and rescripted between ticks via the `set_*` helpers. Mutating
/// capability calls are recorded in public `Vec` fields for assertions,
/// and the `fail_*` flags script resource-acquisition failures.
#[derive(Debug)]
pub struct MockHost {
    environment_id: String,
    map_id: String,
    tick_interval: f64,
    actors: HashMap<ActorId, MockActor>,
    next_id: u64,

    /// Commands injected through controllers, in call order.
    pub injected: Vec<(ControllerId, InputCommand)>,
    /// Kinematic corrections applied, as (actor, forced position).
    pub corrections: Vec<(ActorId, Vec3)>,
    /// Actors force-respawned, in call order.
    pub respawns: Vec<ActorId>,
    /// Actors stripped of capabilities, in call order.
    pub stripped: Vec<ActorId>,
    /// Actors removed from the simulation, in call order.
    pub removed: Vec<ActorId>,
    /// Names requested for synthetic actors, in call order.
    pub created_names: Vec<String>,
    /// Make `create_synthetic_actor` fail.
    pub fail_actor_creation: bool,
    /// Make `input_controller` fail.
    pub fail_controller: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            environment_id: "mock-env".to_string(),
            map_id: "test_map".to_string(),
            tick_interval: 0.015,
            actors: HashMap::new(),
            next_id: 1,
            injected: Vec::new(),
            corrections: Vec::new(),
            respawns: Vec::new(),
            stripped: Vec::new(),
            removed: Vec::new(),
            created_names: Vec::new(),
            fail_actor_creation: false,
            fail_controller: false,
        }
    }

    pub fn set_tick_interval(&mut self, tick_interval: f64) {
        self.tick_interval = tick_interval;
    }

    /// A session-info value matching what [`add_actor`](MockHost::add_actor)
    /// would register for this name/faction pair.
    pub fn session_template(&self, name: &str, faction: FactionId) -> SessionInfo {
        SessionInfo {
            name: name.to_string(),
            stable_id: format!("MOCK_{name}"),
            faction,
        }
    }

    /// Register a live actor with default kinematics at the origin.
    pub fn add_actor(&mut self, name: &str, faction: FactionId) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        let session = self.session_template(name, faction);
        self.actors.insert(
            id,
            MockActor {
                state: ActorState {
                    position: Vec3::default(),
                    orientation: Angles::default(),
                    velocity: Vec3::default(),
                    last_command: InputCommand::default(),
                },
                session,
            },
        );
        id
    }

    /// Script an actor's position for the next tick.
    pub fn set_actor_position(&mut self, actor: ActorId, position: Vec3) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.state.position = position;
        }
    }

    /// Script an actor's full kinematic/input sample for the next tick.
    pub fn set_actor_state(&mut self, actor: ActorId, state: ActorState) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.state = state;
        }
    }

    /// Script the last processed input command for an actor.
    pub fn set_last_command(&mut self, actor: ActorId, command: InputCommand) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.state.last_command = command;
        }
    }

    /// Simulate host-side destruction: the actor vanishes without any
    /// capability call being recorded.
    pub fn destroy_actor(&mut self, actor: ActorId) {
        self.actors.remove(&actor);
    }

    pub fn faction_of(&self, actor: ActorId) -> Option<FactionId> {
        self.actors.get(&actor).map(|a| a.session.faction)
    }

    pub fn is_live(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorQuery for MockHost {
    fn actor_state(&self, actor: ActorId) -> Option<ActorState> {
        self.actors.get(&actor).map(|a| a.state.clone())
    }

    fn actor_position(&self, actor: ActorId) -> Option<Vec3> {
        self.actors.get(&actor).map(|a| a.state.position)
    }

    fn session_info(&self, actor: ActorId) -> Option<SessionInfo> {
        self.actors.get(&actor).map(|a| a.session.clone())
    }
}

impl SessionContext for MockHost {
    fn environment_id(&self) -> &str {
        &self.environment_id
    }

    fn map_id(&self) -> &str {
        &self.map_id
    }

    fn tick_interval(&self) -> f64 {
        self.tick_interval
    }
}

impl ActorControl for MockHost {
    fn create_synthetic_actor(&mut self, name: &str) -> Option<ActorId> {
        if self.fail_actor_creation {
            return None;
        }
        self.created_names.push(name.to_string());
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.insert(
            id,
            MockActor {
                state: ActorState {
                    position: Vec3::default(),
                    orientation: Angles::default(),
                    velocity: Vec3::default(),
                    last_command: InputCommand::default(),
                },
                session: SessionInfo {
                    name: name.to_string(),
                    stable_id: format!("BOT_{}", id.0),
                    faction: FactionId(0),
                },
            },
        );
        Some(id)
    }

    fn input_controller(&mut self, actor: ActorId) -> Option<ControllerId> {
        if self.fail_controller || !self.actors.contains_key(&actor) {
            return None;
        }
        Some(ControllerId(actor.0))
    }

    fn run_command(&mut self, controller: ControllerId, command: &InputCommand) {
        self.injected.push((controller, command.clone()));
    }

    fn set_kinematics(
        &mut self,
        actor: ActorId,
        position: Vec3,
        orientation: Angles,
        velocity: Vec3,
    ) {
        self.corrections.push((actor, position));
        if let Some(a) = self.actors.get_mut(&actor) {
            a.state.position = position;
            a.state.orientation = orientation;
            a.state.velocity = velocity;
        }
    }

    fn set_faction(&mut self, actor: ActorId, faction: FactionId) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.session.faction = faction;
        }
    }

    fn force_respawn(&mut self, actor: ActorId) {
        self.respawns.push(actor);
    }

    fn strip_capabilities(&mut self, actor: ActorId) {
        self.stripped.push(actor);
    }

    fn remove_actor(&mut self, actor: ActorId) {
        self.actors.remove(&actor);
        self.removed.push(actor);
    }
}
