//! Strongly-typed identifiers for actors, controllers, and factions.

use std::fmt;

/// Identifies an actor within the host simulation.
///
/// Covers both live (recorded) actors and synthetic (replay) actors;
/// the host assigns IDs and guarantees they are stable for the lifetime
/// of the actor. An ID may be reused by the host after the actor is
/// destroyed, which is why the registries are pruned from the
/// actor-destroyed notification rather than by value comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies an input-injection controller bound to a synthetic actor.
///
/// Obtained from the host after synthetic-actor creation; valid until
/// the actor is removed from the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub u64);

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ControllerId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a team or faction within the host simulation.
///
/// Captured once per recording session and restored onto the synthetic
/// actor before playback starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactionId(pub u32);

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FactionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
