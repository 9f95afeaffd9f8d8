//! The live vacuum world. It owns the mutable world state and reports every
//! change to an injected [`WorldObserver`]; planners only ever see snapshots
//! taken with [`Environment::percept`].

use crate::vacuum::{Position, Thing, VacuumAction, VacuumState, WorldError};
use tracing::{debug, info};

/// Receives notifications about changes in an [`Environment`]. All methods
/// default to doing nothing.
pub trait WorldObserver {
    fn on_spawn(&mut self, _thing: &Thing) {}

    fn on_delete(&mut self, _thing: &Thing) {}

    fn on_move(&mut self, _agent: Position) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl WorldObserver for NullObserver {}

/// Logs every change through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl WorldObserver for TracingObserver {
    fn on_spawn(&mut self, thing: &Thing) {
        info!(?thing, "spawned");
    }

    fn on_delete(&mut self, thing: &Thing) {
        info!(?thing, "removed");
    }

    fn on_move(&mut self, agent: Position) {
        debug!(%agent, "agent moved");
    }
}

#[derive(Debug)]
pub struct Environment<O: WorldObserver> {
    state: VacuumState,
    observer: O,
    executed_actions: usize,
}

impl<O: WorldObserver> Environment<O> {
    pub fn new(state: VacuumState, observer: O) -> Self {
        Self {
            state,
            observer,
            executed_actions: 0,
        }
    }

    /// A snapshot of the world, detached from the live state.
    pub fn percept(&self) -> VacuumState {
        self.state.clone()
    }

    pub fn is_clean(&self) -> bool {
        self.state.is_clean()
    }

    pub fn executed_actions(&self) -> usize {
        self.executed_actions
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn add_dirt(&mut self, position: Position) -> Result<(), WorldError> {
        self.state.add_dirt(position)?;
        self.observer.on_spawn(&Thing::Dirt(position));
        Ok(())
    }

    pub fn add_jewel(&mut self, position: Position) -> Result<(), WorldError> {
        self.state.add_jewel(position)?;
        self.observer.on_spawn(&Thing::Jewel(position));
        Ok(())
    }

    /// Change the world to reflect `action`.
    pub fn execute_action(&mut self, action: VacuumAction) {
        self.executed_actions += 1;
        let effect = self.state.apply(action);
        if let Some(agent) = effect.moved_to {
            self.observer.on_move(agent);
        }
        for thing in &effect.removed {
            self.observer.on_delete(thing);
        }
    }

    pub fn into_state(self) -> VacuumState {
        self.state
    }
}
