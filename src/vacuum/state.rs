//! The vacuum world state: a fixed grid, the agent's position and the cells
//! holding dirt or jewels.

use crate::vacuum::{Position, VacuumAction, WorldError};
use smallvec::SmallVec;
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

/// Something in the world an observer can be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thing {
    Agent(Position),
    Dirt(Position),
    Jewel(Position),
}

/// What applying an action changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionEffect {
    /// The agent's new position, if it moved.
    pub moved_to: Option<Position>,
    /// Items removed from the agent's cell.
    pub removed: SmallVec<[Thing; 2]>,
}

impl ActionEffect {
    pub fn is_noop(&self) -> bool {
        self.moved_to.is_none() && self.removed.is_empty()
    }
}

/// A complete snapshot of the world. Equality and hashing cover every field,
/// so independently built snapshots of the same configuration are the same
/// search state. Sets keep at most one dirt and one jewel per cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VacuumState {
    width: usize,
    height: usize,
    agent: Position,
    dirt: BTreeSet<Position>,
    jewels: BTreeSet<Position>,
}

impl VacuumState {
    /// An empty (clean) world with the agent at `agent`.
    pub fn new(width: usize, height: usize, agent: Position) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::EmptyGrid { width, height });
        }
        let state = Self {
            width,
            height,
            agent,
            dirt: BTreeSet::new(),
            jewels: BTreeSet::new(),
        };
        state.check_in_bounds(agent)?;
        Ok(state)
    }

    pub fn with_dirt(mut self, position: Position) -> Result<Self, WorldError> {
        self.add_dirt(position)?;
        Ok(self)
    }

    pub fn with_jewel(mut self, position: Position) -> Result<Self, WorldError> {
        self.add_jewel(position)?;
        Ok(self)
    }

    pub fn add_dirt(&mut self, position: Position) -> Result<(), WorldError> {
        self.check_in_bounds(position)?;
        if !self.dirt.insert(position) {
            return Err(WorldError::Occupied {
                kind: "dirt",
                position,
            });
        }
        Ok(())
    }

    pub fn add_jewel(&mut self, position: Position) -> Result<(), WorldError> {
        self.check_in_bounds(position)?;
        if !self.jewels.insert(position) {
            return Err(WorldError::Occupied {
                kind: "a jewel",
                position,
            });
        }
        Ok(())
    }

    fn check_in_bounds(&self, position: Position) -> Result<(), WorldError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(WorldError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn dirt(&self) -> impl Iterator<Item = &Position> {
        self.dirt.iter()
    }

    pub fn jewels(&self) -> impl Iterator<Item = &Position> {
        self.jewels.iter()
    }

    pub fn has_dirt_at(&self, position: Position) -> bool {
        self.dirt.contains(&position)
    }

    pub fn has_jewel_at(&self, position: Position) -> bool {
        self.jewels.contains(&position)
    }

    pub fn has_item_at(&self, position: Position) -> bool {
        self.has_dirt_at(position) || self.has_jewel_at(position)
    }

    /// Whether no dirt and no jewel remain.
    pub fn is_clean(&self) -> bool {
        self.dirt.is_empty() && self.jewels.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.dirt.len() + self.jewels.len()
    }

    /// The cell holding dirt or a jewel closest to the agent by Manhattan
    /// distance. Ties go to the smallest position in `(x, y)` order.
    pub fn nearest_item(&self) -> Option<Position> {
        self.dirt
            .iter()
            .chain(self.jewels.iter())
            .min_by_key(|position| (position.manhattan_distance(&self.agent), **position))
            .copied()
    }

    /// Where a move would take the agent, `None` if it would leave the grid or
    /// `action` is not a move.
    pub fn move_target(&self, action: VacuumAction) -> Option<Position> {
        let (dx, dy) = action.offset()?;
        let x = self.agent.x.checked_add_signed(dx)?;
        let y = self.agent.y.checked_add_signed(dy)?;
        let target = Position::new(x, y);
        self.contains(target).then_some(target)
    }

    /// Apply `action` in place. Moves that would leave the grid do nothing,
    /// as do `Grab` and `Suck` on a cell without anything to remove.
    pub fn apply(&mut self, action: VacuumAction) -> ActionEffect {
        let mut effect = ActionEffect::default();
        let here = self.agent;
        match action {
            VacuumAction::Left | VacuumAction::Right | VacuumAction::Up | VacuumAction::Down => {
                if let Some(target) = self.move_target(action) {
                    self.agent = target;
                    effect.moved_to = Some(target);
                }
            }
            VacuumAction::Grab => {
                if self.jewels.remove(&here) {
                    effect.removed.push(Thing::Jewel(here));
                }
            }
            VacuumAction::Suck => {
                if self.dirt.remove(&here) {
                    effect.removed.push(Thing::Dirt(here));
                }
                if self.jewels.remove(&here) {
                    effect.removed.push(Thing::Jewel(here));
                }
            }
            VacuumAction::NoOp => {}
        }
        effect
    }

    /// A copy of this state with `action` applied.
    pub fn successor(&self, action: VacuumAction) -> Self {
        let mut successor = self.clone();
        successor.apply(action);
        successor
    }
}

/// Rows of cells: `@` agent, `*` dirt and jewel, `d` dirt, `j` jewel, `.`
/// empty.
impl Display for VacuumState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let position = Position::new(x, y);
                let cell = if position == self.agent {
                    '@'
                } else {
                    match (self.has_dirt_at(position), self.has_jewel_at(position)) {
                        (true, true) => '*',
                        (true, false) => 'd',
                        (false, true) => 'j',
                        (false, false) => '.',
                    }
                };
                write!(f, "{}", cell)?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
