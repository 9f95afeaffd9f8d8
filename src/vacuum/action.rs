use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The vacuum agent's action vocabulary. The string forms (`"Left"`,
/// `"Suck"`, `"NoOp"`, ...) are what the live world accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum VacuumAction {
    Left,
    Right,
    Up,
    Down,
    /// Pick up a jewel on the agent's cell.
    Grab,
    /// Vacuum the agent's cell. Destroys any jewel lying there too.
    Suck,
    NoOp,
}

impl VacuumAction {
    pub const MOVES: [VacuumAction; 4] = [
        VacuumAction::Left,
        VacuumAction::Right,
        VacuumAction::Up,
        VacuumAction::Down,
    ];

    /// The `(dx, dy)` offset of a move, `None` for the other actions.
    pub fn offset(&self) -> Option<(isize, isize)> {
        match self {
            VacuumAction::Left => Some((-1, 0)),
            VacuumAction::Right => Some((1, 0)),
            VacuumAction::Up => Some((0, -1)),
            VacuumAction::Down => Some((0, 1)),
            VacuumAction::Grab | VacuumAction::Suck | VacuumAction::NoOp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn action_strings_round_trip() {
        let names: Vec<&'static str> = VacuumAction::iter().map(|a| a.into()).collect();
        assert_eq!(
            names,
            vec!["Left", "Right", "Up", "Down", "Grab", "Suck", "NoOp"]
        );
        for action in VacuumAction::iter() {
            assert_eq!(VacuumAction::from_str(&action.to_string()), Ok(action));
        }
        assert!(VacuumAction::from_str("Jump").is_err());
    }

    #[test]
    fn only_moves_have_offsets() {
        for action in VacuumAction::iter() {
            assert_eq!(
                action.offset().is_some(),
                VacuumAction::MOVES.contains(&action)
            );
        }
    }
}
