use crate::{Hex, HexError};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A direction in a hex grid. There are two classes of direction (sides and
/// diagonals), which are often used independently of each other, so this
/// trait allows each one to be its own type.
///
/// Each class has exactly 6 directions. They're indexed `0..6`, starting at
/// the direction whose vector has a positive `q` and zero `r`, then proceeding
/// **counter-clockwise** (as drawn with pointy-top tiles on a screen where y
/// grows downward). The compass names of the variants assume that same
/// presentation; for flat-top tiles, everything is rotated 30° clockwise.
pub trait HexDirection: 'static + Copy + Eq + Sized {
    /// A list of all directions in this class, in index order
    const COUNTER_CLOCKWISE: &'static [Self];

    /// Get the index of this direction within [Self::COUNTER_CLOCKWISE]
    fn index(self) -> usize {
        Self::COUNTER_CLOCKWISE
            .iter()
            .position(|dir| self == *dir)
            // Every variant is in the list, so this can't fail
            .unwrap_or_default()
    }

    /// Get the direction with the given index. Fails if the index isn't in
    /// `[0, 6)`.
    fn from_index(index: usize) -> Result<Self, HexError> {
        Self::COUNTER_CLOCKWISE
            .get(index)
            .copied()
            .ok_or(HexError::InvalidDirection { direction: index })
    }

    /// Get the direction that is directly opposite this one
    fn opposite(self) -> Self {
        let dirs = Self::COUNTER_CLOCKWISE;
        dirs[(self.index() + dirs.len() / 2) % dirs.len()]
    }

    /// Convert this direction into a vector in cube space. Adding the vector
    /// to a hex moves it one step in this direction.
    fn to_vector(self) -> Hex;
}

/// The 6 directions in which hexes can line up side-to-side. For any given
/// hex, a side direction represents two useful things:
///
/// - Direction from the center of a hex to the midpoint of one of its sides
/// - Direction to a neighboring hex's center
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SideDirection {
    /// East
    E,
    /// Northeast
    NE,
    /// Northwest
    NW,
    /// West
    W,
    /// Southwest
    SW,
    /// Southeast
    SE,
}

impl HexDirection for SideDirection {
    const COUNTER_CLOCKWISE: &'static [Self] =
        &[Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    fn to_vector(self) -> Hex {
        match self {
            Self::E => Hex::new_qr(1, 0),
            Self::NE => Hex::new_qr(1, -1),
            Self::NW => Hex::new_qr(0, -1),
            Self::W => Hex::new_qr(-1, 0),
            Self::SW => Hex::new_qr(-1, 1),
            Self::SE => Hex::new_qr(0, 1),
        }
    }
}

impl SideDirection {
    /// Get the two [DiagonalDirection]s that flank this side. I.e. if this
    /// direction points from a hex's center to the midpoint of a side, then
    /// the returned diagonals point through either endpoint of that side.
    /// The first is clockwise of this direction, the second counter-clockwise.
    pub fn adjacent_diagonals(self) -> (DiagonalDirection, DiagonalDirection) {
        let index = self.index();
        let diagonals = DiagonalDirection::COUNTER_CLOCKWISE;
        // Diagonal i sits between sides i and i+1, so the one clockwise of us
        // is i-1. Add len-1 instead of subtracting 1 to stay in usize.
        let right = diagonals[(index + diagonals.len() - 1) % diagonals.len()];
        let left = diagonals[index];
        (right, left)
    }
}

/// The 6 directions you can go from the center of a hex through one of its
/// vertices. A step in one of these directions skips over the two hexes
/// that share that vertex, so each lands exactly two steps from the start.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalDirection {
    /// East-northeast
    ENE,
    /// North
    N,
    /// West-northwest
    WNW,
    /// West-southwest
    WSW,
    /// South
    S,
    /// East-southeast
    ESE,
}

impl HexDirection for DiagonalDirection {
    const COUNTER_CLOCKWISE: &'static [Self] =
        &[Self::ENE, Self::N, Self::WNW, Self::WSW, Self::S, Self::ESE];

    fn to_vector(self) -> Hex {
        match self {
            Self::ENE => Hex::new_qr(2, -1),
            Self::N => Hex::new_qr(1, -2),
            Self::WNW => Hex::new_qr(-1, -1),
            Self::WSW => Hex::new_qr(-2, 1),
            Self::S => Hex::new_qr(-1, 2),
            Self::ESE => Hex::new_qr(1, 1),
        }
    }
}
