//! Compass direction with clockwise rotation arithmetic.

use serde::{Deserialize, Serialize};

/// The four compass directions a survey agent can face.
///
/// Rotation is always clockwise when viewed from above:
/// North → East → South → West → North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Clockwise rotation order, indexed by `Direction as usize`.
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Unit step per direction as (Δx, Δz) grid deltas.
///
/// This table is the single declaration of the axis convention:
/// north decreases z, east increases x, south increases z, west decreases x.
const DELTAS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Direction {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// The direction after `steps` single clockwise rotations.
    ///
    /// `rotate(0)` is the identity and composition adds modulo 4:
    /// `d.rotate(a).rotate(b) == d.rotate(a + b)`.
    #[inline]
    pub fn rotate(self, steps: u32) -> Direction {
        CLOCKWISE[(self.index() + steps as usize) % 4]
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Direction {
        self.rotate(2)
    }

    /// Unit grid step (Δx, Δz) for one cell of travel in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        DELTAS[self.index()]
    }

    /// Direction name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}
