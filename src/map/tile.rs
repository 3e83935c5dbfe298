//! Tile classification for the survey grid.

use serde::{Deserialize, Serialize};

/// Classification of a single grid cell.
///
/// Out-of-bounds is not a tile value: map queries return `None` for
/// coordinates off the grid, and callers check `is_on_grid()` first.
///
/// The only legal transition is `Empty` → `Covered`, made when an agent
/// images a cell or passes over it. Walls are placed when the map is built
/// and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    /// Not yet imaged or visited by any agent.
    #[default]
    Empty = 0,

    /// Imaged and/or visited; coverage is monotonic.
    Covered = 1,

    /// Fixed obstacle placed at map initialization.
    Wall = 2,
}

impl Tile {
    /// Can an agent drive onto this cell?
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Empty | Tile::Covered)
    }

    /// Convert from the raw storage byte.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Tile::Covered,
            2 => Tile::Wall,
            _ => Tile::Empty,
        }
    }

    /// Single character representation for map dumps.
    pub fn as_char(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Covered => 'o',
            Tile::Wall => '#',
        }
    }
}
