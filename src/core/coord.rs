//! Grid coordinates and the continuous-to-grid projection.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Grid extent in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in cells (x axis).
    pub width: i32,
    /// Height in cells (z axis).
    pub height: i32,
}

impl GridSize {
    /// Create a new grid extent.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the cell index pair lies inside the grid.
    #[inline]
    pub fn contains(self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.width && z >= 0 && z < self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

/// A continuous world-frame position sample (meters).
///
/// The grid lives in the ground plane; `y` (height) is carried through from
/// the sensor but ignored by all grid logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPosition {
    /// Create a new world position.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// An integer (x, z) grid cell index carrying the grid extent it was
/// projected against.
///
/// Coordinates are plain values: the controller computes a fresh one from the
/// agent's world position every tick. Equality and hashing consider the cell
/// indices only, so coordinates projected against different extents still
/// compare by position.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Column index (east increases x).
    pub x: i32,
    /// Row index (south increases z).
    pub z: i32,
    bounds: GridSize,
}

impl GridCoordinate {
    /// Create a coordinate from raw cell indices.
    #[inline]
    pub fn new(x: i32, z: i32, bounds: GridSize) -> Self {
        Self { x, z, bounds }
    }

    /// Project a continuous world position onto the grid.
    ///
    /// Each ground-plane axis is divided by the cell size and rounded to the
    /// nearest cell index (ties round half away from zero).
    #[inline]
    pub fn from_world(position: WorldPosition, cell_size: f32, bounds: GridSize) -> Self {
        Self::new(
            (position.x / cell_size).round() as i32,
            (position.z / cell_size).round() as i32,
            bounds,
        )
    }

    /// The coordinate `steps` cells from this one along `direction`.
    ///
    /// Negative `steps` walk backwards (the cell behind).
    #[inline]
    pub fn step_toward(self, direction: Direction, steps: i32) -> Self {
        let (dx, dz) = direction.delta();
        Self::new(self.x + dx * steps, self.z + dz * steps, self.bounds)
    }

    /// Whether this coordinate lies inside the grid extent.
    #[inline]
    pub fn is_on_grid(self) -> bool {
        self.bounds.contains(self.x, self.z)
    }

    /// The grid extent this coordinate was projected against.
    #[inline]
    pub fn bounds(self) -> GridSize {
        self.bounds
    }
}

impl PartialEq for GridCoordinate {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.z == other.z
    }
}

impl Eq for GridCoordinate {}

impl Hash for GridCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.z.hash(state);
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
