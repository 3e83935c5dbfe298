//! In-memory tile map storage.

use crate::core::{GridCoordinate, GridSize};

use super::tile::Tile;

/// Map operations the exploration controller depends on.
///
/// `classify` returns `None` for coordinates off the grid; callers check
/// `is_on_grid()` before relying on a classification. `mark_covered` is
/// idempotent so that concurrent agents reporting the same cell race
/// harmlessly.
pub trait TileMap {
    /// Classification of the cell, or `None` if the coordinate is off-grid.
    fn classify(&self, coordinate: GridCoordinate) -> Option<Tile>;

    /// Record that a cell has been imaged or visited.
    ///
    /// No-op for `Covered` and `Wall` cells and for off-grid coordinates.
    fn mark_covered(&mut self, coordinate: GridCoordinate);

    /// The grid extent.
    fn size(&self) -> GridSize;
}

/// Per-classification cell totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileCounts {
    pub empty: usize,
    pub covered: usize,
    pub wall: usize,
}

/// Flat-array tile map.
///
/// Cells are stored row-major as raw `Tile` bytes. Walls are placed while the
/// map is being built; afterwards the only mutation is `mark_covered`.
#[derive(Clone, Debug)]
pub struct GridTileMap {
    tiles: Vec<u8>,
    size: GridSize,
}

impl GridTileMap {
    /// Create an all-empty map of the given extent.
    pub fn new(size: GridSize) -> Self {
        Self {
            tiles: vec![Tile::Empty as u8; size.cell_count()],
            size,
        }
    }

    /// Place a wall while building the map. Off-grid coordinates are ignored.
    pub fn place_wall(&mut self, coordinate: GridCoordinate) {
        if let Some(i) = self.index(coordinate) {
            self.tiles[i] = Tile::Wall as u8;
        }
    }

    /// Cell totals per classification.
    pub fn counts(&self) -> TileCounts {
        let mut counts = TileCounts::default();
        for &raw in &self.tiles {
            match Tile::from_u8(raw) {
                Tile::Empty => counts.empty += 1,
                Tile::Covered => counts.covered += 1,
                Tile::Wall => counts.wall += 1,
            }
        }
        counts
    }

    /// Number of covered cells.
    pub fn covered_count(&self) -> usize {
        self.counts().covered
    }

    /// Render the map as one text row per grid row, north at the top.
    pub fn ascii_rows(&self) -> Vec<String> {
        (0..self.size.height)
            .map(|z| {
                (0..self.size.width)
                    .map(|x| {
                        let coordinate = GridCoordinate::new(x, z, self.size);
                        self.classify(coordinate).unwrap_or(Tile::Empty).as_char()
                    })
                    .collect()
            })
            .collect()
    }

    #[inline]
    fn index(&self, coordinate: GridCoordinate) -> Option<usize> {
        if self.size.contains(coordinate.x, coordinate.z) {
            Some((coordinate.z * self.size.width + coordinate.x) as usize)
        } else {
            None
        }
    }
}

impl TileMap for GridTileMap {
    fn classify(&self, coordinate: GridCoordinate) -> Option<Tile> {
        self.index(coordinate).map(|i| Tile::from_u8(self.tiles[i]))
    }

    fn mark_covered(&mut self, coordinate: GridCoordinate) {
        if let Some(i) = self.index(coordinate) {
            if Tile::from_u8(self.tiles[i]) == Tile::Empty {
                self.tiles[i] = Tile::Covered as u8;
            }
        }
    }

    fn size(&self) -> GridSize {
        self.size
    }
}
