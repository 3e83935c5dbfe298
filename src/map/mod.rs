//! Tile classification and the shared tile map.

mod grid;
mod tile;

pub use grid::{GridTileMap, TileCounts, TileMap};
pub use tile::Tile;
