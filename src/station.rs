//! Coordination station: the shared authority agents report to.
//!
//! The controller talks to whatever process owns the authoritative map only
//! through the [`CoordinationChannel`] trait, so the station may be local or
//! remote. The implementations here are in-process: [`LocalStation`] owns the
//! tile map and retains submitted imagery, and [`SharedStation`] wraps one in
//! `Arc<RwLock>` so several agents can report into the same map.

use std::sync::{Arc, RwLock};

use log::debug;

use crate::agent::CellImage;
use crate::core::{GridCoordinate, GridSize};
use crate::map::{GridTileMap, Tile, TileMap};

/// Reporting and query operations against the shared map authority.
///
/// Calls are synchronous and always succeed from the controller's point of
/// view; buffering or retrying a remote transport is the implementor's
/// concern, not the controller's.
pub trait CoordinationChannel {
    /// Report the agent's current grid position.
    fn report_position(&mut self, coordinate: GridCoordinate);

    /// Report a cell as covered. Off-grid coordinates are tolerated and
    /// dropped, since trail reports can fall past the arena edge.
    fn report_covered_area(&mut self, coordinate: GridCoordinate);

    /// Submit a captured cell image.
    fn submit_image(&mut self, image: CellImage);

    /// Classification of a cell, or `None` if off-grid.
    fn query_tile(&self, coordinate: GridCoordinate) -> Option<Tile>;

    /// The grid extent.
    fn query_grid_size(&self) -> GridSize;
}

/// In-process station owning the tile map.
#[derive(Debug)]
pub struct LocalStation {
    map: GridTileMap,
    images: Vec<CellImage>,
    last_position: Option<GridCoordinate>,
}

impl LocalStation {
    /// Create a station around an initialized map.
    pub fn new(map: GridTileMap) -> Self {
        Self {
            map,
            images: Vec::new(),
            last_position: None,
        }
    }

    /// The station's map.
    pub fn map(&self) -> &GridTileMap {
        &self.map
    }

    /// All images submitted so far, in arrival order.
    pub fn images(&self) -> &[CellImage] {
        &self.images
    }

    /// The most recently reported agent position.
    pub fn last_position(&self) -> Option<GridCoordinate> {
        self.last_position
    }
}

impl CoordinationChannel for LocalStation {
    fn report_position(&mut self, coordinate: GridCoordinate) {
        self.last_position = Some(coordinate);
    }

    fn report_covered_area(&mut self, coordinate: GridCoordinate) {
        if coordinate.is_on_grid() {
            self.map.mark_covered(coordinate);
        } else {
            debug!("[Station] dropping off-grid coverage report {}", coordinate);
        }
    }

    fn submit_image(&mut self, image: CellImage) {
        self.images.push(image);
    }

    fn query_tile(&self, coordinate: GridCoordinate) -> Option<Tile> {
        self.map.classify(coordinate)
    }

    fn query_grid_size(&self) -> GridSize {
        self.map.size()
    }
}

/// Thread-safe station handle shared between agents.
///
/// Clones refer to the same underlying [`LocalStation`]. Races between agents
/// marking the same cell are harmless because `mark_covered` is idempotent.
#[derive(Clone, Debug)]
pub struct SharedStation {
    inner: Arc<RwLock<LocalStation>>,
}

impl SharedStation {
    /// Wrap a station for sharing.
    pub fn new(station: LocalStation) -> Self {
        Self {
            inner: Arc::new(RwLock::new(station)),
        }
    }

    /// Run a closure against the station, e.g. to inspect coverage.
    pub fn with<R>(&self, f: impl FnOnce(&LocalStation) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }
}

impl CoordinationChannel for SharedStation {
    fn report_position(&mut self, coordinate: GridCoordinate) {
        if let Ok(mut guard) = self.inner.write() {
            guard.report_position(coordinate);
        }
    }

    fn report_covered_area(&mut self, coordinate: GridCoordinate) {
        if let Ok(mut guard) = self.inner.write() {
            guard.report_covered_area(coordinate);
        }
    }

    fn submit_image(&mut self, image: CellImage) {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_image(image);
        }
    }

    fn query_tile(&self, coordinate: GridCoordinate) -> Option<Tile> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.query_tile(coordinate))
    }

    fn query_grid_size(&self) -> GridSize {
        self.inner
            .read()
            .map(|guard| guard.query_grid_size())
            .unwrap_or_default()
    }
}
