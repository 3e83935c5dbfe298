//! # YatraNav: Grid Coverage Exploration Controller
//!
//! A per-tick decision controller for wheeled survey agents on a fixed 2D
//! grid. Each tick the controller projects the agent's continuous position
//! onto the grid, images neighbor cells that are not yet covered, reports
//! coverage to a shared coordination station, and chooses between driving
//! forward and turning clockwise. Random exploratory turns keep the agent
//! from looping forever on symmetric maps, and a rare stochastic hardware
//! fault permanently retires it.
//!
//! ## Quick Start
//!
//! ```rust
//! use yatra_nav::core::{Direction, GridSize, WorldPosition};
//! use yatra_nav::explore::{BehaviorConfig, ExplorationController};
//! use yatra_nav::harness::{bordered_map, run_ticks, SimulatedAgent};
//! use yatra_nav::station::LocalStation;
//!
//! let size = GridSize::new(12, 12);
//! let mut station = LocalStation::new(bordered_map(size));
//! let mut agent = SimulatedAgent::new(WorldPosition::new(6.0, 0.0, 6.0), Direction::East);
//! let mut controller = ExplorationController::new(BehaviorConfig::default(), 1.0);
//!
//! let summary = run_ticks(&mut controller, &mut agent, &mut station, 500, 0.1);
//! println!("covered {} cells in {} ticks",
//!     station.map().covered_count(), summary.ticks);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: compass directions and grid coordinates
//! - [`map`]: tile classification and the shared tile map
//! - [`station`]: the coordination channel agents report through
//! - [`agent`]: sensor/actuator abstraction at the body boundary
//! - [`explore`]: the per-tick behavior state machine
//! - [`harness`]: kinematic simulation host for demos and tests
//! - [`config`]: TOML configuration loading
//!
//! The controller is single-threaded and host-driven: it never blocks, and
//! every collaborator call is synchronous. Sharing one station between
//! several agents is safe because coverage marking is idempotent.

pub mod agent;
pub mod config;
pub mod core;
pub mod error;
pub mod explore;
pub mod harness;
pub mod map;
pub mod station;

pub use agent::{AgentSenses, CameraFrame, CameraMount, CellImage, DriveCommand};
pub use config::{GridConfig, YatraConfig};
pub use core::{Direction, GridCoordinate, GridSize, WorldPosition};
pub use error::{Result, YatraError};
pub use explore::{BehaviorConfig, EventSampler, ExplorationController, Phase};
pub use map::{GridTileMap, Tile, TileMap};
pub use station::{CoordinationChannel, LocalStation, SharedStation};
