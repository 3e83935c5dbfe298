//! Per-tick exploration controller.
//!
//! The host invokes [`ExplorationController::step`] once per simulation tick.
//! Each tick localizes the agent onto the grid, images uncovered neighbor
//! cells, reports coverage to the station, and decides between driving
//! forward and turning clockwise. A stochastic hardware fault permanently
//! silences the controller.

use log::{debug, info, warn};

use crate::agent::{AgentSenses, CameraMount, CellImage, DriveCommand};
use crate::core::{Direction, GridCoordinate};
use crate::map::Tile;
use crate::station::CoordinationChannel;

use super::config::BehaviorConfig;
use super::sampler::EventSampler;
use super::state::Phase;

/// The per-tick decision state machine.
pub struct ExplorationController {
    /// Lifecycle phase; `Broken` is terminal.
    phase: Phase,
    /// Current logical heading; the body yaw follows via `TurnClockwise`.
    heading: Direction,
    /// Grid cell localized on the most recent tick.
    last_coordinate: Option<GridCoordinate>,
    /// World meters per grid cell.
    cell_size: f32,
    /// Behavior parameters.
    config: BehaviorConfig,
    /// Chance-event source.
    sampler: EventSampler,
}

impl ExplorationController {
    /// Create a controller facing east, the conventional starting heading.
    pub fn new(config: BehaviorConfig, cell_size: f32) -> Self {
        Self::with_heading(config, cell_size, Direction::East)
    }

    /// Create a controller with an explicit starting heading.
    pub fn with_heading(config: BehaviorConfig, cell_size: f32, heading: Direction) -> Self {
        let sampler = EventSampler::new(config.rng_seed);
        Self {
            phase: Phase::Running,
            heading,
            last_coordinate: None,
            cell_size,
            config,
            sampler,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has the controller permanently faulted?
    pub fn is_broken(&self) -> bool {
        self.phase.is_broken()
    }

    /// Current heading.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Grid cell localized on the most recent tick.
    pub fn last_coordinate(&self) -> Option<GridCoordinate> {
        self.last_coordinate
    }

    /// Run one behavior tick and return the actuator command for the host.
    ///
    /// Collaborator calls happen in a fixed order: localize, image uncovered
    /// neighbors, report position and the trail cell behind. The fault draw
    /// and the motion decision run only while the agent is still on the grid.
    pub fn step<S, C>(&mut self, senses: &mut S, station: &mut C) -> DriveCommand
    where
        S: AgentSenses,
        C: CoordinationChannel,
    {
        if self.phase.is_broken() {
            return DriveCommand::Idle;
        }

        let size = station.query_grid_size();
        let here = GridCoordinate::from_world(senses.position(), self.cell_size, size);
        self.last_coordinate = Some(here);

        self.sweep_neighbors(here, senses, station);

        station.report_position(here);
        station.report_covered_area(here.step_toward(self.heading, -1));

        if !here.is_on_grid() {
            debug!("[Survey] off the grid at {}, holding", here);
            return DriveCommand::Idle;
        }

        if self.sampler.chance(self.config.fault_probability) {
            warn!("[Survey] hardware fault at {}, shutting down for good", here);
            self.phase = Phase::Broken;
            return DriveCommand::Halt;
        }

        let ahead = here.step_toward(self.heading, 1);
        let blocked = !matches!(station.query_tile(ahead), Some(tile) if tile.is_passable());

        if blocked || self.sampler.chance(self.config.turn_probability) {
            self.heading = self.heading.rotate(1);
            debug!(
                "[Survey] turning at {} ({}), now facing {}",
                here,
                if blocked { "blocked" } else { "chance" },
                self.heading.as_str()
            );
            DriveCommand::TurnClockwise
        } else {
            DriveCommand::Forward {
                speed: self.config.forward_speed,
            }
        }
    }

    /// Image the right, back, and left neighbor cells that are still empty.
    ///
    /// Each qualifying cell gets one frame from the matching mount, submitted
    /// together with a coverage report, so no cell is ever imaged twice no
    /// matter how often agents pass it.
    fn sweep_neighbors<S, C>(&mut self, here: GridCoordinate, senses: &mut S, station: &mut C)
    where
        S: AgentSenses,
        C: CoordinationChannel,
    {
        for mount in CameraMount::ALL {
            let facing = mount.facing(self.heading);
            let neighbor = here.step_toward(facing, 1);

            if station.query_tile(neighbor) != Some(Tile::Empty) {
                continue;
            }

            let frame = senses.capture(mount);
            station.submit_image(CellImage {
                cell: neighbor,
                heading: facing,
                frame,
            });
            station.report_covered_area(neighbor);
            info!(
                "[Survey] imaged {} with the {} camera",
                neighbor,
                mount.as_str()
            );
        }
    }
}
