//! Simulation harness: a kinematic agent body and arena builders for running
//! the controller without any physics engine attached.

use log::info;

use crate::agent::{AgentSenses, CameraFrame, CameraMount, DriveCommand};
use crate::core::{Direction, GridCoordinate, GridSize, WorldPosition};
use crate::explore::ExplorationController;
use crate::map::GridTileMap;
use crate::station::CoordinationChannel;

/// Camera resolution of the simulated mounts.
const FRAME_SIZE: u32 = 64;

/// A minimal kinematic agent body.
///
/// Position integrates the commanded forward velocity along the body heading;
/// a turn command snaps the heading one quarter turn clockwise and stops
/// translation, mirroring how the controller expects the host to react.
#[derive(Clone, Debug)]
pub struct SimulatedAgent {
    position: WorldPosition,
    heading: Direction,
    velocity: f32,
}

impl SimulatedAgent {
    /// Place an agent at a world position with a starting heading.
    pub fn new(position: WorldPosition, heading: Direction) -> Self {
        Self {
            position,
            heading,
            velocity: 0.0,
        }
    }

    /// Apply one actuator command.
    pub fn apply(&mut self, command: DriveCommand) {
        match command {
            DriveCommand::Forward { speed } => self.velocity = speed,
            DriveCommand::TurnClockwise => {
                self.velocity = 0.0;
                self.heading = self.heading.rotate(1);
            }
            DriveCommand::Halt => self.velocity = 0.0,
            DriveCommand::Idle => {}
        }
    }

    /// Integrate motion over `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let (dx, dz) = self.heading.delta();
        self.position.x += dx as f32 * self.velocity * dt;
        self.position.z += dz as f32 * self.velocity * dt;
    }

    /// Current body heading.
    pub fn heading(&self) -> Direction {
        self.heading
    }
}

impl AgentSenses for SimulatedAgent {
    fn position(&self) -> WorldPosition {
        self.position
    }

    fn capture(&mut self, _mount: CameraMount) -> CameraFrame {
        CameraFrame::compatible(FRAME_SIZE, FRAME_SIZE)
    }
}

/// Build a map with walls along the entire border.
pub fn bordered_map(size: GridSize) -> GridTileMap {
    let mut map = GridTileMap::new(size);
    for x in 0..size.width {
        map.place_wall(GridCoordinate::new(x, 0, size));
        map.place_wall(GridCoordinate::new(x, size.height - 1, size));
    }
    for z in 0..size.height {
        map.place_wall(GridCoordinate::new(0, z, size));
        map.place_wall(GridCoordinate::new(size.width - 1, z, size));
    }
    map
}

/// Outcome of a bounded simulation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    /// Ticks executed.
    pub ticks: usize,
    /// Whether the controller faulted during the run.
    pub broken: bool,
}

/// Drive the controller against the body and station for `ticks` ticks of
/// `dt` seconds each.
pub fn run_ticks<C: CoordinationChannel>(
    controller: &mut ExplorationController,
    agent: &mut SimulatedAgent,
    station: &mut C,
    ticks: usize,
    dt: f32,
) -> RunSummary {
    let mut executed = 0;
    for _ in 0..ticks {
        let command = controller.step(agent, station);
        agent.apply(command);
        agent.advance(dt);
        executed += 1;
        if controller.is_broken() {
            info!("[Harness] controller broke after {} ticks", executed);
            break;
        }
    }
    RunSummary {
        ticks: executed,
        broken: controller.is_broken(),
    }
}
