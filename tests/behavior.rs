//! Behavior-level scenarios driven through a counting station double.

use yatra_nav::agent::{AgentSenses, CameraFrame, CameraMount, CellImage, DriveCommand};
use yatra_nav::core::{Direction, GridCoordinate, GridSize, WorldPosition};
use yatra_nav::explore::{BehaviorConfig, ExplorationController, Phase};
use yatra_nav::harness::{bordered_map, run_ticks, SimulatedAgent};
use yatra_nav::map::{GridTileMap, Tile};
use yatra_nav::station::{CoordinationChannel, LocalStation, SharedStation};

/// Senses double pinned to one position, counting frame captures.
struct PinnedSenses {
    position: WorldPosition,
    captures: usize,
}

impl PinnedSenses {
    fn at(x: f32, z: f32) -> Self {
        Self {
            position: WorldPosition::new(x, 0.3, z),
            captures: 0,
        }
    }
}

impl AgentSenses for PinnedSenses {
    fn position(&self) -> WorldPosition {
        self.position
    }

    fn capture(&mut self, _mount: CameraMount) -> CameraFrame {
        self.captures += 1;
        CameraFrame::compatible(4, 4)
    }
}

/// Station double recording every collaborator call.
struct CountingStation {
    inner: LocalStation,
    position_reports: Vec<GridCoordinate>,
    covered_reports: Vec<GridCoordinate>,
}

impl CountingStation {
    fn over(map: GridTileMap) -> Self {
        Self {
            inner: LocalStation::new(map),
            position_reports: Vec::new(),
            covered_reports: Vec::new(),
        }
    }

    fn open(width: i32, height: i32) -> Self {
        Self::over(GridTileMap::new(GridSize::new(width, height)))
    }

    fn call_count(&self) -> usize {
        self.position_reports.len() + self.covered_reports.len() + self.inner.images().len()
    }
}

impl CoordinationChannel for CountingStation {
    fn report_position(&mut self, coordinate: GridCoordinate) {
        self.position_reports.push(coordinate);
        self.inner.report_position(coordinate);
    }

    fn report_covered_area(&mut self, coordinate: GridCoordinate) {
        self.covered_reports.push(coordinate);
        self.inner.report_covered_area(coordinate);
    }

    fn submit_image(&mut self, image: CellImage) {
        self.inner.submit_image(image);
    }

    fn query_tile(&self, coordinate: GridCoordinate) -> Option<Tile> {
        self.inner.query_tile(coordinate)
    }

    fn query_grid_size(&self) -> GridSize {
        self.inner.query_grid_size()
    }
}

fn deterministic(fault: f64, turn: f64) -> BehaviorConfig {
    BehaviorConfig {
        fault_probability: fault,
        turn_probability: turn,
        rng_seed: 3,
        ..BehaviorConfig::default()
    }
}

#[test]
fn test_sweep_images_the_three_side_cells_once() {
    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);
    let mut station = CountingStation::open(10, 10);
    let size = station.query_grid_size();

    let command = controller.step(&mut senses, &mut station);

    // Facing east: right = south (5,6), back = west (4,5), left = north (5,4).
    let right = GridCoordinate::new(5, 6, size);
    let back = GridCoordinate::new(4, 5, size);
    let left = GridCoordinate::new(5, 4, size);

    assert_eq!(senses.captures, 3);
    assert_eq!(station.inner.images().len(), 3);
    let imaged: Vec<GridCoordinate> = station.inner.images().iter().map(|i| i.cell).collect();
    assert_eq!(imaged, vec![right, back, left]);

    // Coverage is reported for the three imaged cells plus the trail cell
    // behind the agent; behind coincides with the back camera's cell, so the
    // map ends up with exactly three covered cells.
    assert_eq!(station.covered_reports, vec![right, back, left, back]);
    assert_eq!(station.inner.map().covered_count(), 3);
    assert_eq!(station.position_reports, vec![GridCoordinate::new(5, 5, size)]);
    assert_eq!(command, DriveCommand::Forward { speed: 1.0 });
}

#[test]
fn test_covered_neighbors_are_never_imaged_again() {
    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);
    let mut station = CountingStation::open(10, 10);

    controller.step(&mut senses, &mut station);
    assert_eq!(senses.captures, 3);

    // Same spot next tick: every side cell is already covered.
    controller.step(&mut senses, &mut station);
    assert_eq!(senses.captures, 3);
    assert_eq!(station.inner.images().len(), 3);
}

#[test]
fn test_image_metadata_carries_cell_and_camera_facing() {
    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);
    let mut station = CountingStation::open(10, 10);

    controller.step(&mut senses, &mut station);

    let headings: Vec<Direction> = station.inner.images().iter().map(|i| i.heading).collect();
    assert_eq!(
        headings,
        vec![Direction::South, Direction::West, Direction::North]
    );
}

#[test]
fn test_wall_ahead_forces_a_clockwise_turn() {
    let size = GridSize::new(10, 10);
    let mut map = GridTileMap::new(size);
    // Wall directly east of the agent.
    map.place_wall(GridCoordinate::new(6, 5, size));
    let mut station = CountingStation::over(map);

    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);

    let command = controller.step(&mut senses, &mut station);

    assert_eq!(command, DriveCommand::TurnClockwise);
    assert_eq!(controller.heading(), Direction::South);
}

#[test]
fn test_grid_edge_ahead_counts_as_blocked() {
    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(9.0, 5.0);
    let mut station = CountingStation::open(10, 10);

    let command = controller.step(&mut senses, &mut station);

    assert_eq!(command, DriveCommand::TurnClockwise);
    assert_eq!(controller.heading(), Direction::South);
}

#[test]
fn test_certain_turn_chance_rotates_once_per_tick() {
    let mut controller = ExplorationController::new(deterministic(0.0, 1.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);
    let mut station = CountingStation::open(10, 10);

    assert_eq!(
        controller.step(&mut senses, &mut station),
        DriveCommand::TurnClockwise
    );
    assert_eq!(controller.heading(), Direction::South);

    assert_eq!(
        controller.step(&mut senses, &mut station),
        DriveCommand::TurnClockwise
    );
    assert_eq!(controller.heading(), Direction::West);
}

#[test]
fn test_fault_latches_and_silences_every_later_tick() {
    let mut controller = ExplorationController::new(deterministic(1.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(5.0, 5.0);
    let mut station = CountingStation::open(10, 10);

    let command = controller.step(&mut senses, &mut station);
    assert_eq!(command, DriveCommand::Halt);
    assert_eq!(controller.phase(), Phase::Broken);

    let calls_after_fault = station.call_count();
    let captures_after_fault = senses.captures;

    for _ in 0..5 {
        assert_eq!(
            controller.step(&mut senses, &mut station),
            DriveCommand::Idle
        );
    }
    assert_eq!(station.call_count(), calls_after_fault);
    assert_eq!(senses.captures, captures_after_fault);
}

#[test]
fn test_off_grid_agent_still_reports_but_holds() {
    let mut controller = ExplorationController::new(deterministic(0.0, 0.0), 1.0);
    let mut senses = PinnedSenses::at(12.0, 5.0);
    let mut station = CountingStation::open(10, 10);
    let size = station.query_grid_size();

    let command = controller.step(&mut senses, &mut station);

    assert_eq!(command, DriveCommand::Idle);
    assert_eq!(controller.phase(), Phase::Running);
    // Position is still reported; the off-grid trail cell is dropped.
    assert_eq!(
        station.position_reports,
        vec![GridCoordinate::new(12, 5, size)]
    );
    assert_eq!(station.inner.map().covered_count(), 0);
}

#[test]
fn test_boundary_coordinate_is_off_grid() {
    let size = GridSize::new(10, 10);
    assert!(!GridCoordinate::new(10, 5, size).is_on_grid());
    assert!(!GridCoordinate::new(5, 10, size).is_on_grid());
    assert!(GridCoordinate::new(9, 9, size).is_on_grid());
}

#[test]
fn test_two_agents_share_one_station() {
    let size = GridSize::new(12, 12);
    let shared = SharedStation::new(LocalStation::new(bordered_map(size)));

    let mut station_a = shared.clone();
    let mut station_b = shared.clone();
    let mut agent_a = SimulatedAgent::new(WorldPosition::new(3.0, 0.0, 3.0), Direction::East);
    let mut agent_b = SimulatedAgent::new(WorldPosition::new(8.0, 0.0, 8.0), Direction::West);
    let mut controller_a = ExplorationController::new(deterministic(0.0, 0.01), 1.0);
    let mut controller_b = ExplorationController::new(deterministic(0.0, 0.01), 1.0);

    for _ in 0..400 {
        let command = controller_a.step(&mut agent_a, &mut station_a);
        agent_a.apply(command);
        agent_a.advance(0.1);

        let command = controller_b.step(&mut agent_b, &mut station_b);
        agent_b.apply(command);
        agent_b.advance(0.1);
    }

    let covered = shared.with(|s| s.map().covered_count()).unwrap();
    assert!(covered > 0);
    // Every imaged cell was marked covered the moment it was imaged, and
    // covered cells are skipped by later sweeps from either agent.
    let images = shared.with(|s| s.images().len()).unwrap();
    assert!(images <= covered, "each covered cell is imaged at most once");
}

#[test]
fn test_walled_arena_run_covers_cells_without_escaping() {
    let size = GridSize::new(10, 10);
    let mut station = LocalStation::new(bordered_map(size));
    let mut agent = SimulatedAgent::new(WorldPosition::new(5.0, 0.0, 5.0), Direction::East);
    let mut controller = ExplorationController::new(deterministic(0.0, 0.01), 1.0);

    let summary = run_ticks(&mut controller, &mut agent, &mut station, 3000, 0.1);

    assert!(!summary.broken);
    assert!(station.map().covered_count() > 4);
    let last = controller.last_coordinate().unwrap();
    assert!(last.is_on_grid());
    assert_ne!(station.query_tile(last), Some(Tile::Wall));
}
