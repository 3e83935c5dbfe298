//! Agent body abstraction: sensor inputs and actuator commands.
//!
//! Implement [`AgentSenses`] to connect the exploration controller to robot
//! hardware or to a simulation host. The controller reads the continuous
//! position every tick and captures camera frames only for cells that still
//! need imaging.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridCoordinate, WorldPosition};

/// Body-fixed camera mounts, named by where they point relative to forward.
///
/// Mount angles are fixed at construction: right = −90°, back = 180°,
/// left = +90° from the agent's forward axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMount {
    Right,
    Back,
    Left,
}

impl CameraMount {
    /// All mounts in sweep order (right, back, left).
    pub const ALL: [CameraMount; 3] = [CameraMount::Right, CameraMount::Back, CameraMount::Left];

    /// Clockwise rotation steps from the agent's forward direction to the
    /// direction this mount faces.
    #[inline]
    pub fn rotation_steps(self) -> u32 {
        match self {
            CameraMount::Right => 1,
            CameraMount::Back => 2,
            CameraMount::Left => 3,
        }
    }

    /// The absolute direction this mount faces for a given agent heading.
    #[inline]
    pub fn facing(self, heading: Direction) -> Direction {
        heading.rotate(self.rotation_steps())
    }

    /// Mount name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            CameraMount::Right => "right",
            CameraMount::Back => "back",
            CameraMount::Left => "left",
        }
    }
}

/// A still frame captured from one camera mount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Row-major grayscale pixels, `width * height` bytes.
    pub pixels: Vec<u8>,
}

impl CameraFrame {
    /// Allocate a zeroed frame compatible with the sensor's resolution.
    pub fn compatible(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }
}

/// A captured frame keyed by the cell it shows and the absolute direction
/// the camera faced. This is the unit submitted to the coordination station.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellImage {
    /// The grid cell the image shows.
    pub cell: GridCoordinate,
    /// Absolute direction the camera faced at capture time.
    pub heading: Direction,
    /// The captured frame.
    pub frame: CameraFrame,
}

/// Sensor inputs the controller consumes each tick.
pub trait AgentSenses {
    /// The agent's current continuous world position.
    fn position(&self) -> WorldPosition;

    /// Capture a still frame from the given camera mount.
    fn capture(&mut self, mount: CameraMount) -> CameraFrame;
}

/// Actuator command produced by one controller tick, applied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriveCommand {
    /// Drive forward along the current heading at the given speed (m/s).
    Forward { speed: f32 },

    /// Stop translation and rotate the body one quarter turn clockwise.
    TurnClockwise,

    /// Stop translation.
    Halt,

    /// No command this tick.
    Idle,
}

impl DriveCommand {
    /// Command name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            DriveCommand::Forward { .. } => "forward",
            DriveCommand::TurnClockwise => "turn",
            DriveCommand::Halt => "halt",
            DriveCommand::Idle => "idle",
        }
    }
}
