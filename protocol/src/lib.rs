//! Wire contracts between the simulation host, input adapters and display
//! adapters.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Absolute bound of every control axis, in percent.
pub const CONTROL_RANGE: f32 = 100.0;

/// Latest-value control percentages. Adapters clamp before sending; the core
/// reads whatever arrives, so a non-finite value written here would
/// contaminate the simulation state. Validating device input is the
/// adapter's job, not the host's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlFrame {
    pub throttle_left: f32,
    pub throttle_right: f32,
    pub pitch_elevator: f32,
    pub yaw_rudder: f32,
    pub vertical_thruster: f32,
}

impl ControlFrame {
    /// Clamp every axis into [-100, 100]. Adapters call this before writing.
    pub fn clamped(self) -> Self {
        Self {
            throttle_left: self.throttle_left.clamp(-CONTROL_RANGE, CONTROL_RANGE),
            throttle_right: self.throttle_right.clamp(-CONTROL_RANGE, CONTROL_RANGE),
            pitch_elevator: self.pitch_elevator.clamp(-CONTROL_RANGE, CONTROL_RANGE),
            yaw_rudder: self.yaw_rudder.clamp(-CONTROL_RANGE, CONTROL_RANGE),
            vertical_thruster: self.vertical_thruster.clamp(-CONTROL_RANGE, CONTROL_RANGE),
        }
    }
}

/// One-shot actions, handled synchronously outside the tick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscreteAction {
    GrabTarget,
    EmergencyAllStop,
}

/// Lifecycle commands for the tick driver. `Restart` stops immediately and
/// relaunches after a fixed settle delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Stop,
    Restart,
}

/// Messages from an input adapter to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdapterToHost {
    Hello { adapter: Uuid, name: String },
    Controls(ControlFrame),
    Action(DiscreteAction),
    Command(Command),
}

/// Snapshot pushed to display adapters after each UI-refresh cycle. Flat
/// fields only; gauges remap these into their own presentation ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// Changes on every restart.
    pub session: Uuid,
    pub seq: u64,
    pub position: [f32; 3],
    /// Euler degrees: pitch, yaw, roll.
    pub rotation: [f32; 3],
    pub compass_heading: f32,
    pub current_speed: f32,
    pub distance_to_target: f32,
    pub heading_to_target: f32,
    pub depth: f32,
    pub oxygen_level: f32,
    pub battery_level: f32,
    pub boundary_warning: bool,
    pub target_secured: bool,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("encode failed: {0}")]
    Encode(#[source] bincode::Error),
    #[error("decode failed: {0}")]
    Decode(#[source] bincode::Error),
}

pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    bincode::serialize(msg).map_err(ProtocolError::Encode)
}

pub fn decode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, ProtocolError> {
    bincode::deserialize(bytes).map_err(ProtocolError::Decode)
}
