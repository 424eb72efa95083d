use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// The bounded water volume a run takes place in, plus the navigation target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSpec {
    /// Half-extent of the playable volume on x and z.
    pub boundary: f32,
    pub seabed_y: f32,
    pub surface_y: f32,
    /// Depth gauge ceiling; the displayed depth never exceeds this.
    pub max_depth: f32,
    /// Distance that maps to 100% on the range gauge.
    pub max_distance: f32,
    pub start: Vec3,
    pub target: Vec3,
}

pub mod scenarios {
    use super::*;

    /// Default training volume: open water, target a kilometer out.
    pub fn open_water() -> WorldSpec {
        WorldSpec {
            boundary: 1000.0,
            seabed_y: -100.0,
            surface_y: 100.0,
            max_depth: 100.0,
            max_distance: 2000.0,
            start: Vec3::new(0.0, 50.0, 0.0),
            target: Vec3::new(0.0, 0.0, -1000.0),
        }
    }

    /// Narrow east-west corridor hugging the seabed; the tight horizontal
    /// extent keeps the proximity warning in play for most of the run.
    pub fn trench_run() -> WorldSpec {
        WorldSpec {
            boundary: 400.0,
            seabed_y: -100.0,
            surface_y: 100.0,
            max_depth: 100.0,
            max_distance: 1200.0,
            start: Vec3::new(-300.0, -60.0, 0.0),
            target: Vec3::new(320.0, -80.0, 40.0),
        }
    }
}
