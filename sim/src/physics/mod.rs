mod util;
mod types;
mod terms;
mod boundary;
mod derived;
mod dynamics;

pub use boundary::{enforce_bounds, near_boundary};
pub use derived::update_navigation;
pub use dynamics::{step_vehicle, step_vehicle_dbg};
pub use types::StepDebug;

pub(crate) use terms::battery_drain_per_s;
