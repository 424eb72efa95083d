use sim::{Outcome, TelemetrySnapshot};

/// The one human-readable display string the host owns: a multi-line
/// diagnostic overlay for terminal dashboards. Everything else is the
/// display adapters' problem.
pub fn overlay_text(s: &TelemetrySnapshot) -> String {
    let status = match s.outcome {
        Some(Outcome::TargetReached) => "TARGET REACHED",
        Some(Outcome::OxygenDepleted) => "OXYGEN DEPLETED",
        None if s.boundary_warning => "BOUNDARY",
        None => "OK",
    };
    let secured = if s.target_secured {
        "  CARGO SECURED"
    } else {
        ""
    };
    format!(
        "HDG {:>5.1}  BRG {:>5.1}  SPD {:>5.1}%\n\
         DEPTH {:>6.1}  RANGE {:>5.1}%\n\
         O2 {:>5.1}%  BATT {:>5.1}%  [{status}]{secured}",
        s.compass_heading,
        s.heading_to_target,
        s.current_speed,
        s.depth,
        s.distance_to_target,
        s.oxygen_level,
        s.battery_level,
    )
}
