use protocol::TelemetryFrame;
use sim::TelemetrySnapshot;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Display-adapter seam: receives a read-only snapshot once per UI-refresh
/// cycle. Gauges and dashboards implement this; the core never knows them.
pub trait TelemetrySink {
    fn refresh(&mut self, snapshot: &TelemetrySnapshot);

    /// Called when a restart begins a new run.
    fn begin_session(&mut self) {}
}

/// Sink that drops everything. Test scaffolding.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn refresh(&mut self, _snapshot: &TelemetrySnapshot) {}
}

/// Bundled sink: stamps protocol frames with a session id and emits them to
/// the log stream.
pub struct LogSink {
    session: Uuid,
    seq: u64,
    log_telemetry: bool,
}

impl LogSink {
    pub fn new(log_telemetry: bool) -> Self {
        Self {
            session: Uuid::new_v4(),
            seq: 0,
            log_telemetry,
        }
    }

    /// Stamp the next wire frame for this session.
    pub fn frame(&mut self, snapshot: &TelemetrySnapshot) -> TelemetryFrame {
        self.seq += 1;
        TelemetryFrame {
            session: self.session,
            seq: self.seq,
            position: snapshot.position.to_array(),
            rotation: snapshot.rotation.to_array(),
            compass_heading: snapshot.compass_heading,
            current_speed: snapshot.current_speed,
            distance_to_target: snapshot.distance_to_target,
            heading_to_target: snapshot.heading_to_target,
            depth: snapshot.depth,
            oxygen_level: snapshot.oxygen_level,
            battery_level: snapshot.battery_level,
            boundary_warning: snapshot.boundary_warning,
            target_secured: snapshot.target_secured,
        }
    }
}

impl TelemetrySink for LogSink {
    fn refresh(&mut self, snapshot: &TelemetrySnapshot) {
        let frame = self.frame(snapshot);
        if self.log_telemetry {
            debug!(
                seq = frame.seq,
                heading = frame.compass_heading,
                speed = frame.current_speed,
                depth = frame.depth,
                range = frame.distance_to_target,
                "telemetry"
            );
        }
        if frame.boundary_warning {
            warn!("boundary proximity warning");
        }
        if let Some(outcome) = snapshot.outcome {
            info!(?outcome, oxygen = frame.oxygen_level, "run ended");
        }
    }

    fn begin_session(&mut self) {
        self.session = Uuid::new_v4();
        self.seq = 0;
    }
}
