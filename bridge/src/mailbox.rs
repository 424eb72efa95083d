use parking_lot::Mutex;
use protocol::{Command, ControlFrame, DiscreteAction};
use sim::ControlState;

/// Everything adapters posted since the last drain.
#[derive(Debug, Default)]
pub struct MailboxDrain {
    /// Latest control frame, if any arrived. `None` means the previous
    /// values stay in effect.
    pub controls: Option<ControlFrame>,
    pub actions: Vec<DiscreteAction>,
    pub commands: Vec<Command>,
}

/// Shared mailbox input adapters write into from any thread. Control frames
/// are last-write-wins; discrete actions and lifecycle commands queue until
/// the next drain, which happens between ticks.
#[derive(Debug, Default)]
pub struct ControlMailbox {
    inner: Mutex<MailboxDrain>,
}

impl ControlMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter-side write. Frames are pre-clamped at the protocol edge; a
    /// non-finite value is the adapter's bug and passes straight through.
    pub fn post_controls(&self, frame: ControlFrame) {
        self.inner.lock().controls = Some(frame);
    }

    pub fn post_action(&self, action: DiscreteAction) {
        self.inner.lock().actions.push(action);
    }

    pub fn post_command(&self, command: Command) {
        self.inner.lock().commands.push(command);
    }

    /// Host-side drain between ticks.
    pub fn drain(&self) -> MailboxDrain {
        std::mem::take(&mut *self.inner.lock())
    }
}

/// Protocol frame into the core's control record.
pub fn control_state(frame: ControlFrame) -> ControlState {
    ControlState {
        throttle_left: frame.throttle_left,
        throttle_right: frame.throttle_right,
        pitch_elevator: frame.pitch_elevator,
        yaw_rudder: frame.yaw_rudder,
        vertical_thruster: frame.vertical_thruster,
    }
}
