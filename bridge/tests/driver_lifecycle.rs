use bridge::{ControlMailbox, FixedStepScheduler, NullSink};
use protocol::{Command, ControlFrame, DiscreteAction};
use sim::{scenarios, specs, Outcome, RunState, Simulation, Vec3, WorldSpec};

const TICK_HZ: f32 = 60.0;

fn close_target_world() -> WorldSpec {
    let mut world = scenarios::open_water();
    world.target = world.start + Vec3::new(0.0, 0.0, -10.0);
    world
}

fn running_simulation(world: WorldSpec) -> Simulation {
    let mut simulation = Simulation::new(specs::training_skiff_spec(), world);
    simulation.start();
    simulation
}

#[test]
fn full_throttle_run_reaches_the_target() {
    let mut simulation = running_simulation(close_target_world());
    let mailbox = ControlMailbox::new();
    let mut sink = NullSink;
    mailbox.post_controls(
        ControlFrame {
            throttle_left: 100.0,
            throttle_right: 100.0,
            ..ControlFrame::default()
        }
        .clamped(),
    );

    let budget = (TICK_HZ * 60.0) as u64;
    let driver = FixedStepScheduler::new(TICK_HZ);
    let executed = driver.run(&mut simulation, &mailbox, &mut sink, budget);

    assert_eq!(simulation.outcome(), Some(Outcome::TargetReached));
    assert_eq!(simulation.run_state(), RunState::Stopped);
    assert!(executed < budget, "the win should end the run early");
}

#[test]
fn emergency_all_stop_halts_motion_between_ticks() {
    let mut simulation = running_simulation(scenarios::open_water());
    let mailbox = ControlMailbox::new();
    let mut sink = NullSink;
    let driver = FixedStepScheduler::new(TICK_HZ);

    mailbox.post_controls(ControlFrame {
        throttle_left: 100.0,
        throttle_right: 100.0,
        ..ControlFrame::default()
    });
    driver.run(&mut simulation, &mailbox, &mut sink, 120);
    assert!(simulation.state().velocity.length() > 0.0);

    mailbox.post_action(DiscreteAction::EmergencyAllStop);
    driver.run(&mut simulation, &mailbox, &mut sink, 1);

    assert_eq!(simulation.state().velocity, Vec3::ZERO);
    assert_eq!(simulation.state().controls.throttle_left, 0.0);
    assert_eq!(simulation.state().controls.throttle_right, 0.0);
}

#[test]
fn stop_command_freezes_simulated_time() {
    let mut simulation = running_simulation(scenarios::open_water());
    let mailbox = ControlMailbox::new();
    let mut sink = NullSink;
    let driver = FixedStepScheduler::new(TICK_HZ);

    driver.run(&mut simulation, &mailbox, &mut sink, 30);
    let frozen_at = simulation.state().time.elapsed;
    assert!(frozen_at > 0.0);

    mailbox.post_command(Command::Stop);
    driver.run(&mut simulation, &mailbox, &mut sink, 120);

    assert_eq!(simulation.run_state(), RunState::Stopped);
    assert_eq!(simulation.state().time.elapsed, frozen_at);
}

#[test]
fn boundary_contact_is_a_hard_stop_for_the_run() {
    let mut world = scenarios::open_water();
    // Start just shy of the eastern wall, pointing at it.
    world.start = Vec3::new(world.boundary - 2.0, 0.0, 0.0);
    let mut simulation = running_simulation(world.clone());
    simulation.state_mut().rotation.y = 270.0; // nose toward +x
    simulation.state_mut().velocity = Vec3::new(5.0, 0.0, 0.0);

    let mailbox = ControlMailbox::new();
    let mut sink = NullSink;
    let driver = FixedStepScheduler::new(TICK_HZ);
    driver.run(&mut simulation, &mailbox, &mut sink, 120);

    let state = simulation.state();
    assert_eq!(state.position.x, world.boundary - 0.5);
    assert_eq!(state.velocity, Vec3::ZERO);
    assert!(state.status.boundary_warning);
}
