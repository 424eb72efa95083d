use sim::{scenarios, specs, update_navigation, Vec3, VehicleState};

fn state_at(position: Vec3) -> VehicleState {
    let mut state = VehicleState::reset(&scenarios::open_water());
    state.position = position;
    state
}

#[test]
fn depth_endpoints_match_the_surface_convention() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();

    let mut at_surface = state_at(Vec3::new(0.0, 100.0, 0.0));
    update_navigation(&spec, &world, &mut at_surface);
    assert_eq!(at_surface.status.depth, 0.0);

    let mut mid = state_at(Vec3::new(0.0, 0.0, 0.0));
    update_navigation(&spec, &world, &mut mid);
    assert_eq!(mid.status.depth, 100.0);
}

#[test]
fn depth_caps_at_the_gauge_ceiling_but_goes_negative_above() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();

    let mut deep = state_at(Vec3::new(0.0, -80.0, 0.0));
    update_navigation(&spec, &world, &mut deep);
    assert_eq!(deep.status.depth, world.max_depth);

    let mut breached = state_at(Vec3::new(0.0, 110.0, 0.0));
    update_navigation(&spec, &world, &mut breached);
    assert_eq!(breached.status.depth, -10.0);
}

#[test]
fn distance_scales_against_max_distance() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();
    let mut state = state_at(Vec3::ZERO);
    state.navigation.target_position = Vec3::new(0.0, 0.0, -1000.0);

    update_navigation(&spec, &world, &mut state);
    let expected = 1000.0 / world.max_distance * 100.0;
    assert!((state.navigation.distance_to_target - expected).abs() < 1e-3);
}

#[test]
fn distance_caps_at_one_hundred() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();
    let mut state = state_at(Vec3::ZERO);
    state.navigation.target_position = Vec3::new(0.0, 0.0, world.max_distance * 3.0);

    update_navigation(&spec, &world, &mut state);
    assert_eq!(state.navigation.distance_to_target, 100.0);
}

#[test]
fn bearing_zero_is_dead_ahead_on_minus_z() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();

    let mut ahead = state_at(Vec3::ZERO);
    ahead.navigation.target_position = Vec3::new(0.0, 0.0, -500.0);
    update_navigation(&spec, &world, &mut ahead);
    assert!(ahead.navigation.heading_to_target.abs() < 1e-3);

    let mut east = state_at(Vec3::ZERO);
    east.navigation.target_position = Vec3::new(500.0, 0.0, 0.0);
    update_navigation(&spec, &world, &mut east);
    assert!((east.navigation.heading_to_target - 90.0).abs() < 1e-3);

    let mut astern = state_at(Vec3::ZERO);
    astern.navigation.target_position = Vec3::new(0.0, 0.0, 500.0);
    update_navigation(&spec, &world, &mut astern);
    assert!((astern.navigation.heading_to_target - 180.0).abs() < 1e-3);
}

#[test]
fn compass_wraps_into_the_circle() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();

    let mut state = state_at(Vec3::ZERO);
    state.rotation.y = -90.0;
    update_navigation(&spec, &world, &mut state);
    assert!((state.navigation.compass_heading - 270.0).abs() < 1e-3);

    state.rotation.y = 725.0;
    update_navigation(&spec, &world, &mut state);
    assert!((state.navigation.compass_heading - 5.0).abs() < 1e-3);

    state.rotation.y = 360.0;
    update_navigation(&spec, &world, &mut state);
    assert_eq!(state.navigation.compass_heading, 0.0);
}

#[test]
fn speed_gauge_is_deliberately_uncapped() {
    let spec = specs::training_skiff_spec();
    let world = scenarios::open_water();
    let mut state = state_at(Vec3::ZERO);
    state.velocity = Vec3::new(0.0, 0.0, -2.0 * spec.max_speed);

    update_navigation(&spec, &world, &mut state);
    assert!((state.navigation.current_speed - 200.0).abs() < 1e-3);
}
