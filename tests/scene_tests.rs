use drapery::{
    BodyConfig, ClothMesh, EventQueue, NoOpStepObserver, RigidBody, Simulation, SolverConfig, Vec3,
};

fn sim() -> Simulation<f64> {
    Simulation::new(ClothMesh::new(2.0, 2.0, 8, 8).unwrap())
}

#[test]
fn large_dt_is_clamped() {
    let mut a = sim();
    let mut b = sim();
    a.step(1.0, &mut NoOpStepObserver);
    b.step(0.033f32 as f64, &mut NoOpStepObserver);
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn non_positive_dt_skips_frame() {
    let mut s = sim();
    let before = s.positions();
    let mut events = EventQueue::new();
    s.step(0.0, &mut events);
    s.step(-1.0, &mut events);
    s.step(f64::NAN, &mut events);
    assert_eq!(s.positions(), before);
    assert_eq!(events.steps, 0);
}

#[test]
fn bodies_fall_after_cloth_step() {
    let mut s = sim();
    let idx = s.add_body(RigidBody::sphere(Vec3::new(5.0, 1.0, 0.0), 0.2).unwrap());
    for _ in 0..240 {
        s.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    let body = s.bodies.get(idx).unwrap();
    assert!(body.position.y >= -1.8 - 1e-12);
    assert!(body.position.y < -1.7);
}

#[test]
fn custom_body_config_moves_the_floor() {
    let cloth = ClothMesh::new(1.0, 1.0, 2, 2).unwrap();
    let mut s = Simulation::with_config(cloth, SolverConfig::new(), BodyConfig::new().with_ground_height(0.0));
    s.add_body(RigidBody::cube(Vec3::new(10.0, 0.5, 0.0), 0.5).unwrap());
    for _ in 0..120 {
        s.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    assert!(s.bodies.get(0).unwrap().position.y >= 0.0);
}

#[test]
fn wind_is_reported_and_decays() {
    let mut s = sim();
    let mut events = EventQueue::new();
    s.add_wind(Vec3::new(0.0, 0.0, 2.0), &mut events);
    assert_eq!(events.gusts, [Vec3::new(0.0, 0.0, 2.0)]);
    for _ in 0..100 {
        s.step(1.0 / 60.0, &mut events);
    }
    assert!(s.cloth.wind.z < 0.02);
    assert_eq!(events.steps, 100);
}

#[test]
fn spawn_above_cloth_uses_nearest_particle_height() {
    let mut s = sim();
    let idx = s.spawn_above_cloth(RigidBody::sphere(Vec3::new(0.0, 0.0, 0.0), 0.1).unwrap(), 2.0);
    let expected = s.cloth.height_near(0.0, 0.0).unwrap() + 2.0;
    assert_eq!(s.bodies.get(idx).unwrap().position.y, expected);
}

#[test]
fn cloth_collisions_reach_observer() {
    let mut s = sim();
    s.add_body(RigidBody::cube(Vec3::new(0.0, -0.2, 0.0), 0.6).unwrap());
    let mut events = EventQueue::new();
    for _ in 0..30 {
        s.step(1.0 / 60.0, &mut events);
    }
    assert!(!events.collisions.is_empty());
    assert!(events.collisions.iter().all(|e| e.body == 0 && e.intensity >= 0.0));

    let (collisions, _, _) = events.drain();
    assert!(!collisions.is_empty());
    assert!(events.collisions.is_empty());
}

#[test]
fn reset_after_simulation_restores_cloth() {
    let mut s = sim();
    let initial = s.positions();
    s.add_wind(Vec3::new(1.0, 0.0, 1.0), &mut NoOpStepObserver);
    s.deform_area(40, Vec3::new(0.0, 0.0, 0.2), &mut NoOpStepObserver);
    for _ in 0..60 {
        s.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    s.reset();
    assert_eq!(s.positions(), initial);
    assert_eq!(s.cloth.wind, Vec3::zero());
}
