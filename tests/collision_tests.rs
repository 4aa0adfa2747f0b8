use drapery::{ClothParticle, EventQueue, RigidBody, RigidBodySet, Shape, ShapeKind, Vec3};

#[test]
fn sphere_resolution_always_clears_surface() {
    let center = Vec3::new(0.3, -0.2, 0.1);
    let radius = 0.75;
    let sphere = Shape::sphere(radius).unwrap();
    let steps = [-0.6, -0.35, -0.1, 0.15, 0.4, 0.65];
    let velocities = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, -0.2, 0.0),
        Vec3::new(0.1, 0.1, -0.3),
        Vec3::new(-0.5, 0.0, 0.5),
    ];

    for &dx in &steps {
        for &dy in &steps {
            for &dz in &steps {
                let start = center + Vec3::new(dx, dy, dz);
                for &v in &velocities {
                    let mut pos = start;
                    let mut prev = start - v;
                    sphere.resolve(center, &mut pos, &mut prev, 0.3);
                    let d = pos.distance(center);
                    assert!(d >= radius - 1e-9, "{:?} ended {} from center", start, d);
                }
            }
        }
    }
}

#[test]
fn sphere_leaving_particle_keeps_velocity() {
    let sphere = Shape::sphere(1.0f64).unwrap();
    let mut pos = Vec3::new(0.0, 0.9, 0.0);
    let mut prev = Vec3::new(0.0, 0.5, 0.0);
    assert_eq!(sphere.resolve(Vec3::zero(), &mut pos, &mut prev, 0.3), None);
    assert!((pos.y - 1.0).abs() < 1e-12);
    assert_eq!(prev, Vec3::new(0.0, 0.5, 0.0));
}

#[test]
fn box_resolves_along_least_penetration_axis() {
    let cube = Shape::cube(8.0f64).unwrap();
    let mut pos = Vec3::new(3.0, 2.0, 1.0);
    let mut prev = Vec3::new(2.5, 2.0, 1.0);

    let intensity = cube.resolve(Vec3::zero(), &mut pos, &mut prev, 0.3).unwrap();

    assert_eq!(pos, Vec3::new(4.0, 2.0, 1.0));
    // speed = 4.0 - 2.5, prev = pos - speed * bounce
    assert!((prev.x - (4.0 - 1.5 * 0.3)).abs() < 1e-12);
    assert_eq!(prev.y, 2.0);
    assert_eq!(prev.z, 1.0);
    assert!((intensity - 1.5 * (0.3f32 as f64)).abs() < 1e-9);
}

#[test]
fn box_uses_negative_face_for_negative_offsets() {
    let cube = Shape::cuboid(Vec3::new(1.0f32, 2.0, 2.0)).unwrap();
    let center = Vec3::new(5.0, 0.0, 0.0);
    let mut pos = Vec3::new(4.2, 0.0, 0.0);
    let mut prev = pos;
    cube.resolve(center, &mut pos, &mut prev, 0.3);
    assert_eq!(pos.x, 4.0);
}

#[test]
fn overlapping_bodies_resolve_in_order() {
    let mut bodies = RigidBodySet::new();
    bodies.add(RigidBody::cube(Vec3::new(0.0f64, 0.0, 0.0), 2.0).unwrap());
    bodies.add(RigidBody::sphere(Vec3::new(0.0, 0.5, 0.0), 1.0).unwrap());

    // Inside the box near its top face; the box pushes it up to y = 1.0,
    // which is inside the sphere, so the sphere then lifts it further.
    let mut p = ClothParticle::new(Vec3::new(0.0, 0.9, 0.0), false);
    p.prev_pos = Vec3::new(0.0, 1.2, 0.0);
    let mut events = EventQueue::new();
    bodies.check_collisions(&mut p, 0.3, &mut events);

    assert!((p.pos.y - 1.5).abs() < 1e-12, "ended at {}", p.pos.y);
    let kinds: Vec<_> = events.collisions.iter().map(|e| (e.body, e.kind)).collect();
    assert_eq!(kinds[0], (0, ShapeKind::Box));
    assert!(kinds.len() <= 2);
}

#[test]
fn pinned_particles_are_not_collided() {
    let mut bodies = RigidBodySet::new();
    bodies.add(RigidBody::sphere(Vec3::zero(), 1.0f32).unwrap());
    let mut p = ClothParticle::new(Vec3::new(0.2, 0.0, 0.0), true);
    let mut events = EventQueue::new();
    bodies.check_collisions(&mut p, 0.3, &mut events);
    assert_eq!(p.pos, Vec3::new(0.2, 0.0, 0.0));
    assert!(events.collisions.is_empty());
}
