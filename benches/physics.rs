//! Benchmarks for drapery cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drapery::*;

fn bench_mesh_build(c: &mut Criterion) {
    c.bench_function("mesh_50x50_build", |b| {
        b.iter(|| {
            let cloth: ClothMesh<f32> = ClothMesh::new(3.0, 3.0, 50, 50).unwrap();
            cloth.spring_count()
        });
    });
}

fn bench_hanging_cloth(c: &mut Criterion) {
    c.bench_function("cloth_20x20_60_steps", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> = ClothMesh::new(3.0, 3.0, 20, 20).unwrap();
            let solver = ClothSolver::new(SolverConfig::new());
            let bodies = RigidBodySet::new();
            for _ in 0..60 {
                solver.step(&mut cloth, &bodies, 1.0 / 60.0, &mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_cloth_with_bodies(c: &mut Criterion) {
    c.bench_function("cloth_20x20_sphere_box_60_steps", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> = ClothMesh::new(3.0, 3.0, 20, 20).unwrap();
            let mut bodies = RigidBodySet::new();
            bodies.add(RigidBody::sphere(Vec3::new(0.0, -0.3, 0.2), 0.6).unwrap());
            bodies.add(RigidBody::cube(Vec3::new(0.8, -1.0, 0.0), 0.5).unwrap());
            let solver = ClothSolver::new(SolverConfig::new());
            for _ in 0..60 {
                solver.step(&mut cloth, &bodies, 1.0 / 60.0, &mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_simulation_with_events(c: &mut Criterion) {
    c.bench_function("simulation_30x30_events_60_steps", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(ClothMesh::new(3.0f32, 3.0, 30, 30).unwrap());
            sim.add_body(RigidBody::sphere(Vec3::new(0.0, 0.0, 0.1), 0.5).unwrap());
            let mut events = EventQueue::new();
            sim.add_wind(Vec3::new(0.0, 0.0, 2.0), &mut events);
            for _ in 0..60 {
                sim.step(1.0 / 60.0, &mut events);
            }
            events.collisions.len()
        });
    });
}

criterion_group!(
    benches,
    bench_mesh_build,
    bench_hanging_cloth,
    bench_cloth_with_bodies,
    bench_simulation_with_events,
);
criterion_main!(benches);
