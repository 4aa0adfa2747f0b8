//! Per-step cloth solver: forces, Verlet integration, collision, relaxation.

use crate::body::RigidBodySet;
use crate::config::SolverConfig;
use crate::float::Float;
use crate::grid::ClothMesh;
use crate::observer::StepObserver;

/// Advances a [`ClothMesh`] one frame at a time against a [`RigidBodySet`].
///
/// The phase order is fixed: force accumulation, integration with ground and
/// body collision, `iterations` relaxation passes each followed by a body
/// collision pass, then wind decay.
#[derive(Clone, Debug, Default)]
pub struct ClothSolver<F: Float> {
    config: SolverConfig<F>,
}

impl<F: Float> ClothSolver<F> {
    pub fn new(config: SolverConfig<F>) -> Self {
        ClothSolver { config }
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SolverConfig<F> {
        &mut self.config
    }

    /// Run one step. `dt` is used as given; clamp it before calling.
    pub fn step<O: StepObserver<F>>(
        &self,
        cloth: &mut ClothMesh<F>,
        bodies: &RigidBodySet<F>,
        dt: F,
        observer: &mut O,
    ) {
        self.accumulate_forces(cloth);
        self.integrate(cloth, bodies, dt, observer);
        observer.on_integrate();

        for i in 0..self.config.iterations {
            self.relax(cloth);
            self.collide_bodies(cloth, bodies, observer);
            observer.on_constraint_iteration(i);
        }

        cloth.wind = cloth.wind.scale(self.config.wind_decay);
        observer.on_step_complete();
    }

    fn accumulate_forces(&self, cloth: &mut ClothMesh<F>) {
        let accel = self.config.gravity + cloth.wind;
        for p in cloth.particles_mut().iter_mut().filter(|p| !p.pinned) {
            p.acceleration = accel;
        }
    }

    fn integrate<O: StepObserver<F>>(
        &self,
        cloth: &mut ClothMesh<F>,
        bodies: &RigidBodySet<F>,
        dt: F,
        observer: &mut O,
    ) {
        let c = &self.config;
        for p in cloth.particles_mut().iter_mut().filter(|p| !p.pinned) {
            p.integrate(dt, c.damping);
            p.collide_ground(c.ground_height, c.ground_bounce);
            bodies.check_collisions(p, c.body_bounce, observer);
        }
    }

    /// One pass over every spring.
    fn relax(&self, cloth: &mut ClothMesh<F>) {
        let (particles, springs) = cloth.parts_mut();
        for s in springs {
            s.solve(particles, self.config.stiffness);
        }
    }

    fn collide_bodies<O: StepObserver<F>>(&self, cloth: &mut ClothMesh<F>, bodies: &RigidBodySet<F>, observer: &mut O) {
        if bodies.is_empty() {
            return;
        }
        for p in cloth.particles_mut().iter_mut().filter(|p| !p.pinned) {
            bodies.check_collisions(p, self.config.body_bounce, observer);
        }
    }
}
