//! Scene driver tying one cloth, its bodies and the solvers together.

use crate::body::{RigidBody, RigidBodySet};
use crate::config::{BodyConfig, SolverConfig};
use crate::float::Float;
use crate::grid::ClothMesh;
use crate::interaction::Deformer;
use crate::observer::StepObserver;
use crate::solver::ClothSolver;
use crate::vec::Vec3;

/// Everything a host needs to run the cloth once per frame.
///
/// ```
/// use drapery::{ClothMesh, RigidBody, Simulation, EventQueue, Vec3};
///
/// let cloth = ClothMesh::new(3.0f32, 3.0, 20, 20).unwrap();
/// let mut sim = Simulation::new(cloth);
/// sim.add_body(RigidBody::sphere(Vec3::new(0.0, 1.0, 0.5), 0.3).unwrap());
///
/// let mut events = EventQueue::new();
/// sim.add_wind(Vec3::new(0.0, 0.0, 2.0), &mut events);
/// for _ in 0..10 {
///     sim.step(1.0 / 60.0, &mut events);
/// }
/// assert_eq!(sim.positions().len(), 21 * 21);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    pub cloth: ClothMesh<F>,
    pub bodies: RigidBodySet<F>,
    pub solver: ClothSolver<F>,
    pub body_config: BodyConfig<F>,
    pub deformer: Deformer<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(cloth: ClothMesh<F>) -> Self {
        Self::with_config(cloth, SolverConfig::new(), BodyConfig::new())
    }

    pub fn with_config(cloth: ClothMesh<F>, solver: SolverConfig<F>, bodies: BodyConfig<F>) -> Self {
        Simulation {
            cloth,
            bodies: RigidBodySet::new(),
            solver: ClothSolver::new(solver),
            body_config: bodies,
            deformer: Deformer::new(),
        }
    }

    /// Advance one frame: cloth first, then the bodies' own free fall.
    ///
    /// `dt` is clamped to the solver's `max_dt`; a non-positive or non-finite
    /// `dt` skips the frame.
    pub fn step<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        if !dt.is_finite() {
            log::warn!("ignoring non-finite dt {:?}", dt);
            return;
        }
        if !dt.is_positive() {
            log::trace!("skipping frame with dt {:?}", dt);
            return;
        }
        let max_dt = self.solver.config().max_dt;
        let dt = if dt > max_dt {
            log::trace!("clamping dt {:?} to {:?}", dt, max_dt);
            max_dt
        } else {
            dt
        };

        self.solver.step(&mut self.cloth, &self.bodies, dt, observer);
        self.bodies.update_physics(dt, &self.body_config);
    }

    pub fn reset(&mut self) {
        self.cloth.reset();
    }

    pub fn add_wind<O: StepObserver<F>>(&mut self, force: Vec3<F>, observer: &mut O) {
        self.cloth.add_wind(force);
        observer.on_wind(force);
    }

    /// See [`Deformer::deform_area`].
    pub fn deform_area<O: StepObserver<F>>(&mut self, index: usize, force: Vec3<F>, observer: &mut O) -> bool {
        self.deformer.deform_area(&mut self.cloth, index, force, observer)
    }

    pub fn add_body(&mut self, body: RigidBody<F>) -> usize {
        self.bodies.add(body)
    }

    /// Drop a body at `height` above the cloth point nearest its x/z.
    pub fn spawn_above_cloth(&mut self, mut body: RigidBody<F>, height: F) -> usize {
        let base = self
            .cloth
            .height_near(body.position.x, body.position.z)
            .unwrap_or(F::zero());
        body.position.y = base + height;
        self.bodies.add(body)
    }

    pub fn positions(&self) -> alloc::vec::Vec<Vec3<F>> {
        self.cloth.positions()
    }
}
