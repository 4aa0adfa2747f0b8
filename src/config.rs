//! Tunable constants for the cloth solver and rigid-body free fall.

use crate::float::Float;
use crate::vec::Vec3;

/// Configuration for [`ClothSolver`](crate::solver::ClothSolver).
///
/// # Builder Pattern
/// ```
/// use drapery::config::SolverConfig;
/// use drapery::vec::Vec3;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_damping(0.02)
///     .with_ground_height(-1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Relaxation passes over every spring per step. Default: 5.
    pub iterations: usize,
    /// Gravity acceleration. Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Fraction of the implicit velocity removed each step. Default: 0.01.
    pub damping: F,
    /// Share of the spring error corrected per pass. Default: 0.8.
    pub stiffness: F,
    /// Height of the cloth's ground plane. Default: -2.0.
    pub ground_height: F,
    /// Vertical restitution against the ground plane. Default: 0.3.
    pub ground_bounce: F,
    /// Restitution against sphere and box bodies. Default: 0.3.
    pub body_bounce: F,
    /// Per-step multiplier applied to the wind vector. Default: 0.95.
    pub wind_decay: F,
    /// Largest `dt` the scene driver will forward. Default: 0.033.
    pub max_dt: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 5,
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            damping: F::from_f32(0.01),
            stiffness: F::from_f32(0.8),
            ground_height: F::from_f32(-2.0),
            ground_bounce: F::from_f32(0.3),
            body_bounce: F::from_f32(0.3),
            wind_decay: F::from_f32(0.95),
            max_dt: F::from_f32(0.033),
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_ground_height(mut self, height: F) -> Self {
        self.ground_height = height;
        self
    }

    pub fn with_ground_bounce(mut self, bounce: F) -> Self {
        self.ground_bounce = bounce;
        self
    }

    pub fn with_body_bounce(mut self, bounce: F) -> Self {
        self.body_bounce = bounce;
        self
    }

    pub fn with_wind_decay(mut self, decay: F) -> Self {
        self.wind_decay = decay;
        self
    }

    pub fn with_max_dt(mut self, max_dt: F) -> Self {
        self.max_dt = max_dt;
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for rigid-body free fall
/// ([`RigidBodySet::update_physics`](crate::body::RigidBodySet::update_physics)).
///
/// Bodies use an explicit-velocity integrator that is independent of the
/// cloth's Verlet scheme, so its constants are tuned separately.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    /// Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Height at which a body's center stops falling. Default: -1.8.
    pub ground_height: F,
    /// Vertical restitution on ground contact. Default: 0.3.
    pub bounce: F,
    /// Multiplier on x/z velocity on ground contact. Default: 0.99.
    pub horizontal_damping: F,
}

impl<F: Float> BodyConfig<F> {
    pub fn new() -> Self {
        BodyConfig {
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            ground_height: F::from_f32(-1.8),
            bounce: F::from_f32(0.3),
            horizontal_damping: F::from_f32(0.99),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground_height(mut self, height: F) -> Self {
        self.ground_height = height;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_horizontal_damping(mut self, damping: F) -> Self {
        self.horizontal_damping = damping;
        self
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
