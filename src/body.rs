//! Rigid bodies and the collection the cloth collides against.

use crate::config::BodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{CollisionEvent, StepObserver};
use crate::particle::ClothParticle;
use crate::shape::{Shape, ShapeKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A sphere or box with its own free-fall velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody<F: Float> {
    pub shape: Shape<F>,
    /// Center of the shape.
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    /// RGB, read by renderers only.
    pub color: [f32; 3],
    /// Hidden bodies keep falling but are skipped by cloth collision.
    pub visible: bool,
}

const SPHERE_COLOR: [f32; 3] = [0.8, 0.3, 0.3];
const BOX_COLOR: [f32; 3] = [0.3, 0.8, 0.3];

impl<F: Float> RigidBody<F> {
    pub fn new(shape: Shape<F>, position: Vec3<F>) -> Self {
        let color = match shape.kind() {
            ShapeKind::Sphere => SPHERE_COLOR,
            ShapeKind::Box => BOX_COLOR,
        };
        RigidBody {
            shape,
            position,
            velocity: Vec3::zero(),
            color,
            visible: true,
        }
    }

    pub fn sphere(position: Vec3<F>, radius: F) -> Result<Self, PhysicsError> {
        Ok(Self::new(Shape::sphere(radius)?, position))
    }

    /// Cube with edge length `size`.
    pub fn cube(position: Vec3<F>, size: F) -> Result<Self, PhysicsError> {
        Ok(Self::new(Shape::cube(size)?, position))
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn contains(&self, point: Vec3<F>) -> bool {
        self.shape.contains(self.position, point)
    }

    /// Explicit Euler free fall with a bouncing ground plane.
    pub fn integrate(&mut self, dt: F, config: &BodyConfig<F>) {
        self.velocity = self.velocity + config.gravity.scale(dt);
        self.position = self.position + self.velocity.scale(dt);

        if self.position.y < config.ground_height {
            self.position.y = config.ground_height;
            self.velocity.y = -self.velocity.y * config.bounce;
            self.velocity.x = self.velocity.x * config.horizontal_damping;
            self.velocity.z = self.velocity.z * config.horizontal_damping;
        }
    }
}

/// Ordered collection of rigid bodies. Indices shift on removal.
#[derive(Clone, Debug, Default)]
pub struct RigidBodySet<F: Float> {
    bodies: AllocVec<RigidBody<F>>,
}

impl<F: Float> RigidBodySet<F> {
    pub fn new() -> Self {
        RigidBodySet { bodies: AllocVec::new() }
    }

    /// Append a body and return its index.
    pub fn add(&mut self, body: RigidBody<F>) -> usize {
        let idx = self.bodies.len();
        log::debug!("adding {:?} body #{} at {:?}", body.kind(), idx, body.position);
        self.bodies.push(body);
        idx
    }

    /// Remove the body at `index`, shifting later bodies down.
    pub fn remove(&mut self, index: usize) -> Option<RigidBody<F>> {
        if index >= self.bodies.len() {
            return None;
        }
        log::debug!("removing body #{}", index);
        Some(self.bodies.remove(index))
    }

    /// Remove the most recently added body.
    pub fn pop(&mut self) -> Option<RigidBody<F>> {
        self.bodies.pop()
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} bodies", self.bodies.len());
        self.bodies.clear();
    }

    /// Teleport a body. Velocity is kept. Out-of-range indices are ignored.
    pub fn move_to(&mut self, index: usize, position: Vec3<F>) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => {
                body.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&RigidBody<F>> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RigidBody<F>> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigidBody<F>> {
        self.bodies.iter()
    }

    /// Bodies of one shape variant, with their indices.
    pub fn of_kind(&self, kind: ShapeKind) -> impl Iterator<Item = (usize, &RigidBody<F>)> {
        self.bodies.iter().enumerate().filter(move |(_, b)| b.kind() == kind)
    }

    /// Resolve `particle` against every visible body that contains it, in
    /// collection order. Later bodies see the corrections of earlier ones.
    pub fn check_collisions<O: StepObserver<F>>(
        &self,
        particle: &mut ClothParticle<F>,
        bounce: F,
        observer: &mut O,
    ) {
        if particle.pinned {
            return;
        }
        for (index, body) in self.bodies.iter().enumerate() {
            if !body.visible || !body.contains(particle.pos) {
                continue;
            }
            let hit = body.shape.resolve(body.position, &mut particle.pos, &mut particle.prev_pos, bounce);
            if let Some(intensity) = hit {
                observer.on_collision(&CollisionEvent { body: index, kind: body.kind(), intensity });
            }
        }
    }

    /// Advance every body's own free fall. Hidden bodies fall too.
    pub fn update_physics(&mut self, dt: F, config: &BodyConfig<F>) {
        for body in self.bodies.iter_mut() {
            body.integrate(dt, config);
        }
    }
}
