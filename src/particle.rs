//! Cloth particles with implicit (position-difference) velocity.

use crate::float::Float;
use crate::vec::Vec3;

/// A Verlet particle. Velocity is never stored; it is `pos - prev_pos`.
#[derive(Clone, Debug)]
pub struct ClothParticle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    /// Overwritten by the solver at the start of every step.
    pub acceleration: Vec3<F>,
    pub pinned: bool,
    original_pos: Vec3<F>,
}

impl<F: Float> ClothParticle<F> {
    pub fn new(pos: Vec3<F>, pinned: bool) -> Self {
        ClothParticle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::zero(),
            pinned,
            original_pos: pos,
        }
    }

    /// Rest position recorded at construction.
    pub fn original_pos(&self) -> Vec3<F> {
        self.original_pos
    }

    /// Semi-implicit Verlet step. `damping` is the fraction of the previous
    /// displacement that is lost, so 0.0 keeps it all.
    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(F::one() - damping);
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + self.acceleration.scale(dt * dt);
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }

    /// Restore the construction state.
    pub fn reset(&mut self) {
        self.pos = self.original_pos;
        self.prev_pos = self.original_pos;
        self.acceleration = Vec3::zero();
    }

    /// Instantaneous position push. Pinned particles ignore it.
    pub fn displace(&mut self, offset: Vec3<F>) {
        if !self.pinned {
            self.pos = self.pos + offset;
        }
    }

    /// Clamp against a horizontal plane, reflecting the vertical displacement
    /// with `bounce` restitution. Returns true when the plane was hit.
    pub fn collide_ground(&mut self, height: F, bounce: F) -> bool {
        if self.pinned || self.pos.y >= height {
            return false;
        }
        self.pos.y = height;
        self.prev_pos.y = self.pos.y + (self.pos.y - self.prev_pos.y) * bounce;
        true
    }

    /// Pin in place, discarding any motion.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }
}
