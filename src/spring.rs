//! Distance springs between cloth particles, solved by relaxation.

use crate::float::Float;
use crate::particle::ClothParticle;

/// Which grid adjacency produced a spring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Horizontal or vertical neighbours.
    Structural,
    /// Diagonal neighbours within one cell.
    Shear,
    /// Neighbours two cells apart along a row or column.
    Bend,
}

/// A rest-length constraint between two particles, referenced by index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, kind: SpringKind) -> Self {
        Spring { a, b, rest_length, kind }
    }

    /// Current endpoint distance.
    pub fn length(&self, particles: &[ClothParticle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Move the endpoints toward the rest length by `stiffness` of the error.
    ///
    /// Two free endpoints share the correction equally; a single free endpoint
    /// takes all of it. Coincident endpoints are skipped.
    pub fn solve(&self, particles: &mut [ClothParticle<F>], stiffness: F) {
        let a_pinned = particles[self.a].pinned;
        let b_pinned = particles[self.b].pinned;
        if a_pinned && b_pinned {
            return;
        }

        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();
        if dist == F::zero() {
            return;
        }

        let diff = (dist - self.rest_length) / dist;
        let correction = delta.scale(stiffness * diff);

        if !a_pinned && !b_pinned {
            let half = correction.scale(F::half());
            particles[self.a].pos = particles[self.a].pos + half;
            particles[self.b].pos = particles[self.b].pos - half;
        } else if !a_pinned {
            particles[self.a].pos = particles[self.a].pos + correction;
        } else {
            particles[self.b].pos = particles[self.b].pos - correction;
        }
    }
}
