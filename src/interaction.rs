//! Direct position pushes used by pointer dragging and area tools.
//!
//! These bypass the acceleration field entirely. The next Verlet step turns
//! the displacement into implicit velocity.

use crate::float::Float;
use crate::grid::ClothMesh;
use crate::observer::{DeformationEvent, StepObserver};
use crate::vec::Vec3;

/// Falloff parameters for [`Deformer::deform_area`].
#[derive(Clone, Debug, PartialEq)]
pub struct Deformer<F: Float> {
    /// World-space radius around the target that also moves. Default: 0.3.
    pub radius: F,
    /// Share of the push given to a neighbour at zero distance. Default: 0.3.
    pub influence: F,
}

impl<F: Float> Deformer<F> {
    pub fn new() -> Self {
        Deformer {
            radius: F::from_f32(0.3),
            influence: F::from_f32(0.3),
        }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_influence(mut self, influence: F) -> Self {
        self.influence = influence;
        self
    }

    /// Push particle `index` by `force`, dragging free neighbours within
    /// `radius` of its new position along with a linear falloff.
    ///
    /// No-op (and no event) when the index is off the mesh or the particle is
    /// pinned. Returns whether anything moved.
    pub fn deform_area<O: StepObserver<F>>(
        &self,
        cloth: &mut ClothMesh<F>,
        index: usize,
        force: Vec3<F>,
        observer: &mut O,
    ) -> bool {
        let target = match cloth.particle_mut(index) {
            Some(p) if !p.pinned => p,
            _ => return false,
        };

        observer.on_deformation(&DeformationEvent { force, position: target.pos });
        target.displace(force);
        let center = target.pos;

        if !self.radius.is_positive() {
            return true;
        }
        for (i, p) in cloth.particles_mut().iter_mut().enumerate() {
            if i == index || p.pinned {
                continue;
            }
            let distance = p.pos.distance(center);
            if distance < self.radius {
                let factor = self.influence * (F::one() - distance / self.radius);
                p.displace(force.scale(factor));
            }
        }
        true
    }

    /// Grid-space brush: push every free particle within `radius` cells of
    /// (`center_col`, `center_row`) by `force * (1 - d / radius)`.
    ///
    /// Returns the number of free particles inside the brush.
    pub fn apply_area_force(
        &self,
        cloth: &mut ClothMesh<F>,
        center_col: F,
        center_row: F,
        radius: F,
        force: Vec3<F>,
    ) -> usize {
        if !radius.is_positive() {
            return 0;
        }
        let stride = cloth.cols() + 1;
        let mut moved = 0;
        for (i, p) in cloth.particles_mut().iter_mut().enumerate() {
            let col = F::from_usize(i % stride);
            let row = F::from_usize(i / stride);
            let distance = F::hypot(col - center_col, row - center_row);
            if distance <= radius && !p.pinned {
                p.displace(force.scale(F::one() - distance / radius));
                moved += 1;
            }
        }
        moved
    }
}

impl<F: Float> Default for Deformer<F> {
    fn default() -> Self {
        Self::new()
    }
}
