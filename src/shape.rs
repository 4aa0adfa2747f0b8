//! Collision primitives: containment tests and penetration response.
//!
//! Shapes are positioned by the body that owns them, so every query takes
//! the body's `center`. Responses work purely in position space: a particle's
//! velocity is `pos - prev_pos`, and restitution is expressed by rewriting
//! `prev_pos`.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// Variant tag, used for type-filtered queries and collision events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
}

/// Closed set of collision shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape<F: Float> {
    Sphere { radius: F },
    /// Axis-aligned box.
    Box { half_extents: Vec3<F> },
}

/// Sphere response scales the removed normal speed by this to get an intensity.
const SPHERE_INTENSITY_SCALE: f32 = 0.5;
/// Box response scales the attenuated axis speed by this to get an intensity.
const BOX_INTENSITY_SCALE: f32 = 0.3;

impl<F: Float> Shape<F> {
    pub fn sphere(radius: F) -> Result<Self, PhysicsError> {
        if !radius.is_positive() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Shape::Sphere { radius })
    }

    pub fn cuboid(half_extents: Vec3<F>) -> Result<Self, PhysicsError> {
        if !(half_extents.x.is_positive() && half_extents.y.is_positive() && half_extents.z.is_positive()) {
            return Err(PhysicsError::InvalidHalfExtent);
        }
        Ok(Shape::Box { half_extents })
    }

    /// Cube with edge length `size`.
    pub fn cube(size: F) -> Result<Self, PhysicsError> {
        Self::cuboid(Vec3::splat(size * F::half()))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Box { .. } => ShapeKind::Box,
        }
    }

    /// Radius of the sphere, or the largest half extent of the box.
    pub fn extent(&self) -> F {
        match *self {
            Shape::Sphere { radius } => radius,
            Shape::Box { half_extents: h } => h.x.max(h.y).max(h.z),
        }
    }

    /// Sphere: strictly inside. Box: inside or on a face.
    pub fn contains(&self, center: Vec3<F>, point: Vec3<F>) -> bool {
        match *self {
            Shape::Sphere { radius } => point.distance(center) < radius,
            Shape::Box { half_extents: h } => {
                let d = point - center;
                d.x.abs() <= h.x && d.y.abs() <= h.y && d.z.abs() <= h.z
            }
        }
    }

    /// Push a penetrating particle out of the shape and rewrite `prev` so its
    /// implicit velocity loses (most of) the component into the surface.
    ///
    /// Returns the collision intensity when a response was applied, `None`
    /// when nothing changed or the response carries no sound-worthy motion.
    pub fn resolve(&self, center: Vec3<F>, pos: &mut Vec3<F>, prev: &mut Vec3<F>, bounce: F) -> Option<F> {
        match *self {
            Shape::Sphere { radius } => resolve_sphere(center, radius, pos, prev, bounce),
            Shape::Box { half_extents } => resolve_box(center, half_extents, pos, prev, bounce),
        }
    }
}

fn resolve_sphere<F: Float>(center: Vec3<F>, radius: F, pos: &mut Vec3<F>, prev: &mut Vec3<F>, bounce: F) -> Option<F> {
    let offset = *pos - center;
    let dist = offset.length();
    if dist >= radius || dist == F::zero() {
        return None;
    }

    let normal = offset.scale(F::one() / dist);
    *pos = center + normal.scale(radius);

    let velocity = *pos - *prev;
    let normal_speed = velocity.dot(normal);
    if normal_speed < F::zero() {
        let reflected = velocity - normal.scale(normal_speed * (F::one() + bounce));
        *prev = *pos - reflected;
        Some(normal_speed.abs() * F::from_f32(SPHERE_INTENSITY_SCALE))
    } else {
        None
    }
}

fn resolve_box<F: Float>(center: Vec3<F>, h: Vec3<F>, pos: &mut Vec3<F>, prev: &mut Vec3<F>, bounce: F) -> Option<F> {
    let offset = *pos - center;
    if offset.x.abs() > h.x || offset.y.abs() > h.y || offset.z.abs() > h.z {
        return None;
    }

    let depth_x = h.x - offset.x.abs();
    let depth_y = h.y - offset.y.abs();
    let depth_z = h.z - offset.z.abs();

    // Least penetration wins; ties fall through to the later axis.
    let axis = if depth_x < depth_y && depth_x < depth_z {
        0
    } else if depth_y < depth_z {
        1
    } else {
        2
    };

    let side = if offset.axis(axis) > F::zero() { h.axis(axis) } else { -h.axis(axis) };
    pos.set_axis(axis, center.axis(axis) + side);

    let speed = pos.axis(axis) - prev.axis(axis);
    prev.set_axis(axis, pos.axis(axis) - speed * bounce);
    Some(speed.abs() * F::from_f32(BOX_INTENSITY_SCALE))
}
