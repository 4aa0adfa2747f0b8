//! Step observer trait and the notifications the simulation emits.
//!
//! The solver never talks to audio or rendering code directly. Anything that
//! wants to react to collisions, pokes or gusts implements [`StepObserver`]
//! and is passed into the call that produces the event.

use crate::float::Float;
use crate::shape::ShapeKind;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A cloth particle was pushed out of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent<F: Float> {
    /// Index of the body in its [`RigidBodySet`](crate::body::RigidBodySet).
    pub body: usize,
    pub kind: ShapeKind,
    /// Magnitude derived from the removed normal velocity component.
    pub intensity: F,
}

/// A particle was displaced by [`Deformer::deform_area`](crate::interaction::Deformer::deform_area).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeformationEvent<F: Float> {
    pub force: Vec3<F>,
    /// Target particle position before the push.
    pub position: Vec3<F>,
}

impl<F: Float> DeformationEvent<F> {
    /// `|force| * sensitivity`, capped at 1.
    pub fn intensity(&self, sensitivity: F) -> F {
        (self.force.length() * sensitivity).min(F::one())
    }
}

/// Trait for observing simulation steps and events.
///
/// All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after every free particle has been integrated and collided.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass (and its collision re-check).
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a cloth step is fully complete.
    fn on_step_complete(&mut self) {}

    fn on_collision(&mut self, _event: &CollisionEvent<F>) {}

    fn on_deformation(&mut self, _event: &DeformationEvent<F>) {}

    /// Called when a gust is added through the scene driver.
    fn on_wind(&mut self, _force: Vec3<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Observer that records every event it sees, for consumers that poll once
/// per frame (and for headless tests).
#[derive(Clone, Debug)]
pub struct EventQueue<F: Float> {
    pub collisions: AllocVec<CollisionEvent<F>>,
    pub deformations: AllocVec<DeformationEvent<F>>,
    pub gusts: AllocVec<Vec3<F>>,
    pub steps: usize,
}

impl<F: Float> EventQueue<F> {
    pub fn new() -> Self {
        EventQueue {
            collisions: AllocVec::new(),
            deformations: AllocVec::new(),
            gusts: AllocVec::new(),
            steps: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty() && self.deformations.is_empty() && self.gusts.is_empty()
    }

    /// Take all recorded events, leaving the queue empty. The step counter is kept.
    pub fn drain(&mut self) -> (AllocVec<CollisionEvent<F>>, AllocVec<DeformationEvent<F>>, AllocVec<Vec3<F>>) {
        (
            core::mem::take(&mut self.collisions),
            core::mem::take(&mut self.deformations),
            core::mem::take(&mut self.gusts),
        )
    }
}

impl<F: Float> Default for EventQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> StepObserver<F> for EventQueue<F> {
    fn on_step_complete(&mut self) {
        self.steps += 1;
    }

    fn on_collision(&mut self, event: &CollisionEvent<F>) {
        self.collisions.push(*event);
    }

    fn on_deformation(&mut self, event: &DeformationEvent<F>) {
        self.deformations.push(*event);
    }

    fn on_wind(&mut self, force: Vec3<F>) {
        self.gusts.push(force);
    }
}
