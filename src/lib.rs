//! Verlet cloth simulation with sphere and box collision.
//!
//! `drapery` simulates a rectangular cloth as a grid of Verlet particles tied
//! together by structural, shear and bend springs. Each step accumulates
//! gravity and wind, integrates with implicit velocity, collides with a
//! ground plane and a set of rigid bodies, and relaxes the springs a fixed
//! number of times (re-colliding after every pass).
//!
//! # Features
//!
//! - **Verlet integration**: semi-implicit, damping on the previous displacement
//! - **Relaxation solver**: symmetric corrections, pinned endpoints respected
//! - **Rigid bodies**: spheres and boxes with their own bouncing free fall
//! - **Interaction**: pointer-style falloff pushes and grid-space brushes
//! - **Observable**: collisions, pokes and gusts reach a `StepObserver`
//! - **`no_std` compatible**: needs only `alloc`

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod grid;
pub mod shape;
pub mod body;
pub mod solver;
pub mod interaction;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::ClothParticle;
pub use spring::{Spring, SpringKind};
pub use grid::ClothMesh;
pub use shape::{Shape, ShapeKind};
pub use body::{RigidBody, RigidBodySet};
pub use solver::ClothSolver;
pub use interaction::Deformer;
pub use scene::Simulation;
pub use config::{BodyConfig, SolverConfig};
pub use observer::{CollisionEvent, DeformationEvent, EventQueue, NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
