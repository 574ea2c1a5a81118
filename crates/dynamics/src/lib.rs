#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Constraint-Solver Physics Core
//!
//! The hard algorithmic core of a rigid-body/articulation/cloth physics
//! pipeline: it turns user-facing joint and cloth parameters into the
//! solver-internal records an external sequential-impulse solver
//! consumes, and tracks per-actor simulation identity for the
//! broad-phase. Rendering, windowing, asset loading and the iterative
//! solver loop itself are external collaborators.
//!
//! ## Key Components
//!
//! -   **Joint solver prep:** [`joints::distance::prepare_distance_constraint`]
//!     builds at most one 1D [`ConstraintRow`] per distance joint per
//!     step from the two body poses.
//! -   **Articulation joints:** [`ArticulationJointCore`] holds
//!     swing/twist limits and drive targets, keeping quarter-angle
//!     tangent caches in sync with every limit change.
//! -   **Cloth phases:** [`cloth::phase::transform`] converts a
//!     user-facing [`PhaseConfig`] into the logarithmic solver form the
//!     per-iteration stiffness decay needs.
//! -   **Actor identity:** [`RigidSim`] ties a rigid actor to a
//!     pool-allocated [`ActorId`] and its owned shape list;
//!     [`BodyCore`] carries the optional kinematic target the solver
//!     reads instead of integrating forces.
//!
//! Prep and transform functions are pure over `&` inputs and safe to run
//! in parallel across independent joints. Mutable cores are owned by the
//! simulation thread's update phase; only the [`IdPool`] locks.

pub mod actor;
pub mod articulation;
pub mod cloth;
pub mod error;
pub mod joints;
pub mod pose;
pub mod types;

pub use actor::{ActorId, BodyCore, BodyFlags, BoundsUpdateBatch, IdPool, MotionKind, RigidSim, ShapeCoreId};
pub use articulation::{ArticulationJointCore, DriveType};
pub use cloth::phase::PhaseConfig;
pub use error::DynamicsError;
pub use joints::distance::{DistanceJointConfig, DistanceJointFlags};
pub use pose::Pose;
pub use types::{ConstraintRow, RowFlags};
