//! Actor-side simulation tracking.
//!
//! Everything the broad-phase and solver need to know about who an
//! actor is: its pool-allocated identity, the shapes it owns, and the
//! kinematic target that can override force integration for a step.

pub mod body;
pub mod id_pool;
pub mod rigid;

pub use body::{BodyCore, BodyFlags};
pub use id_pool::{ActorId, IdPool};
pub use rigid::{BoundsUpdateBatch, MotionKind, RigidSim, ShapeCoreId, ShapeElement};
