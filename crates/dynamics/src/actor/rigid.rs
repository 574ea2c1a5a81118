//! Rigid actor simulation identity and shape tracking.

use crate::actor::id_pool::{ActorId, IdPool};
use crate::error::DynamicsError;
use std::sync::Arc;

/// Identity of a shape core shared with the collision subsystem.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeCoreId(pub u32);

/// Whether broad-phase bounds updates for this actor take the cheap
/// static path or the per-step dynamic path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionKind {
    Static,
    Dynamic,
}

/// One shape owned by an actor.
#[derive(Clone, Debug)]
pub struct ShapeElement {
    pub core: ShapeCoreId,
    pub bounds_dirty: bool,
}

/// Shapes whose bounds need re-insertion into the broad-phase this
/// step, split by update cost. Drained by the external broad-phase.
#[derive(Debug, Default)]
pub struct BoundsUpdateBatch {
    pub static_updates: Vec<ShapeCoreId>,
    pub dynamic_updates: Vec<ShapeCoreId>,
}

impl BoundsUpdateBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.static_updates.clear();
        self.dynamic_updates.clear();
    }
}

/// Simulation-side identity of a rigid actor.
///
/// Construction acquires a broad-phase grouping ID from the scene's
/// shared pool; dropping the sim releases it, exactly once. Shape
/// membership is owned here as a plain vector: actors typically carry
/// a handful of shapes, so lookups scan linearly rather than paying for
/// an index.
#[derive(Debug)]
pub struct RigidSim {
    id: ActorId,
    pool: Arc<IdPool>,
    motion: MotionKind,
    shapes: Vec<ShapeElement>,
}

impl RigidSim {
    /// Register a new actor with the scene's ID pool.
    ///
    /// # Errors
    ///
    /// Propagates [`DynamicsError::IdPoolExhausted`] from the pool.
    pub fn new(pool: Arc<IdPool>, motion: MotionKind) -> Result<Self, DynamicsError> {
        let id = pool.acquire()?;
        Ok(Self {
            id,
            pool,
            motion,
            shapes: Vec::new(),
        })
    }

    /// Broad-phase grouping ID, stable for the actor's lifetime.
    #[must_use]
    pub fn actor_id(&self) -> ActorId {
        self.id
    }

    #[must_use]
    pub fn motion(&self) -> MotionKind {
        self.motion
    }

    pub fn add_shape(&mut self, core: ShapeCoreId) {
        self.shapes.push(ShapeElement {
            core,
            bounds_dirty: false,
        });
    }

    /// Remove a shape by core identity; `false` if the actor never
    /// owned it.
    pub fn remove_shape(&mut self, core: ShapeCoreId) -> bool {
        match self.shapes.iter().position(|s| s.core == core) {
            Some(index) => {
                self.shapes.swap_remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn shapes(&self) -> &[ShapeElement] {
        &self.shapes
    }

    /// The actor moved: mark every owned shape's bounds for
    /// re-insertion into the broad-phase, on the cost tier matching the
    /// actor's motion kind.
    pub fn notify_shapes_of_transform_change(&mut self, batch: &mut BoundsUpdateBatch) {
        let updates = match self.motion {
            MotionKind::Static => &mut batch.static_updates,
            MotionKind::Dynamic => &mut batch.dynamic_updates,
        };
        for shape in &mut self.shapes {
            shape.bounds_dirty = true;
            updates.push(shape.core);
        }
    }

    /// Find the simulation-side element for a shape core.
    ///
    /// Linear in the actor's shape count by choice: the list is short
    /// and the scan beats maintaining a per-actor map.
    #[must_use]
    pub fn sim_for_shape(&self, core: ShapeCoreId) -> Option<&ShapeElement> {
        self.shapes.iter().find(|s| s.core == core)
    }
}

impl Drop for RigidSim {
    fn drop(&mut self) {
        self.pool.release(self.id);
    }
}
