//! Pool-allocated actor identities.
//!
//! The broad-phase groups shapes by an integer actor ID. IDs are dense
//! (released slots are reused before fresh ones are minted) so
//! downstream arrays stay compact. The free-list is the only shared
//! mutable state in the crate: actors may be created and destroyed from
//! different threads, so it sits behind a mutex.

use crate::error::DynamicsError;
use parking_lot::Mutex;

/// Opaque handle to a pool slot. Only meaningful to the pool that
/// issued it; holding one after release is a lifetime bug.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(u32);

impl ActorId {
    /// Raw slot index for downstream array indexing.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
struct FreeList {
    free: Vec<u32>,
    next_fresh: u32,
}

/// Mutex-guarded free-list ID allocator.
#[derive(Debug, Default)]
pub struct IdPool {
    inner: Mutex<FreeList>,
}

impl IdPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an ID, reusing the most recently released slot first.
    ///
    /// # Errors
    ///
    /// [`DynamicsError::IdPoolExhausted`] once every `u32` slot is live,
    /// which in practice indicates a leak.
    pub fn acquire(&self) -> Result<ActorId, DynamicsError> {
        let mut inner = self.inner.lock();
        if let Some(index) = inner.free.pop() {
            return Ok(ActorId(index));
        }
        if inner.next_fresh == u32::MAX {
            tracing::warn!("actor id pool exhausted");
            return Err(DynamicsError::IdPoolExhausted);
        }
        let index = inner.next_fresh;
        inner.next_fresh += 1;
        Ok(ActorId(index))
    }

    /// Return an ID to the pool.
    ///
    /// Double-release or releasing a foreign ID is a fatal lifetime bug
    /// in the owning actor; debug builds assert.
    pub fn release(&self, id: ActorId) {
        let mut inner = self.inner.lock();
        debug_assert!(id.0 < inner.next_fresh, "released id was never issued");
        debug_assert!(!inner.free.contains(&id.0), "actor id double-release");
        inner.free.push(id.0);
    }

    /// Number of currently issued IDs.
    #[must_use]
    pub fn live_count(&self) -> usize {
        let inner = self.inner.lock();
        inner.next_fresh as usize - inner.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_dense_ids() {
        let pool = IdPool::new();
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        let c = pool.acquire().unwrap();
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
    }

    #[test]
    fn reuses_released_slots_lifo() {
        let pool = IdPool::new();
        let a = pool.acquire().unwrap();
        let _b = pool.acquire().unwrap();
        pool.release(a);
        let c = pool.acquire().unwrap();
        assert_eq!(c.index(), a.index());
    }

    #[test]
    fn acquire_release_cycle_restores_the_pool() {
        let pool = IdPool::new();
        let ids: Vec<_> = (0..64).map(|_| pool.acquire().unwrap()).collect();
        assert_eq!(pool.live_count(), 64);

        for id in ids {
            pool.release(id);
        }
        assert_eq!(pool.live_count(), 0);

        // No slot may be issued twice among live IDs.
        let again: Vec<_> = (0..64).map(|_| pool.acquire().unwrap()).collect();
        let mut indices: Vec<_> = again.iter().map(|id| id.index()).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 64);
        assert!(indices.iter().all(|&i| i < 64), "fresh slots were minted");
    }

    #[test]
    fn concurrent_acquire_never_duplicates() {
        use std::sync::Arc;

        let pool = Arc::new(IdPool::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                (0..256).map(|_| pool.acquire().unwrap()).collect::<Vec<_>>()
            }));
        }
        let mut indices: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(ActorId::index)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 4 * 256);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "double-release")]
    fn double_release_asserts() {
        let pool = IdPool::new();
        let id = pool.acquire().unwrap();
        pool.release(id);
        pool.release(id);
    }
}
