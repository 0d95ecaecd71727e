//! A pencil shared between threads.
//!
//! The engine read-modify-writes its counters without any synchronization,
//! so concurrent callers go through [`SharedPencil`]: one mutex guards every
//! operation and accessor, making each call atomic with respect to the
//! others. Clones share the same underlying pencil.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{PencilError, PencilResult};
use crate::pencil::Pencil;
use crate::status::PencilSnapshot;

fn lock_err(context: &'static str) -> PencilError {
    PencilError::internal(format!("poisoned lock: {context}"))
}

/// Thread-safe handle to a single [`Pencil`].
#[derive(Debug, Clone, Default)]
pub struct SharedPencil {
    inner: Arc<Mutex<Pencil>>,
}

impl SharedPencil {
    /// Wraps a pencil.
    #[must_use]
    pub fn new(pencil: Pencil) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pencil)),
        }
    }

    fn lock(&self, context: &'static str) -> PencilResult<MutexGuard<'_, Pencil>> {
        self.inner.lock().map_err(|_| lock_err(context))
    }

    /// See [`Pencil::write`].
    pub fn write(&self, text: &str) -> PencilResult<String> {
        Ok(self.lock("write")?.write(text))
    }

    /// See [`Pencil::sharpen`].
    pub fn sharpen(&self) -> PencilResult<bool> {
        Ok(self.lock("sharpen")?.sharpen())
    }

    /// See [`Pencil::erase`].
    pub fn erase(&self, text: &str, target: &str) -> PencilResult<String> {
        Ok(self.lock("erase")?.erase(text, target))
    }

    /// See [`Pencil::edit`].
    pub fn edit(&self, text: &str, new_text: &str, position: usize) -> PencilResult<String> {
        Ok(self.lock("edit")?.edit(text, new_text, position))
    }

    /// See [`Pencil::reset`].
    pub fn reset(&self) -> PencilResult<()> {
        self.lock("reset")?.reset();
        Ok(())
    }

    /// Consistent read of every counter and derived flag.
    pub fn snapshot(&self) -> PencilResult<PencilSnapshot> {
        Ok(self.lock("snapshot")?.snapshot())
    }

    /// Copy of the pencil as it is right now.
    pub fn get(&self) -> PencilResult<Pencil> {
        Ok(self.lock("get")?.clone())
    }

    /// Runs `f` with exclusive access, for callers that need several
    /// operations to happen without interleaving.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pencil) -> R) -> PencilResult<R> {
        let mut guard = self.lock("with")?;
        Ok(f(&mut guard))
    }
}

impl From<Pencil> for SharedPencil {
    fn from(pencil: Pencil) -> Self {
        Self::new(pencil)
    }
}
