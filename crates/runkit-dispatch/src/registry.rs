//! Runnable registry.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::DispatchError;
use crate::handler::Runnable;

/// Mapping from command id to [`Runnable`].
///
/// Built once at startup and read-only afterwards. Registering an id that is
/// already present replaces the earlier runnable (last write wins) but keeps
/// its position in [`all`](Registry::all).
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, Rc<dyn Runnable>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `runnable` under its id and returns the stored handle.
    pub fn register<R: Runnable + 'static>(&mut self, runnable: R) -> Rc<dyn Runnable> {
        let shared: Rc<dyn Runnable> = Rc::new(runnable);
        self.register_shared(Rc::clone(&shared));
        shared
    }

    /// Registers an already shared runnable.
    pub fn register_shared(&mut self, runnable: Rc<dyn Runnable>) {
        let id = runnable.id().to_string();
        debug!(id = %id, "registering runnable");
        if self.entries.insert(id, runnable).is_some() {
            debug!("replaced an earlier registration");
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The runnable registered under `id`.
    pub fn get(&self, id: &str) -> Result<Rc<dyn Runnable>, DispatchError> {
        self.entries
            .get(id)
            .map(Rc::clone)
            .ok_or_else(|| DispatchError::NotFound(id.to_string()))
    }

    /// Snapshot of every runnable in registration order.
    pub fn all(&self) -> Vec<Rc<dyn Runnable>> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.keys())
            .finish()
    }
}
