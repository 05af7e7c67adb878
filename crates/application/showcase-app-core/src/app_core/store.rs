use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::DemoState;

use super::{events::DomainEvent, reducer::reduce};

/// Shared handle to the single mutable demo state. Mutation only via `apply`.
#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<DemoState>>,
}

impl AppStore {
    pub fn new(state: DemoState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DemoState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> DemoState {
        self.lock().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&DemoState) -> R) -> R {
        f(&self.lock())
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}
