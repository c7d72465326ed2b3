//! Mutex-guarded Bevy `App` shared across rspec closures.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;

/// Wrapper forwarding `Send` and `Sync` for a mutex-guarded `App`.
#[derive(Debug)]
pub struct GuardedApp(pub App);

impl Deref for GuardedApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for GuardedApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must be `Clone + Send + Sync`, but the suites run
// serially and every access goes through the mutex below, so the `App` is
// never touched from two threads at once.
unsafe impl Send for GuardedApp {}
unsafe impl Sync for GuardedApp {}

/// Cloneable handle to a behaviour app.
#[derive(Debug, Clone)]
pub struct AppFixture {
    app: Arc<Mutex<GuardedApp>>,
}

impl AppFixture {
    /// Wraps a configured app.
    pub fn new(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(GuardedApp(app))),
        }
    }

    /// Locks the app, recovering from a poisoned mutex.
    pub fn guard(&self) -> MutexGuard<'_, GuardedApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one frame.
    pub fn tick(&self) {
        self.guard().update();
    }
}
