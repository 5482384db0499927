use std::sync::Arc;

use services::{Persistence, ViewController};

/// What the composition root hands the UI.
pub trait UiApp: Send + Sync {
    fn persistence(&self) -> Persistence;

    /// Controller seeded from the stored slots.
    fn initial_controller(&self) -> ViewController;
}

#[derive(Clone)]
pub struct AppContext {
    persistence: Persistence,
    initial_controller: ViewController,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            persistence: app.persistence(),
            initial_controller: app.initial_controller(),
        }
    }

    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence.clone()
    }

    #[must_use]
    pub fn initial_controller(&self) -> ViewController {
        self.initial_controller.clone()
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
