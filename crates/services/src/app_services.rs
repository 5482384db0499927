use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::{AppServicesError, PersistError};
use crate::navigation::{Persistence, SolveLinkMode, ViewController};
use crate::preferences_service::PreferencesService;
use crate::progress_store::ProgressStore;

/// Assembles the slot-backed services the UI talks to.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    solve_links: SolveLinkMode,
    progress: Arc<ProgressStore>,
    preferences: Arc<PreferencesService>,
    persistence: Persistence,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        solve_links: SolveLinkMode,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, solve_links))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, solve_links: SolveLinkMode) -> Self {
        let progress = Arc::new(ProgressStore::new(Arc::clone(&storage.slots)));
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.slots)));
        Self {
            clock,
            solve_links,
            persistence: Persistence::new(Arc::clone(&progress), Arc::clone(&preferences)),
            progress,
            preferences,
        }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, SolveLinkMode::default())
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn solve_links(&self) -> SolveLinkMode {
        self.solve_links
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    /// Shared writer; every clone numbers its writes from the same sequence.
    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence.clone()
    }

    /// Read both slots and build the controller for a fresh session.
    pub async fn startup(&self) -> ViewController {
        let progress = self.progress.load().await;
        let preferences = self.preferences.load().await;
        tracing::info!(
            current_day = %progress.current_day(),
            completed = progress.completed_count(),
            dark_mode = preferences.dark_mode,
            "session started"
        );
        ViewController::new(progress, preferences, self.clock, self.solve_links)
    }

    /// Delete both slots.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if either slot cannot be removed.
    pub async fn reset(&self) -> Result<(), PersistError> {
        self.progress.clear().await?;
        self.preferences.clear().await?;
        tracing::info!("stored progress and preferences cleared");
        Ok(())
    }
}
