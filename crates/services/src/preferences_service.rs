use std::sync::Arc;

use dsa_core::model::DisplayPreferences;
use storage::repository::SlotRepository;

use crate::error::PreferencesError;

/// Slot holding `"true"` / `"false"` for dark mode.
pub const DARK_MODE_SLOT: &str = "darkMode";

#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn SlotRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn SlotRepository>) -> Self {
        Self { repo }
    }

    /// Load preferences, falling back to defaults if the slot is unreadable.
    pub async fn load(&self) -> DisplayPreferences {
        match self.repo.get_slot(DARK_MODE_SLOT).await {
            Ok(raw) => DisplayPreferences::from_slot(raw.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "dark mode slot unreadable");
                DisplayPreferences::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `PreferencesError` if the slot write fails.
    pub async fn save(&self, preferences: DisplayPreferences) -> Result<(), PreferencesError> {
        self.repo
            .put_slot(DARK_MODE_SLOT, preferences.to_slot())
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `PreferencesError` if the slot cannot be removed.
    pub async fn clear(&self) -> Result<(), PreferencesError> {
        self.repo.remove_slot(DARK_MODE_SLOT).await?;
        Ok(())
    }
}
