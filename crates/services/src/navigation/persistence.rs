use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::error::PersistError;
use crate::navigation::Effect;
use crate::preferences_service::PreferencesService;
use crate::progress_store::ProgressStore;

/// Sequence number of the newest write that reached each slot.
#[derive(Debug, Default)]
struct SlotWatermarks {
    progress: u64,
    preferences: u64,
}

impl SlotWatermarks {
    fn for_effect(&mut self, effect: &Effect) -> &mut u64 {
        match effect {
            Effect::SaveProgress(_) => &mut self.progress,
            Effect::SaveDisplayPreferences(_) => &mut self.preferences,
        }
    }
}

/// Applies reducer effects to the durable slots.
///
/// Writes are numbered when `apply` is called, not when the returned future
/// first runs. They go through one lock, and a snapshot older than the last
/// one written to its slot is dropped, so the slot always ends up holding the
/// newest snapshot in call order.
#[derive(Clone)]
pub struct Persistence {
    progress: Arc<ProgressStore>,
    preferences: Arc<PreferencesService>,
    issued: Arc<AtomicU64>,
    written: Arc<Mutex<SlotWatermarks>>,
}

impl Persistence {
    #[must_use]
    pub fn new(progress: Arc<ProgressStore>, preferences: Arc<PreferencesService>) -> Self {
        Self {
            progress,
            preferences,
            issued: Arc::new(AtomicU64::new(0)),
            written: Arc::new(Mutex::new(SlotWatermarks::default())),
        }
    }

    /// Number the write now and return the future that performs it.
    ///
    /// # Errors
    ///
    /// The future returns `PersistError` if the underlying slot write fails.
    pub fn apply(
        &self,
        effect: &Effect,
    ) -> impl Future<Output = Result<(), PersistError>> + Send + use<> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        let effect = effect.clone();
        async move { this.write_in_order(sequence, &effect).await }
    }

    async fn write_in_order(&self, sequence: u64, effect: &Effect) -> Result<(), PersistError> {
        let mut written = self.written.lock().await;
        let watermark = written.for_effect(effect);
        if sequence < *watermark {
            tracing::debug!(sequence, newest = *watermark, "stale snapshot skipped");
            return Ok(());
        }
        *watermark = sequence;

        match effect {
            Effect::SaveProgress(progress) => {
                self.progress.save(progress).await?;
                tracing::debug!(
                    sequence,
                    current_day = %progress.current_day(),
                    completed = progress.completed_count(),
                    "progress saved"
                );
            }
            Effect::SaveDisplayPreferences(preferences) => {
                self.preferences.save(*preferences).await?;
                tracing::debug!(sequence, dark_mode = preferences.dark_mode, "preferences saved");
            }
        }
        Ok(())
    }
}
