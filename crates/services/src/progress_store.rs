use std::sync::Arc;

use dsa_core::model::{Day, DayError, Progress};
use storage::repository::SlotRepository;

use crate::error::ProgressStoreError;

/// Slot holding the JSON-encoded `Progress`.
pub const PROGRESS_SLOT: &str = "dsaMasterProgress";

/// Single-slot persistence for `Progress`.
///
/// Reads never fail: a missing or unreadable slot yields the default progress.
/// Mutators are pure and return the updated value; callers persist it with
/// [`ProgressStore::save`].
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn SlotRepository>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn SlotRepository>) -> Self {
        Self { repo }
    }

    pub async fn load(&self) -> Progress {
        let raw = match self.repo.get_slot(PROGRESS_SLOT).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Progress::default(),
            Err(err) => {
                tracing::warn!(error = %err, "progress slot unreadable; starting fresh");
                return Progress::default();
            }
        };

        match Progress::from_json(&raw) {
            Ok(progress) => {
                tracing::debug!(
                    completed = progress.completed_count(),
                    current_day = %progress.current_day(),
                    "progress loaded"
                );
                progress
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed progress slot");
                Progress::default()
            }
        }
    }

    /// Overwrite the slot with `progress`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the slot write fails.
    pub async fn save(&self, progress: &Progress) -> Result<(), ProgressStoreError> {
        let encoded = progress.to_json()?;
        self.repo.put_slot(PROGRESS_SLOT, &encoded).await?;
        Ok(())
    }

    /// Remove the slot so the next load starts from defaults.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if the slot cannot be removed.
    pub async fn clear(&self) -> Result<(), ProgressStoreError> {
        self.repo.remove_slot(PROGRESS_SLOT).await?;
        Ok(())
    }

    /// Adds `day` to the completed set. Completing a day twice is a no-op.
    #[must_use]
    pub fn mark_complete(mut progress: Progress, day: Day) -> Progress {
        progress.insert_completed(day);
        progress
    }

    /// # Errors
    ///
    /// Returns `DayError::OutOfRange` if `day` is not within `1..=90`.
    pub fn set_current_day(mut progress: Progress, day: i64) -> Result<Progress, DayError> {
        progress.set_current_day(Day::new(day)?);
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    fn day(raw: i64) -> Day {
        Day::new(raw).unwrap()
    }

    fn store_over(repo: InMemoryRepository) -> ProgressStore {
        ProgressStore::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn fresh_store_loads_defaults() {
        let store = store_over(InMemoryRepository::new());
        let progress = store.load().await;
        assert!(progress.completed_days().is_empty());
        assert_eq!(progress.current_day(), Day::FIRST);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = store_over(InMemoryRepository::new());
        let progress = Progress::new([day(1), day(2), day(45), day(90)], day(46));
        store.save(&progress).await.unwrap();
        assert_eq!(store.load().await, progress);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = store_over(InMemoryRepository::new());
        store.save(&Progress::new([day(3)], day(3))).await.unwrap();
        store.save(&Progress::new([], day(9))).await.unwrap();
        assert_eq!(store.load().await, Progress::new([], day(9)));
    }

    #[tokio::test]
    async fn malformed_slot_degrades_to_default() {
        let repo = InMemoryRepository::new().with_slot(PROGRESS_SLOT, "{completedDays: oops");
        let store = store_over(repo);
        assert_eq!(store.load().await, Progress::default());
    }

    #[tokio::test]
    async fn clear_forgets_progress() {
        let store = store_over(InMemoryRepository::new());
        store.save(&Progress::new([day(7)], day(7))).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await, Progress::default());
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let once = ProgressStore::mark_complete(Progress::default(), day(10));
        let twice = ProgressStore::mark_complete(once.clone(), day(10));
        assert_eq!(once, twice);
        assert_eq!(twice.completed_count(), 1);
    }

    #[test]
    fn mark_complete_keeps_current_day() {
        let progress = ProgressStore::mark_complete(Progress::new([], day(5)), day(5));
        assert_eq!(progress, Progress::new([day(5)], day(5)));
        assert_eq!(progress.completion_percent(), 1);
    }

    #[test]
    fn set_current_day_validates_range() {
        let moved = ProgressStore::set_current_day(Progress::default(), 42).unwrap();
        assert_eq!(moved.current_day(), day(42));

        assert_eq!(
            ProgressStore::set_current_day(Progress::default(), 91),
            Err(DayError::OutOfRange(91))
        );
        assert_eq!(
            ProgressStore::set_current_day(Progress::default(), 0),
            Err(DayError::OutOfRange(0))
        );
    }
}
