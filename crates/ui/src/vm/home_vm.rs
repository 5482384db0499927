use dsa_core::model::{Progress, TOTAL_DAYS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub current_day: u8,
    pub completed: usize,
    pub remaining: usize,
    pub percent: u8,
}

#[must_use]
pub fn build_home_vm(progress: &Progress) -> HomeVm {
    let completed = progress.completed_count();
    HomeVm {
        current_day: progress.current_day().value(),
        completed,
        remaining: usize::from(TOTAL_DAYS).saturating_sub(completed),
        percent: progress.completion_percent(),
    }
}
