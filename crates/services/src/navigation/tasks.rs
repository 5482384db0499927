use chrono::{DateTime, Duration, Utc};

use dsa_core::content::TopicId;
use dsa_core::model::NoticeId;

/// How long a notice stays fully visible.
pub const NOTICE_VISIBLE: Duration = Duration::milliseconds(3000);
/// Fade-out time before a notice is removed.
pub const NOTICE_FADE: Duration = Duration::milliseconds(300);
/// Simulated latency before a documentation topic is shown.
pub const TOPIC_LOAD_DELAY: Duration = Duration::milliseconds(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Deferred UI work. None of these touch `Progress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    FadeNotice(NoticeId),
    RemoveNotice(NoticeId),
    RevealTopic(TopicId),
}

#[derive(Clone, Debug)]
struct Scheduled {
    id: TaskId,
    due: DateTime<Utc>,
    task: Task,
}

/// A task that came due, with the instant it was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DueTask {
    pub id: TaskId,
    pub due: DateTime<Utc>,
    pub task: Task,
}

/// Timer queue driven by an external clock.
///
/// Nothing fires on its own; callers hand in "now" and collect the tasks that
/// are due, so tests can step simulated time.
#[derive(Clone, Debug, Default)]
pub struct TaskScheduler {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: DateTime<Utc>, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.push(Scheduled { id, due, task });
        id
    }

    pub fn schedule(&mut self, now: DateTime<Utc>, delay: Duration, task: Task) -> TaskId {
        self.schedule_at(now + delay, task)
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.id != id);
        self.pending.len() != before
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<DueTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|scheduled| scheduled.due <= now);
        self.pending = pending;
        due.sort_by_key(|scheduled| (scheduled.due, scheduled.id));
        due.into_iter()
            .map(|scheduled| DueTask {
                id: scheduled.id,
                due: scheduled.due,
                task: scheduled.task,
            })
            .collect()
    }

    #[must_use]
    pub fn has_due(&self, now: DateTime<Utc>) -> bool {
        self.pending.iter().any(|scheduled| scheduled.due <= now)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
