mod action;
mod controller;
mod notices;
mod persistence;
mod tasks;

pub use action::{Action, Effect, SolveLinkMode};
pub use controller::{DocsPane, TopicPane, ViewController};
pub use notices::NoticeBoard;
pub use persistence::Persistence;
pub use tasks::{
    DueTask, NOTICE_FADE, NOTICE_VISIBLE, TOPIC_LOAD_DELAY, Task, TaskId, TaskScheduler,
};
