use dioxus::prelude::*;

use services::{Action, Persistence, ViewController};

/// Handle every view uses to send actions into the controller.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    controller: Signal<ViewController>,
    persistence: Signal<Persistence>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(controller: Signal<ViewController>, persistence: Signal<Persistence>) -> Self {
        Self {
            controller,
            persistence,
        }
    }

    #[must_use]
    pub fn controller(self) -> Signal<ViewController> {
        self.controller
    }

    /// Reduce synchronously, then write the resulting effects in the
    /// background. Each write is numbered here, before the task is spawned,
    /// so the slots settle on the newest snapshot even when tasks finish out
    /// of order. A failed write turns into a warning notice.
    pub fn send(self, action: Action) {
        let mut controller = self.controller;
        let effects = controller.write().reduce(action);
        tracing::debug!(?action, effects = effects.len(), "action dispatched");
        if effects.is_empty() {
            return;
        }

        let persistence = self.persistence.peek().clone();
        let writes: Vec<_> = effects
            .into_iter()
            .map(|effect| {
                let write = persistence.apply(&effect);
                (effect, write)
            })
            .collect();
        spawn(async move {
            for (effect, write) in writes {
                if let Err(err) = write.await {
                    controller.write().report_persist_failure(&effect, &err);
                }
            }
        });
    }

    /// Run due timer tasks. Only takes the write lock when something is due.
    pub fn tick(self) {
        let mut controller = self.controller;
        if controller.peek().has_due_tasks() {
            controller.write().tick();
        }
    }
}

#[must_use]
pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}
