use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dsa_core::time::fixed_clock;
use services::{Action, AppServices, Persistence, SolveLinkMode, ViewController};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::dispatch::Dispatcher;
use crate::views::{
    ChallengesView, DayView, DocsView, Header, HomeView, LecturesView, NoticeStack,
};

struct TestApp {
    persistence: Persistence,
    controller: ViewController,
}

impl UiApp for TestApp {
    fn persistence(&self) -> Persistence {
        self.persistence.clone()
    }

    fn initial_controller(&self) -> ViewController {
        self.controller.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Challenges,
    Docs,
    Lectures,
    Day,
    Header,
    Notices,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let controller = use_signal(|| ctx.initial_controller());
    let persistence = use_signal(|| ctx.persistence());
    use_context_provider(|| Dispatcher::new(controller, persistence));

    match props.view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Challenges => rsx! { ChallengesView {} },
        ViewKind::Docs => rsx! { DocsView {} },
        ViewKind::Lectures => rsx! { LecturesView {} },
        ViewKind::Day => rsx! { DayView {} },
        ViewKind::Header => rsx! { Header {} },
        ViewKind::Notices => rsx! { NoticeStack {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Render `view` over in-memory storage after replaying `actions`.
pub async fn setup_view_harness(view: ViewKind, actions: &[Action]) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory(), SolveLinkMode::Outbound, actions)
        .await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    solve_links: SolveLinkMode,
    actions: &[Action],
) -> ViewHarness {
    let services = AppServices::from_storage(&storage, fixed_clock(), solve_links);
    let persistence = services.persistence();
    let mut controller = services.startup().await;
    for action in actions {
        controller.dispatch(&persistence, *action).await;
    }

    let app = Arc::new(TestApp {
        persistence,
        controller,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
