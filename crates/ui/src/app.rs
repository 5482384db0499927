use std::time::Duration;

use dioxus::prelude::*;

use dsa_core::model::View;

use crate::context::AppContext;
use crate::dispatch::Dispatcher;
use crate::views::{
    ChallengesView, DayView, DocsView, Footer, Header, HomeView, LecturesView, NoticeStack,
};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| ctx.initial_controller());
    let persistence = use_signal(|| ctx.persistence());
    let dispatcher = use_context_provider(|| Dispatcher::new(controller, persistence));

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            dispatcher.tick();
        }
    });

    let (dark_mode, view) = {
        let vc = controller.read();
        (vc.preferences().dark_mode, vc.view())
    };
    let root_class = if dark_mode {
        "app-root dark-mode"
    } else {
        "app-root"
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "DSA Master" }

        div { class: "{root_class}",
            Header {}
            main { class: "content",
                match view {
                    View::Home => rsx! { HomeView {} },
                    View::Challenges => rsx! { ChallengesView {} },
                    View::Docs => rsx! { DocsView {} },
                    View::Lectures => rsx! { LecturesView {} },
                    View::Day => rsx! { DayView {} },
                }
            }
            Footer {}
            NoticeStack {}
        }
    }
}
