use dioxus::prelude::*;

use dsa_core::model::View;
use services::Action;

use crate::dispatch::use_dispatcher;
use crate::vm::build_home_vm;

const FEATURES: [(&str, &str); 4] = [
    (
        "90-Day Challenge",
        "A structured path from arrays to advanced graph algorithms, one topic per day.",
    ),
    (
        "Comprehensive Documentation",
        "Reference notes for every core data structure and algorithm family.",
    ),
    (
        "Video Lectures",
        "Short lectures grouped by fundamentals, data structures, algorithms and advanced topics.",
    ),
    (
        "Practice Problems",
        "Hand-picked problems for each day, growing harder as the challenge goes on.",
    ),
];

#[component]
pub fn HomeView() -> Element {
    let dispatcher = use_dispatcher();
    let vm = build_home_vm(dispatcher.controller().read().progress());
    let current_day = i64::from(vm.current_day);

    rsx! {
        section { class: "hero",
            h1 { "Master Data Structures & Algorithms" }
            p { "A 90-day challenge with theory, code, and practice for every day." }
            div { class: "hero-actions",
                button {
                    class: "btn primary",
                    onclick: move |_| dispatcher.send(Action::Navigate(View::Challenges)),
                    "Start the Challenge"
                }
                button {
                    class: "btn secondary",
                    onclick: move |_| dispatcher.send(Action::Navigate(View::Docs)),
                    "Browse Documentation"
                }
            }
        }

        section { class: "stats",
            div { class: "stat",
                span { class: "stat-value", "{vm.completed}" }
                span { class: "stat-label", "Days completed" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.remaining}" }
                span { class: "stat-label", "Days remaining" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.percent}%" }
                span { class: "stat-label", "Progress" }
            }
            button {
                class: "btn primary continue",
                onclick: move |_| dispatcher.send(Action::SelectDay(current_day)),
                "Continue Day {vm.current_day}"
            }
        }

        section { class: "features",
            for (title, body) in FEATURES {
                div { key: "{title}", class: "feature-card",
                    h3 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}
