use dioxus::prelude::*;

use services::Action;

use crate::dispatch::use_dispatcher;
use crate::vm::build_challenges_vm;

#[component]
pub fn ChallengesView() -> Element {
    let dispatcher = use_dispatcher();
    let controller = dispatcher.controller();
    let vm = {
        let vc = controller.read();
        build_challenges_vm(vc.progress(), vc.active_day())
    };

    rsx! {
        section { class: "page challenges",
            h2 { "90-Day DSA Challenge" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.bar_width}" }
            }
            p { class: "progress-text", "{vm.summary}" }

            div { class: "day-grid",
                for cell in vm.cells {
                    button {
                        key: "{cell.day}",
                        class: "{cell.class}",
                        title: "{cell.title}",
                        onclick: move |_| dispatcher.send(Action::SelectDay(i64::from(cell.day))),
                        span { class: "day-number", "Day {cell.day}" }
                        span { class: "day-title", "{cell.title}" }
                        if cell.completed {
                            span { class: "day-check", "✓" }
                        }
                    }
                }
            }
        }
    }
}
