use dioxus::prelude::*;

use services::Action;

use crate::dispatch::use_dispatcher;
use crate::vm::build_lectures_vm;

#[component]
pub fn LecturesView() -> Element {
    let dispatcher = use_dispatcher();
    let vm = build_lectures_vm(dispatcher.controller().read().lecture_filter());

    rsx! {
        section { class: "page lectures",
            aside { class: "lecture-filters",
                h3 { "Categories" }
                for entry in vm.filters {
                    button {
                        key: "{entry.label}",
                        class: if entry.active { "filter active" } else { "filter" },
                        onclick: move |_| dispatcher.send(Action::FilterLectures(entry.filter)),
                        "{entry.label}"
                    }
                }
            }
            div { class: "lecture-list",
                h2 { "{vm.heading}" }
                div { class: "lecture-grid",
                    for card in vm.cards {
                        div { key: "{card.id}", class: "lecture-card",
                            div { class: "lecture-thumb", "▶" }
                            h3 { "{card.title}" }
                            p { "{card.description}" }
                            div { class: "lecture-meta",
                                span { class: "badge {card.level_class}", "{card.level}" }
                                span { class: "duration", "{card.duration}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
