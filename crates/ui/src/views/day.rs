use dioxus::prelude::*;

use services::{Action, SolveLinkMode};

use crate::dispatch::use_dispatcher;
use crate::vm::{DayVm, ProblemVm, build_day_vm};

#[component]
pub fn DayView() -> Element {
    let dispatcher = use_dispatcher();
    let controller = dispatcher.controller();
    let (vm, solve_links) = {
        let vc = controller.read();
        (
            build_day_vm(vc.active_day(), vc.progress(), vc.code_language()),
            vc.solve_links(),
        )
    };

    rsx! {
        section { class: "page day-page",
            DayHeader { vm: vm.clone() }

            div { class: "day-section overview",
                h2 { "Overview" }
                p { "{vm.description}" }
            }

            div { class: "day-section objectives",
                h2 { "Learning Objectives" }
                ul {
                    for objective in vm.objectives.iter() {
                        li { "{objective}" }
                    }
                }
            }

            div { class: "day-section theory",
                h2 { "Theory" }
                div { class: "markdown", dangerous_inner_html: "{vm.theory_html}" }
            }

            div { class: "day-section code",
                h2 { "Code Example" }
                div { class: "code-tabs",
                    for tab in vm.code_tabs.clone() {
                        button {
                            key: "{tab.label}",
                            class: if tab.active { "code-tab active" } else { "code-tab" },
                            onclick: move |_| dispatcher.send(Action::SelectCodeLanguage(tab.language)),
                            "{tab.label}"
                        }
                    }
                }
                pre { class: "code-block", code { "{vm.code}" } }
            }

            div { class: "day-section problems",
                h2 { "Practice Problems" }
                for problem in vm.problems.clone() {
                    ProblemCard { key: "{problem.index}", problem, solve_links }
                }
            }

            div { class: "day-section related",
                h2 { "Related Lectures" }
                ul {
                    for title in vm.lectures.clone() {
                        li { key: "{title}",
                            button {
                                class: "link-button",
                                onclick: move |_| dispatcher.send(Action::OpenRelatedLecture),
                                "{title}"
                            }
                        }
                    }
                }
            }

            div { class: "day-section resources",
                h2 { "External Resources" }
                ul {
                    for resource in vm.resources.clone() {
                        li { key: "{resource.label}",
                            button {
                                class: "link-button",
                                title: "{resource.url}",
                                onclick: move |_| dispatcher.send(Action::OpenExternalResource),
                                "{resource.label}"
                            }
                        }
                    }
                }
            }

            div { class: "day-nav",
                if let Some(previous) = vm.previous {
                    button {
                        id: "prev-day",
                        class: "btn secondary",
                        onclick: move |_| dispatcher.send(Action::SelectDay(i64::from(previous))),
                        "← Day {previous}"
                    }
                }
                if let Some(next) = vm.next {
                    button {
                        id: "next-day",
                        class: "btn primary",
                        onclick: move |_| dispatcher.send(Action::SelectDay(i64::from(next))),
                        "Day {next} →"
                    }
                }
            }
        }
    }
}

#[component]
fn DayHeader(vm: DayVm) -> Element {
    let dispatcher = use_dispatcher();
    let complete_label = if vm.completed {
        "Completed ✓"
    } else {
        "Mark as Complete"
    };

    rsx! {
        div { class: "day-header",
            div { class: "day-heading",
                span { class: "day-counter", "{vm.counter}" }
                h1 { "{vm.title}" }
                span { class: "badge {vm.difficulty_class}", "{vm.difficulty}" }
            }
            div { class: "topic-tags",
                for tag in vm.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            button {
                id: "mark-complete",
                class: if vm.completed { "btn complete done" } else { "btn complete" },
                disabled: vm.completed,
                onclick: move |_| dispatcher.send(Action::MarkCurrentDayComplete),
                "{complete_label}"
            }
        }
    }
}

#[component]
fn ProblemCard(problem: ProblemVm, solve_links: SolveLinkMode) -> Element {
    let dispatcher = use_dispatcher();
    let index = problem.index;

    rsx! {
        div { class: "problem-card",
            div { class: "problem-head",
                h3 { "{problem.title}" }
                span { class: "badge {problem.difficulty_class}", "{problem.difficulty}" }
            }
            p { "{problem.description}" }
            match solve_links {
                SolveLinkMode::Outbound => rsx! {
                    a {
                        class: "btn solve",
                        href: "{problem.url}",
                        target: "_blank",
                        rel: "noopener",
                        onclick: move |_| dispatcher.send(Action::SolveProblem(index)),
                        "Solve Problem"
                    }
                },
                SolveLinkMode::Placeholder => rsx! {
                    button {
                        class: "btn solve",
                        onclick: move |_| dispatcher.send(Action::SolveProblem(index)),
                        "Solve Problem"
                    }
                },
            }
        }
    }
}
