use dioxus::prelude::*;

use services::Action;

use crate::dispatch::use_dispatcher;
use crate::vm::{DocsContentVm, build_docs_vm};

#[component]
pub fn DocsView() -> Element {
    let dispatcher = use_dispatcher();
    let vm = build_docs_vm(dispatcher.controller().read().docs());

    rsx! {
        section { class: "page docs",
            aside { class: "docs-sidebar",
                for group in vm.groups {
                    div { key: "{group.label}", class: "docs-group",
                        h3 { "{group.label}" }
                        ul {
                            for link in group.topics {
                                li { key: "{link.topic.slug()}",
                                    button {
                                        class: if link.active { "topic-link active" } else { "topic-link" },
                                        onclick: move |_| dispatcher.send(Action::OpenTopic(link.topic)),
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            article { class: "docs-content",
                match vm.content {
                    DocsContentVm::Loading => rsx! {
                        div { class: "loading",
                            div { class: "spinner" }
                            p { "Loading..." }
                        }
                    },
                    DocsContentVm::Ready { html } => rsx! {
                        div { class: "markdown", dangerous_inner_html: "{html}" }
                    },
                }
            }
        }
    }
}
