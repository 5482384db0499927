use dioxus::prelude::*;

use dsa_core::model::View;
use services::Action;

use crate::dispatch::use_dispatcher;
use crate::vm::map_notices;

const NAV_VIEWS: [View; 4] = [View::Home, View::Challenges, View::Docs, View::Lectures];

fn nav_class(link: View, current: View) -> &'static str {
    // A day page belongs to the challenge section.
    let current = if current == View::Day {
        View::Challenges
    } else {
        current
    };
    if link == current { "nav-link active" } else { "nav-link" }
}

#[component]
pub fn Header() -> Element {
    let dispatcher = use_dispatcher();
    let controller = dispatcher.controller();
    let (view, menu_open, dark_mode) = {
        let vc = controller.read();
        (vc.view(), vc.menu_open(), vc.preferences().dark_mode)
    };
    let links_class = if menu_open { "nav-links open" } else { "nav-links" };
    let theme_icon = if dark_mode { "☀️" } else { "🌙" };

    rsx! {
        header { class: "site-header",
            button {
                class: "logo",
                onclick: move |_| dispatcher.send(Action::Navigate(View::Home)),
                "DSA Master"
            }
            nav { class: "{links_class}",
                for link in NAV_VIEWS {
                    button {
                        key: "{link.slug()}",
                        class: nav_class(link, view),
                        onclick: move |_| dispatcher.send(Action::Navigate(link)),
                        {link.nav_label().unwrap_or_default()}
                    }
                }
            }
            div { class: "header-actions",
                button {
                    id: "theme-toggle",
                    class: "icon-button",
                    title: "Toggle dark mode",
                    onclick: move |_| dispatcher.send(Action::ToggleDarkMode),
                    "{theme_icon}"
                }
                button {
                    id: "menu-toggle",
                    class: "icon-button menu-toggle",
                    title: "Menu",
                    onclick: move |_| dispatcher.send(Action::ToggleMenu),
                    "☰"
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let dispatcher = use_dispatcher();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-brand",
                h3 { "DSA Master" }
                p { "Master data structures and algorithms in 90 days." }
            }
            div { class: "footer-links",
                h4 { "Quick Links" }
                for link in NAV_VIEWS {
                    button {
                        key: "{link.slug()}",
                        class: "footer-link",
                        onclick: move |_| dispatcher.send(Action::Navigate(link)),
                        {link.nav_label().unwrap_or_default()}
                    }
                }
            }
            p { class: "copyright", "© DSA Master" }
        }
    }
}

#[component]
pub fn NoticeStack() -> Element {
    let dispatcher = use_dispatcher();
    let notices = map_notices(dispatcher.controller().read().notices());

    rsx! {
        div { class: "notice-stack",
            for notice in notices {
                div { key: "{notice.id.value()}", class: "{notice.class}",
                    span { class: "notice-message", "{notice.message}" }
                    button {
                        class: "notice-close",
                        onclick: move |_| dispatcher.send(Action::DismissNotice(notice.id)),
                        "×"
                    }
                }
            }
        }
    }
}
