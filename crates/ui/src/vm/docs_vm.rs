use dsa_core::content::{TopicGroup, TopicId, topic_content};
use services::navigation::{DocsPane, TopicPane};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicLinkVm {
    pub topic: TopicId,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicGroupVm {
    pub label: &'static str,
    pub topics: Vec<TopicLinkVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocsContentVm {
    Loading,
    Ready { html: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsVm {
    pub groups: Vec<TopicGroupVm>,
    pub content: DocsContentVm,
}

#[must_use]
pub fn build_docs_vm(pane: DocsPane) -> DocsVm {
    let groups = TopicGroup::ALL
        .into_iter()
        .map(|group| TopicGroupVm {
            label: group.label(),
            topics: group
                .topics()
                .map(|topic| TopicLinkVm {
                    topic,
                    label: topic.label(),
                    active: topic == pane.selected,
                })
                .collect(),
        })
        .collect();

    let content = match pane.content {
        TopicPane::Loading(_) => DocsContentVm::Loading,
        TopicPane::Ready(topic) => DocsContentVm::Ready {
            html: markdown_to_html(&topic_content(topic)),
        },
    };

    DocsVm { groups, content }
}
