use dsa_core::content::{
    CodeLanguage, code_example, day_metadata, day_problems, day_theory, external_resources,
    learning_objectives, related_lectures, topic_tags,
};
use dsa_core::model::{Day, Progress, TOTAL_DAYS};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTabVm {
    pub language: CodeLanguage,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemVm {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceVm {
    pub label: String,
    pub url: &'static str,
}

/// Everything the Day view shows for one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVm {
    pub day: u8,
    pub counter: String,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub tags: &'static [&'static str],
    pub completed: bool,
    pub objectives: &'static [&'static str],
    pub theory_html: String,
    pub code_tabs: Vec<CodeTabVm>,
    pub code: String,
    pub problems: Vec<ProblemVm>,
    pub lectures: Vec<String>,
    pub resources: Vec<ResourceVm>,
    pub previous: Option<u8>,
    pub next: Option<u8>,
}

#[must_use]
pub fn build_day_vm(day: Day, progress: &Progress, language: CodeLanguage) -> DayVm {
    let meta = day_metadata(day);

    let code_tabs = CodeLanguage::ALL
        .into_iter()
        .map(|tab| CodeTabVm {
            language: tab,
            label: tab.label(),
            active: tab == language,
        })
        .collect();

    let problems = day_problems(day)
        .into_iter()
        .enumerate()
        .map(|(index, problem)| ProblemVm {
            index,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty.label(),
            difficulty_class: problem.difficulty.css_class(),
            url: problem.url,
        })
        .collect();

    let resources = external_resources(day)
        .into_iter()
        .map(|resource| ResourceVm {
            label: resource.label,
            url: resource.url,
        })
        .collect();

    DayVm {
        day: day.value(),
        counter: format!("Day {day}/{TOTAL_DAYS}"),
        title: meta.title,
        description: meta.description,
        difficulty: meta.difficulty.label(),
        difficulty_class: meta.difficulty.css_class(),
        tags: topic_tags(day),
        completed: progress.is_completed(day),
        objectives: learning_objectives(day),
        theory_html: markdown_to_html(&day_theory(day)),
        code_tabs,
        code: code_example(day, language),
        problems,
        lectures: related_lectures(day),
        resources,
        previous: day.previous().map(Day::value),
        next: day.next().map(Day::value),
    }
}
