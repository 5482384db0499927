//! Read-only curriculum content. Every lookup here is a pure function of its
//! input.

mod days;
mod lectures;
mod topics;

pub use days::{
    CodeLanguage, DayMetadata, ExternalResource, PracticeProblem, code_example, day_difficulty,
    day_metadata, day_problems, day_theory, external_resources, learning_objectives,
    related_lectures, title_subject, topic_tags,
};
pub use lectures::{Lecture, LectureCategory, LectureFilter, lectures, lectures_matching};
pub use topics::{TopicGroup, TopicId, topic_content};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
