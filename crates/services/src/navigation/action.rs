use std::fmt;
use std::str::FromStr;

use dsa_core::content::{CodeLanguage, LectureFilter, TopicId};
use dsa_core::model::{DisplayPreferences, NoticeId, Progress, View};

/// Every user gesture the site understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    /// Raw day number; out-of-range input is clamped to day 1 with a warning.
    SelectDay(i64),
    MarkCurrentDayComplete,
    ToggleDarkMode,
    ToggleMenu,
    FilterLectures(LectureFilter),
    OpenTopic(TopicId),
    SelectCodeLanguage(CodeLanguage),
    OpenRelatedLecture,
    OpenExternalResource,
    /// Index into the active day's practice problems.
    SolveProblem(usize),
    DismissNotice(NoticeId),
}

/// Durable writes requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SaveProgress(Progress),
    SaveDisplayPreferences(DisplayPreferences),
}

/// What a "Solve Problem" button does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolveLinkMode {
    /// Render the problem URL as an outbound link.
    #[default]
    Outbound,
    /// Render a button that only shows a "coming soon" notice.
    Placeholder,
}

impl FromStr for SolveLinkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outbound" => Ok(Self::Outbound),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(format!("unknown solve link mode: {other}")),
        }
    }
}

impl fmt::Display for SolveLinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveLinkMode::Outbound => f.write_str("outbound"),
            SolveLinkMode::Placeholder => f.write_str("placeholder"),
        }
    }
}
