use crate::model::day::Day;

/// The top-level screens of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Challenges,
    Docs,
    Lectures,
    Day,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Challenges,
        View::Docs,
        View::Lectures,
        View::Day,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Challenges => "challenges",
            View::Docs => "docs",
            View::Lectures => "lectures",
            View::Day => "day",
        }
    }

    /// Label used in the navigation bar; `None` for views reached only by
    /// selecting a day.
    #[must_use]
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            View::Home => Some("Home"),
            View::Challenges => Some("90-Day Challenge"),
            View::Docs => Some("Documentation"),
            View::Lectures => Some("Lectures"),
            View::Day => None,
        }
    }
}

/// Which view is showing and which day it points at. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub active_day: Day,
}

impl NavigationState {
    #[must_use]
    pub fn new(view: View, active_day: Day) -> Self {
        Self { view, active_day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_on_day_one() {
        let state = NavigationState::default();
        assert_eq!(state.view, View::Home);
        assert_eq!(state.active_day, Day::FIRST);
    }

    #[test]
    fn only_day_is_missing_from_the_nav_bar() {
        let unlabeled: Vec<View> = View::ALL
            .into_iter()
            .filter(|view| view.nav_label().is_none())
            .collect();
        assert_eq!(unlabeled, vec![View::Day]);
    }
}
