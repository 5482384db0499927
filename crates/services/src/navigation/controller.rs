use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use dsa_core::Clock;
use dsa_core::content::{CodeLanguage, LectureFilter, TopicId, day_problems};
use dsa_core::model::{
    Day, DisplayPreferences, NavigationState, Notice, NoticeId, NoticeKind, Progress, View,
};

use crate::error::PersistError;
use crate::progress_store::ProgressStore;

use super::action::{Action, Effect, SolveLinkMode};
use super::notices::NoticeBoard;
use super::persistence::Persistence;
use super::tasks::{NOTICE_FADE, NOTICE_VISIBLE, TOPIC_LOAD_DELAY, Task, TaskId, TaskScheduler};

const INVALID_DAY_NOTICE: &str = "Invalid day number. Showing Day 1 content.";
const COMPLETED_NOTICE: &str = "Day marked as completed!";
const LECTURE_PLACEHOLDER_NOTICE: &str = "Lecture content will be available in the next update!";
const EXTERNAL_PLACEHOLDER_NOTICE: &str =
    "External resources will be available in the next update!";
const SOLVER_PLACEHOLDER_NOTICE: &str = "Problem solver will be available in the next update!";

/// Content pane of the documentation view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicPane {
    Loading(TopicId),
    Ready(TopicId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocsPane {
    pub selected: TopicId,
    pub content: TopicPane,
}

impl Default for DocsPane {
    fn default() -> Self {
        Self {
            selected: TopicId::default(),
            content: TopicPane::Ready(TopicId::default()),
        }
    }
}

/// Owns navigation state and the in-memory copy of `Progress`.
///
/// [`ViewController::reduce`] is the single place state changes; it returns
/// the durable writes the change requires. [`ViewController::dispatch`] also
/// applies them.
#[derive(Clone, Debug)]
pub struct ViewController {
    clock: Clock,
    solve_links: SolveLinkMode,
    navigation: NavigationState,
    progress: Progress,
    preferences: DisplayPreferences,
    menu_open: bool,
    lecture_filter: LectureFilter,
    code_language: CodeLanguage,
    docs: DocsPane,
    notices: NoticeBoard,
    notice_tasks: HashMap<NoticeId, TaskId>,
    reveal_task: Option<TaskId>,
    tasks: TaskScheduler,
}

impl ViewController {
    /// Starts on `Home`, with the active day synced to the stored current day.
    #[must_use]
    pub fn new(
        progress: Progress,
        preferences: DisplayPreferences,
        clock: Clock,
        solve_links: SolveLinkMode,
    ) -> Self {
        let navigation = NavigationState::new(View::Home, progress.current_day());
        Self {
            clock,
            solve_links,
            navigation,
            progress,
            preferences,
            menu_open: false,
            lecture_filter: LectureFilter::default(),
            code_language: CodeLanguage::default(),
            docs: DocsPane::default(),
            notices: NoticeBoard::default(),
            notice_tasks: HashMap::new(),
            reveal_task: None,
            tasks: TaskScheduler::new(),
        }
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.navigation.view
    }

    #[must_use]
    pub fn active_day(&self) -> Day {
        self.navigation.active_day
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn preferences(&self) -> DisplayPreferences {
        self.preferences
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn lecture_filter(&self) -> LectureFilter {
        self.lecture_filter
    }

    #[must_use]
    pub fn code_language(&self) -> CodeLanguage {
        self.code_language
    }

    #[must_use]
    pub fn docs(&self) -> DocsPane {
        self.docs
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        self.notices.as_slice()
    }

    #[must_use]
    pub fn solve_links(&self) -> SolveLinkMode {
        self.solve_links
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Apply one action and return the durable writes it requires.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        tracing::trace!(?action, "reduce");
        match action {
            Action::Navigate(view) => self.navigate_to(view),
            Action::SelectDay(raw) => self.select_day(raw),
            Action::MarkCurrentDayComplete => self.mark_current_day_complete(),
            Action::ToggleDarkMode => {
                self.preferences.dark_mode = !self.preferences.dark_mode;
                vec![Effect::SaveDisplayPreferences(self.preferences)]
            }
            Action::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Vec::new()
            }
            Action::FilterLectures(filter) => {
                self.lecture_filter = filter;
                Vec::new()
            }
            Action::OpenTopic(topic) => {
                self.open_topic(topic);
                Vec::new()
            }
            Action::SelectCodeLanguage(language) => {
                self.code_language = language;
                Vec::new()
            }
            Action::OpenRelatedLecture => {
                self.notify(NoticeKind::Info, LECTURE_PLACEHOLDER_NOTICE);
                Vec::new()
            }
            Action::OpenExternalResource => {
                self.notify(NoticeKind::Info, EXTERNAL_PLACEHOLDER_NOTICE);
                Vec::new()
            }
            Action::SolveProblem(index) => {
                self.solve_problem(index);
                Vec::new()
            }
            Action::DismissNotice(id) => {
                if let Some(task) = self.notice_tasks.remove(&id) {
                    self.tasks.cancel(task);
                }
                self.notices.remove(id);
                Vec::new()
            }
        }
    }

    /// Reduce `action`, then write its effects. Write failures become a
    /// warning notice; nothing here is fatal.
    pub async fn dispatch(&mut self, persistence: &Persistence, action: Action) {
        for effect in self.reduce(action) {
            if let Err(err) = persistence.apply(&effect).await {
                self.report_persist_failure(&effect, &err);
            }
        }
    }

    pub fn report_persist_failure(&mut self, effect: &Effect, err: &PersistError) {
        tracing::error!(error = %err, ?effect, "failed to persist state");
        let message = match effect {
            Effect::SaveProgress(_) => "Progress could not be saved.",
            Effect::SaveDisplayPreferences(_) => "Display preference could not be saved.",
        };
        self.notify(NoticeKind::Warning, message);
    }

    #[must_use]
    pub fn has_due_tasks(&self) -> bool {
        self.tasks.has_due(self.clock.now())
    }

    /// Run every task due by the clock's current time, including follow-ups
    /// that come due in the same window. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        loop {
            let due = self.tasks.take_due(now);
            if due.is_empty() {
                return ran;
            }
            for task in due {
                self.run_task(task.task, task.due);
                ran += 1;
            }
        }
    }

    /// Step a fixed clock forward and run whatever came due.
    pub fn advance(&mut self, delta: Duration) -> usize {
        self.clock.advance(delta);
        self.tick()
    }

    fn navigate_to(&mut self, view: View) -> Vec<Effect> {
        self.navigation.view = view;
        self.menu_open = false;
        match view {
            View::Docs => {
                self.cancel_reveal();
                self.docs = DocsPane::default();
            }
            View::Lectures => self.lecture_filter = LectureFilter::default(),
            View::Day => {
                self.progress.set_current_day(self.navigation.active_day);
                return vec![Effect::SaveProgress(self.progress.clone())];
            }
            View::Home | View::Challenges => {}
        }
        Vec::new()
    }

    fn select_day(&mut self, raw: i64) -> Vec<Effect> {
        let progress = match ProgressStore::set_current_day(self.progress.clone(), raw) {
            Ok(progress) => progress,
            Err(err) => {
                tracing::warn!(error = %err, "clamping invalid day selection");
                self.notify(NoticeKind::Warning, INVALID_DAY_NOTICE);
                ProgressStore::set_current_day(self.progress.clone(), 1)
                    .unwrap_or_else(|_| self.progress.clone())
            }
        };
        self.progress = progress;
        self.navigation.active_day = self.progress.current_day();
        self.code_language = CodeLanguage::default();

        let effects = self.navigate_to(View::Day);
        let day = self.navigation.active_day;
        self.notify(NoticeKind::Info, format!("Loading Day {day} content..."));
        effects
    }

    fn mark_current_day_complete(&mut self) -> Vec<Effect> {
        let day = self.navigation.active_day;
        if self.progress.is_completed(day) {
            return Vec::new();
        }
        self.progress = ProgressStore::mark_complete(self.progress.clone(), day);
        self.notify(NoticeKind::Success, COMPLETED_NOTICE);
        vec![Effect::SaveProgress(self.progress.clone())]
    }

    fn open_topic(&mut self, topic: TopicId) {
        self.docs = DocsPane {
            selected: topic,
            content: TopicPane::Loading(topic),
        };
        self.cancel_reveal();
        let task = self
            .tasks
            .schedule(self.clock.now(), TOPIC_LOAD_DELAY, Task::RevealTopic(topic));
        self.reveal_task = Some(task);
    }

    fn cancel_reveal(&mut self) {
        if let Some(task) = self.reveal_task.take() {
            self.tasks.cancel(task);
        }
    }

    fn solve_problem(&mut self, index: usize) {
        match self.solve_links {
            SolveLinkMode::Placeholder => {
                self.notify(NoticeKind::Info, SOLVER_PLACEHOLDER_NOTICE);
            }
            SolveLinkMode::Outbound => {
                let problems = day_problems(self.navigation.active_day);
                match problems.get(index) {
                    Some(problem) => tracing::info!(url = %problem.url, "opening practice problem"),
                    None => tracing::warn!(index, "no practice problem at index"),
                }
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.notices.push(kind, message);
        let task = self
            .tasks
            .schedule(self.clock.now(), NOTICE_VISIBLE, Task::FadeNotice(id));
        self.notice_tasks.insert(id, task);
    }

    fn run_task(&mut self, task: Task, due: DateTime<Utc>) {
        match task {
            Task::FadeNotice(id) => {
                if self.notices.begin_fade(id) {
                    let remove = self
                        .tasks
                        .schedule_at(due + NOTICE_FADE, Task::RemoveNotice(id));
                    self.notice_tasks.insert(id, remove);
                } else {
                    self.notice_tasks.remove(&id);
                }
            }
            Task::RemoveNotice(id) => {
                self.notices.remove(id);
                self.notice_tasks.remove(&id);
            }
            Task::RevealTopic(topic) => {
                self.reveal_task = None;
                // A reveal for a topic the pane has moved away from is dropped.
                if self.docs.content == TopicPane::Loading(topic) {
                    self.docs.content = TopicPane::Ready(topic);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_core::content::LectureCategory;
    use dsa_core::model::NoticePhase;
    use dsa_core::time::fixed_clock;

    fn day(raw: i64) -> Day {
        Day::new(raw).unwrap()
    }

    fn controller() -> ViewController {
        ViewController::new(
            Progress::default(),
            DisplayPreferences::default(),
            fixed_clock(),
            SolveLinkMode::Outbound,
        )
    }

    fn kinds(controller: &ViewController) -> Vec<NoticeKind> {
        controller.notices().iter().map(|n| n.kind).collect()
    }

    #[test]
    fn starts_home_synced_to_stored_day() {
        let vc = ViewController::new(
            Progress::new([], day(12)),
            DisplayPreferences::default(),
            fixed_clock(),
            SolveLinkMode::Outbound,
        );
        assert_eq!(vc.navigation(), NavigationState::new(View::Home, day(12)));
    }

    #[test]
    fn every_view_is_reachable_from_every_view() {
        let mut vc = controller();
        for from in View::ALL {
            for to in View::ALL {
                vc.reduce(Action::Navigate(from));
                vc.reduce(Action::Navigate(to));
                assert_eq!(vc.view(), to);
            }
        }
    }

    #[test]
    fn navigating_to_day_persists_current_day() {
        let mut vc = controller();
        let effects = vc.reduce(Action::Navigate(View::Day));
        assert_eq!(
            effects,
            vec![Effect::SaveProgress(Progress::new([], Day::FIRST))]
        );
        assert!(vc.reduce(Action::Navigate(View::Lectures)).is_empty());
    }

    #[test]
    fn select_day_moves_pointer_and_persists() {
        let mut vc = controller();
        let effects = vc.reduce(Action::SelectDay(37));
        assert_eq!(vc.navigation(), NavigationState::new(View::Day, day(37)));
        assert_eq!(vc.progress().current_day(), day(37));
        assert_eq!(
            effects,
            vec![Effect::SaveProgress(Progress::new([], day(37)))]
        );
        assert_eq!(kinds(&vc), vec![NoticeKind::Info]);
        assert_eq!(vc.notices()[0].message, "Loading Day 37 content...");
    }

    #[test]
    fn select_invalid_day_clamps_with_one_warning() {
        let mut vc = controller();
        vc.reduce(Action::SelectDay(15));
        let effects = vc.reduce(Action::SelectDay(200));

        assert_eq!(vc.navigation(), NavigationState::new(View::Day, Day::FIRST));
        assert_eq!(vc.progress().current_day(), Day::FIRST);
        assert_eq!(
            effects,
            vec![Effect::SaveProgress(Progress::new([], Day::FIRST))]
        );
        let warnings: Vec<&Notice> = vc
            .notices()
            .iter()
            .filter(|n| n.kind == NoticeKind::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, INVALID_DAY_NOTICE);
    }

    #[test]
    fn select_day_resets_code_tab() {
        let mut vc = controller();
        vc.reduce(Action::SelectCodeLanguage(CodeLanguage::Java));
        assert_eq!(vc.code_language(), CodeLanguage::Java);
        vc.reduce(Action::SelectDay(2));
        assert_eq!(vc.code_language(), CodeLanguage::JavaScript);
    }

    #[test]
    fn marking_complete_twice_writes_once() {
        let mut vc = controller();
        vc.reduce(Action::SelectDay(10));

        let first = vc.reduce(Action::MarkCurrentDayComplete);
        let second = vc.reduce(Action::MarkCurrentDayComplete);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(vc.progress().completed_count(), 1);
        assert!(vc.progress().is_completed(day(10)));
        assert_eq!(
            vc.notices()
                .iter()
                .filter(|n| n.kind == NoticeKind::Success)
                .count(),
            1
        );
    }

    #[test]
    fn dark_mode_toggle_only_touches_preferences() {
        let mut vc = controller();
        let before = vc.progress().clone();
        let effects = vc.reduce(Action::ToggleDarkMode);
        assert_eq!(
            effects,
            vec![Effect::SaveDisplayPreferences(DisplayPreferences {
                dark_mode: true
            })]
        );
        vc.reduce(Action::ToggleDarkMode);
        assert!(!vc.preferences().dark_mode);
        assert_eq!(vc.progress(), &before);
    }

    #[test]
    fn navigation_closes_menu_and_resets_filters() {
        let mut vc = controller();
        vc.reduce(Action::Navigate(View::Lectures));
        vc.reduce(Action::FilterLectures(LectureFilter::Only(
            LectureCategory::Advanced,
        )));
        vc.reduce(Action::ToggleMenu);
        assert!(vc.menu_open());

        vc.reduce(Action::Navigate(View::Home));
        assert!(!vc.menu_open());
        vc.reduce(Action::Navigate(View::Lectures));
        assert_eq!(vc.lecture_filter(), LectureFilter::All);
    }

    #[test]
    fn notices_fade_then_disappear() {
        let mut vc = controller();
        vc.reduce(Action::OpenRelatedLecture);
        assert_eq!(vc.notices()[0].phase, NoticePhase::Shown);

        vc.advance(Duration::milliseconds(2999));
        assert_eq!(vc.notices()[0].phase, NoticePhase::Shown);

        vc.advance(Duration::milliseconds(1));
        assert_eq!(vc.notices()[0].phase, NoticePhase::Fading);

        vc.advance(Duration::milliseconds(300));
        assert!(vc.notices().is_empty());
        assert_eq!(vc.pending_tasks(), 0);
    }

    #[test]
    fn long_advance_runs_follow_up_tasks() {
        let mut vc = controller();
        vc.reduce(Action::OpenExternalResource);
        assert_eq!(vc.advance(Duration::milliseconds(3300)), 2);
        assert!(vc.notices().is_empty());
    }

    #[test]
    fn dismissing_cancels_timers() {
        let mut vc = controller();
        vc.reduce(Action::OpenRelatedLecture);
        let id = vc.notices()[0].id;
        vc.reduce(Action::DismissNotice(id));
        assert!(vc.notices().is_empty());
        assert_eq!(vc.pending_tasks(), 0);
    }

    #[test]
    fn topic_loads_after_delay() {
        let mut vc = controller();
        vc.reduce(Action::Navigate(View::Docs));
        assert_eq!(vc.docs().content, TopicPane::Ready(TopicId::Arrays));

        vc.reduce(Action::OpenTopic(TopicId::Graphs));
        assert_eq!(vc.docs().content, TopicPane::Loading(TopicId::Graphs));

        vc.advance(Duration::milliseconds(499));
        assert_eq!(vc.docs().content, TopicPane::Loading(TopicId::Graphs));

        vc.advance(Duration::milliseconds(1));
        assert_eq!(vc.docs().content, TopicPane::Ready(TopicId::Graphs));
    }

    #[test]
    fn stale_topic_reveal_is_ignored() {
        let mut vc = controller();
        vc.reduce(Action::Navigate(View::Docs));
        vc.reduce(Action::OpenTopic(TopicId::Stacks));
        vc.reduce(Action::Navigate(View::Home));
        vc.reduce(Action::Navigate(View::Docs));

        vc.advance(Duration::seconds(1));
        assert_eq!(vc.docs(), DocsPane::default());
        assert_eq!(vc.pending_tasks(), 0);
    }

    #[test]
    fn reopening_a_topic_restarts_its_delay() {
        let mut vc = controller();
        vc.reduce(Action::Navigate(View::Docs));
        vc.reduce(Action::OpenTopic(TopicId::Trees));
        vc.advance(Duration::milliseconds(200));
        vc.reduce(Action::OpenTopic(TopicId::Graphs));
        vc.advance(Duration::milliseconds(200));
        vc.reduce(Action::OpenTopic(TopicId::Trees));
        assert_eq!(vc.pending_tasks(), 1);

        // The first Trees reveal would have been due here.
        vc.advance(Duration::milliseconds(100));
        assert_eq!(vc.docs().content, TopicPane::Loading(TopicId::Trees));

        vc.advance(Duration::milliseconds(400));
        assert_eq!(vc.docs().content, TopicPane::Ready(TopicId::Trees));
        assert_eq!(vc.pending_tasks(), 0);
    }

    #[test]
    fn solve_problem_follows_link_mode() {
        let mut outbound = controller();
        outbound.reduce(Action::SolveProblem(0));
        assert!(outbound.notices().is_empty());

        let mut placeholder = ViewController::new(
            Progress::default(),
            DisplayPreferences::default(),
            fixed_clock(),
            SolveLinkMode::Placeholder,
        );
        placeholder.reduce(Action::SolveProblem(0));
        assert_eq!(placeholder.notices()[0].message, SOLVER_PLACEHOLDER_NOTICE);
    }
}
