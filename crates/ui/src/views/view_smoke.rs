use dsa_core::content::{LectureCategory, LectureFilter, TopicId};
use dsa_core::model::View;
use services::progress_store::PROGRESS_SLOT;
use services::{Action, SolveLinkMode};
use storage::repository::{InMemoryRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

const PROBLEM_LINK: &str = "href=\"https://leetcode.com/problems/";

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats() {
    let mut harness = setup_view_harness(ViewKind::Home, &[]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Continue Day 1"), "missing continue button in {html}");
    assert!(html.contains("0%"), "missing percent in {html}");
    assert!(html.contains("90-Day Challenge"), "missing features in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn challenges_view_smoke_marks_progress() {
    let repo = InMemoryRepository::new()
        .with_slot(PROGRESS_SLOT, r#"{"completedDays":[1,2],"currentDay":3}"#);
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Challenges,
        Storage::from_repository(repo),
        SolveLinkMode::Outbound,
        &[],
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("2 of 90 days completed (2%)"),
        "missing summary in {html}"
    );
    assert_eq!(html.matches("day-cell easy completed").count(), 2);
    assert!(html.contains("day-cell easy active"), "missing active cell in {html}");
    assert!(html.contains("Day 90"), "missing last cell in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_renders_last_day() {
    let mut harness = setup_view_harness(ViewKind::Day, &[Action::SelectDay(90)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Day 90/90"), "missing counter in {html}");
    assert!(html.contains("prev-day"), "missing previous button in {html}");
    assert!(!html.contains("next-day"), "next button should be hidden in {html}");
    assert!(html.contains("Mark as Complete"), "missing complete button in {html}");
    assert_eq!(html.matches(PROBLEM_LINK).count(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_shows_completed_state() {
    let mut harness = setup_view_harness(
        ViewKind::Day,
        &[Action::SelectDay(1), Action::MarkCurrentDayComplete],
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Completed ✓"), "missing completed label in {html}");
    assert!(!html.contains("prev-day"), "previous button should be hidden in {html}");
    assert!(html.contains("findElement"), "missing day one code in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_placeholder_mode_has_no_problem_links() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Day,
        Storage::in_memory(),
        SolveLinkMode::Placeholder,
        &[Action::SelectDay(40)],
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches(PROBLEM_LINK).count(), 0);
    assert_eq!(html.matches("Solve Problem").count(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn docs_view_smoke_renders_default_topic() {
    let mut harness = setup_view_harness(ViewKind::Docs, &[Action::Navigate(View::Docs)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("<h1>Arrays</h1>"), "missing topic heading in {html}");
    assert!(html.contains("Data Structures"), "missing sidebar group in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn docs_view_smoke_shows_loading_while_topic_pending() {
    let mut harness = setup_view_harness(
        ViewKind::Docs,
        &[Action::Navigate(View::Docs), Action::OpenTopic(TopicId::Graphs)],
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing spinner in {html}");
    assert!(!html.contains("<h1>"), "content should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lectures_view_smoke_filters_cards() {
    let mut harness = setup_view_harness(ViewKind::Lectures, &[]).await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("class=\"lecture-card\"").count(), 12);

    let mut harness = setup_view_harness(
        ViewKind::Lectures,
        &[Action::FilterLectures(LectureFilter::Only(
            LectureCategory::Advanced,
        ))],
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("class=\"lecture-card\"").count(), 2);
    assert!(html.contains("Advanced Topics"), "missing heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notice_stack_smoke_shows_clamp_warning() {
    let mut harness = setup_view_harness(ViewKind::Notices, &[Action::SelectDay(200)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Invalid day number. Showing Day 1 content."),
        "missing warning in {html}"
    );
    assert!(html.contains("notice warning"), "missing warning class in {html}");
    assert!(html.contains("Loading Day 1 content..."), "missing info in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_reflects_dark_mode() {
    let mut harness = setup_view_harness(ViewKind::Header, &[Action::ToggleDarkMode]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("☀️"), "missing light-mode icon in {html}");
    assert!(html.contains("nav-link active"), "missing active link in {html}");
}
