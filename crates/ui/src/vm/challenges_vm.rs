use dsa_core::content::day_metadata;
use dsa_core::model::{Day, Progress, TOTAL_DAYS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeCellVm {
    pub day: u8,
    pub title: &'static str,
    pub class: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengesVm {
    pub cells: Vec<ChallengeCellVm>,
    /// Exact CSS width of the progress fill, e.g. `"1.1111111111111112%"`.
    pub bar_width: String,
    pub summary: String,
}

/// One cell per day, marked with difficulty, completion, and the active day.
#[must_use]
pub fn build_challenges_vm(progress: &Progress, active_day: Day) -> ChallengesVm {
    let cells = Day::all()
        .map(|day| {
            let meta = day_metadata(day);
            let completed = progress.is_completed(day);
            let mut class = format!("day-cell {}", meta.difficulty.css_class());
            if completed {
                class.push_str(" completed");
            }
            if day == active_day {
                class.push_str(" active");
            }
            ChallengeCellVm {
                day: day.value(),
                title: meta.title,
                class,
                completed,
            }
        })
        .collect();

    let percent = progress.completion_percent();
    ChallengesVm {
        cells,
        bar_width: format!("{}%", progress.completion_ratio() * 100.0),
        summary: format!(
            "{} of {TOTAL_DAYS} days completed ({percent}%)",
            progress.completed_count()
        ),
    }
}
