use dsa_core::content::{LectureCategory, LectureFilter, lectures_matching};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LectureFilterVm {
    pub filter: LectureFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LectureCardVm {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub level: &'static str,
    pub level_class: &'static str,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LecturesVm {
    pub filters: Vec<LectureFilterVm>,
    pub heading: &'static str,
    pub cards: Vec<LectureCardVm>,
}

#[must_use]
pub fn build_lectures_vm(selected: LectureFilter) -> LecturesVm {
    let filters = std::iter::once(LectureFilter::All)
        .chain(LectureCategory::ALL.into_iter().map(LectureFilter::Only))
        .map(|filter| LectureFilterVm {
            filter,
            label: filter.label(),
            active: filter == selected,
        })
        .collect();

    let cards = lectures_matching(selected)
        .into_iter()
        .map(|lecture| LectureCardVm {
            id: lecture.id,
            title: lecture.title,
            description: lecture.description,
            level: lecture.level.label(),
            level_class: lecture.level.css_class(),
            duration: format!("{} min", lecture.duration_mins),
        })
        .collect();

    LecturesVm {
        filters,
        heading: selected.label(),
        cards,
    }
}
