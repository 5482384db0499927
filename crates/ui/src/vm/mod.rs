mod challenges_vm;
mod day_vm;
mod docs_vm;
mod home_vm;
mod lectures_vm;
mod markdown_vm;
mod notice_vm;

pub use challenges_vm::{ChallengeCellVm, ChallengesVm, build_challenges_vm};
pub use day_vm::{CodeTabVm, DayVm, ProblemVm, ResourceVm, build_day_vm};
pub use docs_vm::{DocsContentVm, DocsVm, TopicGroupVm, TopicLinkVm, build_docs_vm};
pub use home_vm::{HomeVm, build_home_vm};
pub use lectures_vm::{LectureCardVm, LectureFilterVm, LecturesVm, build_lectures_vm};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use notice_vm::{NoticeVm, map_notices};
