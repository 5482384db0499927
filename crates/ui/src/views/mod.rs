mod challenges;
mod day;
mod docs;
mod home;
mod layout;
mod lectures;

pub use challenges::ChallengesView;
pub use day::DayView;
pub use docs::DocsView;
pub use home::HomeView;
pub use layout::{Footer, Header, NoticeStack};
pub use lectures::LecturesView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
