mod day;
mod navigation;
mod notice;
mod preferences;
mod progress;

pub use day::{Day, DayError, TOTAL_DAYS};
pub use navigation::{NavigationState, View};
pub use notice::{Notice, NoticeId, NoticeKind, NoticePhase};
pub use preferences::DisplayPreferences;
pub use progress::{Progress, ProgressParseError};
