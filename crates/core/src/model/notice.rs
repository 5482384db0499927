/// Severity class of a transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Info,
    Warning,
    Success,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Success => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl NoticeId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Fading,
}

/// A transient, auto-dismissing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    pub phase: NoticePhase,
}

impl Notice {
    #[must_use]
    pub fn new(id: NoticeId, kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            phase: NoticePhase::Shown,
        }
    }
}
