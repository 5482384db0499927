use dsa_core::model::{Notice, NoticeId, NoticeKind, NoticePhase};

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId::new(self.next_id);
        self.notices.push(Notice::new(id, kind, message));
        id
    }

    /// Returns `false` if the notice is already gone.
    pub fn begin_fade(&mut self, id: NoticeId) -> bool {
        match self.notices.iter_mut().find(|notice| notice.id == id) {
            Some(notice) => {
                notice.phase = NoticePhase::Fading;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Notice] {
        &self.notices
    }
}
