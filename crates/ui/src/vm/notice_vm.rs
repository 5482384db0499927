use dsa_core::model::{Notice, NoticeId, NoticePhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub id: NoticeId,
    pub class: String,
    pub message: String,
}

impl From<&Notice> for NoticeVm {
    fn from(notice: &Notice) -> Self {
        let mut class = format!("notice {}", notice.kind.css_class());
        if notice.phase == NoticePhase::Fading {
            class.push_str(" fading");
        }
        Self {
            id: notice.id,
            class,
            message: notice.message.clone(),
        }
    }
}

#[must_use]
pub fn map_notices(notices: &[Notice]) -> Vec<NoticeVm> {
    notices.iter().map(NoticeVm::from).collect()
}
