/// Display preferences stored apart from progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub dark_mode: bool,
}

impl DisplayPreferences {
    /// Only the exact string `"true"` enables dark mode.
    #[must_use]
    pub fn from_slot(raw: Option<&str>) -> Self {
        Self {
            dark_mode: raw.is_some_and(|value| value.trim() == "true"),
        }
    }

    #[must_use]
    pub fn to_slot(self) -> &'static str {
        if self.dark_mode { "true" } else { "false" }
    }
}
