use serde::{Deserialize, Serialize};

/// Process-wide display mode. Starts light on every launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The header control advertises the mode it switches to.
    pub fn toggle_label(self) -> String {
        format!("{} Mode", self.toggle().name())
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    /// Class applied to `<body>` while this theme is active.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores() {
        let t = Theme::default();
        assert_eq!(t, Theme::Light);
        assert_eq!(t.toggle().toggle(), t);
        assert!(t.toggle().is_dark());
    }

    #[test]
    fn labels_name_the_target_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Dark.body_class(), Some("dark"));
        assert_eq!(Theme::Light.body_class(), None);
    }
}
