//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Colour scheme, chosen once at startup from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

/// Distribution platform shown under the hero copy
pub struct PlatformBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub note: &'static str,
}

pub const PLATFORM_BADGES: [PlatformBadge; 3] = [
    PlatformBadge {
        icon: egui_phosphor::regular::APPLE_LOGO,
        label: "iOS",
        note: "Early access",
    },
    PlatformBadge {
        icon: egui_phosphor::regular::GOOGLE_PLAY_LOGO,
        label: "Android",
        note: "Early access",
    },
    PlatformBadge {
        icon: egui_phosphor::regular::LAPTOP,
        label: "macOS",
        note: "Coming soon",
    },
];

/// Fake clip row rendered inside the phone mock
pub struct PreviewClip {
    pub title: &'static str,
    pub author: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
}

pub const PREVIEW_CLIPS: [PreviewClip; 3] = [
    PreviewClip {
        title: "Epic Snipe",
        author: "extravee",
        time: "Sep 02 • 5:18",
        duration: "0:11",
    },
    PreviewClip {
        title: "Funny Moment",
        author: "App at 5:43",
        time: "Sep 02 • 3:18",
        duration: "0:09",
    },
    PreviewClip {
        title: "Intense Battle",
        author: "extravee",
        time: "Aug 28 • 6:42",
        duration: "0:31",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DisplayMode::Light).unwrap(), "\"light\"");
        let mode: DisplayMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, DisplayMode::Dark);
    }

    #[test]
    fn dark_is_default() {
        assert_eq!(DisplayMode::default(), DisplayMode::Dark);
    }
}
