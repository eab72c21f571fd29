//! Color theme for the display chrome.
//!
//! The sunburst itself uses the configured colors; the theme only styles the
//! header and footer so they stay readable against that background.

use diskring_core::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Styles for everything around the canvas.
#[derive(Debug, Clone)]
pub struct Theme {
    pub variant: ThemeVariant,

    pub header: Style,
    pub title: Style,
    pub size: Style,
    pub footer: Style,
    pub help_key: Style,
    pub help_desc: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_800 = Color::Rgb(30, 41, 59);

        let blue_400 = Color::Rgb(96, 165, 250);
        let amber_500 = Color::Rgb(245, 158, 11);

        Self {
            variant: ThemeVariant::Dark,
            header: Style::new().bg(slate_800).fg(slate_100),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            size: Style::new().fg(amber_500).add_modifier(Modifier::BOLD),
            footer: Style::new().bg(slate_800).fg(slate_400),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_800 = Color::Rgb(30, 41, 59);

        let blue_700 = Color::Rgb(29, 78, 216);
        let amber_600 = Color::Rgb(217, 119, 6);

        Self {
            variant: ThemeVariant::Light,
            header: Style::new().bg(slate_100).fg(slate_800),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            size: Style::new().fg(amber_600).add_modifier(Modifier::BOLD),
            footer: Style::new().bg(slate_100).fg(slate_600),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),
        }
    }

    /// Theme that contrasts with the canvas background.
    pub fn for_background(background: Rgb) -> Self {
        // Rec. 709 relative luminance
        let luminance = 0.2126 * background.r + 0.7152 * background.g + 0.0722 * background.b;
        if luminance > 0.5 {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Terminal color for a configured color.
pub fn to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.to_u8();
    Color::Rgb(r, g, b)
}
