use crossterm::style::Color;

/// Selector for the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    /// The next theme in cycle order.
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::HighContrast,
            ThemeKind::HighContrast => ThemeKind::Dark,
        }
    }

    /// The palette for this selector.
    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::HighContrast => "High Contrast",
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Box border color (thicker 3x3 separators)
    pub box_border: Color,
    /// Entered value color
    pub filled: Color,
    /// Empty-cell marker color
    pub empty: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Background for cells flagged by a failed validation
    pub flagged_bg: Color,
    /// Error/conflict color
    pub error: Color,
    /// Passing-validation color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_border: Color::Rgb { r: 130, g: 140, b: 170 },
            filled: Color::Rgb { r: 80, g: 180, b: 255 },
            empty: Color::Rgb { r: 140, g: 150, b: 180 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            flagged_bg: Color::Rgb { r: 70, g: 32, b: 38 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            box_border: Color::Rgb { r: 60, g: 60, b: 80 },
            filled: Color::Rgb { r: 30, g: 100, b: 200 },
            empty: Color::Rgb { r: 130, g: 130, b: 150 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            flagged_bg: Color::Rgb { r: 250, g: 214, b: 214 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            box_border: Color::White,
            filled: Color::Cyan,
            empty: Color::Rgb { r: 150, g: 150, b: 150 },
            selected_bg: Color::Blue,
            flagged_bg: Color::DarkRed,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
