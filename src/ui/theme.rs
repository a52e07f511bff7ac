//! Color palette and style helpers for the terminal UI
//!
//! A warm "late night TV guide" palette: amber on dark slate.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #111318 (slate)
    pub const BACKGROUND: Color = Color::Rgb(0x11, 0x13, 0x18);

    /// Panels and the status bar: #1c1f27
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1c, 0x1f, 0x27);

    /// Primary: #ffb000 (amber)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb0, 0x00);

    /// Secondary: #4fd1c5 (teal)
    pub const SECONDARY: Color = Color::Rgb(0x4f, 0xd1, 0xc5);

    /// Text: #e6e1d6 (paper)
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe1, 0xd6);

    /// Dim: #6b6f7a
    pub const DIM: Color = Color::Rgb(0x6b, 0x6f, 0x7a);

    /// Placeholder record: #e05d5d
    pub const MISSING: Color = Color::Rgb(0xe0, 0x5d, 0x5d);

    /// Border color (dim amber)
    pub const BORDER: Color = Color::Rgb(0x7a, 0x5a, 0x14);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Selected list row
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Season/number metadata
    pub fn episode_code() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Placeholder rows
    pub fn missing() -> Style {
        Style::default()
            .fg(Self::MISSING)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}
