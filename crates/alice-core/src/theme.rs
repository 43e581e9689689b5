//! Terminal theme system.
//!
//! Two phosphor-style variants with runtime switching. The palette maps
//! log entry roles onto a small set of UI elements so the view never
//! hardcodes a color.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Green-on-black phosphor look (default).
    PhosphorDark,
    /// Paper-white variant for light terminals.
    PhosphorLight,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::PhosphorDark
    }
}

/// Color palette for a theme variant.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub error: Color,
    pub info: Color,
    pub border: Color,
    pub selection: Color,
}

/// UI element types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Titles and headers
    Title,
    /// Borders and frames
    Border,
    /// Echoed input and the prompt
    Accent,
    /// Error entries
    Error,
    /// Spinner and status text
    Info,
    /// Background fill
    Background,
    /// Cursor and selected text
    Highlight,
    /// Dimmed hints
    Inactive,
}

/// Main theme structure managing all UI styling.
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Create a new theme with the specified variant.
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::PhosphorDark => ColorPalette {
                background: Color::Rgb(12, 14, 12),    // near black
                foreground: Color::Rgb(170, 220, 170), // soft green
                accent: Color::Rgb(120, 255, 120),     // bright green
                error: Color::Rgb(235, 110, 100),      // red
                info: Color::Rgb(130, 190, 230),       // blue
                border: Color::Rgb(70, 95, 70),        // dim green-gray
                selection: Color::Rgb(34, 46, 34),     // raised background
            },
            ThemeVariant::PhosphorLight => ColorPalette {
                background: Color::Rgb(248, 248, 242), // paper
                foreground: Color::Rgb(45, 60, 45),    // dark green-gray
                accent: Color::Rgb(20, 120, 20),       // green
                error: Color::Rgb(190, 50, 40),        // red
                info: Color::Rgb(30, 100, 160),        // blue
                border: Color::Rgb(170, 180, 170),     // gray
                selection: Color::Rgb(226, 232, 220),  // raised paper
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Toggle between dark and light variants.
    pub fn toggle(&mut self) {
        self.variant = match self.variant {
            ThemeVariant::PhosphorDark => ThemeVariant::PhosphorLight,
            ThemeVariant::PhosphorLight => ThemeVariant::PhosphorDark,
        };
        *self = Self::new(self.variant);
    }

    /// Get a ratatui Style for the specified UI element.
    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text | Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Error => Style::default()
                .fg(self.colors.error)
                .bg(self.colors.background),

            Element::Info => Style::default()
                .fg(self.colors.info)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }
}
