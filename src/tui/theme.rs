use ratatui::style::Color;

use crate::model::config::Config;
use crate::model::item::ItemKind;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Accent used for the priority star and focused widgets
    pub highlight: Color,
    pub red: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x1A, 0x1A),
            panel: Color::Rgb(0x24, 0x24, 0x24),
            text: Color::Rgb(0xD8, 0xD8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x80, 0x80, 0x80),
            highlight: Color::Rgb(0xFF, 0xAA, 0x00),
            red: Color::Rgb(0xFF, 0x4D, 0x4D),
            cyan: Color::Rgb(0x3D, 0xDC, 0xFF),
            purple: Color::Rgb(0xC6, 0x78, 0xDD),
            selection_bg: Color::Rgb(0x33, 0x38, 0x3F),
        }
    }
}

/// Parse a hex color string like "#FF4D4D" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the config file, falling back to defaults
    pub fn from_config(config: &Config) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &config.ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "panel" => theme.panel = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "red" => theme.red = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Get the color for an item kind tag
    pub fn kind_color(&self, kind: ItemKind) -> Color {
        match kind {
            ItemKind::None => self.dim,
            ItemKind::Reminder => self.cyan,
            ItemKind::Alert => self.red,
            ItemKind::Tag => self.purple,
        }
    }
}
