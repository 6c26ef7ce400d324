//! Typography for the ghoststep UI
//!
//! Text size presets named after where they appear, plus helpers that apply
//! the palette so call sites never pick colors themselves.

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Completion screen title
    pub const XL: f32 = 40.0;

    /// Round label in the HUD
    pub const LG: f32 = 28.0;

    /// Button labels
    pub const SM: f32 = 18.0;

    /// Body text
    pub const BODY: f32 = 14.0;

    /// Hints and captions
    pub const CAPTION: f32 = 12.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    /// Bold heading in the primary text color
    pub fn heading(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
            .strong()
    }

    /// Body text in the secondary color
    pub fn body(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::TEXT_SECONDARY)
    }

    /// Small hint text
    pub fn caption(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::CAPTION)
            .color(UiColors::TEXT_SECONDARY)
    }

    /// Button label at the given size
    pub fn button(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
    }
}
