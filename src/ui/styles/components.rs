//! Styled UI component builders
//!
//! Small builders so the HUD and completion screen share one look instead of
//! styling buttons inline.

use super::colors::UiColors;
use super::typography::{TextSize, TextStyle};
use bevy_egui::egui;

/// Rounding shared by every button.
const BUTTON_ROUNDING: u8 = 6;

/// Helper functions for creating styled buttons
pub struct StyledButton;

impl StyledButton {
    fn base(text: impl Into<String>, fill: egui::Color32) -> egui::Button<'static> {
        egui::Button::new(TextStyle::button(text, TextSize::SM))
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(BUTTON_ROUNDING))
            .min_size(egui::vec2(130.0, 40.0))
    }

    /// Primary action button (blue), used to advance the round
    pub fn primary(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        ui.add(Self::base(text, UiColors::ADVANCE))
    }

    /// Success button (green), used for restart on the completion screen
    pub fn success(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        ui.add(Self::base(text, UiColors::ACTIVE))
    }

    /// Danger button (red), used for the destructive reset
    pub fn danger(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        ui.add(Self::base(text, UiColors::DANGER))
    }

    /// Toggle button, green while active and gray otherwise
    pub fn toggle(ui: &mut egui::Ui, text: impl Into<String>, active: bool) -> egui::Response {
        let fill = if active {
            UiColors::ACTIVE
        } else {
            UiColors::BG_MID
        };
        ui.add(Self::base(text, fill).stroke(egui::Stroke::new(1.0, UiColors::BORDER)))
    }
}

/// Helper functions for creating styled panels
pub struct StyledPanel;

impl StyledPanel {
    /// Semi-transparent full-screen overlay, used by the completion screen
    pub fn overlay() -> egui::Frame {
        egui::Frame::default()
            .fill(UiColors::BG_OVERLAY)
            .inner_margin(egui::Margin::same(30))
    }

    /// Opaque bar for the HUD's top and bottom edges
    pub fn bar() -> egui::Frame {
        egui::Frame::default()
            .fill(UiColors::BG_DARK)
            .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
            .inner_margin(egui::Margin::same(8))
    }
}

/// Spacing constants and helpers
pub struct Layout;

impl Layout {
    /// Vertical gap between sections of a screen
    pub const SECTION_SPACING: f32 = 30.0;

    /// Gap between adjacent items in a row
    pub const ITEM_SPACING: f32 = 10.0;

    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SECTION_SPACING);
    }

    pub fn item_space(ui: &mut egui::Ui) {
        ui.add_space(Self::ITEM_SPACING);
    }
}
