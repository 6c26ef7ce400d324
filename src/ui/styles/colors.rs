//! Color palette for the ghoststep UI
//!
//! Dark backgrounds to keep the focus on the scene, with one strong accent
//! per button role: blue to advance, red to reset, green for the active
//! camera toggle.
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (nested panels, inactive buttons)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(40, 40, 45);

    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    // === Accent Colors ===

    /// Advance accent (blue)
    pub const ADVANCE: egui::Color32 = egui::Color32::from_rgb(70, 130, 220);

    /// Active toggle accent (green)
    pub const ACTIVE: egui::Color32 = egui::Color32::from_rgb(40, 180, 40);

    /// Destructive action accent (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Text Colors ===

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (body text)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(180, 180, 190);

    /// Border color
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(70, 70, 80);
}
