//! Pocket calculator theme.
//!
//! Pure black and white. No grays, square corners, 1px outlines.

use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// Only two colors on this screen.
pub struct InkColors;

impl InkColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for the calculator window.
pub struct CalcTheme {
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context. Call once at startup.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::light();

        visuals.window_fill = InkColors::WHITE;
        visuals.panel_fill = InkColors::WHITE;
        visuals.faint_bg_color = InkColors::WHITE;
        visuals.extreme_bg_color = InkColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, InkColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = InkColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, InkColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, InkColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}
