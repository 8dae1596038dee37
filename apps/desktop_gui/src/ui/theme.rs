pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const ERROR_FILL_LIGHT: egui::Color32 = egui::Color32::from_rgb(254, 242, 242);
pub const ERROR_FILL_DARK: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn card_fill(visuals: &egui::Visuals) -> egui::Color32 {
    if visuals.dark_mode {
        lighten_color(visuals.panel_fill, 0.04)
    } else {
        visuals.faint_bg_color
    }
}

pub fn error_block_colors(visuals: &egui::Visuals) -> (egui::Color32, egui::Color32) {
    if visuals.dark_mode {
        (ERROR_FILL_DARK, lighten_color(ERROR_TEXT, 0.6))
    } else {
        (ERROR_FILL_LIGHT, ERROR_TEXT)
    }
}

pub fn apply(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.selection.bg_fill = ACCENT;
        style.visuals.hyperlink_color = ACCENT;
    });
}
