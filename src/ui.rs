// src/ui.rs

use fractal_demos::Palette;

use crate::demos::Demo;

pub fn build_ui(ctx: &egui::Context, demo: &mut dyn Demo) {
    if !demo.has_controls() {
        return;
    }
    egui::Window::new("Controls")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .auto_sized()
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                demo.controls(ui);
            });
        });
}

/// A list box over the palette's color names; `selected` is the chosen index.
pub fn palette_list(ui: &mut egui::Ui, palette: &Palette, selected: &mut usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        for (index, name) in palette.names().enumerate() {
            ui.selectable_value(selected, index, name);
        }
    });
}
