// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Small form helpers: labelled checkbox, required marker, and inline error line.

use eframe::egui;

/// Draw a checkbox whose label describes the option. Returns true when it was toggled.
///
/// The checkbox does not mutate state itself; callers turn a `true` return
/// into a toggle message.
pub fn labeled_checkbox(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let mut value = checked;
    ui.checkbox(&mut value, label).changed()
}

/// Red asterisk shown next to required inputs.
pub fn required_marker(ui: &mut egui::Ui) {
    let color = ui.visuals().error_fg_color;
    ui.label(egui::RichText::new("*").color(color))
        .on_hover_text("Required");
}

/// Small error line rendered beneath an input.
pub fn input_error(ui: &mut egui::Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    ui.label(egui::RichText::new(message).small().color(color));
}
