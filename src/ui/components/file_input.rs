// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File chooser field: shows the selected file and asks the caller to open a dialog.

use std::path::Path;

use eframe::egui;

use super::checkbox::{input_error, required_marker};

/// What the user asked the field to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileInputAction {
    Browse,
    Clear,
}

/// Display options for [`file_input`].
pub struct FileInput<'a> {
    pub label: &'a str,
    /// Accepted types, shown under the field.
    pub hint: Option<&'a str>,
    pub required: bool,
    pub selected: Option<&'a Path>,
    pub error: Option<&'a str>,
}

/// Render the field and return the requested action, if any.
pub fn file_input(ui: &mut egui::Ui, input: FileInput<'_>) -> Option<FileInputAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(input.label);
        if input.required {
            required_marker(ui);
        }
    });

    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Choose file…", egui_phosphor::regular::FOLDER_OPEN))
            .clicked()
        {
            action = Some(FileInputAction::Browse);
        }

        match input.selected {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(name).on_hover_text(path.display().to_string());
                if ui
                    .small_button(egui_phosphor::regular::X)
                    .on_hover_text("Remove file")
                    .clicked()
                {
                    action = Some(FileInputAction::Clear);
                }
            }
            None => {
                ui.label(
                    egui::RichText::new("No file chosen").color(egui::Color32::from_gray(140)),
                );
            }
        }
    });

    if let Some(hint) = input.hint {
        ui.label(
            egui::RichText::new(hint)
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }
    if let Some(message) = input.error {
        input_error(ui, message);
    }

    action
}
