// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Confirmation shown once a player has been created.

use eframe::egui;

use crate::models::player::Player;
use crate::models::registration::{Gender, Occupation, StateUt};

/// Progress of the follow-up vaccination upload for the shown player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VaccinationStatus {
    #[default]
    Pending,
    Saved,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuccessMsg {
    RegisterAnother,
}

/// Render the success view for `player`.
pub fn view(ui: &mut egui::Ui, player: &Player, vaccination: &VaccinationStatus) -> Vec<SuccessMsg> {
    let mut msgs = Vec::new();

    ui.heading(format!(
        "{} Registration successful",
        egui_phosphor::regular::CHECK_CIRCLE
    ));
    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("player_summary")
            .num_columns(2)
            .spacing(egui::vec2(12.0, 6.0))
            .show(ui, |ui| {
                ui.label("Name");
                ui.strong(player.display_name());
                ui.end_row();

                ui.label("Player ID");
                ui.label(player.id.to_string());
                ui.end_row();

                if let Some(dob) = player.date_of_birth {
                    ui.label("Date of birth");
                    ui.label(dob.format("%Y-%m-%d").to_string());
                    ui.end_row();
                }

                if let Some(gender) = player.gender.as_deref() {
                    ui.label("Gender");
                    ui.label(choice_label(gender, Gender::from_code, Gender::label));
                    ui.end_row();
                }

                if let Some(occupation) = player.occupation.as_deref() {
                    ui.label("Occupation");
                    ui.label(choice_label(occupation, Occupation::from_code, Occupation::label));
                    ui.end_row();
                }

                if let Some(location) = location(player) {
                    ui.label("Location");
                    ui.label(location);
                    ui.end_row();
                }

                if let Some(membership) = &player.membership {
                    ui.label("Membership");
                    let state = if membership.is_active { "active" } else { "inactive" };
                    ui.label(format!("{} ({state})", membership.membership_number));
                    ui.end_row();
                }
            });
    });

    ui.add_space(8.0);
    match vaccination {
        VaccinationStatus::Pending => {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(14.0));
                ui.label("Saving vaccination details…");
            });
        }
        VaccinationStatus::Saved => {
            ui.label("Vaccination details saved.");
        }
        VaccinationStatus::Failed(message) => {
            ui.label(
                egui::RichText::new(format!(
                    "{} Vaccination details were not saved: {message}",
                    egui_phosphor::regular::WARNING
                ))
                .color(egui::Color32::from_rgb(232, 89, 12)),
            );
        }
    }

    ui.add_space(12.0);
    if ui
        .button(format!(
            "{} Register another player",
            egui_phosphor::regular::USER_PLUS
        ))
        .clicked()
    {
        msgs.push(SuccessMsg::RegisterAnother);
    }

    msgs
}

/// Human label for a backend choice code; unknown codes are shown as-is.
fn choice_label<T: Copy>(
    code: &str,
    parse: fn(&str) -> Option<T>,
    label: fn(T) -> &'static str,
) -> String {
    parse(code).map_or_else(|| code.to_string(), |choice| label(choice).to_string())
}

/// "City, State" for players in India, "City (outside India)" otherwise.
fn location(player: &Player) -> Option<String> {
    let city = player.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let state = player
        .state_ut
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|code| choice_label(code, StateUt::from_code, StateUt::label));
    match (city, state, player.not_in_india) {
        (Some(city), _, true) => Some(format!("{city} (outside India)")),
        (None, _, true) => Some("Outside India".to_string()),
        (Some(city), Some(state), false) => Some(format!("{city}, {state}")),
        (Some(city), None, false) => Some(city.to_string()),
        (None, Some(state), false) => Some(state),
        (None, None, false) => None,
    }
}
