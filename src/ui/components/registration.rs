// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Player registration form: field state, conditional sections, and rendering.

use std::path::PathBuf;

use eframe::egui;

use super::checkbox::{labeled_checkbox, required_marker};
use super::date_picker::{self, DateModel, DateMsg};
use super::file_input::{FileInput, FileInputAction, file_input};
use crate::models::registration::{Gender, Occupation, StateUt};
use crate::models::vaccination::{VaccineName, ensure_certificate_type};

/// Every input of the registration form, plus inline feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationModel {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateModel,
    pub phone: String,
    pub profile_url: String,
    pub team_name: String,
    pub occupation: Option<Occupation>,
    pub educational_institution: String,
    pub gender: Option<Gender>,
    pub other_gender: String,
    pub not_in_india: bool,
    pub city: String,
    pub state: Option<StateUt>,
    pub is_vaccinated: bool,
    pub vaccine_name: Option<VaccineName>,
    pub certificate: Option<PathBuf>,
    pub not_vaccinated_explanation: String,
    /// Submission or validation error shown above the submit button.
    pub error: Option<String>,
    /// Certificate picker error shown under the file field.
    pub certificate_error: Option<String>,
    /// True while the registration request is in flight.
    pub submitting: bool,
}

impl RegistrationModel {
    /// The state selector only applies to players living in India.
    pub fn shows_state_selector(&self) -> bool {
        !self.not_in_india
    }

    pub fn shows_other_gender(&self) -> bool {
        self.gender == Some(Gender::Other)
    }

    /// Vaccine name and certificate are asked for only when vaccinated.
    pub fn shows_vaccine_fields(&self) -> bool {
        self.is_vaccinated
    }

    /// The explanation replaces the vaccine fields when not vaccinated.
    pub fn shows_explanation(&self) -> bool {
        !self.is_vaccinated
    }
}

/// Messages emitted by the registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationMsg {
    FirstNameChanged(String),
    LastNameChanged(String),
    DateOfBirth(DateMsg),
    PhoneChanged(String),
    ProfileUrlChanged(String),
    TeamNameChanged(String),
    OccupationSelected(Occupation),
    EducationChanged(String),
    GenderSelected(Gender),
    OtherGenderChanged(String),
    ToggleNotInIndia,
    CityChanged(String),
    StateSelected(StateUt),
    ToggleVaccinated,
    VaccineSelected(VaccineName),
    RequestPickCertificate,
    CertificatePicked(Option<PathBuf>),
    ClearCertificate,
    ExplanationChanged(String),
    Reset,
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationCommand {
    PickCertificate,
}

/// User-facing feedback for the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the form. Returns a feedback event when relevant.
pub fn update(
    model: &mut RegistrationModel,
    msg: RegistrationMsg,
    cmds: &mut Vec<RegistrationCommand>,
) -> Option<RegistrationEvent> {
    match msg {
        RegistrationMsg::FirstNameChanged(text) => model.first_name = text,
        RegistrationMsg::LastNameChanged(text) => model.last_name = text,
        RegistrationMsg::DateOfBirth(m) => date_picker::update(&mut model.date_of_birth, m),
        RegistrationMsg::PhoneChanged(text) => model.phone = text,
        RegistrationMsg::ProfileUrlChanged(text) => model.profile_url = text,
        RegistrationMsg::TeamNameChanged(text) => model.team_name = text,
        RegistrationMsg::OccupationSelected(occupation) => model.occupation = Some(occupation),
        RegistrationMsg::EducationChanged(text) => model.educational_institution = text,
        RegistrationMsg::GenderSelected(gender) => {
            model.gender = Some(gender);
            if gender != Gender::Other {
                model.other_gender.clear();
            }
        }
        RegistrationMsg::OtherGenderChanged(text) => model.other_gender = text,
        RegistrationMsg::ToggleNotInIndia => {
            model.not_in_india = !model.not_in_india;
            model.state = None;
        }
        RegistrationMsg::CityChanged(text) => model.city = text,
        RegistrationMsg::StateSelected(state) => model.state = Some(state),
        RegistrationMsg::ToggleVaccinated => model.is_vaccinated = !model.is_vaccinated,
        RegistrationMsg::VaccineSelected(name) => model.vaccine_name = Some(name),
        RegistrationMsg::RequestPickCertificate => {
            cmds.push(RegistrationCommand::PickCertificate);
        }
        RegistrationMsg::CertificatePicked(None) => {}
        RegistrationMsg::CertificatePicked(Some(path)) => {
            return Some(match ensure_certificate_type(&path) {
                Ok(()) => {
                    model.certificate = Some(path);
                    model.certificate_error = None;
                    RegistrationEvent {
                        message: "Certificate selected".into(),
                        is_error: false,
                    }
                }
                Err(err) => {
                    model.certificate = None;
                    model.certificate_error = Some(err.to_string());
                    RegistrationEvent {
                        message: err.to_string(),
                        is_error: true,
                    }
                }
            });
        }
        RegistrationMsg::ClearCertificate => {
            model.certificate = None;
            model.certificate_error = None;
        }
        RegistrationMsg::ExplanationChanged(text) => model.not_vaccinated_explanation = text,
        RegistrationMsg::Reset => *model = RegistrationModel::default(),
    }
    None
}

/// Render the form fields and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &RegistrationModel) -> Vec<RegistrationMsg> {
    let mut msgs = Vec::new();

    egui::Grid::new("registration_grid")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 10.0))
        .min_col_width(180.0)
        .show(ui, |ui| {
            field_label(ui, "First name", true);
            text_field(ui, &model.first_name, "John", &mut msgs, RegistrationMsg::FirstNameChanged);
            ui.end_row();

            field_label(ui, "Last name", true);
            text_field(ui, &model.last_name, "Doe", &mut msgs, RegistrationMsg::LastNameChanged);
            ui.end_row();

            field_label(ui, "Date of birth", true);
            let dob = date_picker::view(&model.date_of_birth, ui, "date_of_birth");
            msgs.extend(dob.into_iter().map(RegistrationMsg::DateOfBirth));
            ui.end_row();

            field_label(ui, "Phone number", false);
            text_field(ui, &model.phone, "9999999999", &mut msgs, RegistrationMsg::PhoneChanged);
            ui.end_row();

            field_label(ui, "India Ultimate profile URL", false);
            text_field(
                ui,
                &model.profile_url,
                "https://indiaultimate.org/en-in/u/player-name",
                &mut msgs,
                RegistrationMsg::ProfileUrlChanged,
            );
            ui.end_row();

            field_label(ui, "Team name", false);
            text_field(ui, &model.team_name, "", &mut msgs, RegistrationMsg::TeamNameChanged);
            ui.end_row();

            field_label(ui, "Occupation", true);
            if let Some(choice) = choice_combo(
                ui,
                "occupation",
                model.occupation,
                Occupation::ALL,
                "Select occupation",
                |o| o.label(),
            ) {
                msgs.push(RegistrationMsg::OccupationSelected(choice));
            }
            ui.end_row();

            field_label(ui, "Education institution", false);
            text_field(
                ui,
                &model.educational_institution,
                "",
                &mut msgs,
                RegistrationMsg::EducationChanged,
            );
            ui.end_row();

            field_label(ui, "Gender", true);
            if let Some(choice) = choice_combo(
                ui,
                "gender",
                model.gender,
                Gender::ALL,
                "Select gender",
                |g| g.label(),
            ) {
                msgs.push(RegistrationMsg::GenderSelected(choice));
            }
            ui.end_row();

            if model.shows_other_gender() {
                field_label(ui, "Other gender", true);
                text_field(
                    ui,
                    &model.other_gender,
                    "",
                    &mut msgs,
                    RegistrationMsg::OtherGenderChanged,
                );
                ui.end_row();
            }

            ui.label("");
            if labeled_checkbox(ui, model.not_in_india, "I'm not in India") {
                msgs.push(RegistrationMsg::ToggleNotInIndia);
            }
            ui.end_row();

            field_label(ui, "City", false);
            text_field(ui, &model.city, "", &mut msgs, RegistrationMsg::CityChanged);
            ui.end_row();

            if model.shows_state_selector() {
                field_label(ui, "State", true);
                if let Some(choice) = choice_combo(
                    ui,
                    "state_ut",
                    model.state,
                    StateUt::ALL,
                    "Select State/UT",
                    |s| s.label(),
                ) {
                    msgs.push(RegistrationMsg::StateSelected(choice));
                }
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    render_vaccination_section(ui, model, &mut msgs);

    if let Some(error) = &model.error {
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            let color = ui.visuals().error_fg_color;
            ui.label(egui::RichText::new("Oops!").strong().color(color));
            ui.label(egui::RichText::new(error).color(color));
        });
    }

    msgs
}

/// Vaccinated toggle with the branch-specific inputs beneath it.
fn render_vaccination_section(
    ui: &mut egui::Ui,
    model: &RegistrationModel,
    msgs: &mut Vec<RegistrationMsg>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        if labeled_checkbox(ui, model.is_vaccinated, "Vaccinated") {
            msgs.push(RegistrationMsg::ToggleVaccinated);
        }
        ui.add_space(6.0);

        if model.shows_vaccine_fields() {
            ui.horizontal(|ui| {
                ui.label("Vaccination name");
                required_marker(ui);
                if let Some(choice) = choice_combo(
                    ui,
                    "vaccine_name",
                    model.vaccine_name,
                    VaccineName::ALL,
                    "Select vaccination name",
                    |v| v.label(),
                ) {
                    msgs.push(RegistrationMsg::VaccineSelected(choice));
                }
            });
            ui.add_space(6.0);

            let action = file_input(
                ui,
                FileInput {
                    label: "Vaccination certificate",
                    hint: Some("PNG, JPG or PDF."),
                    required: true,
                    selected: model.certificate.as_deref(),
                    error: model.certificate_error.as_deref(),
                },
            );
            match action {
                Some(FileInputAction::Browse) => msgs.push(RegistrationMsg::RequestPickCertificate),
                Some(FileInputAction::Clear) => msgs.push(RegistrationMsg::ClearCertificate),
                None => {}
            }
        }

        if model.shows_explanation() {
            ui.horizontal(|ui| {
                ui.label("Explain not being vaccinated");
                required_marker(ui);
            });
            let mut text = model.not_vaccinated_explanation.clone();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY)
                        .hint_text("Write your explanation on why you are not vaccinated..."),
                )
                .changed()
            {
                msgs.push(RegistrationMsg::ExplanationChanged(text));
            }
        }
    });
}

fn field_label(ui: &mut egui::Ui, text: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.label(text);
        if required {
            required_marker(ui);
        }
    });
}

fn text_field(
    ui: &mut egui::Ui,
    value: &str,
    hint: &str,
    msgs: &mut Vec<RegistrationMsg>,
    to_msg: fn(String) -> RegistrationMsg,
) {
    let mut text = value.to_string();
    if ui
        .add(egui::TextEdit::singleline(&mut text).hint_text(hint))
        .changed()
    {
        msgs.push(to_msg(text));
    }
}

/// Combo box over a fixed choice list. Returns the newly picked choice.
fn choice_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    current: Option<T>,
    choices: &[T],
    placeholder: &str,
    label: fn(T) -> &'static str,
) -> Option<T> {
    let mut picked = None;
    let selected_text = current.map(label).unwrap_or(placeholder);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(220.0)
        .show_ui(ui, |ui| {
            for &choice in choices {
                if ui
                    .selectable_label(current == Some(choice), label(choice))
                    .clicked()
                {
                    picked = Some(choice);
                }
            }
        });
    picked.filter(|choice| current != Some(*choice))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn apply(model: &mut RegistrationModel, msg: RegistrationMsg) -> Option<RegistrationEvent> {
        let mut cmds = Vec::new();
        let event = update(model, msg, &mut cmds);
        assert!(cmds.is_empty(), "field edits should not enqueue commands");
        event
    }

    #[test]
    fn not_in_india_toggle_clears_state_and_hides_selector() {
        let mut model = RegistrationModel::default();
        apply(&mut model, RegistrationMsg::StateSelected(StateUt::Goa));
        assert!(model.shows_state_selector());

        apply(&mut model, RegistrationMsg::ToggleNotInIndia);

        assert!(model.not_in_india);
        assert!(model.state.is_none());
        assert!(!model.shows_state_selector());

        apply(&mut model, RegistrationMsg::ToggleNotInIndia);
        assert!(model.shows_state_selector());
        assert!(model.state.is_none(), "state stays cleared when toggled back");
    }

    #[test]
    fn vaccinated_toggle_swaps_visible_fields() {
        let mut model = RegistrationModel::default();
        assert!(model.shows_explanation());
        assert!(!model.shows_vaccine_fields());

        apply(&mut model, RegistrationMsg::ToggleVaccinated);
        assert!(model.shows_vaccine_fields());
        assert!(!model.shows_explanation());

        apply(&mut model, RegistrationMsg::ToggleVaccinated);
        assert!(model.shows_explanation());
        assert!(!model.shows_vaccine_fields());
    }

    #[test]
    fn switching_away_from_other_gender_clears_free_text() {
        let mut model = RegistrationModel::default();
        apply(&mut model, RegistrationMsg::GenderSelected(Gender::Other));
        apply(&mut model, RegistrationMsg::OtherGenderChanged("Non-binary".into()));
        assert!(model.shows_other_gender());

        apply(&mut model, RegistrationMsg::GenderSelected(Gender::Female));

        assert!(model.other_gender.is_empty());
        assert!(!model.shows_other_gender());
    }

    #[test]
    fn pick_certificate_enqueues_dialog_command() {
        let mut model = RegistrationModel::default();
        let mut cmds = Vec::new();

        update(&mut model, RegistrationMsg::RequestPickCertificate, &mut cmds);

        assert_eq!(cmds, vec![RegistrationCommand::PickCertificate]);
    }

    #[test]
    fn picked_certificate_is_type_checked() {
        let mut model = RegistrationModel::default();

        let event = apply(
            &mut model,
            RegistrationMsg::CertificatePicked(Some(PathBuf::from("cert.docx"))),
        )
        .unwrap();
        assert!(event.is_error);
        assert!(model.certificate.is_none());
        assert!(model.certificate_error.is_some());

        let event = apply(
            &mut model,
            RegistrationMsg::CertificatePicked(Some(PathBuf::from("cert.pdf"))),
        )
        .unwrap();
        assert!(!event.is_error);
        assert_eq!(model.certificate, Some(PathBuf::from("cert.pdf")));
        assert!(model.certificate_error.is_none());
    }

    #[test]
    fn rejected_certificate_replaces_previous_selection() {
        let mut model = RegistrationModel::default();
        apply(
            &mut model,
            RegistrationMsg::CertificatePicked(Some(PathBuf::from("first.pdf"))),
        );

        apply(
            &mut model,
            RegistrationMsg::CertificatePicked(Some(PathBuf::from("second.docx"))),
        );

        assert!(model.certificate.is_none());
        assert!(model.certificate_error.is_some());
    }

    #[test]
    fn cancelled_certificate_dialog_keeps_selection() {
        let mut model = RegistrationModel {
            certificate: Some(PathBuf::from("cert.png")),
            ..Default::default()
        };

        assert!(apply(&mut model, RegistrationMsg::CertificatePicked(None)).is_none());
        assert_eq!(model.certificate, Some(PathBuf::from("cert.png")));

        apply(&mut model, RegistrationMsg::ClearCertificate);
        assert!(model.certificate.is_none());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut model = RegistrationModel::default();
        apply(&mut model, RegistrationMsg::FirstNameChanged("Nora".into()));
        apply(&mut model, RegistrationMsg::ToggleVaccinated);

        apply(&mut model, RegistrationMsg::Reset);

        assert_eq!(model, RegistrationModel::default());
    }
}
