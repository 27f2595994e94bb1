// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.
//!
//! Registration is a two-step exchange: the player is created first, and the
//! vaccination upload is only enqueued from the handler of a successful
//! registration result, using the id the backend returned.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::logic::api::ApiClient;
use crate::models::player::Player;
use crate::models::registration::{Gender, RegistrationRequest, is_profile_url, non_blank};
use crate::models::vaccination::{
    VaccinationDetails, VaccinationRecord, VaccinationRequest, ensure_certificate_type,
};
use crate::ui::components::date_picker;
use crate::ui::components::registration::{
    self, RegistrationCommand, RegistrationModel, RegistrationMsg,
};
use crate::ui::components::registration_success::VaccinationStatus;
use crate::ui::components::transactions::{
    self, TransactionsCommand, TransactionsModel, TransactionsMsg,
};

/// Screens reachable from the top bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Registration,
    Transactions,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Visible screen.
    pub tab: Tab,
    /// Registration form state.
    pub registration: RegistrationModel,
    /// Player created by the last successful registration; selects the success view.
    pub player: Option<Player>,
    /// Follow-up vaccination upload for `player`.
    pub vaccination: VaccinationStatus,
    /// Bank statement validation state.
    pub transactions: TransactionsModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    SelectTab(Tab),
    Registration(RegistrationMsg),
    SubmitRegistration,
    RegistrationCompleted {
        result: Result<Player, String>,
        vaccination: VaccinationDetails,
    },
    VaccinationCompleted {
        player_id: i64,
        result: Result<VaccinationRecord, String>,
    },
    RegisterAnother,
    Transactions(TransactionsMsg),
    DismissError,
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    PickCertificate,
    PickStatement,
    Register(RegistrationPayload),
    SubmitVaccination(VaccinationRequest),
    ValidateTransactions(PathBuf),
}

/// Captured, validated data for one registration submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub registration: RegistrationRequest,
    /// Sent once the player exists.
    pub vaccination: VaccinationDetails,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SelectTab(tab) => model.tab = tab,
        Msg::DismissError => model.error = None,
        Msg::Registration(m) => {
            let mut reg_cmds = Vec::new();
            if let Some(event) = registration::update(&mut model.registration, m, &mut reg_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in reg_cmds {
                match c {
                    RegistrationCommand::PickCertificate => cmds.push(Command::PickCertificate),
                }
            }
        }
        Msg::SubmitRegistration => {
            if model.registration.submitting {
                return;
            }
            match validate_for_submit(&model.registration, Local::now().date_naive()) {
                Ok(payload) => {
                    model.registration.error = None;
                    model.registration.submitting = true;
                    model.status = Some("Submitting registration…".into());
                    cmds.push(Command::Register(payload));
                }
                Err(err) => {
                    model.registration.error = Some(err.clone());
                    model.status = Some(err);
                }
            }
        }
        Msg::RegistrationCompleted {
            result,
            vaccination,
        } => {
            model.registration.submitting = false;
            match result {
                Ok(player) => {
                    tracing::info!(player_id = player.id, "player registered");
                    cmds.push(Command::SubmitVaccination(VaccinationRequest::new(
                        player.id,
                        vaccination,
                    )));
                    model.status = Some(format!("Player registered: {}", player.display_name()));
                    reset_form(model);
                    model.vaccination = VaccinationStatus::Pending;
                    model.player = Some(player);
                }
                Err(err) => {
                    model.registration.error = Some(err.clone());
                    model.status = Some(err);
                }
            }
        }
        Msg::VaccinationCompleted { player_id, result } => {
            let status = match result {
                Ok(_) => {
                    model.status = Some("Vaccination details saved.".into());
                    VaccinationStatus::Saved
                }
                Err(err) => {
                    // The player already exists; nothing is rolled back.
                    tracing::warn!(player_id, error = %err, "vaccination details were not stored");
                    model.status = Some(format!(
                        "Player registered, but vaccination details were not saved: {err}"
                    ));
                    VaccinationStatus::Failed(err)
                }
            };
            if model.player.as_ref().is_some_and(|p| p.id == player_id) {
                model.vaccination = status;
            }
        }
        Msg::RegisterAnother => {
            model.player = None;
            model.vaccination = VaccinationStatus::default();
            reset_form(model);
        }
        Msg::Transactions(m) => {
            let mut tx_cmds = Vec::new();
            if let Some(event) = transactions::update(&mut model.transactions, m, &mut tx_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in tx_cmds {
                match c {
                    TransactionsCommand::PickStatement => cmds.push(Command::PickStatement),
                    TransactionsCommand::Validate(path) => {
                        cmds.push(Command::ValidateTransactions(path))
                    }
                }
            }
        }
    }
}

/// Execute a command on the worker thread and return the resulting message.
pub fn run_command(cmd: Command, api: &ApiClient) -> Msg {
    match cmd {
        Command::PickCertificate => {
            let file = rfd::FileDialog::new()
                .set_title("Select vaccination certificate")
                .add_filter("Certificate", crate::models::vaccination::CERTIFICATE_EXTENSIONS)
                .pick_file();
            Msg::Registration(RegistrationMsg::CertificatePicked(file))
        }
        Command::PickStatement => {
            let file = rfd::FileDialog::new()
                .set_title("Select bank statement")
                .add_filter("CSV", &["csv"])
                .pick_file();
            Msg::Transactions(TransactionsMsg::FilePicked(file))
        }
        Command::Register(payload) => {
            let result = api
                .register(&payload.registration)
                .map_err(|e| e.to_string());
            Msg::RegistrationCompleted {
                result,
                vaccination: payload.vaccination,
            }
        }
        Command::SubmitVaccination(request) => {
            let result = api.submit_vaccination(&request).map_err(|e| e.to_string());
            Msg::VaccinationCompleted {
                player_id: request.player_id,
                result,
            }
        }
        Command::ValidateTransactions(path) => {
            let result = api
                .validate_transactions(&path)
                .map_err(|e| e.to_string());
            Msg::Transactions(TransactionsMsg::ValidationFinished(result))
        }
    }
}

/// Clear the registration form through its own reset message.
fn reset_form(model: &mut AppModel) {
    let mut reg_cmds = Vec::new();
    registration::update(&mut model.registration, RegistrationMsg::Reset, &mut reg_cmds);
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Validate the form and build the payload for both requests.
///
/// Rules are checked in form order; the first failure is returned.
fn validate_for_submit(
    form: &RegistrationModel,
    today: NaiveDate,
) -> Result<RegistrationPayload, String> {
    let first_name = non_blank(&form.first_name).ok_or("Please enter a first name.")?;
    let last_name = non_blank(&form.last_name).ok_or("Please enter a last name.")?;
    let date_of_birth = date_picker::to_birth_date(&form.date_of_birth, today)?;

    let india_ultimate_profile = non_blank(&form.profile_url);
    if let Some(url) = &india_ultimate_profile
        && !is_profile_url(url)
    {
        return Err("India Ultimate profile must be a valid http/https URL.".into());
    }

    let occupation = form.occupation.ok_or("Please select an occupation.")?;
    let gender = form.gender.ok_or("Please select a gender.")?;
    let other_gender = if gender == Gender::Other {
        Some(non_blank(&form.other_gender).ok_or("Please describe your gender.")?)
    } else {
        None
    };

    let state_ut = if form.not_in_india {
        None
    } else {
        Some(
            form.state
                .ok_or("Please select a state or union territory.")?,
        )
    };

    let vaccination = if form.is_vaccinated {
        let name = form
            .vaccine_name
            .ok_or("Please select the vaccine you received.")?;
        let certificate = form
            .certificate
            .clone()
            .ok_or("Please upload your vaccination certificate.")?;
        ensure_certificate_type(&certificate).map_err(|e| e.to_string())?;
        VaccinationDetails::Vaccinated { name, certificate }
    } else {
        let explanation = non_blank(&form.not_vaccinated_explanation)
            .ok_or("Please explain why you are not vaccinated.")?;
        VaccinationDetails::NotVaccinated { explanation }
    };

    Ok(RegistrationPayload {
        registration: RegistrationRequest {
            first_name,
            last_name,
            date_of_birth,
            phone: form.phone.trim().to_string(),
            gender,
            other_gender,
            city: form.city.trim().to_string(),
            state_ut,
            not_in_india: form.not_in_india,
            team_name: form.team_name.trim().to_string(),
            occupation,
            educational_institution: non_blank(&form.educational_institution),
            india_ultimate_profile,
        },
        vaccination,
    })
}
