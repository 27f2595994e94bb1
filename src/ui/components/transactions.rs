// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Bank statement upload that reconciles manual transactions on the backend.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use eframe::egui;

use super::file_input::{FileInput, FileInputAction, file_input};
use crate::models::transactions::{ValidationStats, ensure_csv};

/// Outcome of the most recent validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Stats(ValidationStats),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionsModel {
    statement: Option<PathBuf>,
    field_error: Option<String>,
    outcome: Option<ValidationOutcome>,
    submitting: bool,
    last_run: Option<DateTime<Local>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionsMsg {
    RequestPickFile,
    FilePicked(Option<PathBuf>),
    ClearFile,
    Submit,
    ValidationFinished(Result<ValidationStats, String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionsCommand {
    PickStatement,
    Validate(PathBuf),
}

/// User-facing feedback for the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionsEvent {
    pub message: String,
    pub is_error: bool,
}

impl TransactionsModel {
    pub fn statement(&self) -> Option<&PathBuf> {
        self.statement.as_ref()
    }

    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(
    model: &mut TransactionsModel,
    msg: TransactionsMsg,
    cmds: &mut Vec<TransactionsCommand>,
) -> Option<TransactionsEvent> {
    match msg {
        TransactionsMsg::RequestPickFile => {
            cmds.push(TransactionsCommand::PickStatement);
            None
        }
        TransactionsMsg::FilePicked(None) => None,
        TransactionsMsg::FilePicked(Some(path)) => match ensure_csv(&path) {
            Ok(()) => {
                model.statement = Some(path);
                model.field_error = None;
                None
            }
            Err(err) => {
                model.statement = None;
                model.field_error = Some(err.to_string());
                Some(TransactionsEvent {
                    message: err.to_string(),
                    is_error: true,
                })
            }
        },
        TransactionsMsg::ClearFile => {
            model.statement = None;
            model.field_error = None;
            None
        }
        TransactionsMsg::Submit => {
            if model.submitting {
                return None;
            }
            let Some(path) = model.statement.clone() else {
                model.field_error = Some("Please upload a bank statement.".into());
                return None;
            };
            model.field_error = None;
            model.outcome = None;
            model.submitting = true;
            cmds.push(TransactionsCommand::Validate(path));
            Some(TransactionsEvent {
                message: "Validating transactions…".into(),
                is_error: false,
            })
        }
        TransactionsMsg::ValidationFinished(result) => {
            model.submitting = false;
            model.last_run = Some(Local::now());
            let event = match &result {
                Ok(stats) => TransactionsEvent {
                    message: format!("{} transaction(s) validated", stats.validated),
                    is_error: false,
                },
                Err(message) => TransactionsEvent {
                    message: message.clone(),
                    is_error: false,
                },
            };
            model.outcome = Some(match result {
                Ok(stats) => ValidationOutcome::Stats(stats),
                Err(message) => ValidationOutcome::Failed(message),
            });
            Some(event)
        }
    }
}

/// Render the upload form and the latest outcome.
pub fn view(ui: &mut egui::Ui, model: &TransactionsModel) -> Vec<TransactionsMsg> {
    let mut msgs = Vec::new();

    ui.heading("Validate transactions");
    ui.add_space(8.0);

    let action = file_input(
        ui,
        FileInput {
            label: "Upload bank statement (CSV)",
            hint: Some("CSV export of the bank statement."),
            required: true,
            selected: model.statement().map(PathBuf::as_path),
            error: model.field_error.as_deref(),
        },
    );
    match action {
        Some(FileInputAction::Browse) => msgs.push(TransactionsMsg::RequestPickFile),
        Some(FileInputAction::Clear) => msgs.push(TransactionsMsg::ClearFile),
        None => {}
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let button = egui::Button::new(format!(
            "{} Submit",
            egui_phosphor::regular::UPLOAD_SIMPLE
        ));
        if ui.add_enabled(!model.is_submitting(), button).clicked() {
            msgs.push(TransactionsMsg::Submit);
        }
        if model.is_submitting() {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });

    ui.add_space(12.0);
    match model.outcome() {
        Some(ValidationOutcome::Stats(stats)) => render_stats(ui, stats),
        Some(ValidationOutcome::Failed(message)) => {
            ui.label(message);
        }
        None => {}
    }
    if let Some(ts) = model.last_run {
        ui.label(
            egui::RichText::new(format!("Last run at {}", ts.format("%Y-%m-%d %H:%M:%S")))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }

    msgs
}

fn render_stats(ui: &mut egui::Ui, stats: &ValidationStats) {
    egui::Grid::new("validation_stats")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 6.0))
        .show(ui, |ui| {
            ui.label("Total transactions in bank statement:");
            ui.strong(stats.total.to_string());
            ui.end_row();

            ui.label("Un-validated transactions found in the database:");
            ui.strong(stats.invalid_found.to_string());
            ui.end_row();

            ui.label("Transactions validated:");
            ui.strong(stats.validated.to_string());
            ui.end_row();
        });
}
