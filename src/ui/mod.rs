// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the registration desk.
//! Handles layout, tab switching, and wiring to the request worker.

pub mod components;

use eframe::egui;

use crate::logic::api::ApiClient;
use crate::mvu::{self, AppModel, Command, Msg, Tab};
use crate::ui::components::registration_success::{self, SuccessMsg};
use crate::ui::components::{registration, transactions};

/// Stateful egui application for registering players and validating statements.
pub struct UpaiDeskApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl UpaiDeskApp {
    /// Spawn the request worker and build an empty application.
    ///
    /// A single worker owns the client, so commands run strictly in the order
    /// they were queued and a follow-up request never overtakes the one it
    /// depends on.
    pub fn new(api: ApiClient) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd, &api);
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for UpaiDeskApp {
    /// Drains worker results, applies queued messages, and renders one frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("UPAI Desk");
                ui.separator();
                self.render_tabs(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.tab {
                Tab::Registration => self.render_registration(ui),
                Tab::Transactions => {
                    let msgs = transactions::view(ui, &self.model.transactions);
                    self.inbox.extend(msgs.into_iter().map(Msg::Transactions));
                }
            });
        });
    }
}

impl UpaiDeskApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Segmented tab selector for the two screens.
    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        let tabs = [
            (
                Tab::Registration,
                format!("{} Registration", egui_phosphor::regular::USER_PLUS),
            ),
            (
                Tab::Transactions,
                format!("{} Transactions", egui_phosphor::regular::BANK),
            ),
        ];
        for (tab, label) in tabs {
            let button = egui::Button::new(label).selected(self.model.tab == tab);
            if ui.add(button).clicked() && self.model.tab != tab {
                self.inbox.push(Msg::SelectTab(tab));
            }
        }
    }

    /// Form while no player has been created yet, success view afterwards.
    fn render_registration(&mut self, ui: &mut egui::Ui) {
        if let Some(player) = &self.model.player {
            let msgs = registration_success::view(ui, player, &self.model.vaccination);
            self.inbox.extend(msgs.into_iter().map(|m| match m {
                SuccessMsg::RegisterAnother => Msg::RegisterAnother,
            }));
            return;
        }

        let msgs = registration::view(ui, &self.model.registration);
        self.inbox.extend(msgs.into_iter().map(Msg::Registration));
        ui.add_space(12.0);
        self.render_submit_button(ui);
        ui.add_space(8.0);
    }

    /// Submit button; disabled while a registration is in flight.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let submitting = self.model.registration.submitting;
        let label = if submitting {
            format!("{} Submitting…", egui_phosphor::regular::HOURGLASS)
        } else {
            format!("{} Register", egui_phosphor::regular::PAPER_PLANE_TILT)
        };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!submitting, egui::Button::new(label))
                .on_disabled_hover_text("A registration is already being submitted")
                .clicked()
            {
                self.inbox.push(Msg::SubmitRegistration);
            }
            if submitting {
                ui.add(egui::Spinner::new().size(14.0));
            }
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} request(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}
