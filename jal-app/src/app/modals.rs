//! Modal dialogs - validation errors, submission results and settings

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::types::{QueryTab, ReportScreen, SubmitKind};
use eframe::egui;
use egui_phosphor::regular;
use jal_core::forms::FormError;

fn success_message(kind: SubmitKind) -> &'static str {
    match kind {
        SubmitKind::WaterReport => "Water quality report submitted successfully!",
        SubmitKind::PatientReport => "Patient report submitted successfully!",
        SubmitKind::Query => "Your query has been submitted. Our experts will respond soon.",
    }
}

fn failure_message(kind: SubmitKind) -> &'static str {
    match kind {
        SubmitKind::Query => "Failed to submit query. Please try again.",
        _ => "Failed to submit report. Please try again.",
    }
}

impl App {
    pub(crate) fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_form_error_modal(ctx);
        self.render_submit_result_modal(ctx);
        self.render_settings_modal(ctx);
    }

    fn render_form_error_modal(&mut self, ctx: &egui::Context) {
        let Some(error) = self.form_error.clone() else {
            return;
        };
        let title = match error {
            FormError::MissingFields | FormError::NoSymptoms => "Missing Information",
            FormError::InvalidNumber(_) | FormError::InvalidTime => "Invalid Input",
        };

        let response = egui::Modal::new(egui::Id::new("form_error_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(260.0);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(regular::WARNING)
                                .size(28.0)
                                .color(theme::WARNING),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(title)
                                .size(theme::FONT_HEADING)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(error.to_string())
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        )
                        .wrap(),
                    );
                    ui.add_space(theme::SPACING_LG);
                    ui.add(theme::button("OK").min_size(egui::vec2(80.0, 28.0)))
                        .clicked()
                })
                .inner
            });
        if response.inner || response.should_close() {
            self.form_error = None;
        }
    }

    fn render_submit_result_modal(&mut self, ctx: &egui::Context) {
        let Some((kind, ok)) = self.submit_result else {
            return;
        };
        let (icon, icon_color, title, message) = if ok {
            (
                regular::CHECK_CIRCLE,
                theme::SUCCESS,
                "Success",
                success_message(kind),
            )
        } else {
            (
                regular::X_CIRCLE,
                theme::DANGER,
                "Error",
                failure_message(kind),
            )
        };

        let response = egui::Modal::new(egui::Id::new("submit_result_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(260.0);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(icon).size(28.0).color(icon_color),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(title)
                                .size(theme::FONT_HEADING)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(message)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        )
                        .wrap(),
                    );
                    ui.add_space(theme::SPACING_LG);
                    let button = if ok {
                        theme::button_accent("OK")
                    } else {
                        theme::button_danger("OK")
                    };
                    ui.add(button.min_size(egui::vec2(80.0, 28.0))).clicked()
                })
                .inner
            });
        if response.inner || response.should_close() {
            self.finish_submit(ctx, kind, ok);
        }
    }

    /// Clears the result so the post-submit navigation runs exactly once.
    fn finish_submit(&mut self, ctx: &egui::Context, kind: SubmitKind, ok: bool) {
        self.submit_result = None;
        if !ok {
            return;
        }
        match kind {
            SubmitKind::WaterReport => {
                self.water_form = Default::default();
                self.report_screen = ReportScreen::Dashboard;
                self.refresh_dashboard(ctx);
            }
            SubmitKind::PatientReport => {
                self.patient_form = Default::default();
                self.report_screen = ReportScreen::Dashboard;
                self.refresh_dashboard(ctx);
            }
            SubmitKind::Query => {
                self.query_form = Default::default();
                self.query_tab = QueryTab::Faq;
            }
        }
    }

    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(300.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Settings")
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Backend server URL")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.backend_url)
                        .hint_text("http://127.0.0.1:8001")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui.add(theme::button("Test Connection")).clicked() {
                        self.check_backend(ctx);
                    }
                    if self.backend_checking {
                        ui.add(egui::Spinner::new().size(14.0));
                    } else if let Some(ok) = self.backend_check {
                        let (icon, color, text) = if ok {
                            (regular::CHECK_CIRCLE, theme::SUCCESS, "Connected")
                        } else {
                            (regular::X_CIRCLE, theme::DANGER, "Could not reach backend")
                        };
                        ui.add(
                            egui::Label::new(egui::RichText::new(icon).size(14.0).color(color))
                                .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(text)
                                    .size(theme::FONT_SMALL)
                                    .color(color),
                            )
                            .selectable(false),
                        );
                    }
                });
                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("Jal Drishti v{APP_VERSION}"))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(theme::button_accent("Close")).clicked()
                    })
                    .inner
                })
                .inner
            });
        if response.inner || response.should_close() {
            self.show_settings = false;
            self.backend_check = None;
            self.save_settings();
        }
    }
}
