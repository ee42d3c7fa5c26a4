//! Reports tab - dashboard, stats and the report type chooser

use super::App;
use crate::constants::PLACEHOLDER_STATS;
use crate::theme;
use crate::types::ReportScreen;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular;
use jal_core::{timefmt, ActivityEntry, ReportKind};

impl App {
    pub(crate) fn render_reports(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    components::screen_header(
                        ui,
                        "Report Management",
                        "Submit and manage water quality reports",
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(regular::ARROW_CLOCKWISE)
                                        .size(16.0)
                                        .color(theme::TEXT_MUTED),
                                )
                                .frame(false),
                            )
                            .on_hover_text("Refresh")
                            .clicked()
                        {
                            self.refresh_dashboard(ui.ctx());
                        }
                    });
                });
                ui.add_space(theme::SPACING_LG);
                self.render_submit_card(ui);
                ui.add_space(theme::SPACING_LG);
                self.render_stats_grid(ui);
                ui.add_space(theme::SPACING_XL);
                self.render_recent_activity(ui);
                ui.add_space(theme::SPACING_LG);
            });
    }

    fn render_submit_card(&mut self, ui: &mut egui::Ui) {
        let inner = egui::Frame::new()
            .fill(theme::ACCENT)
            .corner_radius(theme::RADIUS_MEDIUM)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(regular::PLUS)
                                .size(22.0)
                                .color(theme::TEXT_ON_ACCENT),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Submit New Report")
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(theme::TEXT_ON_ACCENT),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    "Submit water testing data and quality assessments",
                                )
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_ON_ACCENT.gamma_multiply(0.85)),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
        let response = ui.interact(
            inner.response.rect,
            egui::Id::new("submit_report_card"),
            egui::Sense::click(),
        );
        if response.clicked() {
            self.report_screen = ReportScreen::Chooser;
        }
    }

    fn render_stats_grid(&mut self, ui: &mut egui::Ui) {
        let stats = self
            .remote
            .lock()
            .unwrap()
            .stats
            .unwrap_or(PLACEHOLDER_STATS);
        let card_width = (ui.available_width() - theme::SPACING_MD) / 2.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
            components::stat_card(
                ui,
                card_width,
                stats.total_submitted,
                "Reports Submitted",
                theme::STATUS_SUBMITTED,
            );
            components::stat_card(
                ui,
                card_width,
                stats.total_processed,
                "Reports Processed",
                theme::STATUS_PROCESSED,
            );
        });
        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
            components::stat_card(
                ui,
                card_width,
                stats.under_review,
                "Under Review",
                theme::STATUS_UNDER_REVIEW,
            );
            components::stat_card(
                ui,
                card_width,
                stats.high_priority,
                "High Priority",
                theme::STATUS_HIGH_PRIORITY,
            );
        });
    }

    fn render_recent_activity(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Recent Activity")
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        let activity = self.remote.lock().unwrap().activity.clone();
        match activity {
            Some(entries) if !entries.is_empty() => {
                for entry in &entries {
                    render_activity_row(ui, entry);
                    ui.add_space(theme::SPACING_SM);
                }
            }
            _ => {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("No recent activity yet")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            }
        }
    }

    pub(crate) fn render_report_chooser(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(regular::ARROW_LEFT)
                                    .size(16.0)
                                    .color(theme::TEXT_MUTED),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        self.report_screen = ReportScreen::Dashboard;
                    }
                    ui.add_space(theme::SPACING_SM);
                    components::screen_header(
                        ui,
                        "Submit New Report",
                        "Choose the type of report to submit",
                    );
                });
                ui.add_space(theme::SPACING_LG);

                if chooser_card(
                    ui,
                    regular::DROP,
                    theme::ACCENT,
                    "Water Quality Report",
                    "Report water testing results and quality parameters",
                    &[
                        "pH, turbidity, chlorine levels",
                        "Bacterial contamination",
                        "GPS location tagging",
                    ],
                ) {
                    self.report_screen = ReportScreen::WaterForm;
                    self.ensure_districts(ui.ctx());
                }
                ui.add_space(theme::SPACING_MD);
                if chooser_card(
                    ui,
                    regular::FIRST_AID,
                    theme::DANGER,
                    "Patient Case Report",
                    "Report waterborne disease cases and symptoms",
                    &[
                        "Symptom tracking",
                        "Disease identification",
                        "Patient information",
                    ],
                ) {
                    self.report_screen = ReportScreen::PatientForm;
                    self.ensure_districts(ui.ctx());
                }

                ui.add_space(theme::SPACING_XL);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(regular::PHONE)
                                .size(14.0)
                                .color(theme::DANGER),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("For medical emergencies, call 108 immediately.")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(theme::SPACING_LG);
            });
    }
}

fn render_activity_row(ui: &mut egui::Ui, entry: &ActivityEntry) {
    let (icon, icon_color) = match entry.kind {
        ReportKind::WaterReport => (regular::DROP, theme::ACCENT),
        ReportKind::PatientReport => (regular::FIRST_AID, theme::DANGER),
    };
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(icon).size(18.0).color(icon_color))
                    .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(entry.title.clone())
                            .size(theme::FONT_LABEL)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{} · {}",
                            entry.location,
                            timefmt::relative(entry.created_at)
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                components::status_chip(ui, entry.status);
            });
        });
    });
}

fn chooser_card(
    ui: &mut egui::Ui,
    icon: &str,
    icon_color: egui::Color32,
    title: &str,
    subtitle: &str,
    features: &[&str],
) -> bool {
    let inner = theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(icon).size(24.0).color(icon_color))
                    .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(subtitle)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
        });
        ui.add_space(theme::SPACING_SM);
        for feature in features {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(regular::CHECK)
                            .size(12.0)
                            .color(theme::SUCCESS),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(*feature)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
        }
    });
    ui.interact(
        inner.response.rect,
        egui::Id::new(title),
        egui::Sense::click(),
    )
    .clicked()
}
