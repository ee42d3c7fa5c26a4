//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;
use egui_phosphor::regular;
use jal_core::ReportStatus;

/// Human-readable label for a report status.
pub fn status_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Submitted => "Submitted",
        ReportStatus::Processed => "Processed",
        ReportStatus::UnderReview => "Under Review",
        ReportStatus::HighPriority => "High Priority",
    }
}

/// Screen title with a muted subtitle line.
pub fn screen_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(title)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
    ui.add(
        egui::Label::new(
            egui::RichText::new(subtitle)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Rounded status chip, tinted by the status color.
pub fn status_chip(ui: &mut egui::Ui, status: ReportStatus) {
    let (bg, text_color) = theme::status_chip_colors(status);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(9.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(status_label(status))
                        .size(theme::FONT_SMALL)
                        .color(text_color),
                )
                .selectable(false),
            );
        });
}

/// Small rounded tag for education card metadata.
pub fn tag_chip(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    let bg = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 26);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(9.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(color),
                )
                .selectable(false),
            );
        });
}

/// Rounded search input with a magnifier glyph.
pub fn search_box(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(regular::MAGNIFYING_GLASS)
                            .size(15.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .frame(false)
                        .desired_width(f32::INFINITY),
                );
            });
        });
}

/// Full-width accent submit button, disabled while a submission is in
/// flight. Returns true on click.
pub fn submit_button(ui: &mut egui::Ui, in_flight: bool, label: &str) -> bool {
    let text = if in_flight {
        "Submitting...".to_string()
    } else {
        format!("{}  {}", regular::PAPER_PLANE_TILT, label)
    };
    let button = theme::button_accent(text).min_size(egui::vec2(ui.available_width(), 36.0));
    ui.add_enabled(!in_flight, button).clicked()
}

/// Dashboard stat card: a big colored number over a muted label.
pub fn stat_card(ui: &mut egui::Ui, width: f32, value: i64, label: &str, color: egui::Color32) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(value.to_string())
                        .size(24.0)
                        .strong()
                        .color(color),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(label)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label() {
        let labels: Vec<&str> = ReportStatus::ALL.into_iter().map(status_label).collect();
        assert_eq!(
            labels,
            vec!["Submitted", "Processed", "Under Review", "High Priority"]
        );
    }
}
