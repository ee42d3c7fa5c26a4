//! Education tab - video module catalogue

use super::App;
use crate::constants::EDUCATION_VIDEOS;
use crate::theme;
use crate::types::EducationVideo;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular;

impl App {
    pub(crate) fn render_education(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);
                components::screen_header(
                    ui,
                    "Education Modules",
                    "Video Tutorials & Learning Resources",
                );
                ui.add_space(theme::SPACING_LG);
                for video in &EDUCATION_VIDEOS {
                    render_video_card(ui, video);
                    ui.add_space(theme::SPACING_MD);
                }
                ui.add_space(theme::SPACING_LG);
            });
    }
}

fn render_video_card(ui: &mut egui::Ui, video: &EducationVideo) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Thumbnail strip with play glyph and duration badge
        let size = egui::vec2(ui.available_width(), 120.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter().with_clip_rect(rect);
        painter.rect_filled(rect, theme::RADIUS_MEDIUM, theme::ACCENT_DARK.gamma_multiply(0.9));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            regular::PLAY_CIRCLE,
            egui::FontId::proportional(36.0),
            egui::Color32::WHITE,
        );
        let badge = egui::Rect::from_min_size(
            egui::pos2(rect.max.x - 48.0, rect.max.y - 24.0),
            egui::vec2(40.0, 16.0),
        );
        painter.rect_filled(badge, 3.0, egui::Color32::from_black_alpha(160));
        painter.text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            video.duration,
            egui::FontId::proportional(theme::FONT_CAPTION),
            egui::Color32::WHITE,
        );

        ui.add_space(theme::SPACING_MD);
        ui.add(
            egui::Label::new(
                egui::RichText::new(video.title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_XS);
        ui.add(
            egui::Label::new(
                egui::RichText::new(video.description)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_SM);
        ui.horizontal(|ui| {
            components::tag_chip(ui, video.category, theme::ACCENT);
            components::tag_chip(ui, video.level, level_color(video.level));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("For: {}", video.audience))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });
        });
    });
}

fn level_color(level: &str) -> egui::Color32 {
    match level {
        "Beginner" => theme::SUCCESS,
        "Intermediate" => theme::WARNING,
        _ => theme::DANGER,
    }
}
