//! Query tab - FAQ browser and the expert query form

use super::App;
use crate::theme;
use crate::types::QueryTab;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular;
use jal_core::{faq, Faq};

impl App {
    pub(crate) fn render_query(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);
                components::screen_header(ui, "Help & Support", "FAQs and expert assistance");
                ui.add_space(theme::SPACING_LG);

                let mut faq_active = self.query_tab == QueryTab::Faq;
                if theme::segmented_toggle(ui, "FAQ", "Submit Query", &mut faq_active) {
                    self.query_tab = if faq_active {
                        QueryTab::Faq
                    } else {
                        QueryTab::SubmitQuery
                    };
                }
                ui.add_space(theme::SPACING_LG);

                match self.query_tab {
                    QueryTab::Faq => self.render_faq_list(ui),
                    QueryTab::SubmitQuery => self.render_query_form(ui),
                }
                ui.add_space(theme::SPACING_LG);
            });
    }

    fn render_faq_list(&mut self, ui: &mut egui::Ui) {
        components::search_box(
            ui,
            &mut self.faq_search,
            "Search frequently asked questions...",
        );
        ui.add_space(theme::SPACING_LG);

        let faqs = self.remote.lock().unwrap().faqs.clone().unwrap_or_default();
        if faqs.is_empty() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("No FAQs loaded yet")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            return;
        }

        let indices = faq::filter_faqs(&faqs, &self.faq_search);
        if indices.is_empty() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("No FAQs match your search")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            return;
        }

        for i in indices {
            self.render_faq_row(ui, &faqs[i]);
            ui.add_space(theme::SPACING_SM);
        }
    }

    fn render_faq_row(&mut self, ui: &mut egui::Ui, faq: &Faq) {
        let expanded = self.expanded_faqs.contains(&faq.id);
        let caret = if expanded {
            regular::CARET_UP
        } else {
            regular::CARET_DOWN
        };

        let inner = theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(ui.available_width() - 24.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(faq.question.clone())
                                .size(theme::FONT_LABEL)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .wrap()
                        .selectable(false),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(caret).size(14.0).color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });
            if expanded {
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(faq.answer.clone())
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.horizontal(|ui| {
                    components::tag_chip(ui, &faq.category, theme::ACCENT);
                });
            }
        });

        let response = ui.interact(
            inner.response.rect,
            egui::Id::new(&faq.id),
            egui::Sense::click(),
        );
        if response.clicked() && !self.expanded_faqs.insert(faq.id.clone()) {
            self.expanded_faqs.remove(&faq.id);
        }
    }

    fn render_query_form(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Submit Your Query")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XS);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(
                        "Have a question about water quality or health concerns? \
                         Submit your query and our experts will respond.",
                    )
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
                )
                .wrap(),
            );
            ui.add_space(theme::SPACING_MD);

            let form = &mut self.query_form;
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Your name")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.user_name)
                    .hint_text("Full name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Phone number")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.phone_number)
                    .hint_text("10-digit mobile number")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Your question")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add(
                egui::TextEdit::multiline(&mut form.question)
                    .hint_text("Describe your question or concern")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_MD);

            if components::submit_button(ui, self.submit_in_flight, "Submit Query") {
                self.submit_query(ui.ctx());
            }
        });
    }
}
