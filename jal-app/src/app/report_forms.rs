//! Water quality and patient case report forms

use super::App;
use crate::theme;
use crate::types::ReportScreen;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular;
use jal_core::vocab::{DISEASES, GENDERS, SYMPTOMS};
use jal_core::{District, WaterSource};

fn field_label(ui: &mut egui::Ui, text: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        if required {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("*")
                        .size(theme::FONT_LABEL)
                        .color(theme::DANGER),
                )
                .selectable(false),
            );
        }
    });
}

fn text_field(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

/// Half-width labelled field, used for the paired numeric inputs.
fn numeric_field(ui: &mut egui::Ui, width: f32, label: &str, value: &mut String, hint: &str) {
    ui.vertical(|ui| {
        ui.set_width(width);
        field_label(ui, label, false);
        ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(width));
    });
}

fn form_section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);
        add_contents(ui);
    });
}

fn district_picker(ui: &mut egui::Ui, id: &str, districts: &[District], value: &mut String) {
    let selected = if value.is_empty() {
        "Select district".to_string()
    } else {
        value.clone()
    };
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for district in districts {
                ui.selectable_value(value, district.name.clone(), district.label());
            }
        });
}

fn water_source_picker(ui: &mut egui::Ui, id: &str, value: &mut Option<WaterSource>) {
    let selected = value.map(WaterSource::label).unwrap_or("Select water source");
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for source in WaterSource::ALL {
                ui.selectable_value(value, Some(source), source.label());
            }
        });
}

impl App {
    pub(crate) fn render_water_form(&mut self, ui: &mut egui::Ui) {
        let districts = self
            .remote
            .lock()
            .unwrap()
            .districts
            .clone()
            .unwrap_or_default();

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
                        self.report_screen = ReportScreen::Chooser;
                    }
                    ui.add_space(theme::SPACING_SM);
                    components::screen_header(
                        ui,
                        "Water Quality Report",
                        "Submit water testing data",
                    );
                });
                ui.add_space(theme::SPACING_LG);

                let form = &mut self.water_form;
                form_section(ui, "Location Details", |ui| {
                    field_label(ui, "Location name", true);
                    text_field(ui, &mut form.location_name, "e.g. Mawsynram village well");
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "District", true);
                    district_picker(ui, "water_district", &districts, &mut form.district);
                    ui.add_space(theme::SPACING_SM);
                    let half = (ui.available_width() - theme::SPACING_MD) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        numeric_field(ui, half, "Latitude", &mut form.latitude, "e.g. 25.4670");
                        numeric_field(ui, half, "Longitude", &mut form.longitude, "e.g. 91.3662");
                    });
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Sample Collection", |ui| {
                    field_label(ui, "Water source", true);
                    water_source_picker(ui, "water_source", &mut form.water_source);
                    ui.add_space(theme::SPACING_SM);
                    let half = (ui.available_width() - theme::SPACING_MD) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        ui.vertical(|ui| {
                            ui.set_width(half);
                            field_label(ui, "Collection date", false);
                            ui.add(
                                egui_extras::DatePickerButton::new(&mut form.collection_date)
                                    .id_salt("collection_date"),
                            );
                        });
                        ui.vertical(|ui| {
                            ui.set_width(half);
                            field_label(ui, "Collection time", false);
                            ui.add(
                                egui::TextEdit::singleline(&mut form.collection_time)
                                    .hint_text("HH:MM:SS")
                                    .desired_width(half),
                            );
                        });
                    });
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Test Readings", |ui| {
                    let half = (ui.available_width() - theme::SPACING_MD) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        numeric_field(ui, half, "pH Level", &mut form.ph_level, "e.g. 7.2");
                        numeric_field(ui, half, "Turbidity (NTU)", &mut form.turbidity, "e.g. 2.5");
                    });
                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        numeric_field(ui, half, "Chlorine (mg/L)", &mut form.chlorine, "e.g. 0.4");
                        numeric_field(
                            ui,
                            half,
                            "E. coli (CFU/100mL)",
                            &mut form.e_coli,
                            "e.g. 0",
                        );
                    });
                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        numeric_field(
                            ui,
                            half,
                            "Total Coliform",
                            &mut form.total_coliform,
                            "e.g. 10",
                        );
                        numeric_field(ui, half, "TDS (mg/L)", &mut form.tds, "e.g. 180");
                    });
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Collector Information", |ui| {
                    field_label(ui, "Collector name", true);
                    text_field(ui, &mut form.collector_name, "Full name");
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "Collector ID", false);
                    text_field(ui, &mut form.collector_id, "Volunteer or staff ID");
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "Phone number", true);
                    text_field(ui, &mut form.phone_number, "10-digit mobile number");
                });
                ui.add_space(theme::SPACING_LG);

                if components::submit_button(ui, self.submit_in_flight, "Submit Report") {
                    self.submit_water_report(ui.ctx());
                }
                ui.add_space(theme::SPACING_LG);
            });
    }

    pub(crate) fn render_patient_form(&mut self, ui: &mut egui::Ui) {
        let districts = self
            .remote
            .lock()
            .unwrap()
            .districts
            .clone()
            .unwrap_or_default();

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
                        self.report_screen = ReportScreen::Chooser;
                    }
                    ui.add_space(theme::SPACING_SM);
                    components::screen_header(
                        ui,
                        "Patient Case Report",
                        "Report a suspected waterborne disease case",
                    );
                });
                ui.add_space(theme::SPACING_LG);

                let form = &mut self.patient_form;
                form_section(ui, "Patient Information", |ui| {
                    field_label(ui, "Patient name", true);
                    text_field(ui, &mut form.patient_name, "Full name");
                    ui.add_space(theme::SPACING_SM);
                    let half = (ui.available_width() - theme::SPACING_MD) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        ui.vertical(|ui| {
                            ui.set_width(half);
                            field_label(ui, "Age", true);
                            ui.add(
                                egui::TextEdit::singleline(&mut form.age)
                                    .hint_text("Years")
                                    .desired_width(half),
                            );
                        });
                        ui.vertical(|ui| {
                            ui.set_width(half);
                            field_label(ui, "Gender", true);
                            let selected = GENDERS
                                .iter()
                                .find(|(_, wire)| *wire == form.gender)
                                .map(|(label, _)| *label)
                                .unwrap_or("Select");
                            egui::ComboBox::from_id_salt("patient_gender")
                                .width(half)
                                .selected_text(selected)
                                .show_ui(ui, |ui| {
                                    for (label, wire) in GENDERS {
                                        ui.selectable_value(
                                            &mut form.gender,
                                            wire.to_string(),
                                            label,
                                        );
                                    }
                                });
                        });
                    });
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Location", |ui| {
                    field_label(ui, "Location name", true);
                    text_field(ui, &mut form.location_name, "Village or locality");
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "District", true);
                    district_picker(ui, "patient_district", &districts, &mut form.district);
                    ui.add_space(theme::SPACING_SM);
                    let half = (ui.available_width() - theme::SPACING_MD) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                        numeric_field(ui, half, "Latitude", &mut form.latitude, "e.g. 25.4670");
                        numeric_field(ui, half, "Longitude", &mut form.longitude, "e.g. 91.3662");
                    });
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Medical Details", |ui| {
                    field_label(ui, "Symptoms", true);
                    ui.columns(2, |columns| {
                        for (i, symptom) in SYMPTOMS.iter().enumerate() {
                            let column = &mut columns[i % 2];
                            let checked = form.has_symptom(symptom);
                            if theme::checkbox_row(column, checked, symptom) {
                                form.toggle_symptom(symptom);
                            }
                        }
                    });
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "Suspected disease", true);
                    let selected = if form.suspected_disease.is_empty() {
                        "Select disease".to_string()
                    } else {
                        form.suspected_disease.clone()
                    };
                    egui::ComboBox::from_id_salt("suspected_disease")
                        .width(ui.available_width())
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for disease in DISEASES {
                                ui.selectable_value(
                                    &mut form.suspected_disease,
                                    disease.to_string(),
                                    disease,
                                );
                            }
                        });
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "Water source used", true);
                    water_source_picker(ui, "patient_water_source", &mut form.water_source_used);
                });
                ui.add_space(theme::SPACING_MD);

                form_section(ui, "Reporter Information", |ui| {
                    field_label(ui, "Reporter name", true);
                    text_field(ui, &mut form.reporter_name, "Full name");
                    ui.add_space(theme::SPACING_SM);
                    field_label(ui, "Reporter phone", true);
                    text_field(ui, &mut form.reporter_phone, "10-digit mobile number");
                });
                ui.add_space(theme::SPACING_LG);

                if components::submit_button(ui, self.submit_in_flight, "Submit Report") {
                    self.submit_patient_report(ui.ctx());
                }
                ui.add_space(theme::SPACING_LG);
            });
    }
}
