//! Home tab - map overview and location search

use super::App;
use crate::constants::{
    MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_SPAN_LAT, MAP_SPAN_LNG, OSM_ZOOM, SAMPLE_SITES,
};
use crate::ui::components;
use crate::{theme, utils};
use eframe::egui;
use egui_phosphor::regular;
use jal_core::{MapLocation, ReportKind, ReportStatus};
use tracing::warn;

/// Case-insensitive title match used by the home search box.
fn search_matches(title: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Linear projection of geographic coordinates onto the map panel.
fn project(lat: f64, lng: f64, rect: egui::Rect) -> egui::Pos2 {
    let west = MAP_CENTER_LNG - MAP_SPAN_LNG / 2.0;
    let north = MAP_CENTER_LAT + MAP_SPAN_LAT / 2.0;
    let x = rect.left() + ((lng - west) / MAP_SPAN_LNG) as f32 * rect.width();
    let y = rect.top() + ((north - lat) / MAP_SPAN_LAT) as f32 * rect.height();
    // Keep off-span markers visible at the panel edge
    egui::pos2(
        x.clamp(rect.left() + 12.0, rect.right() - 12.0),
        y.clamp(rect.top() + 12.0, rect.bottom() - 12.0),
    )
}

fn sample_sites() -> Vec<MapLocation> {
    SAMPLE_SITES
        .iter()
        .map(|(title, lat, lng, status)| MapLocation {
            id: title.to_string(),
            kind: ReportKind::WaterReport,
            title: title.to_string(),
            latitude: *lat,
            longitude: *lng,
            status: *status,
            description: String::new(),
        })
        .collect()
}

fn draw_map_base(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::BG_MAP);

    // Stylised river and lake
    let river = egui::Rect::from_min_size(
        egui::pos2(rect.left() + rect.width() * 0.58, rect.top()),
        egui::vec2(rect.width() * 0.14, rect.height()),
    );
    painter.rect_filled(river, 0.0, theme::BG_MAP_WATER);
    let lake = egui::Rect::from_center_size(
        egui::pos2(
            rect.left() + rect.width() * 0.22,
            rect.top() + rect.height() * 0.68,
        ),
        egui::vec2(rect.width() * 0.20, rect.height() * 0.24),
    );
    painter.rect_filled(lake, 18.0, theme::BG_MAP_WATER);

    // Faint road grid
    let grid = egui::Stroke::new(1.0, theme::BORDER_DEFAULT.gamma_multiply(0.6));
    for i in 1..6 {
        let x = rect.left() + rect.width() * i as f32 / 6.0;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid);
    }
    for i in 1..4 {
        let y = rect.top() + rect.height() * i as f32 / 4.0;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid);
    }
}

impl App {
    pub(crate) fn render_home(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);
                self.render_home_header(ui);
                ui.add_space(theme::SPACING_LG);
                components::search_box(
                    ui,
                    &mut self.home_search,
                    "Search locations, reports, or alerts...",
                );
                ui.add_space(theme::SPACING_LG);
                self.render_map(ui);
                ui.add_space(theme::SPACING_LG);
                self.render_location_card(ui);
                ui.add_space(theme::SPACING_MD);
                render_legend(ui);
                ui.add_space(theme::SPACING_LG);
            });
    }

    fn render_home_header(&mut self, ui: &mut egui::Ui) {
        let texture = self.logo_texture.get_or_insert_with(|| {
            // Rasterized at 2x so the logo stays crisp on hidpi screens
            let (rgba, w, h) = utils::rasterize_logo(2 * theme::LOGO_WIDTH as u32);
            let image = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
            ui.ctx()
                .load_texture("app_logo", image, egui::TextureOptions::LINEAR)
        });
        let logo_size = egui::vec2(
            texture.size()[0] as f32 / 2.0,
            texture.size()[1] as f32 / 2.0,
        );

        ui.horizontal(|ui| {
            ui.add(egui::Image::new(&*texture).fit_to_exact_size(logo_size));
            ui.add_space(theme::SPACING_SM);
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Jal Drishti")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Volunteer App")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(regular::GEAR)
                                .size(18.0)
                                .color(theme::TEXT_MUTED),
                        )
                        .frame(false),
                    )
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.show_settings = true;
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(regular::BELL)
                            .size(18.0)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
        });
    }

    fn render_map(&mut self, ui: &mut egui::Ui) {
        let fetched = self.remote.lock().unwrap().map_locations.clone();
        let mut markers = match fetched {
            Some(list) if !list.is_empty() => list,
            _ => sample_sites(),
        };
        markers.retain(|m| search_matches(&m.title, &self.home_search));

        let size = egui::vec2(ui.available_width(), theme::MAP_PANEL_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let painter = ui.painter().with_clip_rect(rect);

        draw_map_base(&painter, rect);
        painter.rect_stroke(
            rect,
            theme::RADIUS_LARGE,
            egui::Stroke::new(1.0, theme::BORDER_DEFAULT),
            egui::StrokeKind::Inside,
        );

        for marker in &markers {
            let pos = project(marker.latitude, marker.longitude, rect);
            let color = theme::status_color(marker.status);
            if self.selected_marker.as_deref() == Some(marker.id.as_str()) {
                painter.circle_stroke(
                    pos,
                    theme::MARKER_RADIUS + 4.0,
                    egui::Stroke::new(2.0, color),
                );
            }
            painter.circle(
                pos,
                theme::MARKER_RADIUS,
                color,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        let hit = |pointer: egui::Pos2| {
            markers.iter().find(|m| {
                project(m.latitude, m.longitude, rect).distance(pointer)
                    <= theme::MARKER_RADIUS + 4.0
            })
        };
        if let Some(pointer) = response.hover_pos() {
            if let Some(marker) = hit(pointer) {
                response.clone().on_hover_ui_at_pointer(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&marker.title)
                                .size(theme::FONT_LABEL)
                                .strong(),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(components::status_label(marker.status))
                                .size(theme::FONT_SMALL)
                                .color(theme::status_color(marker.status)),
                        )
                        .selectable(false),
                    );
                });
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }
        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.selected_marker = hit(pointer).map(|m| m.id.clone());
            }
        }

        if let Some(id) = self.selected_marker.clone() {
            if let Some(marker) = markers.iter().find(|m| m.id == id) {
                ui.add_space(theme::SPACING_MD);
                render_marker_card(ui, marker);
            }
        }
    }

    fn render_location_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(regular::MAP_PIN)
                            .size(20.0)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Mawsynram")
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Meghalaya 793113")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let link = ui.add(
                        egui::Button::new(
                            egui::RichText::new("View larger map")
                                .size(theme::FONT_LABEL)
                                .color(theme::ACCENT),
                        )
                        .frame(false),
                    );
                    if link.clicked() {
                        let url = utils::osm_url(MAP_CENTER_LAT, MAP_CENTER_LNG, OSM_ZOOM);
                        if let Err(e) = open::that(url) {
                            warn!(error = %e, "Failed to open browser");
                        }
                    }
                });
            });
        });
    }
}

fn render_marker_card(ui: &mut egui::Ui, marker: &MapLocation) {
    theme::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(marker.title.clone())
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                components::status_chip(ui, marker.status);
            });
        });
        if !marker.description.is_empty() {
            ui.add_space(theme::SPACING_XS);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(marker.description.clone())
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .wrap(),
            );
        }
    });
}

fn render_legend(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
        for status in ReportStatus::ALL {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_XS + 2.0;
                let (dot, _) =
                    ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(dot.center(), 4.0, theme::status_color(status));
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(components::status_label(status))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_ignores_case_and_whitespace() {
        assert!(search_matches("Mawsynram", ""));
        assert!(search_matches("Mawsynram", "  "));
        assert!(search_matches("Mawsynram", "maw"));
        assert!(search_matches("Mawjymbuin Caves", " CAVES "));
        assert!(!search_matches("Mawsynram", "shillong"));
    }

    #[test]
    fn sample_sites_cover_every_fallback_marker() {
        let sites = sample_sites();
        assert_eq!(sites.len(), SAMPLE_SITES.len());
        assert!(sites.iter().any(|s| s.title == "Mawsynram"));
    }
}
