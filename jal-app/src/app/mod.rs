//! App module - contains the main application state and logic

mod data;
mod education;
mod home;
mod modals;
mod query;
mod report_forms;
mod reports;
mod submit;

use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use jal_core::forms::{FormError, PatientReportForm, QueryForm, WaterReportForm};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Navigation
    pub(crate) tab: Tab,
    pub(crate) report_screen: ReportScreen,
    pub(crate) query_tab: QueryTab,
    // Form drafts
    pub(crate) water_form: WaterReportForm,
    pub(crate) patient_form: PatientReportForm,
    pub(crate) query_form: QueryForm,
    // Remote data
    pub(crate) remote: Arc<Mutex<RemoteData>>,
    pub(crate) refresh_token: Option<CancellationToken>,
    pub(crate) bootstrapped: bool,
    // Submission state
    pub(crate) submit_in_flight: bool,
    pub(crate) submit_result: Option<(SubmitKind, bool)>,
    pub(crate) form_error: Option<FormError>,
    // Home
    pub(crate) home_search: String,
    pub(crate) selected_marker: Option<String>,
    // Query tab
    pub(crate) faq_search: String,
    pub(crate) expanded_faqs: HashSet<String>,
    // Settings
    pub(crate) backend_url: String,
    pub(crate) show_settings: bool,
    pub(crate) backend_check: Option<bool>,
    pub(crate) backend_checking: bool,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font on top of the default fonts
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            tab: Tab::Home,
            report_screen: ReportScreen::Dashboard,
            query_tab: QueryTab::Faq,
            water_form: WaterReportForm::default(),
            patient_form: PatientReportForm::default(),
            query_form: QueryForm::default(),
            remote: Arc::new(Mutex::new(RemoteData::default())),
            refresh_token: None,
            bootstrapped: false,
            submit_in_flight: false,
            submit_result: None,
            form_error: None,
            home_search: String::new(),
            selected_marker: None,
            faq_search: String::new(),
            expanded_faqs: HashSet::new(),
            backend_url: settings.backend_url_or_default(),
            show_settings: false,
            backend_check: None,
            backend_checking: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            logo_texture: None,
            runtime: tokio::runtime::Runtime::new().unwrap(),
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            backend_url: Some(self.backend_url.clone()),
        };
        settings.save(&self.data_dir);
    }

    /// Full URL for an API path, e.g. `api_url("report-stats")`.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.backend_url.trim_end_matches('/'), path)
    }
}
