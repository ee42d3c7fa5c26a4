#![windows_subsystem = "windows"]
//! Jal Drishti - field data collection client for water quality and
//! waterborne disease reporting

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use eframe::egui;
use settings::Settings;
use std::path::PathBuf;
use tracing::info;
use types::{ReportScreen, Tab};

/// Initialize logging to a daily rolling file. Returns a guard that must
/// be held for the process lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "jal-app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,jal_app=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jal-drishti")
}

fn load_icon() -> egui::IconData {
    let (rgba, width, height) = utils::rasterize_icon(64);
    egui::IconData {
        rgba,
        width,
        height,
    }
}

fn main() -> eframe::Result<()> {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Guard must live for the entire process lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = constants::APP_VERSION, "Jal Drishti starting");

    let settings = Settings::load(&data_dir);

    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let needs_center = win_pos.is_none();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(460.0, 820.0)))
        .with_min_inner_size([420.0, 700.0])
        .with_title(constants::APP_NAME)
        .with_icon(std::sync::Arc::new(load_icon()));
    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = app::App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

/// Painted bottom tab bar button with an icon over a caption.
fn tab_button(ui: &mut egui::Ui, width: f32, icon: &str, label: &str, active: bool) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::TAB_BAR_HEIGHT), egui::Sense::click());
    let color = if active { theme::ACCENT } else { theme::TEXT_DIM };
    let painter = ui.painter();
    if active {
        painter.rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(rect.center().x - 16.0, rect.top()),
                egui::vec2(32.0, 3.0),
            ),
            1.5,
            theme::ACCENT,
        );
    }
    painter.text(
        egui::pos2(rect.center().x, rect.top() + 20.0),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(20.0),
        color,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 12.0),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(theme::FONT_CAPTION),
        color,
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

impl eframe::App for app::App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window geometry for persistence
        let pos = ctx.input(|i| i.viewport().outer_rect.map(|r| r.min));
        let size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));
        if let Some(p) = pos {
            self.window_pos = Some(p);
        }
        if let Some(s) = size {
            self.window_size = Some(s);
        }

        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // First frame: pull dashboard data in the background
        if !self.bootstrapped {
            self.bootstrapped = true;
            self.refresh_dashboard(ctx);
        }

        self.poll_submit_result(ctx);
        self.poll_backend_check(ctx);

        self.render_modals(ctx);

        egui::TopBottomPanel::bottom("tab_bar")
            .exact_height(theme::TAB_BAR_HEIGHT)
            .frame(egui::Frame::new().fill(theme::BG_CARD))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().hline(
                    rect.x_range(),
                    rect.top(),
                    egui::Stroke::new(1.0, theme::BORDER_DEFAULT),
                );
                let tab_width = rect.width() / 4.0;
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    let tabs = [
                        (Tab::Home, egui_phosphor::regular::HOUSE, "Home"),
                        (Tab::Reports, egui_phosphor::regular::FILE_TEXT, "Reports"),
                        (
                            Tab::Education,
                            egui_phosphor::regular::GRADUATION_CAP,
                            "Education",
                        ),
                        (Tab::Query, egui_phosphor::regular::CHATS, "Query"),
                    ];
                    for (tab, icon, label) in tabs {
                        if tab_button(ui, tab_width, icon, label, self.tab == tab) {
                            self.tab = tab;
                        }
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| match self.tab {
                Tab::Home => self.render_home(ui),
                Tab::Reports => match self.report_screen {
                    ReportScreen::Dashboard => self.render_reports(ui),
                    ReportScreen::Chooser => self.render_report_chooser(ui),
                    ReportScreen::WaterForm => self.render_water_form(ui),
                    ReportScreen::PatientForm => self.render_patient_form(ui),
                },
                Tab::Education => self.render_education(ui),
                Tab::Query => self.render_query(ui),
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
