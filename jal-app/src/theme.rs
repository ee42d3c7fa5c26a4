//! Centralized theme constants for Jal Drishti
//! All colors, sizes, and styling should reference these constants

use egui::Color32;
use jal_core::ReportStatus;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa); // app background
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_TINT: Color32 = Color32::from_rgb(0xef, 0xf1, 0xf3); // inset surfaces
pub const BG_INPUT: Color32 = Color32::from_rgb(0xf4, 0xf5, 0xf7); // input field background
pub const BG_HOVER: Color32 = Color32::from_rgb(0xe9, 0xf2, 0xfc); // subtle blue hover
pub const BG_MAP: Color32 = Color32::from_rgb(0xdc, 0xea, 0xdf); // map panel ground tint
pub const BG_MAP_WATER: Color32 = Color32::from_rgb(0xbf, 0xdc, 0xf0); // map panel water tint

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3); // material blue 500
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2); // material blue 700

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
pub const BORDER_STRONG: Color32 = Color32::from_rgb(0xbd, 0xbd, 0xbd);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUBMITTED: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3); // blue
pub const STATUS_PROCESSED: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50); // green
pub const STATUS_UNDER_REVIEW: Color32 = Color32::from_rgb(0xff, 0x98, 0x00); // orange
pub const STATUS_HIGH_PRIORITY: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36); // red

pub const SUCCESS: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
pub const DANGER: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36);
pub const WARNING: Color32 = Color32::from_rgb(0xff, 0x98, 0x00);

/// Marker and counter color for a report status.
pub fn status_color(status: ReportStatus) -> Color32 {
    match status {
        ReportStatus::Submitted => STATUS_SUBMITTED,
        ReportStatus::Processed => STATUS_PROCESSED,
        ReportStatus::UnderReview => STATUS_UNDER_REVIEW,
        ReportStatus::HighPriority => STATUS_HIGH_PRIORITY,
    }
}

/// Returns (bg_color ~10% alpha, text_color) for status chips.
pub fn status_chip_colors(status: ReportStatus) -> (Color32, Color32) {
    let color = status_color(status);
    (
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 26),
        color,
    )
}

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0xef, 0xf1, 0xf3);
pub const BTN_ACCENT: Color32 = ACCENT;
pub const BTN_DANGER: Color32 = DANGER;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 19.0;
pub const FONT_HEADING: f32 = 15.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const TAB_BAR_HEIGHT: f32 = 56.0;
pub const MAP_PANEL_HEIGHT: f32 = 260.0;
pub const MARKER_RADIUS: f32 = 7.0;
pub const CHECKBOX_SIZE: f32 = 16.0;
pub const LOGO_WIDTH: f32 = 26.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_TINT,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0xbb, 0xde, 0xfb), // blue 100 text highlight
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_TINT,
                bg_stroke: egui::Stroke::new(1.0, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_TINT,
                weak_bg_fill: BG_TINT,
                bg_stroke: egui::Stroke::new(1.0, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(1.0, TEXT_MUTED),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::new(1.0, BORDER_STRONG),
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0xdd, 0xe3, 0xe8),
                weak_bg_fill: BG_TINT,
                bg_stroke: egui::Stroke::new(1.0, ACCENT),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_TINT,
                bg_stroke: egui::Stroke::new(1.0, BORDER_STRONG),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 3],
            blur: 10,
            spread: 0,
            color: Color32::from_black_alpha(30),
        },
        window_stroke: egui::Stroke::new(1.0, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.handle_min_length = 20.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// White card with border and soft corners.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

/// Form section panel with fill and border.
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(12))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default neutral button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent blue button (for primary actions like Submit)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_ACCENT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Danger red button (for dismissing failures)
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_ACCENT))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}

// =============================================================================
// HELPER - Checkbox row
// =============================================================================

/// Painted checkbox row for the symptom checklist. Returns true if toggled.
pub fn checkbox_row(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let full_width = ui.available_width();
    let row_height = 22.0;
    let (row_rect, row_resp) =
        ui.allocate_exact_size(egui::vec2(full_width, row_height), egui::Sense::click());
    if row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    let cb_size = CHECKBOX_SIZE;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_filled(cb_rect, 3.0, ACCENT);
        painter.text(
            cb_rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::CHECK,
            egui::FontId::proportional(cb_size * 0.75),
            TEXT_ON_ACCENT,
        );
    } else {
        painter.rect_stroke(
            cb_rect,
            3.0,
            egui::Stroke::new(1.5, BORDER_STRONG),
            egui::StrokeKind::Inside,
        );
    }
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        TEXT_PRIMARY,
    );
    row_resp.clicked()
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Renders a two-option segmented toggle sized to its labels. Returns true
/// if the selection changed. `left_active` indicates the current side.
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let mut changed = false;
    let height = 32.0;
    let font_size = FONT_LABEL;
    let rounding = 6.0;

    let measure = |ui: &egui::Ui, label: &str| -> f32 {
        ui.fonts(|f| {
            f.layout_no_wrap(
                label.to_string(),
                egui::FontId::proportional(font_size),
                TEXT_PRIMARY,
            )
            .rect
            .width()
        })
    };
    let left_width = measure(ui, left_label) + 32.0;
    let right_width = measure(ui, right_label) + 32.0;
    let total_width = left_width + right_width;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(total_width, height), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, rounding, BG_TINT);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + left_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + left_width, rect.min.y), rect.max);
    let active_rect = if *left_active { left_rect } else { right_rect };

    let inner = active_rect.shrink(2.0);
    painter.rect_filled(inner, rounding - 1.0, BG_CARD);
    painter.rect_stroke(
        inner,
        rounding - 1.0,
        egui::Stroke::new(1.0, ACCENT),
        egui::StrokeKind::Inside,
    );

    let (left_color, right_color) = if *left_active {
        (ACCENT, TEXT_MUTED)
    } else {
        (TEXT_MUTED, ACCENT)
    };
    painter.text(
        left_rect.center(),
        egui::Align2::CENTER_CENTER,
        left_label,
        egui::FontId::proportional(font_size),
        left_color,
    );
    painter.text(
        right_rect.center(),
        egui::Align2::CENTER_CENTER,
        right_label,
        egui::FontId::proportional(font_size),
        right_color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + left_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                changed = true;
            }
        }
    }
    changed
}
