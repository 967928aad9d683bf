//! Centralized theme constants for Focus Ring
//! All colors, sizes, and styling should reference these constants

use crate::timer::Phase;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_BREAK: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Ring
// =============================================================================
pub const RING_TRACK: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22); // empty part of the ring

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Phase accents
// =============================================================================
pub fn phase_accent(phase: Phase) -> Color32 {
    match phase {
        Phase::Work => ACCENT,
        Phase::Break => ACCENT_BREAK,
    }
}

/// Faint per-phase tint behind the ring, the analogue of the source page's
/// work-mode / break-mode body classes.
pub fn phase_tint(phase: Phase) -> Color32 {
    match phase {
        Phase::Work => Color32::from_rgba_unmultiplied(0x2d, 0xd4, 0xbf, 8),
        Phase::Break => Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 8),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_CLOCK: f32 = 52.0;
pub const FONT_STATUS: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                weak_bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, Color32::from_rgb(0x2a, 0x2a, 0x2e)),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
    });
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent teal button (for the primary Start action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::from_rgb(0x04, 0x2f, 0x2e)))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

// =============================================================================
// HELPER - Settings checkbox
// =============================================================================

/// Settings checkbox row. Returns true if toggled.
pub fn settings_checkbox(ui: &mut egui::Ui, checked: bool, label: &str, enabled: bool) -> bool {
    let full_width = ui.available_width();
    let row_height = 20.0;
    let (row_rect, row_resp) =
        ui.allocate_exact_size(egui::vec2(full_width, row_height), egui::Sense::click());
    if enabled && row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    let cb_size = 16.0;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_stroke(
            cb_rect,
            3.0,
            egui::Stroke::new(1.5, ACCENT),
            egui::StrokeKind::Inside,
        );
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, ACCENT);
    } else {
        painter.rect_stroke(
            cb_rect,
            3.0,
            egui::Stroke::new(1.5, BORDER_DEFAULT),
            egui::StrokeKind::Inside,
        );
    }
    let color = if enabled { TEXT_PRIMARY } else { TEXT_DIM };
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        color,
    );
    enabled && row_resp.clicked()
}
