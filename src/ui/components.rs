//! Reusable UI components
//!
//! Standalone widgets that only paint, with no access to app state.

use crate::constants::{RING_RADIUS, RING_STROKE};
use crate::theme;
use eframe::egui;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Circular countdown ring with the clock text in the middle.
///
/// `offset` is the stroke offset produced by the display layer: 0 paints the
/// full ring, a whole circumference paints only the track. The filled arc
/// starts at twelve o'clock and runs clockwise.
pub fn progress_ring(
    ui: &mut egui::Ui,
    offset: f32,
    circumference: f32,
    tint: egui::Color32,
    accent: egui::Color32,
    clock: &str,
) -> egui::Response {
    let size = (RING_RADIUS + RING_STROKE) * 2.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let center = rect.center();

        painter.circle_filled(center, RING_RADIUS - RING_STROKE, tint);
        painter.circle_stroke(
            center,
            RING_RADIUS,
            egui::Stroke::new(RING_STROKE, theme::RING_TRACK),
        );

        let shown = (1.0 - offset / circumference).clamp(0.0, 1.0);
        if shown > 0.0 {
            let segments = (128.0 * shown).ceil().max(1.0) as usize;
            let points: Vec<egui::Pos2> = (0..=segments)
                .map(|i| {
                    let angle = -FRAC_PI_2 + TAU * shown * (i as f32 / segments as f32);
                    center + RING_RADIUS * egui::vec2(angle.cos(), angle.sin())
                })
                .collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(RING_STROKE, accent),
            ));
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            clock,
            egui::FontId::monospace(theme::FONT_CLOCK),
            theme::TEXT_PRIMARY,
        );
    }

    response
}
