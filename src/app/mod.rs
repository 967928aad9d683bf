//! App module - contains the main application state and logic

use crate::display;
use crate::notify::Notifier;
use crate::session::Session;
use crate::settings::Settings;
use crate::theme;
use crate::timer::{Phase, TimerState};
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) notifier: Notifier,
    // Fixed at startup from the ring control's static radius
    pub(crate) circumference: f32,
    pub(crate) play_sound: bool,
    pub(crate) last_title: String,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the control buttons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            session: Session::new(settings.auto_start_next),
            notifier: Notifier::new(),
            circumference: display::ring_circumference(),
            play_sound: settings.play_sound,
            last_title: String::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    // ------------------------------------------------------------------
    // Control surface, 1:1 with the three buttons
    // ------------------------------------------------------------------

    pub fn start(&mut self) {
        self.session.start(Instant::now());
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Runs due ticks and raises one notification per phase switch.
    pub(crate) fn poll_countdown(&mut self, now: Instant) {
        for entered in self.session.poll(now) {
            let (title, body, alarm) = transition_message(entered);
            self.notifier.notify(title, body, alarm && self.play_sound);
        }
    }

    /// Status line under the clock. Neutral until the first countdown, then
    /// tracks the phase.
    pub(crate) fn status_line(&self) -> (&'static str, egui::Color32) {
        let state = &self.session.state;
        if !state.running && *state == TimerState::new() {
            ("Ready to focus", theme::TEXT_MUTED)
        } else {
            (state.phase.status_text(), theme::phase_accent(state.phase))
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            play_sound: self.play_sound,
            auto_start_next: self.session.auto_start_next,
        };
        settings.save(&self.data_dir);
    }
}

/// Notification content for the phase being entered. The alarm only rings
/// when the focus interval ends.
pub(crate) fn transition_message(entered: Phase) -> (&'static str, &'static str, bool) {
    match entered {
        Phase::Break => (
            "Focus complete",
            "Stand up and move around, take a 5 minute break!",
            true,
        ),
        Phase::Work => ("Break over", "Back to the desk, time to focus!", false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_rings_only_when_entering_break() {
        assert!(transition_message(Phase::Break).2);
        assert!(!transition_message(Phase::Work).2);
    }
}
