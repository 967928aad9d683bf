#![windows_subsystem = "windows"]
//! Focus Ring - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod display;
mod driver;
mod notify;
mod session;
mod settings;
mod theme;
mod timer;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::time::Instant;
use tracing::info;
use ui::components::progress_ring;
use utils::{get_data_dir, rasterize_icon};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "focus-ring.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,focus_ring=debug"));

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

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Focus Ring starting");

    // Load saved window position/size and preferences
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(380.0, 560.0)))
        .with_min_inner_size([340.0, 500.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the inline SVG
    {
        let (rgba, width, height) = rasterize_icon(64);
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Consume any ticks that came due since the last frame
        self.poll_countdown(Instant::now());

        self.sync_window_title(ctx);
        self.render_controls(ctx);
        self.render_timer(ctx);

        // Wake up again when the next tick is due
        if let Some(wait) = self.session.next_due_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
        info!("Focus Ring exiting");
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl App {
    /// Mirror the clock and phase into the window title, only pushing a
    /// viewport command when the text actually changes.
    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = display::window_title(&self.session.state);
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }

    fn render_timer(&mut self, ctx: &egui::Context) {
        let state = self.session.state;
        let accent = theme::phase_accent(state.phase);
        let clock = display::clock_text(state.remaining_seconds);
        let offset = display::ring_offset(&state, self.circumference);
        let (status, status_color) = self.status_line();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL * 2.0);
                ui.label(
                    egui::RichText::new(status)
                        .size(theme::FONT_STATUS)
                        .color(status_color),
                );
                ui.add_space(theme::SPACING_LG);
                progress_ring(
                    ui,
                    offset,
                    self.circumference,
                    theme::phase_tint(state.phase),
                    accent,
                    &clock,
                );
            });
        });
    }

    fn render_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("controls")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(theme::SPACING_XL),
            )
            .show(ctx, |ui| {
                let running = self.session.state.running;
                let btn = egui::vec2(92.0, 32.0);
                let row_width = btn.x * 3.0 + ui.spacing().item_spacing.x * 2.0;

                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                    let start = theme::button_accent(format!(
                        "{}  Start",
                        egui_phosphor::regular::PLAY
                    ))
                    .min_size(btn);
                    if ui.add_enabled(!running, start).clicked() {
                        self.start();
                    }
                    let pause =
                        theme::button(format!("{}  Pause", egui_phosphor::regular::PAUSE))
                            .min_size(btn);
                    if ui.add_enabled(running, pause).clicked() {
                        self.pause();
                    }
                    let reset = theme::button(format!(
                        "{}  Reset",
                        egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                    ))
                    .min_size(btn);
                    if ui.add(reset).clicked() {
                        self.reset();
                    }
                });

                ui.add_space(theme::SPACING_MD);

                if theme::settings_checkbox(ui, self.play_sound, "Play alarm when the break starts", true)
                {
                    self.play_sound = !self.play_sound;
                    self.save_settings();
                }
                if theme::settings_checkbox(
                    ui,
                    self.session.auto_start_next,
                    "Auto-start the next interval",
                    true,
                ) {
                    self.session.auto_start_next = !self.session.auto_start_next;
                    self.save_settings();
                }
            });
    }
}
