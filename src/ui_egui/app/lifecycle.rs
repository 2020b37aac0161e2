use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use super::celebration::ConfettiLayer;
use super::form::AddCountdownForm;
use super::progress_canvas::IconCache;
use super::toast::ToastManager;
use super::CountdownApp;
use crate::models::settings::{Settings, ThemePreference};
use crate::services::countdown::{CanvasLayout, CelebrationTrigger, CountdownStore, FormController};
use crate::utils::date::local_now;
use crate::utils::tick::IntervalTicker;

const SLOW_TICK: Duration = Duration::from_secs(1);

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        log::info!(
            "Starting with icon_size={}, hue_step={}, celebration={:?}",
            settings.icon_size,
            settings.hue_step,
            settings.celebration.mode
        );

        let is_dark_theme = resolve_dark_theme(settings.theme);
        cc.egui_ctx.set_visuals(if is_dark_theme {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            store: CountdownStore::new(),
            form_controller: FormController::from_settings(&settings),
            form: AddCountdownForm::default(),
            slow_tick: IntervalTicker::new(SLOW_TICK),
            countdown_text: None,
            layout: CanvasLayout::from(&settings.canvas),
            icons: IconCache::default(),
            celebration: CelebrationTrigger::new(settings.celebration.mode),
            confetti: ConfettiLayer::new(&settings.celebration),
            toast_manager: ToastManager::new(),
            is_dark_theme,
            settings,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = local_now();
        if self.slow_tick.poll(Instant::now()) {
            self.on_slow_tick(now);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.heading("🎉 Birthday Countdown");
                    ui.add_space(8.0);
                    self.render_add_form(ui, now);
                    ui.separator();
                    self.render_countdowns(ui, now);
                });
        });

        let frame_time = Instant::now();
        self.confetti.paint(ctx, frame_time);
        self.toast_manager.render(ctx, self.is_dark_theme);

        if self.store.is_empty() {
            ctx.request_repaint_after(self.slow_tick.time_until_next(frame_time));
        } else {
            // Keep the progress trail animating every frame.
            ctx.request_repaint();
        }
    }

    fn on_slow_tick(&mut self, now: NaiveDateTime) {
        self.refresh_countdown_text(now);
        if self.celebration.check(&self.store, now) {
            log::info!(
                "Countdown complete, celebrating ({:?} mode, {} particles)",
                self.celebration.mode(),
                self.settings.celebration.particle_count
            );
            self.confetti.fire(Instant::now());
        }
    }
}

fn resolve_dark_theme(preference: ThemePreference) -> bool {
    match preference {
        ThemePreference::Dark => true,
        ThemePreference::Light => false,
        ThemePreference::System => matches!(dark_light::detect(), dark_light::Mode::Dark),
    }
}
