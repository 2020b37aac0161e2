mod celebration;
mod countdown_view;
mod form;
mod lifecycle;
mod progress_canvas;
mod toast;

use self::celebration::ConfettiLayer;
use self::form::AddCountdownForm;
use self::progress_canvas::IconCache;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::countdown::{
    CanvasLayout, CelebrationTrigger, CountdownStore, CountdownText, FormController,
};
use crate::utils::tick::IntervalTicker;

/// Session state of the widget. Everything lives here for as long as the
/// window is open and is dropped with it.
pub struct CountdownApp {
    settings: Settings,
    store: CountdownStore,
    form_controller: FormController,
    form: AddCountdownForm,
    /// Drives the countdown text and celebration checks
    slow_tick: IntervalTicker,
    countdown_text: Option<CountdownText>,
    layout: CanvasLayout,
    icons: IconCache,
    celebration: CelebrationTrigger,
    confetti: ConfettiLayer,
    toast_manager: ToastManager,
    is_dark_theme: bool,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
