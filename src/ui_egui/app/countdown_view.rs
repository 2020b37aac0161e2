use chrono::NaiveDateTime;

use super::progress_canvas::paint_progress_canvas;
use super::CountdownApp;
use crate::services::countdown::{CountdownText, ProgressPayload, RenderState};

const HEADLINE_SIZE: f32 = 32.0;
const COUNTDOWN_SIZE: f32 = 48.0;

impl CountdownApp {
    /// Recompute the text for the selected countdown.
    pub(super) fn refresh_countdown_text(&mut self, now: NaiveDateTime) {
        self.countdown_text = CountdownText::for_selected(&self.store, now);
    }

    pub(super) fn render_countdowns(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        let payload = match RenderState::from_store(&self.store, now) {
            RenderState::Empty => {
                ui.add_space(12.0);
                ui.label("Add a countdown to get started!");
                return;
            }
            RenderState::Populated(payload) => payload,
        };

        self.render_selector(ui, now);
        self.render_countdown_text(ui);
        self.render_canvas(ui, &payload);
    }

    fn render_selector(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        let selected_index = self.store.selected_index();
        let selected_text = self
            .store
            .selected()
            .map(|record| record.name.clone())
            .unwrap_or_default();

        let mut chosen: Option<String> = None;
        egui::ComboBox::from_label("Select countdown to view")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (index, name) in self.store.names().enumerate() {
                    if ui
                        .selectable_label(selected_index == Some(index), name)
                        .clicked()
                    {
                        chosen = Some(name.to_owned());
                    }
                }
            });

        if let Some(name) = chosen {
            if self.store.select_by_name(&name) {
                self.refresh_countdown_text(now);
            }
        }
    }

    fn render_countdown_text(&self, ui: &mut egui::Ui) {
        let Some(text) = &self.countdown_text else {
            return;
        };
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                egui::RichText::new(&text.headline)
                    .size(HEADLINE_SIZE)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(text.remaining.to_string())
                    .size(COUNTDOWN_SIZE)
                    .strong(),
            );
            ui.add_space(32.0);
        });
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui, payload: &ProgressPayload) {
        self.icons.sync(ui.ctx(), &self.store);
        paint_progress_canvas(ui, payload, &self.icons, self.layout);
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = payload.to_json() {
                log::trace!("progress payload: {}", json);
            }
        }
    }
}
