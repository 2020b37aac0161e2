use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use egui_extras::DatePickerButton;

use super::CountdownApp;
use crate::services::countdown::CountdownDraft;

const PREVIEW_WIDTH: f32 = 100.0;

/// Photo chosen in the file dialog but not yet submitted.
struct PickedPhoto {
    file_name: String,
    bytes: Vec<u8>,
    preview: Option<egui::TextureHandle>,
}

/// Field state of the "Add a new countdown" section.
pub(super) struct AddCountdownForm {
    name: String,
    date_of_birth: NaiveDate,
    photo: Option<PickedPhoto>,
    /// Inline feedback from the last submission
    error: Option<String>,
    turning: Option<String>,
}

impl Default for AddCountdownForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            photo: None,
            error: None,
            turning: None,
        }
    }
}

impl CountdownApp {
    pub(super) fn render_add_form(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        egui::CollapsingHeader::new("Add a new countdown")
            .default_open(self.store.is_empty())
            .show(ui, |ui| {
                ui.label("Name");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.name)
                        .desired_width(f32::INFINITY)
                        .hint_text("Whose birthday?"),
                );

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("Date of Birth");
                    let before = self.form.date_of_birth;
                    if ui
                        .add(
                            DatePickerButton::new(&mut self.form.date_of_birth)
                                .id_source("countdown_date_of_birth"),
                        )
                        .changed()
                    {
                        let today = Local::now().date_naive();
                        self.form.date_of_birth = self
                            .form_controller
                            .clamp_birth_date(self.form.date_of_birth, today);
                        log::debug!(
                            "date of birth changed {} -> {}",
                            before,
                            self.form.date_of_birth
                        );
                    }
                });

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Choose photo...").clicked() {
                        self.pick_photo(ui.ctx());
                    }
                    if let Some(photo) = &self.form.photo {
                        ui.label(&photo.file_name);
                    }
                });
                if let Some(texture) = self.form.photo.as_ref().and_then(|p| p.preview.as_ref()) {
                    ui.add(egui::Image::from_texture(texture).max_width(PREVIEW_WIDTH));
                    ui.small("Uploaded icon preview");
                }

                ui.add_space(8.0);
                if ui.button("Add countdown").clicked() {
                    self.submit_form(now);
                }

                if let Some(error) = &self.form.error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
                if let Some(turning) = &self.form.turning {
                    ui.label(egui::RichText::new(turning).strong());
                }
            });
    }

    fn pick_photo(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Choose a photo")
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        else {
            return;
        };

        match std::fs::read(&path) {
            Ok(bytes) => {
                let preview = load_preview(ctx, &bytes);
                if preview.is_none() {
                    log::warn!("No preview available for {}", path.display());
                }
                self.form.photo = Some(PickedPhoto {
                    file_name: display_name(&path),
                    bytes,
                    preview,
                });
            }
            Err(e) => {
                log::error!("Failed to read photo {}: {}", path.display(), e);
                self.toast_manager
                    .error(format!("Could not open {}", display_name(&path)));
            }
        }
    }

    fn submit_form(&mut self, now: NaiveDateTime) {
        let draft = CountdownDraft::new(
            self.form.name.clone(),
            self.form.date_of_birth,
            self.form.photo.as_ref().map(|p| p.bytes.clone()),
        );

        match self.form_controller.submit(&mut self.store, &draft, now) {
            Ok(record) => {
                let turning = format!("Turning {} years old! 🎂", record.age);
                let added = format!("Added countdown for {}", record.name);
                self.form.turning = Some(turning);
                self.form.error = None;
                self.toast_manager.success(added);
                self.refresh_countdown_text(now);
            }
            Err(e) => {
                log::warn!("Rejected countdown submission: {}", e);
                let message = e.user_message();
                self.form.turning = None;
                self.toast_manager.error(message.clone());
                self.form.error = Some(message);
            }
        }
    }
}

fn load_preview(ctx: &egui::Context, bytes: &[u8]) -> Option<egui::TextureHandle> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture("countdown_photo_preview", image, egui::TextureOptions::LINEAR))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
