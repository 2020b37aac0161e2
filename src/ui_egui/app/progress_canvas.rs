//! Animated progress trail: one translucent bar per countdown with the
//! countdown's icon riding on the leading edge.

use crate::models::countdown::RgbaColor;
use crate::services::countdown::{CanvasLayout, CountdownStore, ProgressPayload};
use crate::services::image::decode_icon;

enum IconSlot {
    Loaded(egui::TextureHandle),
    Failed,
}

/// Icon textures, index-aligned with the store's records.
///
/// Each icon is decoded once, the first time its record is displayed.
#[derive(Default)]
pub(super) struct IconCache {
    slots: Vec<IconSlot>,
}

impl IconCache {
    /// Resolve every record that has no texture yet.
    pub(super) fn sync(&mut self, ctx: &egui::Context, store: &CountdownStore) {
        for (index, record) in store.records().iter().enumerate().skip(self.slots.len()) {
            let slot = match decode_icon(&record.icon_image) {
                Ok(pixels) => {
                    let size = [pixels.width as usize, pixels.height as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels.rgba);
                    IconSlot::Loaded(ctx.load_texture(
                        format!("countdown_icon_{index}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::warn!("Failed to load icon for countdown '{}': {}", record.name, e);
                    IconSlot::Failed
                }
            };
            self.slots.push(slot);
        }
    }

    /// True once every one of the first `count` icons loaded or failed.
    pub(super) fn is_resolved(&self, count: usize) -> bool {
        self.slots.len() >= count
    }

    pub(super) fn get(&self, index: usize) -> Option<&egui::TextureHandle> {
        match self.slots.get(index) {
            Some(IconSlot::Loaded(texture)) => Some(texture),
            _ => None,
        }
    }
}

pub(super) fn rgba_to_color32(color: RgbaColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Paint the canvas for `payload`. Nothing is drawn until all icons are
/// resolved.
pub(super) fn paint_progress_canvas(
    ui: &mut egui::Ui,
    payload: &ProgressPayload,
    icons: &IconCache,
    layout: CanvasLayout,
) {
    let count = payload.countdowns.len();
    let width = ui.available_width();
    let height = layout.canvas_height(count);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    if !icons.is_resolved(count) {
        return;
    }

    let rect = response.rect;
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let half_slot = layout.trail_height / 2.0;
    let icon_size = egui::vec2(layout.icon_radius * 2.0, layout.icon_radius * 2.0);
    for (slot, item) in payload.draw_list().into_iter().enumerate() {
        let center_y = rect.top() + layout.slot_center_y(slot);
        let x = rect.left() + layout.progress_x(item.entry.progress, width);

        let Some(tag) = item.entry.color_tag() else {
            log::debug!(
                "Skipping bar for '{}' with unparseable colour '{}'",
                item.entry.name,
                item.entry.color
            );
            continue;
        };
        let bar_color = tag.to_rgba().with_opacity(layout.bar_alpha);
        let bar = egui::Rect::from_min_max(
            egui::pos2(rect.left(), center_y - half_slot),
            egui::pos2(x, center_y + half_slot),
        );
        painter.rect_filled(bar, 0.0, rgba_to_color32(bar_color));

        if let Some(texture) = icons.get(item.index) {
            let icon_rect = egui::Rect::from_center_size(egui::pos2(x, center_y), icon_size);
            egui::Image::from_texture(texture)
                .rounding(layout.icon_radius)
                .paint_at(ui, icon_rect);
        }
    }

    response.on_hover_ui_at_pointer(|ui| {
        for item in payload.draw_list() {
            ui.label(format!(
                "{}: {:.1}%",
                item.entry.name,
                item.entry.progress * 100.0
            ));
        }
    });
}
