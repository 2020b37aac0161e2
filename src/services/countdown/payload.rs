//! Per-frame draw plan for the progress canvas.
//!
//! The canvas never reads the store directly; it is driven by a
//! [`ProgressPayload`] rebuilt from the store on every frame. The payload
//! serialises to the same JSON shape an embedded web canvas would consume.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::store::CountdownStore;
use super::time_math::{remaining, year_progress, Remaining};
use crate::models::countdown::HslColor;
use crate::models::settings::CanvasSettings;
use crate::services::image::data_url;

/// One progress bar on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub name: String,
    /// Year progress in [0, 1]
    pub progress: f64,
    /// CSS colour of the bar
    pub color: String,
    /// Icon as a `data:` URL
    pub img: String,
}

impl ProgressEntry {
    /// Bar colour parsed back from [`color`](Self::color).
    pub fn color_tag(&self) -> Option<HslColor> {
        HslColor::from_css_str(&self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub selected_index: usize,
    pub countdowns: Vec<ProgressEntry>,
}

/// An entry scheduled for painting, with its position in the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem<'a> {
    pub index: usize,
    pub entry: &'a ProgressEntry,
}

impl ProgressPayload {
    /// Snapshot of `store` at `now`; `None` when there is nothing to draw.
    pub fn from_store(store: &CountdownStore, now: NaiveDateTime) -> Option<Self> {
        let selected_index = store.selected_index()?;
        let countdowns = store
            .records()
            .iter()
            .map(|record| ProgressEntry {
                name: record.name.clone(),
                progress: year_progress(record.target_instant, now),
                color: record.color_tag.to_css(),
                img: data_url(&record.icon_image),
            })
            .collect();

        Some(Self {
            selected_index,
            countdowns,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn selected(&self) -> Option<&ProgressEntry> {
        self.countdowns.get(self.selected_index)
    }

    /// Entries in paint order: selected first, the rest in insertion order.
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        let selected = self.selected_index;
        let first = self
            .countdowns
            .get(selected)
            .map(|entry| DrawItem { index: selected, entry });
        let rest = self
            .countdowns
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != selected)
            .map(|(index, entry)| DrawItem { index, entry });
        first.into_iter().chain(rest).collect()
    }
}

/// What the canvas shows on a given frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// No countdowns yet; only the empty-state notice is shown
    Empty,
    Populated(ProgressPayload),
}

impl RenderState {
    pub fn from_store(store: &CountdownStore, now: NaiveDateTime) -> Self {
        match ProgressPayload::from_store(store, now) {
            Some(payload) => RenderState::Populated(payload),
            None => RenderState::Empty,
        }
    }
}

/// Headline and countdown text for the selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownText {
    pub headline: String,
    pub remaining: Remaining,
}

impl CountdownText {
    pub fn for_selected(store: &CountdownStore, now: NaiveDateTime) -> Option<Self> {
        let record = store.selected()?;
        Some(Self {
            headline: record.headline(),
            remaining: remaining(record.target_instant, now),
        })
    }
}

/// Slot geometry of the progress canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub trail_height: f32,
    pub icon_radius: f32,
    pub bar_alpha: f32,
}

impl From<&CanvasSettings> for CanvasLayout {
    fn from(settings: &CanvasSettings) -> Self {
        Self {
            trail_height: settings.trail_height,
            icon_radius: settings.icon_radius,
            bar_alpha: settings.bar_alpha,
        }
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::from(&CanvasSettings::default())
    }
}

impl CanvasLayout {
    /// Vertical centre of draw slot `slot`.
    pub fn slot_center_y(&self, slot: usize) -> f32 {
        self.trail_height * (slot as f32 + 1.0) - self.trail_height / 2.0
    }

    /// Height that fits `count` bars plus one slot of headroom.
    pub fn canvas_height(&self, count: usize) -> f32 {
        self.trail_height * (count as f32 + 1.0)
    }

    /// Horizontal position of a bar's leading edge and icon centre.
    pub fn progress_x(&self, progress: f64, width: f32) -> f32 {
        width * progress.clamp(0.0, 1.0) as f32
    }
}
