use std::collections::HashSet;

use chrono::NaiveDateTime;

use super::store::CountdownStore;
use super::time_math::year_progress;
use crate::models::settings::CelebrationMode;

/// Decides on each slow tick whether the confetti burst should fire.
#[derive(Debug, Clone, Default)]
pub struct CelebrationTrigger {
    mode: CelebrationMode,
    /// Record indices that already celebrated, only tracked in `Once` mode
    celebrated: HashSet<usize>,
}

impl CelebrationTrigger {
    pub fn new(mode: CelebrationMode) -> Self {
        Self {
            mode,
            celebrated: HashSet::new(),
        }
    }

    pub fn mode(&self) -> CelebrationMode {
        self.mode
    }

    /// True when the selected countdown is complete and a burst is due.
    pub fn check(&mut self, store: &CountdownStore, now: NaiveDateTime) -> bool {
        let (Some(index), Some(record)) = (store.selected_index(), store.selected()) else {
            return false;
        };
        if year_progress(record.target_instant, now) < 1.0 {
            return false;
        }

        match self.mode {
            CelebrationMode::EveryTick => true,
            CelebrationMode::Once => self.celebrated.insert(index),
        }
    }
}
