use crate::models::countdown::CountdownRecord;

/// In-memory countdowns for the current session plus the user's selection.
///
/// Records keep insertion order and are never removed, so a record's index
/// doubles as its identity for the lifetime of the session.
#[derive(Debug, Default, Clone)]
pub struct CountdownStore {
    records: Vec<CountdownRecord>,
    selected_index: usize,
}

impl CountdownStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CountdownRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record without touching the selection.
    pub fn push(&mut self, record: CountdownRecord) -> &CountdownRecord {
        self.records.push(record);
        let index = self.records.len() - 1;
        &self.records[index]
    }

    /// Index of the selected record, `None` while the store is empty.
    /// A stale index falls back to the first record.
    pub fn selected_index(&self) -> Option<usize> {
        if self.records.is_empty() {
            None
        } else if self.selected_index < self.records.len() {
            Some(self.selected_index)
        } else {
            Some(0)
        }
    }

    pub fn selected(&self) -> Option<&CountdownRecord> {
        self.selected_index().map(|index| &self.records[index])
    }

    /// Select the first record called `name`. Unknown names are ignored.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.records.iter().position(|record| record.name == name) {
            Some(index) => {
                if index != self.selected_index {
                    log::debug!("selected countdown '{}' at index {}", name, index);
                }
                self.selected_index = index;
                true
            }
            None => {
                log::warn!("ignoring selection of unknown countdown '{}'", name);
                false
            }
        }
    }

    /// Select by position. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    /// Record indices in paint order: the selected record first, then the
    /// rest in insertion order.
    pub fn draw_order(&self) -> Vec<usize> {
        let Some(selected) = self.selected_index() else {
            return Vec::new();
        };
        std::iter::once(selected)
            .chain((0..self.records.len()).filter(|&index| index != selected))
            .collect()
    }
}
