use crate::spirits::{SpiritDomain, SpiritId};

impl SpiritDomain {
    /// Marks spirit and every ancestor up to the nearest one with storage row.
    pub fn mark_as_dirty(&mut self, id: SpiritId) {
        let mut current = Some(id);
        while let Some(id) = current {
            self.dirty.insert(id);
            current = match self.spirits.get(&id).or_else(|| self.destroyed.get(&id)) {
                Some(spirit) if !spirit.has_db_row => spirit.parent,
                _ => None,
            };
        }
    }
}
