use crate::spirits::{SpiritDomain, SpiritId};

impl SpiritDomain {
    /// First mark walks the old ancestor chain, second one the new chain.
    pub fn change_parent_spirit(&mut self, id: SpiritId, parent: Option<SpiritId>) {
        self.mark_as_dirty(id);
        if let Some(spirit) = self.spirits.get_mut(&id) {
            spirit.parent = parent;
        }
        self.mark_as_dirty(id);
    }
}
