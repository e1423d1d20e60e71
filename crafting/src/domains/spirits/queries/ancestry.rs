use crate::spirits::{SpiritDomain, SpiritId};

impl SpiritDomain {
    /// Walks parent pointers of spirit looking for ancestor.
    pub fn has_parent_spirit(&self, id: SpiritId, ancestor: SpiritId) -> bool {
        let mut current = self.spirits.get(&id).and_then(|spirit| spirit.parent);
        let mut steps = self.spirits.len();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            if steps == 0 {
                break;
            }
            steps -= 1;
            current = self.spirits.get(&parent).and_then(|spirit| spirit.parent);
        }
        false
    }

    /// Container owner is the spirit itself or nested inside it.
    pub fn container_has_parent_spirit(&self, owner: SpiritId, spirit: SpiritId) -> bool {
        owner == spirit || self.has_parent_spirit(owner, spirit)
    }
}
