use crate::spirits::{SpiritDomain, SpiritId};
use log::debug;

impl SpiritDomain {
    /// Caller detaches spirit from its container first.
    pub fn destroy_spirit(&mut self, id: SpiritId) {
        let mut spirit = match self.spirits.remove(&id) {
            Some(spirit) => spirit,
            None => return,
        };
        debug!("Destroy {} spirit {:?}", spirit.body.class().class_id(), id);
        spirit.destroyed = true;
        let children = spirit.body.children();
        self.destroyed.insert(id, spirit);
        self.mark_as_dirty(id);
        for child in children {
            self.destroy_spirit(child);
        }
    }
}
