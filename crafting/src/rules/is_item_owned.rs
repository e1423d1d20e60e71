use crate::api::ActionError;
use crate::spirits::{Identifiable, Spirit, SpiritId, SpiritReference};
use crate::Game;

impl Game {
    pub fn ensure_spirit_exists(&self, reference: SpiritReference) -> Result<Spirit, ActionError> {
        self.spirits
            .find_spirit(reference)
            .ok_or(ActionError::SpiritNotFound { reference })
    }

    pub fn ensure_item_owned(&self, owner: SpiritId, spirit: Spirit) -> Result<u32, ActionError> {
        let count = self.spirits.get_inventory(owner)?.get_item_count_by_spirit(spirit);
        if count > 0 {
            Ok(count)
        } else {
            Err(ActionError::ItemNotFound {
                reference: spirit.reference(),
            })
        }
    }
}
