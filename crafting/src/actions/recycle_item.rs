use crate::api::ActionError;
use crate::spirits::{Spirit, SpiritId, SpiritReference};
use crate::Game;

impl Game {
    pub(crate) fn recycle_item(
        &mut self,
        player: SpiritId,
        reference: SpiritReference,
    ) -> Result<(), ActionError> {
        let spirit = self.ensure_spirit_exists(reference)?;
        self.ensure_item_owned(player, spirit)?;
        let kind = self.spirits.spirit_type(spirit)?;
        if kind.base_recycle_products().is_empty() {
            return Err(ActionError::NotRecyclable {
                kind: kind.name.clone(),
            });
        }
        let products = self.spirits.recycle_products(spirit)?;
        self.spirits.decrement_item_count_by_spirit(player, spirit)?;
        if let Spirit::Complex(id) = spirit {
            self.spirits.destroy_spirit(id);
        }
        for product in &products {
            self.spirits.add_recipe_component(player, product)?;
        }
        self.verify_inspection_state(player)?;
        Ok(())
    }
}
