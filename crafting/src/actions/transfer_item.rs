use crate::api::ActionError;
use crate::spirits::{Spirit, SpiritId, SpiritReference};
use crate::Game;

impl Game {
    /// Player moves items between own inventory and inspected machine.
    pub(crate) fn transfer_item(
        &mut self,
        player: SpiritId,
        source: SpiritId,
        destination: SpiritId,
        reference: SpiritReference,
        count: u32,
    ) -> Result<(), ActionError> {
        self.verify_inspection_state(player)?;
        self.ensure_inventory_accessible(player, source)?;
        self.ensure_inventory_accessible(player, destination)?;
        let spirit = self.ensure_spirit_exists(reference)?;
        let count = match spirit {
            Spirit::Complex(_) => 1,
            Spirit::Simple(_) => count,
        };
        let transfer = self
            .spirits
            .transfer_item(source, destination, spirit, count)?;
        transfer()?;
        self.verify_inspection_state(player)?;
        Ok(())
    }

    fn ensure_inventory_accessible(
        &self,
        player: SpiritId,
        inventory: SpiritId,
    ) -> Result<(), ActionError> {
        let state = self.spirits.get_player(player)?;
        if inventory == player || state.inspected_machine == Some(inventory) {
            Ok(())
        } else {
            Err(ActionError::InventoryNotAccessible { id: inventory })
        }
    }
}
