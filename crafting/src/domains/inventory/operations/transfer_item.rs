use crate::inventory::{InventoryError, InventoryUpdate};
use crate::spirits::{Identifiable, Spirit, SpiritDomain, SpiritId};

impl SpiritDomain {
    pub fn transfer_item<'operation>(
        &'operation mut self,
        source: SpiritId,
        destination: SpiritId,
        spirit: Spirit,
        count: u32,
    ) -> Result<
        impl FnOnce() -> Result<Vec<InventoryUpdate>, InventoryError> + 'operation,
        InventoryError,
    > {
        let available = self.get_inventory(source)?.get_item_count_by_spirit(spirit);
        if available == 0 {
            return Err(InventoryError::ItemNotFound {
                inventory: source,
                spirit: spirit.reference(),
            });
        }
        if count == 0 || available < count {
            return Err(InventoryError::InsufficientCount {
                inventory: source,
                spirit: spirit.reference(),
                required: count,
                available,
            });
        }
        self.get_inventory(destination)?;
        if let Spirit::Complex(id) = spirit {
            if self.container_has_parent_spirit(destination, id) {
                return Err(InventoryError::PocketUniverse {
                    spirit: id,
                    destination,
                });
            }
        }
        let operation = move || -> Result<Vec<InventoryUpdate>, InventoryError> {
            let removal = self.decrease_item_count_by_spirit(source, spirit, count)?;
            let addition = self.increase_item_count_by_spirit(destination, spirit, count)?;
            Ok(vec![removal, addition])
        };
        Ok(operation)
    }
}
