use crate::inventory::{push_inventory_update, InventoryItem, InventoryUpdate};
use crate::spirits::{Spirit, SpiritDomain, SpiritError, SpiritId};

impl SpiritDomain {
    /// Single entry point of inventory mutation, zero count removes item.
    pub fn set_item_count(
        &mut self,
        owner: SpiritId,
        spirit: Spirit,
        count: u32,
    ) -> Result<InventoryUpdate, SpiritError> {
        let update = InventoryUpdate {
            inventory: owner,
            spirit,
            count,
        };
        let kind = match count {
            0 => None,
            _ => Some(self.spirit_type(spirit)?),
        };
        let inventory = self.get_inventory_mut(owner)?;
        let observers = inventory.observers.clone();
        let attachment = match (inventory.index_item(spirit), kind) {
            (Some(index), None) => {
                inventory.items.remove(index);
                Some(None)
            }
            (Some(index), Some(_)) => {
                inventory.items[index].count = count;
                None
            }
            (None, Some(kind)) => {
                inventory.items.push(InventoryItem {
                    spirit,
                    kind,
                    count,
                });
                Some(Some(owner))
            }
            (None, None) => return Ok(update),
        };
        if let (Spirit::Complex(id), Some(parent)) = (spirit, attachment) {
            let current = self.spirits.get(&id).and_then(|spirit| spirit.parent);
            if parent.is_some() || current == Some(owner) {
                self.change_parent_spirit(id, parent);
            }
        }
        self.mark_as_dirty(owner);
        for observer in observers {
            if let Ok(player) = self.get_player_mut(observer) {
                push_inventory_update(&mut player.inventory_updates, update);
            }
        }
        Ok(update)
    }

    pub fn increment_item_count_by_spirit(
        &mut self,
        owner: SpiritId,
        spirit: Spirit,
    ) -> Result<InventoryUpdate, SpiritError> {
        self.increase_item_count_by_spirit(owner, spirit, 1)
    }

    pub fn increase_item_count_by_spirit(
        &mut self,
        owner: SpiritId,
        spirit: Spirit,
        count: u32,
    ) -> Result<InventoryUpdate, SpiritError> {
        let current = self.get_inventory(owner)?.get_item_count_by_spirit(spirit);
        self.set_item_count(owner, spirit, current.saturating_add(count))
    }

    pub fn decrease_item_count_by_spirit(
        &mut self,
        owner: SpiritId,
        spirit: Spirit,
        count: u32,
    ) -> Result<InventoryUpdate, SpiritError> {
        let current = self.get_inventory(owner)?.get_item_count_by_spirit(spirit);
        self.set_item_count(owner, spirit, current.saturating_sub(count))
    }

    pub fn decrement_item_count_by_spirit(
        &mut self,
        owner: SpiritId,
        spirit: Spirit,
    ) -> Result<InventoryUpdate, SpiritError> {
        self.decrease_item_count_by_spirit(owner, spirit, 1)
    }
}
