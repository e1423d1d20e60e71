use crate::collections::Shared;
use crate::inventory::{InventoryError, InventoryUpdate};
use crate::recipes::{Recipe, RecipeComponent};
use crate::spirits::{Complexity, Spirit, SpiritDomain, SpiritError, SpiritId};

impl SpiritDomain {
    pub fn craft_recipe<'operation>(
        &'operation mut self,
        owner: SpiritId,
        recipe: Shared<Recipe>,
    ) -> Result<
        impl FnOnce() -> Result<Vec<InventoryUpdate>, InventoryError> + 'operation,
        InventoryError,
    > {
        let inventory = self.get_inventory(owner)?;
        if !inventory.can_craft_recipe(&recipe) {
            return Err(InventoryError::RecipeUnaffordable {
                inventory: owner,
                recipe: recipe.id,
            });
        }
        if !recipe.product.spirit_type.is_craftable() {
            return Err(SpiritError::NotCraftable {
                kind: recipe.product.spirit_type.name.clone(),
            }
            .into());
        }
        let operation = move || -> Result<Vec<InventoryUpdate>, InventoryError> {
            let mut updates = vec![];
            for ingredient in &recipe.ingredients {
                updates.extend(self.remove_recipe_component(owner, ingredient)?);
            }
            updates.extend(self.add_recipe_component(owner, &recipe.product)?);
            Ok(updates)
        };
        Ok(operation)
    }

    /// Simple products are added in one step, complex ones instance by instance.
    pub fn add_recipe_component(
        &mut self,
        owner: SpiritId,
        component: &RecipeComponent,
    ) -> Result<Vec<InventoryUpdate>, SpiritError> {
        match component.spirit_type.complexity {
            Complexity::Simple(serial_integer) => {
                let update = self.increase_item_count_by_spirit(
                    owner,
                    Spirit::Simple(serial_integer),
                    component.count,
                )?;
                Ok(vec![update])
            }
            Complexity::Complex(_) => {
                let mut updates = vec![];
                for _ in 0..component.count {
                    let spirit = self.craft(&component.spirit_type)?;
                    updates.push(self.increment_item_count_by_spirit(owner, spirit)?);
                }
                Ok(updates)
            }
        }
    }

    /// Takes matching items oldest first, consumed complex spirits are destroyed.
    pub fn remove_recipe_component(
        &mut self,
        owner: SpiritId,
        component: &RecipeComponent,
    ) -> Result<Vec<InventoryUpdate>, SpiritError> {
        let candidates: Vec<(Spirit, u32)> = self
            .get_inventory(owner)?
            .items
            .iter()
            .filter(|item| item.kind.is(&component.spirit_type))
            .map(|item| (item.spirit, item.count))
            .collect();
        let mut remaining = component.count;
        let mut updates = vec![];
        for (spirit, count) in candidates {
            if remaining == 0 {
                break;
            }
            let taken = count.min(remaining);
            remaining -= taken;
            updates.push(self.decrease_item_count_by_spirit(owner, spirit, taken)?);
            if let Spirit::Complex(id) = spirit {
                self.destroy_spirit(id);
            }
        }
        Ok(updates)
    }
}
