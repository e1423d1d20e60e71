use crate::collections::Shared;
use crate::recipes::{Recipe, RecipeComponent, RecipeKey};
use crate::spirits::{Spirit, SpiritError, SpiritId, SpiritReference, SpiritType};

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub spirit: Spirit,
    pub kind: Shared<SpiritType>,
    pub count: u32,
}

pub struct Inventory {
    pub parent: SpiritId,
    pub items: Vec<InventoryItem>,
    pub observers: Vec<SpiritId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryUpdate {
    pub inventory: SpiritId,
    pub spirit: Spirit,
    pub count: u32,
}

impl Inventory {
    pub fn new(parent: SpiritId) -> Self {
        Self {
            parent,
            items: vec![],
            observers: vec![],
        }
    }

    pub fn find_item(&self, spirit: Spirit) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.spirit == spirit)
    }

    pub fn index_item(&self, spirit: Spirit) -> Option<usize> {
        self.items.iter().position(|item| item.spirit == spirit)
    }

    pub fn get_item_count_by_spirit(&self, spirit: Spirit) -> u32 {
        self.find_item(spirit).map(|item| item.count).unwrap_or(0)
    }

    pub fn count_by_type(&self, kind: &SpiritType) -> u32 {
        self.items
            .iter()
            .filter(|item| item.kind.is(kind))
            .map(|item| item.count)
            .sum()
    }

    pub fn has_recipe_component(&self, component: &RecipeComponent) -> bool {
        self.count_by_type(&component.spirit_type) >= component.count
    }

    pub fn can_craft_recipe(&self, recipe: &Recipe) -> bool {
        recipe
            .ingredients
            .iter()
            .all(|ingredient| self.has_recipe_component(ingredient))
    }

    pub fn add_observer(&mut self, player: SpiritId) {
        if !self.observers.contains(&player) {
            self.observers.push(player);
        }
    }

    pub fn remove_observer(&mut self, player: SpiritId) {
        self.observers.retain(|observer| *observer != player);
    }
}

/// Pending updates keep only the latest count per inventory and spirit.
pub fn push_inventory_update(queue: &mut Vec<InventoryUpdate>, update: InventoryUpdate) {
    queue.retain(|pending| {
        pending.inventory != update.inventory || pending.spirit != update.spirit
    });
    queue.push(update);
}

#[derive(Debug)]
pub enum InventoryError {
    ItemNotFound {
        inventory: SpiritId,
        spirit: SpiritReference,
    },
    InsufficientCount {
        inventory: SpiritId,
        spirit: SpiritReference,
        required: u32,
        available: u32,
    },
    RecipeUnaffordable {
        inventory: SpiritId,
        recipe: RecipeKey,
    },
    PocketUniverse {
        spirit: SpiritId,
        destination: SpiritId,
    },
    Spirit(SpiritError),
}

impl From<SpiritError> for InventoryError {
    fn from(error: SpiritError) -> Self {
        Self::Spirit(error)
    }
}
