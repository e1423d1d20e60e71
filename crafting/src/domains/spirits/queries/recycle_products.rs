use crate::recipes::{merge_components, RecipeComponent};
use crate::spirits::{HasInventory, HasTileGrid, Spirit, SpiritDomain, SpiritError};

impl SpiritDomain {
    /// Base products of the spirit plus everything recovered from its containers.
    pub fn recycle_products(&self, spirit: Spirit) -> Result<Vec<RecipeComponent>, SpiritError> {
        let kind = self.spirit_type(spirit)?;
        let mut products = kind.base_recycle_products().to_vec();
        if let Spirit::Complex(id) = spirit {
            let body = &self.get_spirit(id)?.body;
            if let Some(inventory) = body.inventory() {
                for item in &inventory.items {
                    for product in self.content_yield(item.spirit)? {
                        products.push(product.times(item.count));
                    }
                }
            }
            if let Some(grid) = body.tile_grid() {
                for (_, tile) in grid.tiles() {
                    if tile.is(&grid.fill.kind) {
                        continue;
                    }
                    products.extend(self.content_yield(tile.spirit)?);
                }
            }
        }
        Ok(merge_components(products))
    }

    fn content_yield(&self, spirit: Spirit) -> Result<Vec<RecipeComponent>, SpiritError> {
        let kind = self.spirit_type(spirit)?;
        if kind.is_free_to_craft() {
            return Ok(vec![]);
        }
        if let Spirit::Simple(_) = spirit {
            if kind.base_recycle_products().is_empty() {
                return Ok(vec![RecipeComponent::new(&kind, 1)]);
            }
        }
        self.recycle_products(spirit)
    }
}
