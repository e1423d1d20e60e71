use crate::api::ActionError;
use crate::recipes::RecipeKey;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    pub(crate) fn craft_recipe(
        &mut self,
        player: SpiritId,
        recipe: RecipeKey,
    ) -> Result<(), ActionError> {
        let recipe = self
            .known
            .get_recipe(recipe)
            .map_err(|_| ActionError::RecipeNotFound { id: recipe })?;
        let craft = self.spirits.craft_recipe(player, recipe)?;
        craft()?;
        Ok(())
    }
}
