use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::{ComplexClass, SpiritId, SpiritReference};
use crate::tiles::Tile;
use crate::Game;

impl Game {
    pub(crate) fn place_world_tile(
        &mut self,
        player: SpiritId,
        pos: Pos,
        reference: SpiritReference,
    ) -> Result<(), ActionError> {
        let address = self.ensure_player_placed(player)?;
        let spirit = self.ensure_spirit_exists(reference)?;
        self.ensure_item_owned(player, spirit)?;
        let kind = self.spirits.spirit_type(spirit)?;
        let placeable = match kind.complex_class() {
            Some(ComplexClass::World | ComplexClass::Player) => false,
            Some(_) => true,
            None => !kind.is(&self.known.empty) && !kind.is_free_to_craft(),
        };
        if !placeable {
            return Err(ActionError::NotPlaceable {
                kind: kind.name.clone(),
            });
        }
        self.ensure_target_reachable(address.pos, pos)?;
        self.ensure_tile_empty(address.grid, pos)?;
        self.spirits.decrement_item_count_by_spirit(player, spirit)?;
        self.spirits
            .set_tile(address.grid, pos, Tile::new(spirit, kind))?;
        self.verify_inspection_state(player)?;
        Ok(())
    }
}
