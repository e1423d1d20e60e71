use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    pub(crate) fn walk_player(
        &mut self,
        player: SpiritId,
        offset: Pos,
    ) -> Result<(), ActionError> {
        let address = self.ensure_player_placed(player)?;
        let destination = address
            .pos
            .checked_add(offset)
            .ok_or(ActionError::TargetUnreachable { pos: offset })?;
        self.ensure_target_reachable(address.pos, destination)?;
        self.ensure_tile_empty(address.grid, destination)?;
        self.spirits
            .swap_tiles(address.grid, address.pos, destination)?;
        self.verify_inspection_state(player)?;
        Ok(())
    }
}
