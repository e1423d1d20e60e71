use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    /// Mined tile goes into player inventory, complex spirits included.
    pub(crate) fn mine_tile(&mut self, player: SpiritId, pos: Pos) -> Result<(), ActionError> {
        let address = self.ensure_player_placed(player)?;
        self.ensure_target_reachable(address.pos, pos)?;
        let grid = self.spirits.get_grid(address.grid)?;
        let tile = grid.get_tile(pos).clone();
        let fill = grid.fill.clone();
        let mine_time = tile
            .kind
            .mine_time
            .ok_or(ActionError::TileNotMineable { pos })?;
        let state = self.spirits.get_player_mut(player)?;
        if state.mine_budget < mine_time {
            return Err(ActionError::MineBudgetExceeded {
                required: mine_time,
                budget: state.mine_budget,
            });
        }
        state.mine_budget -= mine_time;
        self.spirits.set_tile(address.grid, pos, fill)?;
        self.spirits
            .increment_item_count_by_spirit(player, tile.spirit)?;
        self.verify_inspection_state(player)?;
        Ok(())
    }
}
