use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    /// Free tiles vanish, others go into player inventory.
    pub(crate) fn mine_circuit_tile(
        &mut self,
        player: SpiritId,
        pos: Pos,
    ) -> Result<(), ActionError> {
        let circuit = self.ensure_inspected_circuit(player)?;
        let grid = self.spirits.get_grid(circuit)?;
        if !grid.contains(pos) || grid.is_fill(pos) {
            return Err(ActionError::TileNotMineable { pos });
        }
        let tile = grid.get_tile(pos).clone();
        let fill = grid.fill.clone();
        self.spirits.set_tile(circuit, pos, fill)?;
        if !tile.kind.is_free_to_craft() {
            self.spirits
                .increment_item_count_by_spirit(player, tile.spirit)?;
        }
        Ok(())
    }

    pub(crate) fn ensure_inspected_circuit(
        &mut self,
        player: SpiritId,
    ) -> Result<SpiritId, ActionError> {
        self.verify_inspection_state(player)?;
        self.spirits
            .get_player(player)?
            .inspected_circuit
            .ok_or(ActionError::NotInspectingCircuit)
    }
}
