use crate::api::{ActionError, ClientCommand};
use crate::math::Pos;
use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    /// World window centered on player, plus inspected circuit grid.
    pub(crate) fn get_tiles(
        &mut self,
        player: SpiritId,
    ) -> Result<Vec<ClientCommand>, ActionError> {
        let address = self.ensure_player_placed(player)?;
        let (width, height) = (self.settings.view_width, self.settings.view_height);
        let corner = address.pos - Pos::new(width / 2, height / 2);
        let tile_grid = self
            .spirits
            .window_client_json(address.grid, corner, width, height)?;
        let mut commands = vec![ClientCommand::SetWorldTileGrid { tile_grid }];
        self.verify_inspection_state(player)?;
        if let Some(circuit) = self.spirits.get_player(player)?.inspected_circuit {
            commands.push(ClientCommand::SetCircuitTileGrid {
                spirit_id: circuit,
                tile_grid: self.spirits.grid_client_json(circuit)?,
            });
        }
        Ok(commands)
    }
}
