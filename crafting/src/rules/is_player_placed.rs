use crate::api::ActionError;
use crate::spirits::SpiritId;
use crate::tiles::TileAddress;
use crate::Game;

impl Game {
    /// Tile address of player inside the world grid.
    pub fn ensure_player_placed(&self, player: SpiritId) -> Result<TileAddress, ActionError> {
        let world = self.spirits.world()?;
        match self.spirits.get_spirit(player)?.parent_tile {
            Some(address) if address.grid == world => Ok(address),
            _ => Err(ActionError::PlayerNotPlaced { player }),
        }
    }
}
