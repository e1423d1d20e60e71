use crate::spirits::SpiritId;
use crate::Game;

impl Game {
    /// Spirit is nested inside player or placed next to player on the same grid.
    pub fn can_inspect(&self, player: SpiritId, spirit: SpiritId) -> bool {
        if self.spirits.has_parent_spirit(spirit, player) {
            return true;
        }
        let player = self.spirits.get_spirit(player).ok().and_then(|p| p.parent_tile);
        let spirit = self.spirits.get_spirit(spirit).ok().and_then(|s| s.parent_tile);
        match (player, spirit) {
            (Some(player), Some(spirit)) => {
                player.grid == spirit.grid && player.pos.is_adjacent_to(spirit.pos)
            }
            _ => false,
        }
    }
}
