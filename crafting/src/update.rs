use crate::Game;

impl Game {
    /// Accrues mining budget of every online player.
    pub fn update(&mut self, time: f32) {
        let limit = self.settings.max_mine_budget;
        for player in self.spirits.online_players() {
            if let Ok(player) = self.spirits.get_player_mut(player) {
                player.mine_budget = (player.mine_budget + time).min(limit);
            }
        }
    }
}
