use crate::api::ActionError;
use crate::math::Pos;
use crate::Game;

impl Game {
    pub fn ensure_target_reachable(&self, source: Pos, target: Pos) -> Result<(), ActionError> {
        if source != target && source.is_adjacent_to(target) {
            Ok(())
        } else {
            Err(ActionError::TargetUnreachable { pos: target })
        }
    }
}
