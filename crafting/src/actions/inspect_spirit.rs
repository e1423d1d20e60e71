use crate::api::ActionError;
use crate::spirits::{Spirit, SpiritId, SpiritReference};
use crate::Game;

impl Game {
    pub(crate) fn inspect_spirit(
        &mut self,
        player: SpiritId,
        reference: SpiritReference,
    ) -> Result<(), ActionError> {
        self.verify_inspection_state(player)?;
        match self.ensure_spirit_exists(reference)? {
            Spirit::Complex(id) => self.inspect(player, id),
            Spirit::Simple(_) => Err(ActionError::NotInspectable { reference }),
        }
    }
}
