use crate::api::ActionError;
use crate::math::Pos;
use crate::spirits::{ComplexClass, Spirit, SpiritId, SpiritReference};
use crate::tiles::Tile;
use crate::Game;

impl Game {
    /// Free kinds are crafted in place, others leave player inventory.
    pub(crate) fn place_circuit_tile(
        &mut self,
        player: SpiritId,
        pos: Pos,
        reference: SpiritReference,
    ) -> Result<(), ActionError> {
        let circuit = self.ensure_inspected_circuit(player)?;
        let spirit = self.ensure_spirit_exists(reference)?;
        let kind = self.spirits.spirit_type(spirit)?;
        let placeable = match kind.complex_class() {
            Some(ComplexClass::World | ComplexClass::Player) => false,
            Some(_) => true,
            None => !kind.is(&self.known.empty),
        };
        if !placeable {
            return Err(ActionError::NotPlaceable {
                kind: kind.name.clone(),
            });
        }
        self.ensure_tile_empty(circuit, pos)?;
        if let Spirit::Complex(id) = spirit {
            if self.spirits.container_has_parent_spirit(circuit, id) {
                return Err(ActionError::PocketUniverse {
                    spirit: id,
                    container: circuit,
                });
            }
        }
        if !kind.is_free_to_craft() {
            self.ensure_item_owned(player, spirit)?;
            self.spirits.decrement_item_count_by_spirit(player, spirit)?;
        }
        self.spirits.set_tile(circuit, pos, Tile::new(spirit, kind))?;
        Ok(())
    }
}
