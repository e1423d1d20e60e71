use crate::api::ActionError;
use crate::inventory::{push_inventory_update, InventoryUpdate};
use crate::spirits::{ComplexClass, Identifiable, InspectionNotice, SpiritId};
use crate::Game;
use log::debug;

impl Game {
    /// Replaces previous target of the same category.
    pub fn inspect(&mut self, player: SpiritId, spirit: SpiritId) -> Result<(), ActionError> {
        let target = self.spirits.get_spirit(spirit)?;
        if !target.kind.can_be_inspected() {
            return Err(ActionError::NotInspectable {
                reference: target.reference(),
            });
        }
        let class = target.class();
        if !self.can_inspect(player, spirit) {
            return Err(ActionError::InspectionOutOfRange { spirit });
        }
        let previous = {
            let state = self.spirits.get_player(player)?;
            match class {
                ComplexClass::Machine => state.inspected_machine,
                _ => state.inspected_circuit,
            }
        };
        if previous == Some(spirit) {
            return Ok(());
        }
        if let Some(previous) = previous {
            self.stop_inspecting(player, previous)?;
        }
        let items: Vec<InventoryUpdate> = match class {
            ComplexClass::Machine => {
                let inventory = self.spirits.get_inventory_mut(spirit)?;
                inventory.add_observer(player);
                inventory
                    .items
                    .iter()
                    .map(|item| InventoryUpdate {
                        inventory: spirit,
                        spirit: item.spirit,
                        count: item.count,
                    })
                    .collect()
            }
            _ => vec![],
        };
        let state = self.spirits.get_player_mut(player)?;
        match class {
            ComplexClass::Machine => state.inspected_machine = Some(spirit),
            _ => state.inspected_circuit = Some(spirit),
        }
        state.notices.push(InspectionNotice::Started(spirit));
        for update in items {
            push_inventory_update(&mut state.inventory_updates, update);
        }
        debug!("Player {:?} starts inspecting {:?}", player, spirit);
        Ok(())
    }

    pub fn stop_inspecting(
        &mut self,
        player: SpiritId,
        spirit: SpiritId,
    ) -> Result<(), ActionError> {
        let state = self.spirits.get_player_mut(player)?;
        let mut stopped = false;
        if state.inspected_machine == Some(spirit) {
            state.inspected_machine = None;
            stopped = true;
        }
        if state.inspected_circuit == Some(spirit) {
            state.inspected_circuit = None;
            stopped = true;
        }
        if !stopped {
            return Ok(());
        }
        state.notices.push(InspectionNotice::Stopped(spirit));
        if let Ok(inventory) = self.spirits.get_inventory_mut(spirit) {
            inventory.remove_observer(player);
        }
        debug!("Player {:?} stops inspecting {:?}", player, spirit);
        Ok(())
    }

    /// Drops targets which are destroyed or no longer within reach.
    pub fn verify_inspection_state(&mut self, player: SpiritId) -> Result<(), ActionError> {
        let state = self.spirits.get_player(player)?;
        let targets: Vec<SpiritId> = [state.inspected_machine, state.inspected_circuit]
            .into_iter()
            .flatten()
            .collect();
        for target in targets {
            let valid = self.spirits.get_spirit(target).is_ok() && self.can_inspect(player, target);
            if !valid {
                self.stop_inspecting(player, target)?;
            }
        }
        Ok(())
    }
}
