use crate::api::{ActionError, ClientCommand};
use crate::inventory::InventoryUpdate;
use crate::spirits::{Identifiable, InspectionNotice, Spirit, SpiritId};
use crate::Game;
use serde_json::{json, Value};

impl Game {
    /// Drains inspection notices and inventory updates queued for player.
    pub fn take_notifications(
        &mut self,
        player: SpiritId,
    ) -> Result<Vec<ClientCommand>, ActionError> {
        let state = self.spirits.get_player_mut(player)?;
        let notices = std::mem::take(&mut state.notices);
        let updates = std::mem::take(&mut state.inventory_updates);
        let mut commands = Vec::with_capacity(notices.len() + updates.len());
        for notice in notices {
            let command = match notice {
                InspectionNotice::Started(spirit) => ClientCommand::StartInspecting {
                    spirit: self.spirits.spirit_client_json(Spirit::Complex(spirit)),
                },
                InspectionNotice::Stopped(spirit_id) => {
                    ClientCommand::StopInspecting { spirit_id }
                }
            };
            commands.push(command);
        }
        for update in updates {
            commands.push(ClientCommand::UpdateInventoryItem {
                inventory_update: self.inventory_update_json(&update),
            });
        }
        Ok(commands)
    }

    /// Gone items are described by reference only.
    pub fn inventory_update_json(&self, update: &InventoryUpdate) -> Value {
        let alive = match update.spirit.complex_id() {
            Some(id) => self.spirits.get_spirit(id).is_ok(),
            None => true,
        };
        if update.count > 0 && alive {
            json!({
                "parentSpiritId": update.inventory,
                "count": update.count,
                "spirit": self.spirits.spirit_client_json(update.spirit),
            })
        } else {
            json!({
                "parentSpiritId": update.inventory,
                "count": update.count,
                "spiritReference": update.spirit.reference(),
            })
        }
    }
}
