use crate::collections::Shared;
use crate::inventory::Inventory;
use crate::spirits::{
    ComplexSpirit, HasInventory, HasTileGrid, PlayerSpirit, Spirit, SpiritBody, SpiritDomain,
    SpiritError, SpiritId, SpiritReference, SpiritType, WorldSpirit,
};
use crate::tiles::{Tile, TileGrid};

impl SpiritDomain {
    pub fn get_spirit(&self, id: SpiritId) -> Result<&ComplexSpirit, SpiritError> {
        self.spirits
            .get(&id)
            .ok_or(SpiritError::SpiritNotFound { id })
    }

    pub fn get_spirit_mut(&mut self, id: SpiritId) -> Result<&mut ComplexSpirit, SpiritError> {
        self.spirits
            .get_mut(&id)
            .ok_or(SpiritError::SpiritNotFound { id })
    }

    /// Resolves reference to live spirit, none for unknown or destroyed ones.
    pub fn find_spirit(&self, reference: SpiritReference) -> Option<Spirit> {
        match reference {
            SpiritReference::Simple { serial_integer } => self
                .known
                .simple_type(serial_integer)
                .map(|_| Spirit::Simple(serial_integer)),
            SpiritReference::Complex { id } => {
                self.spirits.get(&id).map(|_| Spirit::Complex(id))
            }
        }
    }

    pub fn spirit_type(&self, spirit: Spirit) -> Result<Shared<SpiritType>, SpiritError> {
        match spirit {
            Spirit::Simple(serial_integer) => self
                .known
                .simple_type(serial_integer)
                .ok_or(SpiritError::SerialIntegerNotFound { serial_integer }),
            Spirit::Complex(id) => self.get_spirit(id).map(|spirit| spirit.kind.clone()),
        }
    }

    pub fn tile_of(&self, spirit: Spirit) -> Result<Tile, SpiritError> {
        Ok(Tile::new(spirit, self.spirit_type(spirit)?))
    }

    pub fn world(&self) -> Result<SpiritId, SpiritError> {
        self.world.ok_or(SpiritError::WorldNotFound)
    }

    pub fn get_inventory(&self, owner: SpiritId) -> Result<&Inventory, SpiritError> {
        self.get_spirit(owner)?
            .body
            .inventory()
            .ok_or(SpiritError::NotInventorySpirit { id: owner })
    }

    pub fn get_inventory_mut(&mut self, owner: SpiritId) -> Result<&mut Inventory, SpiritError> {
        self.get_spirit_mut(owner)?
            .body
            .inventory_mut()
            .ok_or(SpiritError::NotInventorySpirit { id: owner })
    }

    pub fn get_grid(&self, owner: SpiritId) -> Result<&TileGrid, SpiritError> {
        self.get_spirit(owner)?
            .body
            .tile_grid()
            .ok_or(SpiritError::NotTileGridSpirit { id: owner })
    }

    pub fn get_grid_mut(&mut self, owner: SpiritId) -> Result<&mut TileGrid, SpiritError> {
        self.get_spirit_mut(owner)?
            .body
            .tile_grid_mut()
            .ok_or(SpiritError::NotTileGridSpirit { id: owner })
    }

    pub fn get_player(&self, id: SpiritId) -> Result<&PlayerSpirit, SpiritError> {
        self.get_spirit(id)?
            .body
            .as_player()
            .ok_or(SpiritError::NotPlayerSpirit { id })
    }

    pub fn get_player_mut(&mut self, id: SpiritId) -> Result<&mut PlayerSpirit, SpiritError> {
        self.get_spirit_mut(id)?
            .body
            .as_player_mut()
            .ok_or(SpiritError::NotPlayerSpirit { id })
    }

    pub(crate) fn get_world_spirit_mut(&mut self, id: SpiritId) -> Option<&mut WorldSpirit> {
        self.spirits
            .get_mut(&id)
            .and_then(|spirit| spirit.body.as_world_mut())
    }

    pub fn online_players(&self) -> Vec<SpiritId> {
        let world = self.world.and_then(|world| self.spirits.get(&world));
        match world.map(|world| &world.body) {
            Some(SpiritBody::World(world)) => world.players.clone(),
            _ => vec![],
        }
    }

    /// Looks up players currently placed in the world.
    pub fn find_online_player(&self, username: &str) -> Option<SpiritId> {
        self.online_players().into_iter().find(|id| {
            self.get_player(*id)
                .map(|player| player.username == username)
                .unwrap_or(false)
        })
    }

    pub fn find_player(&self, username: &str) -> Option<SpiritId> {
        self.find_online_player(username).or_else(|| {
            self.spirits
                .values()
                .filter(|spirit| {
                    spirit
                        .body
                        .as_player()
                        .map(|player| player.username == username)
                        .unwrap_or(false)
                })
                .map(|spirit| spirit.id)
                .min()
        })
    }
}
