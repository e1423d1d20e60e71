use crate::collections::Shared;
use crate::inventory::Inventory;
use crate::spirits::{
    CircuitSpirit, ComplexClass, ComplexSpirit, Complexity, MachineSpirit, PlayerSpirit, Spirit,
    SpiritBody, SpiritDomain, SpiritError, SpiritId, SpiritType, WorldSpirit,
};
use crate::tiles::TileGrid;

impl SpiritDomain {
    /// Simple kinds return their shared spirit, complex kinds get fresh instance.
    pub fn craft(&mut self, kind: &Shared<SpiritType>) -> Result<Spirit, SpiritError> {
        match kind.complexity {
            Complexity::Simple(serial_integer) => Ok(Spirit::Simple(serial_integer)),
            Complexity::Complex(ComplexClass::Machine) => {
                Ok(Spirit::Complex(self.create_machine()))
            }
            Complexity::Complex(ComplexClass::Circuit) => {
                Ok(Spirit::Complex(self.create_circuit()))
            }
            Complexity::Complex(_) => Err(SpiritError::NotCraftable {
                kind: kind.name.clone(),
            }),
        }
    }

    pub fn create_world(&mut self, width: i32, height: i32) -> SpiritId {
        let kind = self.known.world.clone();
        let grid = TileGrid::new(
            width,
            height,
            self.known.empty_tile(),
            self.known.barrier_tile(),
        );
        let id = self.create_spirit(kind, |_| {
            SpiritBody::World(WorldSpirit {
                grid,
                players: vec![],
            })
        });
        self.world = Some(id);
        id
    }

    pub fn create_player(&mut self, username: &str) -> SpiritId {
        let kind = self.known.player.clone();
        self.create_spirit(kind, |id| SpiritBody::Player(PlayerSpirit::new(id, username)))
    }

    pub fn create_machine(&mut self) -> SpiritId {
        let kind = self.known.machine.clone();
        self.create_spirit(kind, |id| {
            SpiritBody::Machine(MachineSpirit {
                inventory: Inventory::new(id),
            })
        })
    }

    pub fn create_circuit(&mut self) -> SpiritId {
        let kind = self.known.circuit.clone();
        let grid = self.circuit_grid();
        self.create_spirit(kind, |_| SpiritBody::Circuit(CircuitSpirit { grid }))
    }

    pub(crate) fn circuit_grid(&self) -> TileGrid {
        TileGrid::new(
            CircuitSpirit::COLUMNS,
            CircuitSpirit::ROWS,
            self.known.empty_tile(),
            self.known.barrier_tile(),
        )
    }

    fn create_spirit<F>(&mut self, kind: Shared<SpiritType>, body: F) -> SpiritId
    where
        F: FnOnce(SpiritId) -> SpiritBody,
    {
        let id = self.spirits_sequence.one(SpiritId);
        self.insert_spirit(id, kind, body(id), false);
        self.mark_as_dirty(id);
        id
    }

    /// Registers spirit with explicit id, clean until first mutation.
    pub(crate) fn insert_spirit(
        &mut self,
        id: SpiritId,
        kind: Shared<SpiritType>,
        body: SpiritBody,
        has_db_row: bool,
    ) {
        self.spirits_sequence.register(id.0);
        let spirit = ComplexSpirit {
            id,
            kind,
            parent: None,
            parent_tile: None,
            has_db_row,
            destroyed: false,
            body,
        };
        self.spirits.insert(id, spirit);
    }
}
