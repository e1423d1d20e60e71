use crate::data::DataError;
use crate::inventory::Inventory;
use crate::spirits::{
    ComplexClass, ComplexSpirit, HasInventory, HasTileGrid, Persistable, Spirit, SpiritBody,
    SpiritDomain, SpiritId,
};
use crate::tiles::TileGrid;
use datamap::Storage;
use log::{error, info};
use rusqlite::params;
use serde_json::{json, Value};

pub const NEXT_COMPLEX_SPIRIT_ID: &str = "nextComplexSpiritId";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Changeset {
    pub inserts: Vec<SpiritId>,
    pub updates: Vec<SpiritId>,
    pub deletes: Vec<SpiritId>,
}

impl Changeset {
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty() && self.deletes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Insert,
    Update,
    Delete,
    Skip,
}

impl SpiritDomain {
    pub fn should_have_db_row(&self, spirit: &ComplexSpirit) -> bool {
        if spirit.destroyed {
            return false;
        }
        match spirit.parent {
            None => true,
            Some(parent) => Some(parent) == self.world,
        }
    }

    /// Writes every dirty root in one transaction, marks raised meanwhile wait for next flush.
    pub fn persist_all_complex_spirits(
        &mut self,
        storage: &Storage,
    ) -> Result<Changeset, DataError> {
        let dirty: Vec<SpiritId> = self.dirty.iter().copied().collect();
        let result = storage.transaction(|storage| -> Result<Changeset, DataError> {
            let mut changeset = Changeset::default();
            for id in dirty.iter().copied() {
                self.dirty.remove(&id);
                match self.persist(storage, id)? {
                    Persistence::Insert => changeset.inserts.push(id),
                    Persistence::Update => changeset.updates.push(id),
                    Persistence::Delete => changeset.deletes.push(id),
                    Persistence::Skip => {}
                }
            }
            let next = self.spirits_sequence.value() + 1;
            storage.set_config(NEXT_COMPLEX_SPIRIT_ID, &json!(next))?;
            Ok(changeset)
        });
        match result {
            Ok(changeset) => {
                for id in &changeset.inserts {
                    self.set_db_row(*id, true);
                }
                for id in &changeset.deletes {
                    self.set_db_row(*id, false);
                }
                self.destroyed.retain(|id, _| self.dirty.contains(id));
                if !changeset.is_empty() {
                    info!(
                        "Persist complex spirits: {} inserted, {} updated, {} deleted",
                        changeset.inserts.len(),
                        changeset.updates.len(),
                        changeset.deletes.len()
                    );
                }
                Ok(changeset)
            }
            Err(data_error) => {
                error!("Unable to persist complex spirits, {:?}", data_error);
                self.dirty.extend(dirty);
                Err(data_error)
            }
        }
    }

    fn set_db_row(&mut self, id: SpiritId, has_db_row: bool) {
        let spirit = match self.spirits.get_mut(&id) {
            Some(spirit) => Some(spirit),
            None => self.destroyed.get_mut(&id),
        };
        if let Some(spirit) = spirit {
            spirit.has_db_row = has_db_row;
        }
    }

    fn persist(&self, storage: &Storage, id: SpiritId) -> Result<Persistence, DataError> {
        let spirit = match self.spirits.get(&id).or_else(|| self.destroyed.get(&id)) {
            Some(spirit) => spirit,
            None => return Ok(Persistence::Skip),
        };
        let persistence = match (spirit.has_db_row, self.should_have_db_row(spirit)) {
            (true, true) => {
                let (parent, class_id, attributes, container) = self.row_values(spirit)?;
                storage.execute(
                    "update ComplexSpirits set parentId = ?, classId = ?, attributeData = ?, containerData = ? where id = ?",
                    params![parent, class_id, attributes, container, id.0 as i64],
                )?;
                Persistence::Update
            }
            (true, false) => {
                storage.execute("delete from ComplexSpirits where id = ?", [id.0 as i64])?;
                Persistence::Delete
            }
            (false, true) => {
                let (parent, class_id, attributes, container) = self.row_values(spirit)?;
                storage.execute(
                    "insert into ComplexSpirits (id, parentId, classId, attributeData, containerData) values (?, ?, ?, ?, ?)",
                    params![id.0 as i64, parent, class_id, attributes, container],
                )?;
                Persistence::Insert
            }
            (false, false) => Persistence::Skip,
        };
        Ok(persistence)
    }

    fn row_values(
        &self,
        spirit: &ComplexSpirit,
    ) -> Result<(Option<i64>, &'static str, String, String), DataError> {
        let parent = spirit.parent.map(|parent| parent.0 as i64);
        let attributes = spirit.body.attribute_data().to_string();
        let container = self.container_db_json(spirit)?.to_string();
        Ok((parent, spirit.body.class_id(), attributes, container))
    }

    /// Nested form: bare integer, id stub for roots, inline payload otherwise.
    pub fn spirit_db_json(&self, spirit: Spirit) -> Result<Value, DataError> {
        let id = match spirit {
            Spirit::Simple(serial_integer) => return Ok(json!(serial_integer)),
            Spirit::Complex(id) => id,
        };
        let spirit = self.get_spirit(id)?;
        if self.should_have_db_row(spirit) {
            return Ok(json!({ "id": id }));
        }
        if spirit.class() == ComplexClass::Player {
            return Err(DataError::Unnestable { id });
        }
        Ok(json!({
            "id": id,
            "classId": spirit.body.class_id(),
            "attributeData": spirit.body.attribute_data(),
            "containerData": self.container_db_json(spirit)?,
        }))
    }

    pub fn container_db_json(&self, spirit: &ComplexSpirit) -> Result<Value, DataError> {
        if let Some(inventory) = spirit.body.inventory() {
            return self.inventory_db_json(inventory);
        }
        if let Some(grid) = spirit.body.tile_grid() {
            let players_as_fill = matches!(spirit.body, SpiritBody::World(_));
            return self.grid_db_json(grid, players_as_fill);
        }
        Ok(json!({}))
    }

    pub fn inventory_db_json(&self, inventory: &Inventory) -> Result<Value, DataError> {
        let mut items = Vec::with_capacity(inventory.items.len());
        for item in &inventory.items {
            items.push(json!({
                "spirit": self.spirit_db_json(item.spirit)?,
                "count": item.count,
            }));
        }
        Ok(Value::Array(items))
    }

    /// Players re-enter world at login, so their cells are stored as fill.
    pub fn grid_db_json(&self, grid: &TileGrid, players_as_fill: bool) -> Result<Value, DataError> {
        let mut tiles = vec![];
        for (_, tile) in grid.tiles() {
            let spirit = match tile.kind.complex_class() {
                Some(ComplexClass::Player) if players_as_fill => grid.fill.spirit,
                _ => tile.spirit,
            };
            tiles.push(self.spirit_db_json(spirit)?);
        }
        Ok(json!({
            "width": grid.width,
            "height": grid.height,
            "tiles": tiles,
        }))
    }
}
