use crate::data::DataError;
use crate::inventory::Inventory;
use crate::math::Pos;
use crate::spirits::{
    CircuitSpirit, ComplexClass, MachineSpirit, PlayerSpirit, SerialInteger, Spirit, SpiritBody,
    SpiritDomain, SpiritId, WorldSpirit, NEXT_COMPLEX_SPIRIT_ID,
};
use crate::tiles::TileGrid;
use datamap::{parse_json_value, Storage};
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct WorldAttributes {
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct PlayerAttributes {
    username: String,
}

#[derive(Deserialize)]
struct ItemData {
    spirit: Value,
    count: u32,
}

#[derive(Deserialize)]
struct GridData {
    width: i32,
    tiles: Vec<Value>,
}

impl SpiritDomain {
    /// Rebuilds registry from storage, memory equals storage afterwards.
    pub fn load_all_complex_spirits(&mut self, storage: &Storage) -> Result<usize, DataError> {
        let count = storage.transaction(|storage| -> Result<usize, DataError> {
            if let Some(next) = storage.get_config(NEXT_COMPLEX_SPIRIT_ID)? {
                let next: usize = parse_json_value(next)?;
                self.spirits_sequence.register(next.saturating_sub(1));
            }
            let entries = storage.query("select * from ComplexSpirits order by id", [])?;
            let mut containers = Vec::with_capacity(entries.len());
            for entry in &entries {
                let id = SpiritId(entry.get("id")?);
                let class_id: String = entry.get("classId")?;
                let attributes = entry.get_value("attributeData").cloned();
                let body = self.load_body(id, &class_id, attributes.unwrap_or(Value::Null))?;
                let kind = self.known.class_type(&class_id).ok_or(DataError::UnknownClass {
                    class_id: class_id.clone(),
                })?;
                if let SpiritBody::World(_) = body {
                    if self.world.is_none() {
                        self.world = Some(id);
                    }
                }
                self.insert_spirit(id, kind, body, true);
                let container = entry.get_value("containerData").cloned();
                containers.push((id, container.unwrap_or(Value::Null)));
            }
            for (id, container) in containers {
                self.load_container(id, container)?;
            }
            Ok(entries.len())
        })?;
        for spirit in self.spirits.values_mut() {
            if let SpiritBody::Player(player) = &mut spirit.body {
                spirit.parent = None;
                spirit.parent_tile = None;
                player.inventory_updates.clear();
            }
        }
        for spirit in self.spirits.values() {
            let root = matches!(spirit.class(), ComplexClass::World | ComplexClass::Player);
            if spirit.parent.is_none() && !root {
                warn!("Complex spirit {:?} has no container", spirit.id);
            }
        }
        self.dirty.clear();
        info!("Load {} complex spirits, {} alive", count, self.spirits.len());
        Ok(count)
    }

    fn load_body(
        &self,
        id: SpiritId,
        class_id: &str,
        attributes: Value,
    ) -> Result<SpiritBody, DataError> {
        let class = ComplexClass::from_class_id(class_id).ok_or(DataError::UnknownClass {
            class_id: class_id.to_string(),
        })?;
        let body = match class {
            ComplexClass::World => {
                let attributes: WorldAttributes = parse_json_value(attributes)?;
                SpiritBody::World(WorldSpirit {
                    grid: TileGrid::new(
                        attributes.width,
                        attributes.height,
                        self.known.empty_tile(),
                        self.known.barrier_tile(),
                    ),
                    players: vec![],
                })
            }
            ComplexClass::Player => {
                let attributes: PlayerAttributes = parse_json_value(attributes)?;
                SpiritBody::Player(PlayerSpirit::new(id, &attributes.username))
            }
            ComplexClass::Machine => SpiritBody::Machine(MachineSpirit {
                inventory: Inventory::new(id),
            }),
            ComplexClass::Circuit => SpiritBody::Circuit(CircuitSpirit {
                grid: self.circuit_grid(),
            }),
        };
        Ok(body)
    }

    fn load_container(&mut self, id: SpiritId, container: Value) -> Result<(), DataError> {
        match self.get_spirit(id)?.class() {
            ComplexClass::Player | ComplexClass::Machine => {
                let items: Vec<ItemData> = parse_json_value(container)?;
                for item in items {
                    let spirit = self.load_nested_spirit(item.spirit)?;
                    self.set_item_count(id, spirit, item.count)?;
                }
            }
            ComplexClass::World | ComplexClass::Circuit => {
                let grid: GridData = parse_json_value(container)?;
                if grid.width <= 0 {
                    return Ok(());
                }
                for (index, value) in grid.tiles.into_iter().enumerate() {
                    let index = index as i32;
                    let pos = Pos::new(index % grid.width, index / grid.width);
                    let spirit = self.load_nested_spirit(value)?;
                    let tile = self.tile_of(spirit)?;
                    self.set_tile(id, pos, tile)?;
                }
            }
        }
        Ok(())
    }

    /// Payload kind is decided by one discriminator: integer or object.
    fn load_nested_spirit(&mut self, value: Value) -> Result<Spirit, DataError> {
        match value {
            Value::Number(number) => {
                let serial_integer = match number.as_u64().and_then(|n| u32::try_from(n).ok()) {
                    Some(serial_integer) => SerialInteger(serial_integer),
                    None => {
                        return Err(DataError::MalformedSpirit {
                            value: Value::Number(number),
                        })
                    }
                };
                match self.known.simple_type(serial_integer) {
                    Some(_) => Ok(Spirit::Simple(serial_integer)),
                    None => Err(DataError::UnknownSerialInteger { serial_integer }),
                }
            }
            Value::Object(mut payload) => {
                let id: SpiritId = match payload.remove("id") {
                    Some(id) => parse_json_value(id)?,
                    None => {
                        return Err(DataError::MalformedSpirit {
                            value: Value::Object(payload),
                        })
                    }
                };
                let class_id = match payload.remove("classId") {
                    Some(Value::String(class_id)) => class_id,
                    _ => {
                        return match self.spirits.contains_key(&id) {
                            true => Ok(Spirit::Complex(id)),
                            false => Err(DataError::SpiritNotFound { id }),
                        }
                    }
                };
                let attributes = payload.remove("attributeData").unwrap_or(Value::Null);
                let container = payload.remove("containerData").unwrap_or(Value::Null);
                let kind = self.known.class_type(&class_id).ok_or(DataError::UnknownClass {
                    class_id: class_id.clone(),
                })?;
                let body = self.load_body(id, &class_id, attributes)?;
                self.insert_spirit(id, kind, body, false);
                self.load_container(id, container)?;
                Ok(Spirit::Complex(id))
            }
            value => Err(DataError::MalformedSpirit { value }),
        }
    }
}
