use crate::collections::DictionaryError;
use crate::spirits::{Changeset, SerialInteger, SpiritError, SpiritId};
use crate::Game;
use log::info;
use serde_json::Value;

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Inconsistency(DictionaryError),
    Spirit(SpiritError),
    UnknownClass { class_id: String },
    UnknownSerialInteger { serial_integer: SerialInteger },
    MalformedSpirit { value: Value },
    SpiritNotFound { id: SpiritId },
    Unnestable { id: SpiritId },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<SpiritError> for DataError {
    fn from(error: SpiritError) -> Self {
        Self::Spirit(error)
    }
}

impl Game {
    /// Loads persisted spirits, generates new world when storage has none.
    pub fn load_game_full(&mut self) -> Result<(), DataError> {
        info!("Begin game state loading");
        self.storage.setup()?;
        self.spirits.load_all_complex_spirits(&self.storage)?;
        if self.spirits.world.is_none() {
            let world = self.generate_world()?;
            info!("Storage has no world, generate {:?}", world);
        }
        Ok(())
    }

    pub fn save_game(&mut self) -> Result<Changeset, DataError> {
        self.spirits.persist_all_complex_spirits(&self.storage)
    }
}
