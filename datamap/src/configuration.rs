use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::Storage;

impl Storage {
    pub fn get_config(&self, name: &str) -> Result<Option<Value>, rusqlite::Error> {
        self.connection()
            .query_row(
                "select value from Configuration where name = ?",
                [name],
                |row| row.get::<_, Value>(0),
            )
            .optional()
    }

    pub fn set_config(&self, name: &str, value: &Value) -> Result<(), rusqlite::Error> {
        self.connection().execute(
            "insert into Configuration (name, value) values (?, ?)
             on conflict (name) do update set value = excluded.value",
            params![name, value],
        )?;
        Ok(())
    }
}
