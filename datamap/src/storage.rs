use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};

use log::{error, info};
use serde::de::Error;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

const SCHEMA: &str = "
    create table if not exists ComplexSpirits (
        id integer primary key,
        parentId integer,
        classId text not null,
        attributeData text not null,
        containerData text not null
    );
    create table if not exists Configuration (
        name text primary key,
        value text not null
    );";

pub struct Storage {
    connection: Connection,
}

/// One row of a query result, every column converted to JSON value.
pub struct Entry {
    columns: Rc<HashMap<String, usize>>,
    values: Vec<Value>,
}

impl Entry {
    pub fn get<'a, T: Deserialize<'a>>(&'a self, index: &str) -> Result<T, serde_json::Error> {
        match self.columns.get(index) {
            Some(index) => T::deserialize(&self.values[*index]),
            None => Err(serde_json::Error::custom(format!(
                "column {} not found",
                index
            ))),
        }
    }

    pub fn get_value(&self, index: &str) -> Option<&Value> {
        self.columns.get(index).map(|index| &self.values[*index])
    }

    pub fn get_string(&self, index: &str) -> Result<&str, serde_json::Error> {
        self.get(index)
    }
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn setup(&self) -> Result<(), rusqlite::Error> {
        info!("Initialize storage schema");
        self.connection.execute_batch(SCHEMA)
    }

    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, rusqlite::Error> {
        self.connection.execute(sql, params)
    }

    pub fn query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Entry>, rusqlite::Error> {
        let mut statement = self.connection.prepare(sql)?;
        let mut columns: HashMap<String, usize> = Default::default();
        for (index, column) in statement.column_names().iter().enumerate() {
            columns.insert(column.to_string(), index);
        }
        let columns_count = columns.len();
        let columns = Rc::new(columns);
        let mut rows = statement.query(params)?;
        let mut entries = vec![];
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns_count);
            for i in 0..columns_count {
                let value = match row.get_ref(i)? {
                    ValueRef::Null => Value::Null,
                    ValueRef::Integer(data) => Value::Number(Number::from(data)),
                    ValueRef::Real(data) => Number::from_f64(data)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                    ValueRef::Text(ptr) => {
                        let json = ptr.first() == Some(&b'[') || ptr.first() == Some(&b'{');
                        match json {
                            true => serde_json::from_slice(ptr).unwrap_or_else(|_| {
                                Value::String(String::from_utf8_lossy(ptr).to_string())
                            }),
                            false => Value::String(String::from_utf8_lossy(ptr).to_string()),
                        }
                    }
                    ValueRef::Blob(ptr) => serde_json::from_slice(ptr).unwrap_or(Value::Null),
                };
                values.push(value);
            }
            entries.push(Entry {
                columns: columns.clone(),
                values,
            });
        }
        Ok(entries)
    }

    /// Runs body between `begin` and `commit`, rolls back when body fails.
    pub fn transaction<T, E, F>(&self, body: F) -> Result<T, E>
    where
        F: FnOnce(&Storage) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        self.connection.execute_batch("begin")?;
        match body(self) {
            Ok(value) => {
                self.connection.execute_batch("commit")?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback) = self.connection.execute_batch("rollback") {
                    error!("Unable to rollback transaction, {}", rollback);
                }
                Err(error)
            }
        }
    }
}
