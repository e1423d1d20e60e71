use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

/// Immutable knowledge shared between every spirit of the same kind.
pub struct Shared<T> {
    inner: Rc<T>,
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner.deref()
    }
}

pub struct Dictionary<K, T> {
    keys: HashMap<K, Shared<T>>,
    strings: HashMap<String, Shared<T>>,
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            keys: HashMap::default(),
            strings: HashMap::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DictionaryError {
    KeyNotFound { key: String },
    NameNotFound { name: String },
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Hash + Eq,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn insert(&mut self, key: K, name: String, kind: T) -> Shared<T> {
        let kind = Shared::new(kind);
        self.insert_shared(key, name, kind.clone());
        kind
    }

    pub fn insert_shared(&mut self, key: K, name: String, kind: Shared<T>) {
        self.keys.insert(key, kind.clone());
        self.strings.insert(name, kind);
    }

    pub fn get(&self, key: K) -> Result<Shared<T>, DictionaryError> {
        self.keys
            .get(&key)
            .cloned()
            .ok_or(DictionaryError::KeyNotFound {
                key: format!("{:?}", key),
            })
    }

    pub fn find(&self, name: &str) -> Result<Shared<T>, DictionaryError> {
        self.strings
            .get(name)
            .cloned()
            .ok_or(DictionaryError::NameNotFound {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }
}
