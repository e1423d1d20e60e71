use crate::collections::Shared;
use crate::spirits::{SpiritType, SpiritTypeKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeKey(pub usize);

#[derive(Debug, Clone)]
pub struct RecipeComponent {
    pub spirit_type: Shared<SpiritType>,
    pub count: u32,
}

impl RecipeComponent {
    pub fn new(spirit_type: &Shared<SpiritType>, count: u32) -> Self {
        Self {
            spirit_type: spirit_type.clone(),
            count,
        }
    }

    pub fn times(&self, factor: u32) -> Self {
        Self {
            spirit_type: self.spirit_type.clone(),
            count: self.count * factor,
        }
    }
}

#[derive(Debug)]
pub struct Recipe {
    pub id: RecipeKey,
    pub name: String,
    pub ingredients: Vec<RecipeComponent>,
    pub product: RecipeComponent,
}

/// Sums counts of components with the same spirit type, keeping first seen order.
pub fn merge_components(components: Vec<RecipeComponent>) -> Vec<RecipeComponent> {
    let mut merged: Vec<RecipeComponent> = vec![];
    for component in components {
        if component.count == 0 {
            continue;
        }
        let key: SpiritTypeKey = component.spirit_type.id;
        match merged.iter_mut().find(|other| other.spirit_type.id == key) {
            Some(other) => other.count += component.count,
            None => merged.push(component),
        }
    }
    merged
}
