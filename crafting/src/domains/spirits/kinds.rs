use crate::recipes::RecipeComponent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpiritTypeKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialInteger(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexClass {
    World,
    Player,
    Machine,
    Circuit,
}

impl ComplexClass {
    pub const ALL: [ComplexClass; 4] = [
        ComplexClass::World,
        ComplexClass::Player,
        ComplexClass::Machine,
        ComplexClass::Circuit,
    ];

    pub fn class_id(&self) -> &'static str {
        match self {
            ComplexClass::World => "world",
            ComplexClass::Player => "player",
            ComplexClass::Machine => "machine",
            ComplexClass::Circuit => "circuit",
        }
    }

    pub fn from_class_id(class_id: &str) -> Option<Self> {
        ComplexClass::ALL
            .into_iter()
            .find(|class| class.class_id() == class_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Simple(SerialInteger),
    Complex(ComplexClass),
}

#[derive(Debug)]
pub struct SpiritType {
    pub id: SpiritTypeKey,
    pub name: String,
    pub complexity: Complexity,
    pub mine_time: Option<f32>,
    pub inspectable: bool,
    pub free_to_craft: bool,
    pub recycle_products: Vec<RecipeComponent>,
}

impl SpiritType {
    pub fn simple(id: SpiritTypeKey, name: &str, serial_integer: SerialInteger) -> Self {
        Self::new(id, name, Complexity::Simple(serial_integer))
    }

    pub fn complex(id: SpiritTypeKey, name: &str, class: ComplexClass) -> Self {
        Self::new(id, name, Complexity::Complex(class))
    }

    fn new(id: SpiritTypeKey, name: &str, complexity: Complexity) -> Self {
        Self {
            id,
            name: name.to_string(),
            complexity,
            mine_time: None,
            inspectable: false,
            free_to_craft: false,
            recycle_products: vec![],
        }
    }

    pub fn with_mine_time(mut self, seconds: f32) -> Self {
        self.mine_time = Some(seconds);
        self
    }

    pub fn with_inspection(mut self) -> Self {
        self.inspectable = true;
        self
    }

    pub fn with_free_crafting(mut self) -> Self {
        self.free_to_craft = true;
        self
    }

    pub fn with_recycle_products(mut self, products: Vec<RecipeComponent>) -> Self {
        self.recycle_products = products;
        self
    }

    #[inline]
    pub fn can_be_mined(&self) -> bool {
        self.mine_time.is_some()
    }

    #[inline]
    pub fn can_be_inspected(&self) -> bool {
        self.inspectable
    }

    #[inline]
    pub fn is_free_to_craft(&self) -> bool {
        self.free_to_craft
    }

    #[inline]
    pub fn base_recycle_products(&self) -> &[RecipeComponent] {
        &self.recycle_products
    }

    pub fn serial_integer(&self) -> Option<SerialInteger> {
        match self.complexity {
            Complexity::Simple(serial_integer) => Some(serial_integer),
            Complexity::Complex(_) => None,
        }
    }

    pub fn complex_class(&self) -> Option<ComplexClass> {
        match self.complexity {
            Complexity::Simple(_) => None,
            Complexity::Complex(class) => Some(class),
        }
    }

    /// World and players come into existence only through generation and login.
    pub fn is_craftable(&self) -> bool {
        !matches!(
            self.complexity,
            Complexity::Complex(ComplexClass::World | ComplexClass::Player)
        )
    }

    #[inline]
    pub fn is(&self, other: &SpiritType) -> bool {
        self.id == other.id
    }
}
