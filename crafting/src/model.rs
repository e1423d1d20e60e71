use crate::collections::{Dictionary, DictionaryError, Sequence, Shared};
use crate::recipes::{Recipe, RecipeComponent, RecipeKey};
use crate::spirits::{ComplexClass, SerialInteger, Spirit, SpiritType, SpiritTypeKey};
use crate::tiles::Tile;
use std::collections::HashMap;

pub const EMPTY: SerialInteger = SerialInteger(0);
pub const BARRIER: SerialInteger = SerialInteger(1);
pub const MATTERITE: SerialInteger = SerialInteger(2);
pub const ENERGITE: SerialInteger = SerialInteger(3);
pub const WIRE: SerialInteger = SerialInteger(4);
pub const FIRST_BLOCK: u32 = 16;

pub const BLOCK_COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

pub struct Knowledge {
    pub spirits: Dictionary<SpiritTypeKey, SpiritType>,
    pub recipes: Dictionary<RecipeKey, Recipe>,
    simple: HashMap<SerialInteger, Shared<SpiritType>>,
    complex: HashMap<ComplexClass, Shared<SpiritType>>,
    pub empty: Shared<SpiritType>,
    pub barrier: Shared<SpiritType>,
    pub matterite: Shared<SpiritType>,
    pub energite: Shared<SpiritType>,
    pub wire: Shared<SpiritType>,
    pub blocks: Vec<Shared<SpiritType>>,
    pub world: Shared<SpiritType>,
    pub player: Shared<SpiritType>,
    pub machine: Shared<SpiritType>,
    pub circuit: Shared<SpiritType>,
}

impl Knowledge {
    pub fn standard() -> Self {
        let mut keys = Sequence::default();
        let mut simple = |name: &str, serial_integer: SerialInteger| {
            SpiritType::simple(keys.one(SpiritTypeKey), name, serial_integer)
        };
        let empty = Shared::new(simple("empty", EMPTY));
        let barrier = Shared::new(simple("barrier", BARRIER));
        let matterite = Shared::new(simple("matterite", MATTERITE).with_mine_time(1.0));
        let energite = Shared::new(simple("energite", ENERGITE).with_mine_time(1.5));
        let wire = Shared::new(simple("wire", WIRE).with_free_crafting());
        let blocks: Vec<Shared<SpiritType>> = BLOCK_COLORS
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let serial_integer = SerialInteger(FIRST_BLOCK + index as u32);
                let kind = simple(&format!("{} block", color), serial_integer)
                    .with_mine_time(0.5)
                    .with_recycle_products(vec![RecipeComponent::new(&matterite, 1)]);
                Shared::new(kind)
            })
            .collect();
        let mut complex = |name: &str, class: ComplexClass| {
            SpiritType::complex(keys.one(SpiritTypeKey), name, class)
        };
        let world = Shared::new(complex("world", ComplexClass::World));
        let player = Shared::new(complex("player", ComplexClass::Player));
        let machine = Shared::new(
            complex("machine", ComplexClass::Machine)
                .with_mine_time(2.0)
                .with_inspection()
                .with_recycle_products(vec![
                    RecipeComponent::new(&matterite, 3),
                    RecipeComponent::new(&energite, 1),
                ]),
        );
        let circuit = Shared::new(
            complex("circuit", ComplexClass::Circuit)
                .with_mine_time(2.0)
                .with_inspection()
                .with_recycle_products(vec![
                    RecipeComponent::new(&energite, 2),
                    RecipeComponent::new(&matterite, 1),
                ]),
        );

        let mut recipes = Dictionary::default();
        let mut recipes_sequence = Sequence::default();
        for block in &blocks {
            let id = recipes_sequence.one(RecipeKey);
            let recipe = Recipe {
                id,
                name: block.name.clone(),
                ingredients: vec![RecipeComponent::new(&matterite, 2)],
                product: RecipeComponent::new(block, 1),
            };
            recipes.insert(id, recipe.name.clone(), recipe);
        }
        let id = recipes_sequence.one(RecipeKey);
        let recipe = Recipe {
            id,
            name: machine.name.clone(),
            ingredients: vec![
                RecipeComponent::new(&matterite, 6),
                RecipeComponent::new(&energite, 2),
            ],
            product: RecipeComponent::new(&machine, 1),
        };
        recipes.insert(id, recipe.name.clone(), recipe);
        let id = recipes_sequence.one(RecipeKey);
        let recipe = Recipe {
            id,
            name: circuit.name.clone(),
            ingredients: vec![
                RecipeComponent::new(&energite, 4),
                RecipeComponent::new(&matterite, 2),
            ],
            product: RecipeComponent::new(&circuit, 1),
        };
        recipes.insert(id, recipe.name.clone(), recipe);

        let mut known = Knowledge {
            spirits: Dictionary::default(),
            recipes,
            simple: HashMap::default(),
            complex: HashMap::default(),
            empty,
            barrier,
            matterite,
            energite,
            wire,
            blocks,
            world,
            player,
            machine,
            circuit,
        };
        let mut kinds = vec![
            known.empty.clone(),
            known.barrier.clone(),
            known.matterite.clone(),
            known.energite.clone(),
            known.wire.clone(),
        ];
        kinds.extend(known.blocks.iter().cloned());
        kinds.extend([
            known.world.clone(),
            known.player.clone(),
            known.machine.clone(),
            known.circuit.clone(),
        ]);
        for kind in kinds {
            known.register(kind);
        }
        known
    }

    fn register(&mut self, kind: Shared<SpiritType>) {
        if let Some(serial_integer) = kind.serial_integer() {
            self.simple.insert(serial_integer, kind.clone());
        }
        if let Some(class) = kind.complex_class() {
            self.complex.insert(class, kind.clone());
        }
        self.spirits.insert_shared(kind.id, kind.name.clone(), kind);
    }

    pub fn simple_type(&self, serial_integer: SerialInteger) -> Option<Shared<SpiritType>> {
        self.simple.get(&serial_integer).cloned()
    }

    pub fn complex_type(&self, class: ComplexClass) -> Option<Shared<SpiritType>> {
        self.complex.get(&class).cloned()
    }

    pub fn class_type(&self, class_id: &str) -> Option<Shared<SpiritType>> {
        ComplexClass::from_class_id(class_id).and_then(|class| self.complex_type(class))
    }

    pub fn get_recipe(&self, id: RecipeKey) -> Result<Shared<Recipe>, DictionaryError> {
        self.recipes.get(id)
    }

    pub fn empty_tile(&self) -> Tile {
        Tile::new(Spirit::Simple(EMPTY), self.empty.clone())
    }

    pub fn barrier_tile(&self) -> Tile {
        Tile::new(Spirit::Simple(BARRIER), self.barrier.clone())
    }

    pub fn simple_tile(&self, serial_integer: SerialInteger) -> Option<Tile> {
        self.simple_type(serial_integer)
            .map(|kind| Tile::new(Spirit::Simple(serial_integer), kind))
    }
}
