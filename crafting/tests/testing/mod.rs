#![allow(dead_code)]

use crafting::api::{ActionError, ClientCommand, Command};
use crafting::math::Pos;
use crafting::model::{BARRIER, EMPTY};
use crafting::spirits::{SerialInteger, Spirit, SpiritId, SpiritReference};
use crafting::tiles::Tile;
use crafting::{Game, GameSettings};
use datamap::Storage;
use std::collections::HashMap;

pub fn at(x: i32, y: i32) -> Pos {
    Pos::new(x, y)
}

pub fn simple(serial_integer: SerialInteger) -> SpiritReference {
    SpiritReference::Simple { serial_integer }
}

pub fn complex(id: SpiritId) -> SpiritReference {
    SpiritReference::Complex { id }
}

pub fn test_settings() -> GameSettings {
    GameSettings {
        world_width: 10,
        world_height: 10,
        world_seed: 0,
        resource_density: 0.0,
        spawn: at(0, 0),
        view_width: 5,
        view_height: 3,
        max_mine_budget: 4.0,
    }
}

pub struct GameTestScenario {
    pub game: Game,
    players: HashMap<String, SpiritId>,
    spirits: HashMap<String, SpiritId>,
    current_result: Result<Vec<ClientCommand>, ActionError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self::with_settings(test_settings())
    }

    pub fn with_settings(settings: GameSettings) -> Self {
        let storage = Storage::open_in_memory().unwrap();
        Self::with_storage(storage, settings)
    }

    pub fn with_storage(storage: Storage, settings: GameSettings) -> Self {
        let mut game = Game::new(storage, settings);
        game.load_game_full().unwrap();
        GameTestScenario {
            game,
            players: Default::default(),
            spirits: Default::default(),
            current_result: Ok(vec![]),
        }
    }

    /// Reloads game state from the same storage into a fresh game.
    pub fn reload(mut self) -> Self {
        self.game.save_game().unwrap();
        let settings = self.game.settings.clone();
        let Self {
            game,
            players,
            spirits,
            ..
        } = self;
        let mut scenario = Self::with_storage(game.into_storage(), settings);
        scenario.players = players;
        scenario.spirits = spirits;
        scenario
    }

    pub fn player(&self, name: &str) -> SpiritId {
        *self.players.get(name).unwrap()
    }

    pub fn spirit(&self, name: &str) -> SpiritId {
        *self.spirits.get(name).unwrap()
    }

    pub fn world(&self) -> SpiritId {
        self.game.spirits.world().unwrap()
    }

    pub fn count(&self, owner: SpiritId, spirit: Spirit) -> u32 {
        self.game
            .spirits
            .get_inventory(owner)
            .unwrap()
            .get_item_count_by_spirit(spirit)
    }

    pub fn tile(&self, grid: SpiritId, pos: Pos) -> Tile {
        self.game.spirits.get_grid(grid).unwrap().get_tile(pos).clone()
    }

    pub fn player_pos(&self, name: &str) -> Pos {
        let player = self.player(name);
        self.game
            .spirits
            .get_spirit(player)
            .unwrap()
            .parent_tile
            .unwrap()
            .pos
    }

    pub fn given_spawn(mut self, pos: Pos) -> Self {
        self.game.settings.spawn = pos;
        self
    }

    pub fn given_tile(mut self, serial_integer: SerialInteger, pos: Pos) -> Self {
        let world = self.world();
        let tile = self.game.known.simple_tile(serial_integer).unwrap();
        self.game.spirits.set_tile(world, pos, tile).unwrap();
        self
    }

    pub fn given_barrier(self, pos: Pos) -> Self {
        self.given_tile(BARRIER, pos)
    }

    pub fn given_player(mut self, name: &str, pos: Pos) -> Self {
        self.game.settings.spawn = pos;
        let player = self.game.login(name).unwrap();
        self.take_notifications(player);
        self.players.insert(name.to_string(), player);
        self
    }

    pub fn given_mine_budget(mut self, name: &str, budget: f32) -> Self {
        let player = self.player(name);
        self.game.spirits.get_player_mut(player).unwrap().mine_budget = budget;
        self
    }

    pub fn given_items(mut self, owner: &str, serial_integer: SerialInteger, count: u32) -> Self {
        let owner = self.owner(owner);
        self.game
            .spirits
            .increase_item_count_by_spirit(owner, Spirit::Simple(serial_integer), count)
            .unwrap();
        self.take_all_notifications();
        self
    }

    pub fn given_machine_in_inventory(mut self, name: &str, owner: &str) -> Self {
        let owner = self.owner(owner);
        let machine = self.game.spirits.create_machine();
        self.game
            .spirits
            .increment_item_count_by_spirit(owner, Spirit::Complex(machine))
            .unwrap();
        self.take_all_notifications();
        self.spirits.insert(name.to_string(), machine);
        self
    }

    pub fn given_circuit_in_inventory(mut self, name: &str, owner: &str) -> Self {
        let owner = self.owner(owner);
        let circuit = self.game.spirits.create_circuit();
        self.game
            .spirits
            .increment_item_count_by_spirit(owner, Spirit::Complex(circuit))
            .unwrap();
        self.take_all_notifications();
        self.spirits.insert(name.to_string(), circuit);
        self
    }

    pub fn given_machine_in_world(mut self, name: &str, pos: Pos) -> Self {
        let world = self.world();
        let machine = self.game.spirits.create_machine();
        let kind = self.game.known.machine.clone();
        self.game
            .spirits
            .set_tile(world, pos, Tile::new(Spirit::Complex(machine), kind))
            .unwrap();
        self.spirits.insert(name.to_string(), machine);
        self
    }

    pub fn given_saved_game(mut self) -> Self {
        self.game.save_game().unwrap();
        self
    }

    pub fn when_player_performs<F>(mut self, name: &str, command: F) -> Self
    where
        F: FnOnce(&Self) -> Command,
    {
        let command = command(&self);
        self.current_result = self.game.try_perform_command(name, command);
        self
    }

    pub fn when_time_passes(mut self, time: f32) -> Self {
        self.game.update(time);
        self
    }

    pub fn then_command_should_succeed(self) -> Self {
        if let Err(error) = &self.current_result {
            panic!("command failed with {:?}", error);
        }
        self
    }

    pub fn then_command_should_fail<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected = format!("{:?}", expected(&self));
        match &self.current_result {
            Ok(commands) => panic!("command succeeded with {:?}", commands),
            Err(error) => assert_eq!(format!("{:?}", error), expected),
        }
        self
    }

    pub fn then_client_commands_should_be<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<ClientCommand>,
    {
        let expected = expected(&self);
        match &self.current_result {
            Ok(commands) => assert_eq!(commands, &expected),
            Err(error) => panic!("command failed with {:?}", error),
        }
        self
    }

    pub fn then_client_commands_should_contain<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> ClientCommand,
    {
        let expected = expected(&self);
        match &self.current_result {
            Ok(commands) => assert!(
                commands.contains(&expected),
                "{:?} not found in {:?}",
                expected,
                commands
            ),
            Err(error) => panic!("command failed with {:?}", error),
        }
        self
    }

    pub fn then_item_count_should_be(
        self,
        owner: &str,
        spirit: Spirit,
        expected: u32,
    ) -> Self {
        let owner = self.owner(owner);
        assert_eq!(self.count(owner, spirit), expected);
        self
    }

    pub fn then_world_tile_should_be(self, pos: Pos, serial_integer: SerialInteger) -> Self {
        let world = self.world();
        assert_eq!(self.tile(world, pos).spirit, Spirit::Simple(serial_integer));
        self
    }

    pub fn then_world_tile_should_be_empty(self, pos: Pos) -> Self {
        self.then_world_tile_should_be(pos, EMPTY)
    }

    pub fn then_player_should_be_at(self, name: &str, pos: Pos) -> Self {
        assert_eq!(self.player_pos(name), pos);
        self
    }

    fn owner(&self, name: &str) -> SpiritId {
        match self.players.get(name) {
            Some(player) => *player,
            None => self.spirit(name),
        }
    }

    fn take_notifications(&mut self, player: SpiritId) {
        self.game.take_notifications(player).unwrap();
    }

    fn take_all_notifications(&mut self) {
        let players: Vec<SpiritId> = self.players.values().copied().collect();
        for player in players {
            self.take_notifications(player);
        }
    }
}
