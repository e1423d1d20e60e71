use crafting::api::Command::{MineTile, PlaceWorldTile};
use crafting::data::DataError;
use crafting::model::{BARRIER, ENERGITE, MATTERITE, WIRE};
use crafting::spirits::{Spirit, SpiritId, NEXT_COMPLEX_SPIRIT_ID};
use crafting::tiles::Tile;
use datamap::Entry;
use serde_json::{json, Value};

use crate::testing::{at, complex, GameTestScenario};

mod testing;

fn rows(scenario: &GameTestScenario) -> Vec<Entry> {
    scenario
        .game
        .storage()
        .query("select * from ComplexSpirits order by id", [])
        .unwrap()
}

fn row(scenario: &GameTestScenario, id: SpiritId) -> Option<Entry> {
    scenario
        .game
        .storage()
        .query("select * from ComplexSpirits where id = ?", [id.0 as i64])
        .unwrap()
        .into_iter()
        .next()
}

fn world_tile_data(scenario: &GameTestScenario, pos: (i32, i32)) -> Value {
    let world = row(scenario, scenario.world()).unwrap();
    let container = world.get_value("containerData").unwrap();
    let width = container["width"].as_i64().unwrap() as i32;
    container["tiles"][(pos.1 * width + pos.0) as usize].clone()
}

#[test]
fn test_machine_in_inventory_is_stored_inline() {
    let scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .given_machine_in_inventory("machine", "Alice")
        .given_items("machine", ENERGITE, 2)
        .given_saved_game();
    let machine = scenario.spirit("machine");
    assert!(row(&scenario, machine).is_none());
    let player = row(&scenario, scenario.player("Alice")).unwrap();
    assert_eq!(player.get_string("classId").unwrap(), "player");
    assert_eq!(
        player.get_value("attributeData"),
        Some(&json!({"username": "Alice"}))
    );
    assert_eq!(
        player.get_value("containerData"),
        Some(&json!([{
            "spirit": {
                "id": machine,
                "classId": "machine",
                "attributeData": {},
                "containerData": [{"spirit": 3, "count": 2}],
            },
            "count": 1,
        }]))
    );
}

#[test]
fn test_nested_change_rewrites_nearest_root_row() {
    let mut scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .given_machine_in_inventory("machine", "Alice")
        .given_items("machine", ENERGITE, 2)
        .given_saved_game();
    let machine = scenario.spirit("machine");
    let alice = scenario.player("Alice");
    scenario
        .game
        .spirits
        .increment_item_count_by_spirit(machine, Spirit::Simple(ENERGITE))
        .unwrap();
    assert!(scenario.game.spirits.dirty.contains(&alice));
    let changeset = scenario.game.save_game().unwrap();
    assert_eq!(changeset.updates, vec![alice]);
    assert!(changeset.inserts.is_empty());
    assert!(row(&scenario, machine).is_none());
    let player = row(&scenario, alice).unwrap();
    let container = player.get_value("containerData").unwrap();
    assert_eq!(
        container[0]["spirit"]["containerData"],
        json!([{"spirit": 3, "count": 3}])
    );
}

#[test]
fn test_machine_in_world_has_own_row() {
    let scenario = GameTestScenario::new()
        .given_machine_in_world("machine", at(4, 2))
        .given_saved_game();
    let machine = scenario.spirit("machine");
    let entry = row(&scenario, machine).unwrap();
    assert_eq!(entry.get::<Option<usize>>("parentId").unwrap(), Some(scenario.world().0));
    assert_eq!(entry.get_string("classId").unwrap(), "machine");
    assert_eq!(world_tile_data(&scenario, (4, 2)), json!({ "id": machine }));
}

#[test]
fn test_player_tile_is_stored_as_fill() {
    let scenario = GameTestScenario::new()
        .given_player("Alice", at(2, 2))
        .given_saved_game();
    assert_eq!(world_tile_data(&scenario, (2, 2)), json!(0));
    let player = row(&scenario, scenario.player("Alice")).unwrap();
    assert_eq!(
        player.get::<Option<usize>>("parentId").unwrap(),
        Some(scenario.world().0)
    );
}

#[test]
fn test_flush_row_transitions() {
    let mut scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .given_machine_in_world("machine", at(1, 0))
        .given_mine_budget("Alice", 4.0);
    let machine = scenario.spirit("machine");
    let alice = scenario.player("Alice");
    let world = scenario.world();

    let changeset = scenario.game.save_game().unwrap();
    assert_eq!(changeset.inserts, vec![world, alice, machine]);
    assert!(changeset.updates.is_empty());
    assert!(scenario.game.save_game().unwrap().is_empty());

    let mut scenario = scenario
        .when_player_performs("Alice", |_| MineTile { pos: at(1, 0) })
        .then_command_should_succeed();
    let changeset = scenario.game.save_game().unwrap();
    assert_eq!(changeset.deletes, vec![machine]);
    assert_eq!(changeset.updates, vec![world, alice]);
    assert!(row(&scenario, machine).is_none());
    assert!(!scenario.game.spirits.get_spirit(machine).unwrap().has_db_row);

    let mut scenario = scenario
        .when_player_performs("Alice", |given| PlaceWorldTile {
            pos: at(1, 0),
            spirit_reference: complex(given.spirit("machine")),
        })
        .then_command_should_succeed();
    let changeset = scenario.game.save_game().unwrap();
    assert_eq!(changeset.inserts, vec![machine]);
    assert!(row(&scenario, machine).is_some());
}

#[test]
fn test_destroyed_root_row_is_deleted() {
    let mut scenario = GameTestScenario::new()
        .given_machine_in_world("machine", at(1, 0))
        .given_saved_game();
    let machine = scenario.spirit("machine");
    let world = scenario.world();
    let fill = scenario.game.known.empty_tile();
    scenario.game.spirits.set_tile(world, at(1, 0), fill).unwrap();
    scenario.game.spirits.destroy_spirit(machine);
    let changeset = scenario.game.save_game().unwrap();
    assert_eq!(changeset.deletes, vec![machine]);
    assert!(row(&scenario, machine).is_none());
    assert!(scenario.game.spirits.destroyed.is_empty());
}

#[test]
fn test_next_spirit_id_is_stored() {
    let mut scenario = GameTestScenario::new();
    let machine = scenario.game.spirits.create_machine();
    scenario.game.save_game().unwrap();
    let next = scenario
        .game
        .storage()
        .get_config(NEXT_COMPLEX_SPIRIT_ID)
        .unwrap();
    assert_eq!(next, Some(json!(machine.0 + 1)));
}

#[test]
fn test_nested_player_is_not_persisted() {
    let mut scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .given_machine_in_world("machine", at(5, 5));
    let machine = scenario.spirit("machine");
    let alice = scenario.player("Alice");
    let world = scenario.world();
    let player_tile = scenario.tile(world, at(0, 0));
    let fill = scenario.game.known.empty_tile();
    scenario.game.spirits.set_tile(world, at(0, 0), fill).unwrap();
    scenario
        .game
        .spirits
        .increment_item_count_by_spirit(machine, player_tile.spirit)
        .unwrap();
    let result = scenario.game.save_game();
    assert!(matches!(result, Err(DataError::Unnestable { id }) if id == alice));
    assert!(rows(&scenario).is_empty());
    assert!(scenario.game.spirits.dirty.contains(&world));
}

#[test]
fn test_loading_restores_spirits() {
    let scenario = GameTestScenario::new()
        .given_tile(MATTERITE, at(5, 5))
        .given_barrier(at(3, 3))
        .given_player("Alice", at(0, 0))
        .given_items("Alice", MATTERITE, 3)
        .given_machine_in_inventory("carried", "Alice")
        .given_items("carried", ENERGITE, 2)
        .given_machine_in_world("placed", at(7, 7))
        .given_circuit_in_inventory("circuit", "placed");
    let carried = scenario.spirit("carried");
    let placed = scenario.spirit("placed");
    let circuit = scenario.spirit("circuit");
    let mut scenario = scenario;
    let wire = scenario.game.known.simple_tile(WIRE).unwrap();
    scenario.game.spirits.set_tile(circuit, at(1, 1), wire).unwrap();
    let last_id = scenario.game.spirits.spirits_sequence.value();

    let mut scenario = scenario.reload();
    assert!(scenario.game.spirits.dirty.is_empty());
    assert!(scenario.game.save_game().unwrap().is_empty());

    let scenario = scenario
        .then_world_tile_should_be(at(5, 5), MATTERITE)
        .then_world_tile_should_be(at(3, 3), BARRIER)
        .then_world_tile_should_be_empty(at(0, 0))
        .given_player("Alice", at(0, 0))
        .then_player_should_be_at("Alice", at(0, 0))
        .then_item_count_should_be("Alice", Spirit::Simple(MATTERITE), 3)
        .then_item_count_should_be("Alice", Spirit::Complex(carried), 1)
        .then_item_count_should_be("carried", Spirit::Simple(ENERGITE), 2)
        .then_item_count_should_be("placed", Spirit::Complex(circuit), 1);
    let spirits = &scenario.game.spirits;
    let alice = scenario.player("Alice");
    let world = scenario.world();
    assert_eq!(spirits.get_spirit(carried).unwrap().parent, Some(alice));
    assert!(!spirits.get_spirit(carried).unwrap().has_db_row);
    assert_eq!(spirits.get_spirit(placed).unwrap().parent, Some(world));
    assert!(spirits.get_spirit(placed).unwrap().has_db_row);
    assert_eq!(spirits.get_spirit(circuit).unwrap().parent, Some(placed));
    let wire = spirits.get_grid(circuit).unwrap().get_tile(at(1, 1)).clone();
    assert_eq!(wire.spirit, Spirit::Simple(WIRE));
    assert!(spirits.spirits_sequence.value() >= last_id);
}

#[test]
fn test_loaded_game_continues_id_sequence() {
    let mut scenario = GameTestScenario::new();
    let machine = scenario.game.spirits.create_machine();
    scenario.game.spirits.destroy_spirit(machine);
    let mut scenario = scenario.reload();
    let next = scenario.game.spirits.create_machine();
    assert!(next > machine);
}

#[test]
fn test_tile_grid_data_round_trip() {
    let mut scenario = GameTestScenario::new()
        .given_tile(ENERGITE, at(9, 9))
        .given_machine_in_world("machine", at(0, 9));
    let world = scenario.world();
    let grid = scenario.game.spirits.get_grid(world).unwrap();
    let before: Vec<(i32, i32, Spirit)> = grid
        .tiles()
        .map(|(pos, tile)| (pos.x, pos.y, tile.spirit))
        .collect();
    scenario = scenario.reload();
    let world = scenario.world();
    let grid = scenario.game.spirits.get_grid(world).unwrap();
    let after: Vec<(i32, i32, Spirit)> = grid
        .tiles()
        .map(|(pos, tile)| (pos.x, pos.y, tile.spirit))
        .collect();
    assert_eq!(before, after);
    let machine: Tile = grid.get_tile(at(0, 9)).clone();
    assert_eq!(machine.spirit, Spirit::Complex(scenario.spirit("machine")));
}
