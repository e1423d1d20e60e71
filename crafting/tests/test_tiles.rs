use crafting::api::ActionError;
use crafting::api::ClientCommand::{SetWorldTileGrid, UpdateInventoryItem};
use crafting::api::Command::{GetTiles, MineTile, PlaceWorldTile, WalkPlayer};
use crafting::model::{BARRIER, MATTERITE};
use crafting::spirits::{Spirit, SpiritError};
use crafting::tiles::TileError;
use serde_json::json;

use crate::testing::{at, complex, simple, GameTestScenario};

mod testing;

#[test]
fn test_out_of_range_read_returns_outside_tile() {
    let scenario = GameTestScenario::new();
    let world = scenario.world();
    assert_eq!(scenario.tile(world, at(-1, 0)).spirit, Spirit::Simple(BARRIER));
    assert_eq!(scenario.tile(world, at(10, 3)).spirit, Spirit::Simple(BARRIER));
    assert_eq!(scenario.tile(world, at(3, 100)).spirit, Spirit::Simple(BARRIER));
}

#[test]
fn test_out_of_range_write_is_ignored() {
    let mut scenario = GameTestScenario::new();
    let world = scenario.world();
    let tile = scenario.game.known.simple_tile(MATTERITE).unwrap();
    scenario
        .game
        .spirits
        .set_tile(world, at(20, 20), tile)
        .unwrap();
    let grid = scenario.game.spirits.get_grid(world).unwrap();
    assert!(grid.tiles().all(|(_, tile)| tile.is(&scenario.game.known.empty)));
}

#[test]
fn test_out_of_range_swap_is_reported() {
    let mut scenario = GameTestScenario::new();
    let world = scenario.world();
    let result = scenario.game.spirits.swap_tiles(world, at(0, 0), at(10, 0));
    assert!(matches!(
        result,
        Err(SpiritError::Tile(TileError::PositionOutOfRange { pos })) if pos == at(10, 0)
    ));
}

#[test]
fn test_spawn_skips_occupied_tile() {
    GameTestScenario::new()
        .given_barrier(at(3, 3))
        .given_player("Alice", at(3, 3))
        .then_player_should_be_at("Alice", at(4, 3));
}

#[test]
fn test_spawn_wraps_to_next_row() {
    GameTestScenario::new()
        .given_barrier(at(9, 2))
        .given_player("Alice", at(9, 2))
        .then_player_should_be_at("Alice", at(0, 3));
}

#[test]
fn test_players_do_not_share_tiles() {
    GameTestScenario::new()
        .given_player("Alice", at(2, 2))
        .given_player("Boris", at(2, 2))
        .then_player_should_be_at("Alice", at(2, 2))
        .then_player_should_be_at("Boris", at(3, 2));
}

#[test]
fn test_player_walks_to_empty_tile() {
    GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .when_player_performs("Alice", |_| WalkPlayer { offset: at(1, 0) })
        .then_command_should_succeed()
        .then_player_should_be_at("Alice", at(1, 0))
        .then_world_tile_should_be_empty(at(0, 0));
}

#[test]
fn test_player_can_not_walk_into_barrier() {
    GameTestScenario::new()
        .given_barrier(at(0, 1))
        .given_player("Alice", at(0, 0))
        .when_player_performs("Alice", |_| WalkPlayer { offset: at(0, 1) })
        .then_command_should_fail(|_| ActionError::TileNotEmpty { pos: at(0, 1) })
        .then_player_should_be_at("Alice", at(0, 0));
}

#[test]
fn test_player_can_not_leave_world() {
    GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .when_player_performs("Alice", |_| WalkPlayer { offset: at(-1, 0) })
        .then_command_should_fail(|_| ActionError::TileNotEmpty { pos: at(-1, 0) });
}

#[test]
fn test_player_can_not_jump() {
    GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .when_player_performs("Alice", |_| WalkPlayer { offset: at(1, 1) })
        .then_command_should_fail(|_| ActionError::TargetUnreachable { pos: at(1, 1) });
}

#[test]
fn test_player_can_not_walk_beyond_coordinate_range() {
    GameTestScenario::new()
        .given_player("Alice", at(3, 3))
        .when_player_performs("Alice", |_| WalkPlayer {
            offset: at(i32::MAX, 0),
        })
        .then_command_should_fail(|_| ActionError::TargetUnreachable {
            pos: at(i32::MAX, 0),
        })
        .when_player_performs("Alice", |_| WalkPlayer {
            offset: at(0, i32::MIN),
        })
        .then_command_should_fail(|_| ActionError::TargetUnreachable {
            pos: at(0, i32::MIN),
        })
        .then_player_should_be_at("Alice", at(3, 3));
}

#[test]
fn test_extreme_target_positions_are_unreachable() {
    GameTestScenario::new()
        .given_player("Alice", at(3, 3))
        .given_mine_budget("Alice", 4.0)
        .given_items("Alice", MATTERITE, 1)
        .when_player_performs("Alice", |_| MineTile {
            pos: at(i32::MIN, 0),
        })
        .then_command_should_fail(|_| ActionError::TargetUnreachable {
            pos: at(i32::MIN, 0),
        })
        .when_player_performs("Alice", |_| PlaceWorldTile {
            pos: at(i32::MIN, i32::MAX),
            spirit_reference: simple(MATTERITE),
        })
        .then_command_should_fail(|_| ActionError::TargetUnreachable {
            pos: at(i32::MIN, i32::MAX),
        })
        .then_item_count_should_be("Alice", Spirit::Simple(MATTERITE), 1);
}

#[test]
fn test_mining_matterite() {
    GameTestScenario::new()
        .given_tile(MATTERITE, at(5, 5))
        .given_player("Alice", at(5, 4))
        .given_mine_budget("Alice", 4.0)
        .when_player_performs("Alice", |_| MineTile { pos: at(5, 5) })
        .then_client_commands_should_be(|given| {
            vec![UpdateInventoryItem {
                inventory_update: json!({
                    "parentSpiritId": given.player("Alice"),
                    "count": 1,
                    "spirit": 2,
                }),
            }]
        })
        .then_world_tile_should_be_empty(at(5, 5))
        .then_item_count_should_be("Alice", Spirit::Simple(MATTERITE), 1);
}

#[test]
fn test_mining_requires_budget() {
    GameTestScenario::new()
        .given_tile(MATTERITE, at(5, 5))
        .given_player("Alice", at(5, 4))
        .given_mine_budget("Alice", 0.5)
        .when_player_performs("Alice", |_| MineTile { pos: at(5, 5) })
        .then_command_should_fail(|_| ActionError::MineBudgetExceeded {
            required: 1.0,
            budget: 0.5,
        })
        .then_world_tile_should_be(at(5, 5), MATTERITE)
        .when_time_passes(1.0)
        .when_player_performs("Alice", |_| MineTile { pos: at(5, 5) })
        .then_command_should_succeed()
        .then_world_tile_should_be_empty(at(5, 5));
}

#[test]
fn test_mining_budget_is_capped() {
    let scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .when_time_passes(100.0);
    let alice = scenario.player("Alice");
    let budget = scenario.game.spirits.get_player(alice).unwrap().mine_budget;
    assert_eq!(budget, scenario.game.settings.max_mine_budget);
}

#[test]
fn test_mining_requires_adjacency() {
    GameTestScenario::new()
        .given_tile(MATTERITE, at(5, 5))
        .given_player("Alice", at(5, 3))
        .given_mine_budget("Alice", 4.0)
        .when_player_performs("Alice", |_| MineTile { pos: at(5, 5) })
        .then_command_should_fail(|_| ActionError::TargetUnreachable { pos: at(5, 5) })
        .then_world_tile_should_be(at(5, 5), MATTERITE);
}

#[test]
fn test_mined_machine_can_be_placed_again() {
    let scenario = GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .given_machine_in_world("machine", at(1, 0))
        .given_mine_budget("Alice", 4.0)
        .when_player_performs("Alice", |_| MineTile { pos: at(1, 0) })
        .then_command_should_succeed()
        .then_world_tile_should_be_empty(at(1, 0));
    let machine = scenario.spirit("machine");
    let alice = scenario.player("Alice");
    assert_eq!(scenario.count(alice, Spirit::Complex(machine)), 1);
    assert_eq!(
        scenario.game.spirits.get_spirit(machine).unwrap().parent,
        Some(alice)
    );
    let scenario = scenario
        .when_player_performs("Alice", |given| PlaceWorldTile {
            pos: at(0, 1),
            spirit_reference: complex(given.spirit("machine")),
        })
        .then_command_should_succeed();
    let world = scenario.world();
    let spirit = scenario.game.spirits.get_spirit(machine).unwrap();
    assert_eq!(spirit.parent, Some(world));
    assert_eq!(spirit.parent_tile.map(|address| address.pos), Some(at(0, 1)));
    assert_eq!(scenario.count(alice, Spirit::Complex(machine)), 0);
}

#[test]
fn test_placing_on_occupied_tile_is_rejected() {
    GameTestScenario::new()
        .given_barrier(at(1, 0))
        .given_player("Alice", at(0, 0))
        .given_items("Alice", MATTERITE, 1)
        .when_player_performs("Alice", |_| PlaceWorldTile {
            pos: at(1, 0),
            spirit_reference: crate::testing::simple(MATTERITE),
        })
        .then_command_should_fail(|_| ActionError::TileNotEmpty { pos: at(1, 0) })
        .then_item_count_should_be("Alice", Spirit::Simple(MATTERITE), 1);
}

#[test]
fn test_tiles_window_around_player() {
    GameTestScenario::new()
        .given_player("Alice", at(0, 0))
        .when_player_performs("Alice", |_| GetTiles)
        .then_client_commands_should_be(|given| {
            let alice = json!({
                "classId": "player",
                "id": given.player("Alice"),
                "username": "Alice",
            });
            vec![SetWorldTileGrid {
                tile_grid: json!({
                    "pos": {"x": -2, "y": -1},
                    "tiles": [
                        1, 1, 1, 1, 1,
                        1, 1, alice, 0, 0,
                        1, 1, 0, 0, 0,
                    ],
                    "width": 5,
                    "height": 3,
                }),
            }]
        });
}
