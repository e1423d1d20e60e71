mod craft_recipe;
mod get_tiles;
mod inspect_spirit;
mod login;
mod mine_circuit_tile;
mod mine_tile;
mod place_circuit_tile;
mod place_world_tile;
mod recycle_item;
mod transfer_item;
mod walk_player;
