mod can_inspect;
mod is_item_owned;
mod is_player_placed;
mod is_target_reachable;
mod is_tile_empty;
