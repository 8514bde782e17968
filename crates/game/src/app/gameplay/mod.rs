use engine::{
    Buttons, Rgba, Simulation, SpriteError, SpriteHandle, SpritePool, SpriteSize, SpriteSlot,
    TileMap, TileMapError, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use tracing::{debug, info};

use super::config::GameConfig;

const BLOCKING_TILES: [u16; 4] = [1, 2, 5, 6];
const BODY_SIZE_PX: i32 = 16;

const PLAYER_SPAWN_X: i32 = 100;
const PLAYER_SPAWN_Y: i32 = 113;
const PLAYER_PRIORITY: u16 = 1;
const ANIMATION_DELAY_TICKS: u32 = 8;

const BULLET_COUNT: usize = 3;
const BULLET_ACTIVE_TILE: u16 = 88;
const BULLET_HIDDEN_TILE: u16 = 90;
const BULLET_SPAWN_OFFSET_PX: i32 = 8;
const BULLET_CENTER_OFFSET_PX: i32 = 4;

const SLIME_COUNT: usize = 4;
const SLIME_BASE_TILE: u16 = 64;
const SLIME_PRIORITY: u16 = 2;
const SLIME_PARK_X: i32 = 240;
const SLIME_PARK_Y: i32 = 240;
const SLIME_INITIAL_WAIT: i32 = 6;
const SLIME_SPAWN_DELAYS: [i32; SLIME_COUNT] = [100, 400, 800, 1000];
const ACTIVE_SENTINEL: i32 = -1;
const BASE_MOVE_CADENCE: i32 = 6;

const WAVE_KILLS_PER_STEP: u32 = 5;
const WAVE_MAX: u32 = 5;

include!("types.rs");
include!("mover.rs");
include!("player.rs");
include!("bullet.rs");
include!("slime.rs");
include!("director.rs");
include!("map.rs");
include!("world.rs");

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
