const MAP_EDGE_TILES: u32 = 64;
const CLEARING_WIDTH_TILES: u32 = 30;
const CLEARING_HEIGHT_TILES: u32 = 20;

const TILE_GRASS_DARK: u16 = 0;
const TILE_CLIFF: u16 = 1;
const TILE_WATER: u16 = 2;
const TILE_GRASS: u16 = 3;
const TILE_GRASS_LIGHT: u16 = 4;
const TILE_TREE: u16 = 5;
const TILE_ROCK: u16 = 6;

/// Deterministic 64x64 forest: a cliff ring, an open starting clearing
/// covering the first screen, and scattered trees, rocks and a pond
/// beyond it. All obstacles come from the blocking tile set.
pub(crate) fn build_forest_map() -> Result<TileMap, TileMapError> {
    let mut rows = vec![TILE_GRASS; (MAP_EDGE_TILES * MAP_EDGE_TILES) as usize];
    for tile_y in 0..MAP_EDGE_TILES {
        for tile_x in 0..MAP_EDGE_TILES {
            let index = (tile_y * MAP_EDGE_TILES + tile_x) as usize;
            rows[index] = forest_tile(tile_x, tile_y);
        }
    }
    TileMap::from_rows(MAP_EDGE_TILES, MAP_EDGE_TILES, rows)
}

fn forest_tile(tile_x: u32, tile_y: u32) -> u16 {
    let edge = MAP_EDGE_TILES - 1;
    if tile_x == 0 || tile_y == 0 || tile_x == edge || tile_y == edge {
        return TILE_CLIFF;
    }
    // The spawn clearing matches the initial screen and stays walkable.
    if tile_x < CLEARING_WIDTH_TILES && tile_y < CLEARING_HEIGHT_TILES {
        return grass_tile(tile_x, tile_y);
    }
    if (40..48).contains(&tile_x) && (40..44).contains(&tile_y) {
        return TILE_WATER;
    }
    if (tile_x * 7 + tile_y * 13) % 31 == 0 {
        return TILE_TREE;
    }
    if (tile_x * 11 + tile_y * 3) % 43 == 0 {
        return TILE_ROCK;
    }
    grass_tile(tile_x, tile_y)
}

fn grass_tile(tile_x: u32, tile_y: u32) -> u16 {
    match (tile_x + tile_y) % 3 {
        0 => TILE_GRASS_DARK,
        1 => TILE_GRASS,
        _ => TILE_GRASS_LIGHT,
    }
}

pub(crate) fn tile_palette() -> Vec<Rgba> {
    vec![
        [58, 92, 48, 255],   // dark grass
        [104, 104, 112, 255], // cliff
        [52, 86, 150, 255],  // water
        [74, 112, 56, 255],  // grass
        [88, 126, 66, 255],  // light grass
        [38, 70, 40, 255],   // tree
        [120, 102, 80, 255], // rock
    ]
}

/// Solid colors keyed by sprite tile offset. Alpha zero hides the tile,
/// which is how the inactive bullet frame stays invisible.
pub(crate) fn sprite_sheet_colors() -> Vec<Rgba> {
    let mut colors = vec![[0, 0, 0, 0]; 1024];
    let player_frames: [u16; 8] = [0, 8, 16, 24, 32, 40, 48, 56];
    for &frame in &player_frames {
        colors[frame as usize] = [228, 196, 144, 255];
    }
    colors[SLIME_BASE_TILE as usize] = [140, 70, 160, 255];
    colors[BULLET_ACTIVE_TILE as usize] = [244, 220, 92, 255];
    colors[BULLET_HIDDEN_TILE as usize] = [0, 0, 0, 0];
    colors
}
