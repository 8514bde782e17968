use thiserror::Error;

pub const TILE_SIZE_PX: i32 = 8;

const BLOCK_EDGE_TILES: u32 = 32;
const BLOCK_TILE_COUNT: usize = 0x400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileMapError {
    #[error("tile map edges must each be 32 or 64 tiles, got {width}x{height}")]
    UnsupportedEdge { width: u32, height: u32 },
    #[error("tile count mismatch: expected {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
    #[error("tile index {index} out of range for backing array of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Immutable tile grid backed by 32x32 blocks at fixed additive offsets,
/// the layout scroll hardware expects: right half at +0x400, bottom half
/// at +0x800 (64-wide) or +0x400 (32-wide), compounding in the corner.
#[derive(Debug, Clone)]
pub struct TileMap {
    width_tiles: u32,
    height_tiles: u32,
    tiles: Vec<u16>,
}

impl TileMap {
    /// Build from a backing array already in block layout.
    pub fn from_blocks(
        width_tiles: u32,
        height_tiles: u32,
        tiles: Vec<u16>,
    ) -> Result<Self, TileMapError> {
        if !is_supported_edge(width_tiles) || !is_supported_edge(height_tiles) {
            return Err(TileMapError::UnsupportedEdge {
                width: width_tiles,
                height: height_tiles,
            });
        }
        let expected = (width_tiles as usize) * (height_tiles as usize);
        if tiles.len() != expected {
            return Err(TileMapError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width_tiles,
            height_tiles,
            tiles,
        })
    }

    /// Build from a plain row-major grid, converting into block layout.
    pub fn from_rows(
        width_tiles: u32,
        height_tiles: u32,
        rows: Vec<u16>,
    ) -> Result<Self, TileMapError> {
        let mut map = Self::from_blocks(
            width_tiles,
            height_tiles,
            vec![0; (width_tiles as usize) * (height_tiles as usize)],
        )?;
        if rows.len() != map.tiles.len() {
            return Err(TileMapError::TileCountMismatch {
                expected: map.tiles.len(),
                actual: rows.len(),
            });
        }
        for tile_y in 0..height_tiles {
            for tile_x in 0..width_tiles {
                let row_major = (tile_y * width_tiles + tile_x) as usize;
                let block = map.block_index(tile_x, tile_y);
                map.tiles[block] = rows[row_major];
            }
        }
        Ok(map)
    }

    pub fn width_tiles(&self) -> u32 {
        self.width_tiles
    }

    pub fn height_tiles(&self) -> u32 {
        self.height_tiles
    }

    pub fn width_px(&self) -> i32 {
        self.width_tiles as i32 * TILE_SIZE_PX
    }

    pub fn height_px(&self) -> i32 {
        self.height_tiles as i32 * TILE_SIZE_PX
    }

    fn block_index(&self, tile_x: u32, tile_y: u32) -> usize {
        let mut x = tile_x;
        let mut y = tile_y;
        let mut offset = 0usize;
        if self.width_tiles > BLOCK_EDGE_TILES && x >= BLOCK_EDGE_TILES {
            x -= BLOCK_EDGE_TILES;
            offset += BLOCK_TILE_COUNT;
        }
        if self.height_tiles > BLOCK_EDGE_TILES && y >= BLOCK_EDGE_TILES {
            y -= BLOCK_EDGE_TILES;
            offset += if self.width_tiles > BLOCK_EDGE_TILES {
                2 * BLOCK_TILE_COUNT
            } else {
                BLOCK_TILE_COUNT
            };
        }
        offset + (y * BLOCK_EDGE_TILES + x) as usize
    }

    /// Tile id under a screen-space pixel, given the current scroll.
    /// Coordinates wrap, so the map tiles infinitely in both axes.
    pub fn try_lookup(
        &self,
        x: i32,
        y: i32,
        xscroll: i32,
        yscroll: i32,
    ) -> Result<u16, TileMapError> {
        let mut tile_x = (x + xscroll) >> 3;
        let mut tile_y = (y + yscroll) >> 3;
        let width = self.width_tiles as i32;
        let height = self.height_tiles as i32;

        while tile_x >= width {
            tile_x -= width;
        }
        while tile_x < 0 {
            tile_x += width;
        }
        while tile_y >= height {
            tile_y -= height;
        }
        while tile_y < 0 {
            tile_y += height;
        }

        let index = self.block_index(tile_x as u32, tile_y as u32);
        self.tiles
            .get(index)
            .copied()
            .ok_or(TileMapError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            })
    }

    pub fn lookup(&self, x: i32, y: i32, xscroll: i32, yscroll: i32) -> u16 {
        self.try_lookup(x, y, xscroll, yscroll).unwrap_or(0)
    }
}

fn is_supported_edge(edge_tiles: u32) -> bool {
    edge_tiles == BLOCK_EDGE_TILES || edge_tiles == 2 * BLOCK_EDGE_TILES
}
