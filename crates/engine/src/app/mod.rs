mod input;
mod loop_runner;
mod metrics;
mod port;
mod rendering;
mod sprite;
mod tilemap;

pub use input::Buttons;
pub use loop_runner::{run_loop, LoopConfig, LoopExit, Simulation};
pub use metrics::LoopMetricsSnapshot;
pub use port::{DisplayPort, FrameSignal, HeadlessPort, PortError, Rgba};
pub use rendering::{WindowPort, WindowPortConfig};
pub use sprite::{
    SpriteError, SpriteHandle, SpritePool, SpriteSize, SpriteSlot, POOL_CAPACITY, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
pub use tilemap::{TileMap, TileMapError, TILE_SIZE_PX};
