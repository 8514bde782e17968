pub mod app;

pub use app::{
    run_loop, Buttons, DisplayPort, FrameSignal, HeadlessPort, LoopConfig, LoopExit,
    LoopMetricsSnapshot, PortError, Rgba, Simulation, SpriteError, SpriteHandle, SpritePool,
    SpriteSize, SpriteSlot, TileMap, TileMapError, WindowPort, WindowPortConfig, POOL_CAPACITY,
    SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE_PX,
};
