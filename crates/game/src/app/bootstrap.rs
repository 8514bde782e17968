use engine::{DisplayPort, LoopConfig, WindowPort, WindowPortConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config;
use super::gameplay::{build_forest_map, sprite_sheet_colors, tile_palette, GameWorld};

pub(crate) struct AppWiring {
    pub(crate) loop_config: LoopConfig,
    pub(crate) port: WindowPort,
    pub(crate) world: GameWorld,
}

pub(crate) fn build_app() -> Result<AppWiring, String> {
    init_tracing();
    info!("=== Forest Run Startup ===");

    let game_config = config::load_config()?;
    let map = build_forest_map().map_err(|error| format!("build map: {error}"))?;
    let world = GameWorld::new(&game_config, map.clone())
        .map_err(|error| format!("create world: {error}"))?;

    let mut port = WindowPort::new(&WindowPortConfig {
        window_title: game_config.window_title.clone(),
        window_scale: game_config.window_scale,
        target_tps: game_config.target_tps,
    })
    .map_err(|error| format!("open window: {error}"))?;
    port.install_tile_map(map, tile_palette());
    port.install_sprite_sheet(sprite_sheet_colors());

    let loop_config = LoopConfig {
        max_ticks: game_config.max_ticks,
        ..LoopConfig::default()
    };

    Ok(AppWiring {
        loop_config,
        port,
        world,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
