use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

pub(crate) const CONFIG_ENV_VAR: &str = "FORESTRUN_CONFIG";
const CONFIG_FILE_NAME: &str = "forestrun.config.json";

pub(crate) type ConfigResult<T> = Result<T, String>;

/// Runtime tunables. Every field has a default, so the config file is
/// optional; a present file must parse and validate in full.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) window_title: String,
    pub(crate) window_scale: u32,
    pub(crate) target_tps: u32,
    pub(crate) player_health: i32,
    pub(crate) invincibility_ticks: i32,
    pub(crate) bullet_cooldown_ticks: u32,
    pub(crate) respawn_delay_ticks: i32,
    pub(crate) border_margin_px: i32,
    /// Stop after this many ticks. For headless/CI runs; `None` in play.
    pub(crate) max_ticks: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Forest Run".to_string(),
            window_scale: 3,
            target_tps: 60,
            player_health: 3,
            invincibility_ticks: 30,
            bullet_cooldown_ticks: 20,
            respawn_delay_ticks: 500,
            border_margin_px: 40,
            max_ticks: None,
        }
    }
}

/// Resolve the config path from the environment, falling back to the
/// default file name in the working directory.
pub(crate) fn load_config() -> ConfigResult<GameConfig> {
    let path = match env::var(CONFIG_ENV_VAR) {
        Ok(value) => PathBuf::from(value),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };
    load_config_from(&path)
}

pub(crate) fn load_config_from(path: &Path) -> ConfigResult<GameConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config_file_absent_using_defaults");
        return Ok(GameConfig::default());
    }
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("read config '{}': {error}", path.display()))?;
    let config = parse_config_json(&raw)?;
    validate_config(&config)?;
    info!(path = %path.display(), "config_loaded");
    Ok(config)
}

fn parse_config_json(raw: &str) -> ConfigResult<GameConfig> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer) {
        Ok(config) => Ok(config),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(format!("parse config json: {source}"))
            } else {
                Err(format!("parse config json at {path}: {source}"))
            }
        }
    }
}

fn validate_config(config: &GameConfig) -> ConfigResult<()> {
    if config.window_scale == 0 || config.window_scale > 8 {
        return Err(format!(
            "window_scale must be between 1 and 8, got {}",
            config.window_scale
        ));
    }
    if config.target_tps == 0 || config.target_tps > 240 {
        return Err(format!(
            "target_tps must be between 1 and 240, got {}",
            config.target_tps
        ));
    }
    if config.player_health < 1 {
        return Err(format!(
            "player_health must be at least 1, got {}",
            config.player_health
        ));
    }
    if config.invincibility_ticks < 0 {
        return Err(format!(
            "invincibility_ticks must not be negative, got {}",
            config.invincibility_ticks
        ));
    }
    if config.respawn_delay_ticks < 1 {
        return Err(format!(
            "respawn_delay_ticks must be at least 1, got {}",
            config.respawn_delay_ticks
        ));
    }
    // The player box is 16 px; the margins must leave room between them
    // on the short screen axis.
    if config.border_margin_px < 0 || config.border_margin_px > 72 {
        return Err(format!(
            "border_margin_px must be between 0 and 72, got {}",
            config.border_margin_px
        ));
    }
    Ok(())
}
