use std::time::{Duration, Instant};

use tracing::info;

use super::input::Buttons;
use super::metrics::MetricsAccumulator;
use super::port::{DisplayPort, FrameSignal, PortError};
use super::sprite::SpriteSlot;

/// One whole game simulation, stepped once per frame by the runner.
pub trait Simulation {
    fn tick(&mut self, buttons: Buttons);

    /// Current background scroll, published after every tick.
    fn scroll(&self) -> (i16, i16);

    /// The full sprite attribute table, published after every tick.
    fn sprite_table(&self) -> &[SpriteSlot];
}

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub metrics_log_interval: Duration,
    /// Stop after this many ticks; `None` runs until the port quits.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            metrics_log_interval: Duration::from_secs(1),
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    WindowClosed,
    TickBudgetExhausted,
}

/// Fixed-cadence loop: poll, tick, block on the port's frame boundary,
/// then publish scroll and the whole sprite table exactly once.
pub fn run_loop(
    port: &mut dyn DisplayPort,
    simulation: &mut dyn Simulation,
    config: &LoopConfig,
) -> Result<LoopExit, PortError> {
    let metrics_log_interval = if config.metrics_log_interval.is_zero() {
        Duration::from_secs(1)
    } else {
        config.metrics_log_interval
    };
    let mut metrics = MetricsAccumulator::new(metrics_log_interval);
    let mut ticks_run: u64 = 0;
    let mut last_tick_instant = Instant::now();

    loop {
        let buttons = port.poll_buttons();
        simulation.tick(buttons);
        ticks_run = ticks_run.saturating_add(1);

        if port.await_frame()? == FrameSignal::Quit {
            info!(ticks_run, reason = "window_close", "shutdown_requested");
            return Ok(LoopExit::WindowClosed);
        }

        let (scroll_x, scroll_y) = simulation.scroll();
        port.publish_scroll(scroll_x, scroll_y);
        port.publish_sprites(simulation.sprite_table())?;

        let now = Instant::now();
        metrics.record_tick(now.saturating_duration_since(last_tick_instant));
        last_tick_instant = now;
        if let Some(snapshot) = metrics.maybe_snapshot(now) {
            info!(
                tps = snapshot.tps,
                frame_time_ms = snapshot.frame_time_ms,
                "loop_metrics"
            );
        }

        if let Some(limit) = config.max_ticks {
            if ticks_run >= limit {
                info!(ticks_run, "tick_budget_exhausted");
                return Ok(LoopExit::TickBudgetExhausted);
            }
        }
    }
}
