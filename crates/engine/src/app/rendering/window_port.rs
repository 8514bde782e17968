use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::app::input::PadCollector;
use crate::app::port::{DisplayPort, FrameSignal, PortError, Rgba};
use crate::app::sprite::{SpriteSlot, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::app::tilemap::TileMap;
use crate::app::Buttons;

const FALLBACK_TILE_COLOR: Rgba = [30, 30, 36, 255];
const FALLBACK_SPRITE_COLOR: Rgba = [220, 220, 240, 255];

#[derive(Debug, Clone)]
pub struct WindowPortConfig {
    pub window_title: String,
    /// Integer upscale of the 240x160 framebuffer.
    pub window_scale: u32,
    pub target_tps: u32,
}

impl Default for WindowPortConfig {
    fn default() -> Self {
        Self {
            window_title: "Forest Run".to_string(),
            window_scale: 3,
            target_tps: 60,
        }
    }
}

/// Windowed host port: winit for events and pacing, pixels for the
/// fixed-resolution framebuffer. Events are pumped rather than run on a
/// callback loop so `await_frame` can stay blocking.
pub struct WindowPort {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    pad: PadCollector,
    quit_requested: bool,
    pending_error: Option<PortError>,
    frame_interval: Duration,
    next_frame_deadline: Instant,
    scroll_x: i16,
    scroll_y: i16,
    tile_map: Option<TileMap>,
    tile_palette: Vec<Rgba>,
    sprite_colors: Vec<Rgba>,
    sprite_table: Vec<SpriteSlot>,
}

impl WindowPort {
    pub fn new(config: &WindowPortConfig) -> Result<Self, PortError> {
        let scale = config.window_scale.max(1);
        let target_tps = config.target_tps.max(1);
        let event_loop = EventLoop::new().map_err(PortError::CreateEventLoop)?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.window_title.clone())
                .with_inner_size(LogicalSize::new(
                    (SCREEN_WIDTH as u32 * scale) as f64,
                    (SCREEN_HEIGHT as u32 * scale) as f64,
                ))
                .with_resizable(false)
                .build(&event_loop)
                .map_err(PortError::CreateWindow)?,
        );
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface)
            .map_err(PortError::CreateSurface)?;

        let frame_interval = Duration::from_secs_f64(1.0 / target_tps as f64);
        info!(
            target_tps,
            window_scale = scale,
            "window_port_ready"
        );

        Ok(Self {
            event_loop,
            window,
            pixels,
            pad: PadCollector::default(),
            quit_requested: false,
            pending_error: None,
            frame_interval,
            next_frame_deadline: Instant::now() + frame_interval,
            scroll_x: 0,
            scroll_y: 0,
            tile_map: None,
            tile_palette: Vec::new(),
            sprite_colors: Vec::new(),
            // Empty until the first publish, so nothing phantom draws.
            sprite_table: Vec::new(),
        })
    }

    fn pump(&mut self) {
        let WindowPort {
            event_loop,
            window,
            pixels,
            pad,
            quit_requested,
            pending_error,
            ..
        } = self;

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, target| {
            if let Event::WindowEvent { window_id, event } = event {
                if window_id != window.id() {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            if let Err(error) = pixels.resize_surface(size.width, size.height) {
                                warn!(error = %error, "surface_resize_failed");
                                *pending_error = Some(PortError::ResizeSurface(error));
                                target.exit();
                            }
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        pad.handle_keyboard_input(&event);
                    }
                    _ => {}
                }
            }
        });

        if let PumpStatus::Exit(_) = status {
            *quit_requested = true;
        }
    }

    fn draw_frame(&mut self) {
        let frame = self.pixels.frame_mut();

        match &self.tile_map {
            Some(map) => {
                for y in 0..SCREEN_HEIGHT {
                    for x in 0..SCREEN_WIDTH {
                        let tile =
                            map.lookup(x, y, self.scroll_x as i32, self.scroll_y as i32) as usize;
                        let color = self
                            .tile_palette
                            .get(tile)
                            .copied()
                            .unwrap_or(FALLBACK_TILE_COLOR);
                        let offset = ((y * SCREEN_WIDTH + x) * 4) as usize;
                        frame[offset..offset + 4].copy_from_slice(&color);
                    }
                }
            }
            None => {
                for chunk in frame.chunks_exact_mut(4) {
                    chunk.copy_from_slice(&FALLBACK_TILE_COLOR);
                }
            }
        }

        // Lower slot indexes draw on top, so paint the table back to front.
        for slot in self.sprite_table.iter().rev() {
            let color = self
                .sprite_colors
                .get(slot.tile_offset() as usize)
                .copied()
                .unwrap_or(FALLBACK_SPRITE_COLOR);
            if color[3] == 0 {
                continue;
            }
            let (width, height) = slot.size().extent_px();
            let left = slot.signed_x();
            let top = slot.signed_y();
            for y in top.max(0)..(top + height).min(SCREEN_HEIGHT) {
                for x in left.max(0)..(left + width).min(SCREEN_WIDTH) {
                    let offset = ((y * SCREEN_WIDTH + x) * 4) as usize;
                    frame[offset..offset + 4].copy_from_slice(&color);
                }
            }
        }
    }

    fn pace(&mut self) {
        let now = Instant::now();
        if self.next_frame_deadline > now {
            thread::sleep(self.next_frame_deadline - now);
        }
        let now = Instant::now();
        self.next_frame_deadline += self.frame_interval;
        if self.next_frame_deadline < now {
            // Fell behind; restart the cadence instead of bursting.
            self.next_frame_deadline = now + self.frame_interval;
        }
    }
}

impl DisplayPort for WindowPort {
    fn install_tile_map(&mut self, map: TileMap, palette: Vec<Rgba>) {
        info!(
            width_tiles = map.width_tiles(),
            height_tiles = map.height_tiles(),
            palette_len = palette.len(),
            "tile_map_installed"
        );
        self.tile_map = Some(map);
        self.tile_palette = palette;
    }

    fn install_sprite_sheet(&mut self, colors: Vec<Rgba>) {
        self.sprite_colors = colors;
    }

    fn poll_buttons(&mut self) -> Buttons {
        self.pad.buttons()
    }

    fn await_frame(&mut self) -> Result<FrameSignal, PortError> {
        self.pump();
        if let Some(error) = self.pending_error.take() {
            return Err(error);
        }
        if self.quit_requested || self.pad.quit_requested() {
            return Ok(FrameSignal::Quit);
        }

        self.draw_frame();
        self.pixels.render().map_err(PortError::Present)?;
        self.pace();
        Ok(FrameSignal::Frame)
    }

    fn publish_scroll(&mut self, x: i16, y: i16) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    fn publish_sprites(&mut self, table: &[SpriteSlot]) -> Result<(), PortError> {
        self.sprite_table.clear();
        self.sprite_table.extend_from_slice(table);
        Ok(())
    }
}
