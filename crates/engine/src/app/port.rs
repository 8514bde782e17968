use pixels::{Error as PixelsError, TextureError};
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use super::input::Buttons;
use super::sprite::SpriteSlot;
use super::tilemap::TileMap;

pub type Rgba = [u8; 4];

/// What `await_frame` resolved to: another frame boundary, or the host
/// asking the loop to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    Frame,
    Quit,
}

#[derive(Debug, Error)]
pub enum PortError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[source] PixelsError),
    #[error("failed to resize render surface: {0}")]
    ResizeSurface(#[source] TextureError),
    #[error("failed to present frame: {0}")]
    Present(#[source] PixelsError),
}

/// The one seam between the simulation core and the host. The core polls
/// buttons, blocks on the frame boundary, and publishes scroll plus the
/// whole sprite attribute table exactly once per tick.
pub trait DisplayPort {
    /// One-time installation of the background layer and its colors.
    fn install_tile_map(&mut self, map: TileMap, palette: Vec<Rgba>);

    /// One-time installation of per-tile-offset sprite colors. An alpha
    /// of zero marks the tile as hidden.
    fn install_sprite_sheet(&mut self, colors: Vec<Rgba>);

    /// Level state of the pad right now. No debouncing.
    fn poll_buttons(&mut self) -> Buttons;

    /// Block until the next frame boundary. This is the sole time base of
    /// the simulation.
    fn await_frame(&mut self) -> Result<FrameSignal, PortError>;

    fn publish_scroll(&mut self, x: i16, y: i16);

    fn publish_sprites(&mut self, table: &[SpriteSlot]) -> Result<(), PortError>;
}

/// Port for tests and headless runs: buttons come from a script, frame
/// waits return immediately, and everything published is recorded.
#[derive(Debug, Default)]
pub struct HeadlessPort {
    script: Vec<Buttons>,
    cursor: usize,
    hold_last: bool,
    scroll_history: Vec<(i16, i16)>,
    publish_count: usize,
    last_table: Vec<SpriteSlot>,
    tile_map: Option<TileMap>,
    sprite_colors: Vec<Rgba>,
}

impl HeadlessPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a fixed sequence of per-tick button states. When `hold_last`
    /// is set the final entry repeats forever; otherwise the pad goes
    /// silent after the script ends.
    pub fn scripted(script: Vec<Buttons>, hold_last: bool) -> Self {
        Self {
            script,
            hold_last,
            ..Self::default()
        }
    }

    pub fn scroll_history(&self) -> &[(i16, i16)] {
        &self.scroll_history
    }

    pub fn publish_count(&self) -> usize {
        self.publish_count
    }

    pub fn last_table(&self) -> &[SpriteSlot] {
        &self.last_table
    }

    pub fn installed_tile_map(&self) -> Option<&TileMap> {
        self.tile_map.as_ref()
    }

    pub fn installed_sprite_colors(&self) -> &[Rgba] {
        &self.sprite_colors
    }
}

impl DisplayPort for HeadlessPort {
    fn install_tile_map(&mut self, map: TileMap, _palette: Vec<Rgba>) {
        self.tile_map = Some(map);
    }

    fn install_sprite_sheet(&mut self, colors: Vec<Rgba>) {
        self.sprite_colors = colors;
    }

    fn poll_buttons(&mut self) -> Buttons {
        match self.script.get(self.cursor) {
            Some(&buttons) => {
                self.cursor += 1;
                buttons
            }
            None if self.hold_last => self.script.last().copied().unwrap_or(Buttons::NONE),
            None => Buttons::NONE,
        }
    }

    fn await_frame(&mut self) -> Result<FrameSignal, PortError> {
        Ok(FrameSignal::Frame)
    }

    fn publish_scroll(&mut self, x: i16, y: i16) {
        self.scroll_history.push((x, y));
    }

    fn publish_sprites(&mut self, table: &[SpriteSlot]) -> Result<(), PortError> {
        self.publish_count += 1;
        self.last_table.clear();
        self.last_table.extend_from_slice(table);
        Ok(())
    }
}
