use thiserror::Error;

pub const POOL_CAPACITY: usize = 128;
pub const SCREEN_WIDTH: i32 = 240;
pub const SCREEN_HEIGHT: i32 = 160;

const Y_MASK: u16 = 0x00ff;
const X_MASK: u16 = 0x01ff;
const TILE_MASK: u16 = 0x03ff;
const HFLIP_BIT: u16 = 1 << 12;
const VFLIP_BIT: u16 = 1 << 13;
const COLOR_256_BIT: u16 = 1 << 13;
const SHAPE_SHIFT: u16 = 14;
const SIZE_SHIFT: u16 = 14;
const PRIORITY_SHIFT: u16 = 10;

/// Hardware shape/size classes. Only a few are used by the game but the
/// attribute encoding supports the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSize {
    Size8x8,
    Size16x16,
    Size32x32,
    Size64x64,
    Size16x8,
    Size32x8,
    Size32x16,
    Size64x32,
    Size8x16,
    Size8x32,
    Size16x32,
    Size32x64,
}

impl SpriteSize {
    /// (shape bits for attribute 0, size bits for attribute 1).
    const fn class_bits(self) -> (u16, u16) {
        match self {
            SpriteSize::Size8x8 => (0, 0),
            SpriteSize::Size16x16 => (0, 1),
            SpriteSize::Size32x32 => (0, 2),
            SpriteSize::Size64x64 => (0, 3),
            SpriteSize::Size16x8 => (1, 0),
            SpriteSize::Size32x8 => (1, 1),
            SpriteSize::Size32x16 => (1, 2),
            SpriteSize::Size64x32 => (1, 3),
            SpriteSize::Size8x16 => (2, 0),
            SpriteSize::Size8x32 => (2, 1),
            SpriteSize::Size16x32 => (2, 2),
            SpriteSize::Size32x64 => (2, 3),
        }
    }

    pub const fn extent_px(self) -> (i32, i32) {
        match self {
            SpriteSize::Size8x8 => (8, 8),
            SpriteSize::Size16x16 => (16, 16),
            SpriteSize::Size32x32 => (32, 32),
            SpriteSize::Size64x64 => (64, 64),
            SpriteSize::Size16x8 => (16, 8),
            SpriteSize::Size32x8 => (32, 8),
            SpriteSize::Size32x16 => (32, 16),
            SpriteSize::Size64x32 => (64, 32),
            SpriteSize::Size8x16 => (8, 16),
            SpriteSize::Size8x32 => (8, 32),
            SpriteSize::Size16x32 => (16, 32),
            SpriteSize::Size32x64 => (32, 64),
        }
    }

    const fn from_class_bits(shape: u16, size: u16) -> Self {
        match (shape & 0x3, size & 0x3) {
            (0, 0) => SpriteSize::Size8x8,
            (0, 1) => SpriteSize::Size16x16,
            (0, 2) => SpriteSize::Size32x32,
            (0, _) => SpriteSize::Size64x64,
            (1, 0) => SpriteSize::Size16x8,
            (1, 1) => SpriteSize::Size32x8,
            (1, 2) => SpriteSize::Size32x16,
            (1, _) => SpriteSize::Size64x32,
            (_, 0) => SpriteSize::Size8x16,
            (_, 1) => SpriteSize::Size8x32,
            (_, 2) => SpriteSize::Size16x32,
            (_, _) => SpriteSize::Size32x64,
        }
    }
}

/// One slot of the attribute table: three packed 16-bit words, mirroring
/// the hardware layout so position writes wrap rather than saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteSlot {
    attribute0: u16,
    attribute1: u16,
    attribute2: u16,
}

impl SpriteSlot {
    #[allow(clippy::too_many_arguments)]
    fn encode(
        x: i32,
        y: i32,
        size: SpriteSize,
        horizontal_flip: bool,
        vertical_flip: bool,
        tile_offset: u16,
        priority: u16,
    ) -> Self {
        let (shape_bits, size_bits) = size.class_bits();
        let mut slot = Self {
            attribute0: COLOR_256_BIT | (shape_bits << SHAPE_SHIFT),
            attribute1: size_bits << SIZE_SHIFT,
            attribute2: (priority & 0x3) << PRIORITY_SHIFT,
        };
        slot.set_position(x, y);
        slot.set_horizontal_flip(horizontal_flip);
        slot.set_vertical_flip(vertical_flip);
        slot.set_tile_offset(tile_offset);
        slot
    }

    /// Parked just past the visible screen in both axes.
    fn parked() -> Self {
        Self::encode(
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            SpriteSize::Size8x8,
            false,
            false,
            0,
            0,
        )
    }

    fn set_position(&mut self, x: i32, y: i32) {
        // y wraps to 8 bits, x to 9 bits; wrap, never saturate.
        self.attribute0 = (self.attribute0 & !Y_MASK) | (y as u16 & Y_MASK);
        self.attribute1 = (self.attribute1 & !X_MASK) | (x as u16 & X_MASK);
    }

    fn set_horizontal_flip(&mut self, flipped: bool) {
        if flipped {
            self.attribute1 |= HFLIP_BIT;
        } else {
            self.attribute1 &= !HFLIP_BIT;
        }
    }

    fn set_vertical_flip(&mut self, flipped: bool) {
        if flipped {
            self.attribute1 |= VFLIP_BIT;
        } else {
            self.attribute1 &= !VFLIP_BIT;
        }
    }

    fn set_tile_offset(&mut self, tile_offset: u16) {
        self.attribute2 = (self.attribute2 & !TILE_MASK) | (tile_offset & TILE_MASK);
    }

    pub fn x(&self) -> i32 {
        (self.attribute1 & X_MASK) as i32
    }

    pub fn y(&self) -> i32 {
        (self.attribute0 & Y_MASK) as i32
    }

    /// x decoded as a signed coordinate so sprites can slide off the left
    /// edge: raw values near the top of the 9-bit range read as negative.
    pub fn signed_x(&self) -> i32 {
        let raw = self.x();
        if raw >= 0x200 - 64 {
            raw - 0x200
        } else {
            raw
        }
    }

    /// Same treatment for y over the 8-bit range.
    pub fn signed_y(&self) -> i32 {
        let raw = self.y();
        if raw >= 0x100 - 64 {
            raw - 0x100
        } else {
            raw
        }
    }

    pub fn tile_offset(&self) -> u16 {
        self.attribute2 & TILE_MASK
    }

    pub fn priority(&self) -> u16 {
        (self.attribute2 >> PRIORITY_SHIFT) & 0x3
    }

    pub fn horizontal_flip(&self) -> bool {
        self.attribute1 & HFLIP_BIT != 0
    }

    pub fn vertical_flip(&self) -> bool {
        self.attribute1 & VFLIP_BIT != 0
    }

    pub fn size(&self) -> SpriteSize {
        SpriteSize::from_class_bits(self.attribute0 >> SHAPE_SHIFT, self.attribute1 >> SIZE_SHIFT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpriteError {
    #[error("sprite pool exhausted: all {POOL_CAPACITY} slots in use")]
    PoolExhausted,
}

/// Index into the pool, only obtainable from `SpritePool::acquire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(usize);

impl SpriteHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed-capacity attribute table with a monotonic allocation counter.
/// There is no per-handle release; `reset_all` is the only way back.
#[derive(Debug)]
pub struct SpritePool {
    slots: Vec<SpriteSlot>,
    next_index: usize,
}

impl Default for SpritePool {
    fn default() -> Self {
        Self::new()
    }
}

impl SpritePool {
    pub fn new() -> Self {
        Self {
            slots: vec![SpriteSlot::parked(); POOL_CAPACITY],
            next_index: 0,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn acquire(
        &mut self,
        x: i32,
        y: i32,
        size: SpriteSize,
        horizontal_flip: bool,
        vertical_flip: bool,
        tile_offset: u16,
        priority: u16,
    ) -> Result<SpriteHandle, SpriteError> {
        if self.next_index >= POOL_CAPACITY {
            return Err(SpriteError::PoolExhausted);
        }
        let handle = SpriteHandle(self.next_index);
        self.slots[handle.0] = SpriteSlot::encode(
            x,
            y,
            size,
            horizontal_flip,
            vertical_flip,
            tile_offset,
            priority,
        );
        self.next_index += 1;
        Ok(handle)
    }

    pub fn set_position(&mut self, handle: SpriteHandle, x: i32, y: i32) {
        self.slots[handle.0].set_position(x, y);
    }

    pub fn move_by(&mut self, handle: SpriteHandle, dx: i32, dy: i32) {
        let slot = self.slots[handle.0];
        self.set_position(handle, slot.x() + dx, slot.y() + dy);
    }

    pub fn set_horizontal_flip(&mut self, handle: SpriteHandle, flipped: bool) {
        self.slots[handle.0].set_horizontal_flip(flipped);
    }

    pub fn set_vertical_flip(&mut self, handle: SpriteHandle, flipped: bool) {
        self.slots[handle.0].set_vertical_flip(flipped);
    }

    pub fn set_tile_offset(&mut self, handle: SpriteHandle, tile_offset: u16) {
        self.slots[handle.0].set_tile_offset(tile_offset);
    }

    pub fn slot(&self, handle: SpriteHandle) -> SpriteSlot {
        self.slots[handle.0]
    }

    /// Every slot parked off-screen and the allocation counter rewound.
    /// Previously issued handles keep addressing the same slots.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            *slot = SpriteSlot::parked();
        }
        self.next_index = 0;
    }

    pub fn allocated(&self) -> usize {
        self.next_index
    }

    pub fn table(&self) -> &[SpriteSlot] {
        &self.slots
    }
}
