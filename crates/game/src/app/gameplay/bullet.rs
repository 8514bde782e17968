pub(crate) struct Bullet {
    sprite: SpriteHandle,
    pub(crate) x: i32,
    pub(crate) y: i32,
    dx: i32,
    dy: i32,
    pub(crate) active: bool,
}

impl Bullet {
    fn create(pool: &mut SpritePool) -> Result<Self, SpriteError> {
        let sprite = pool.acquire(
            0,
            0,
            SpriteSize::Size8x8,
            false,
            false,
            BULLET_HIDDEN_TILE,
            PLAYER_PRIORITY,
        )?;
        Ok(Self {
            sprite,
            x: 0,
            y: 0,
            dx: 0,
            dy: 0,
            active: false,
        })
    }

    fn reset(&mut self, pool: &mut SpritePool) {
        self.deactivate(pool);
    }

    /// Launch from the shooter's center, one unit of velocity along the
    /// current facing.
    fn fire(&mut self, pool: &mut SpritePool, shooter_x: i32, shooter_y: i32, facing: Facing) {
        self.x = shooter_x + BULLET_SPAWN_OFFSET_PX;
        self.y = shooter_y + BULLET_SPAWN_OFFSET_PX;
        let (dx, dy) = facing.delta();
        self.dx = dx;
        self.dy = dy;
        self.active = true;
        pool.set_tile_offset(self.sprite, BULLET_ACTIVE_TILE);
        pool.set_position(self.sprite, self.x, self.y);
    }

    fn update(&mut self, pool: &mut SpritePool) {
        if self.active {
            self.x += self.dx;
            self.y += self.dy;
            if self.x < 0 || self.y < 0 || self.x > SCREEN_WIDTH || self.y > SCREEN_HEIGHT {
                self.deactivate(pool);
            }
        }
        pool.set_position(self.sprite, self.x, self.y);
    }

    fn deactivate(&mut self, pool: &mut SpritePool) {
        self.x = 0;
        self.y = 0;
        self.dx = 0;
        self.dy = 0;
        self.active = false;
        pool.set_tile_offset(self.sprite, BULLET_HIDDEN_TILE);
        pool.set_position(self.sprite, self.x, self.y);
    }

    /// Center-point hit test: the bullet's center strictly inside the
    /// slime's 16x16 box.
    fn hits(&self, slime: &Slime) -> bool {
        if !self.active || !slime.is_active() {
            return false;
        }
        let center_x = self.x + BULLET_CENTER_OFFSET_PX;
        let center_y = self.y + BULLET_CENTER_OFFSET_PX;
        center_x > slime.x
            && center_x < slime.x + BODY_SIZE_PX
            && center_y > slime.y
            && center_y < slime.y + BODY_SIZE_PX
    }
}
