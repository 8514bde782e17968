const fn rest_tile(facing: Facing) -> u16 {
    match facing {
        Facing::Down => 0,
        Facing::Left | Facing::Right => 24,
        Facing::Up => 40,
    }
}

const fn walk_tiles(facing: Facing) -> (u16, u16) {
    match facing {
        Facing::Down => (8, 16),
        Facing::Left | Facing::Right => (24, 32),
        Facing::Up => (48, 56),
    }
}

pub(crate) struct Player {
    sprite: SpriteHandle,
    pub(crate) x: i32,
    pub(crate) y: i32,
    facing: Facing,
    walking: bool,
    animation_counter: u32,
    animation_phase: bool,
    pub(crate) health: i32,
    invincible: i32,
    border: i32,
}

impl Player {
    fn create(pool: &mut SpritePool, config: &GameConfig) -> Result<Self, SpriteError> {
        let sprite = pool.acquire(
            PLAYER_SPAWN_X,
            PLAYER_SPAWN_Y,
            SpriteSize::Size16x16,
            false,
            false,
            rest_tile(Facing::Down),
            PLAYER_PRIORITY,
        )?;
        Ok(Self {
            sprite,
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            facing: Facing::Down,
            walking: false,
            animation_counter: 0,
            animation_phase: false,
            health: config.player_health,
            invincible: 0,
            border: config.border_margin_px,
        })
    }

    /// Back to the spawn state, reusing the already-acquired sprite.
    fn reset(&mut self, pool: &mut SpritePool, config: &GameConfig) {
        self.x = PLAYER_SPAWN_X;
        self.y = PLAYER_SPAWN_Y;
        self.facing = Facing::Down;
        self.walking = false;
        self.animation_counter = 0;
        self.animation_phase = false;
        self.health = config.player_health;
        self.invincible = 0;
        pool.set_position(self.sprite, self.x, self.y);
        pool.set_tile_offset(self.sprite, rest_tile(Facing::Down));
        pool.set_horizontal_flip(self.sprite, false);
    }

    /// Attempt a 1 px step. Facing and walk mode update even when the
    /// step is blocked, so the body turns in place against walls.
    fn walk(
        &mut self,
        pool: &mut SpritePool,
        map: &TileMap,
        xscroll: i32,
        yscroll: i32,
        facing: Facing,
    ) -> StepOutcome {
        pool.set_horizontal_flip(self.sprite, facing == Facing::Left);
        self.facing = facing;
        self.walking = true;

        if !step_is_clear(map, xscroll, yscroll, self.x, self.y, facing) {
            return StepOutcome::Blocked;
        }
        if self.at_scroll_margin(facing) {
            return StepOutcome::ScrollEdge;
        }

        let (dx, dy) = facing.delta();
        self.x += dx;
        self.y += dy;
        pool.set_position(self.sprite, self.x, self.y);
        StepOutcome::Moved
    }

    fn at_scroll_margin(&self, facing: Facing) -> bool {
        match facing {
            Facing::Left => self.x <= self.border,
            Facing::Right => self.x >= SCREEN_WIDTH - BODY_SIZE_PX - self.border,
            Facing::Up => self.y <= self.border,
            Facing::Down => self.y >= SCREEN_HEIGHT - BODY_SIZE_PX - self.border,
        }
    }

    /// Idle: facing-dependent rest pose, counter primed so the next walk
    /// input swaps to a stride frame immediately.
    fn stop(&mut self, pool: &mut SpritePool) {
        self.walking = false;
        self.animation_counter = ANIMATION_DELAY_TICKS - 1;
        pool.set_tile_offset(self.sprite, rest_tile(self.facing));
    }

    fn update(&mut self, pool: &mut SpritePool) {
        if self.walking {
            self.animation_counter += 1;
            if self.animation_counter >= ANIMATION_DELAY_TICKS {
                self.animation_counter = 0;
                let (stride_a, stride_b) = walk_tiles(self.facing);
                let tile = if self.animation_phase {
                    stride_b
                } else {
                    stride_a
                };
                pool.set_tile_offset(self.sprite, tile);
                self.animation_phase = !self.animation_phase;
            }
        }
        pool.set_position(self.sprite, self.x, self.y);
    }

    /// Returns true when health actually dropped; contact during the
    /// invincibility window is absorbed.
    fn take_damage(&mut self, invincibility_ticks: i32) -> bool {
        if self.invincible > 0 {
            return false;
        }
        self.health -= 1;
        self.invincible = invincibility_ticks;
        true
    }

    fn decay_invincibility(&mut self) {
        self.invincible = self.invincible.saturating_sub(1);
    }
}
