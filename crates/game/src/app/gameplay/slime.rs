fn initial_delay(id: u8) -> i32 {
    SLIME_SPAWN_DELAYS[(id as usize).saturating_sub(1).min(SLIME_COUNT - 1)]
}

fn move_cadence(wave: u32) -> i32 {
    (BASE_MOVE_CADENCE - wave as i32).max(1)
}

pub(crate) struct Slime {
    sprite: SpriteHandle,
    pub(crate) id: u8,
    pub(crate) x: i32,
    pub(crate) y: i32,
    dead: bool,
    /// Ticks until (re)spawn while non-negative; the negative sentinel
    /// marks the slime as active on the field.
    delay: i32,
    wait: i32,
}

impl Slime {
    fn create(pool: &mut SpritePool, id: u8) -> Result<Self, SpriteError> {
        let sprite = pool.acquire(
            SLIME_PARK_X,
            SLIME_PARK_Y,
            SpriteSize::Size16x16,
            false,
            false,
            SLIME_BASE_TILE,
            SLIME_PRIORITY,
        )?;
        Ok(Self {
            sprite,
            id,
            x: SLIME_PARK_X,
            y: SLIME_PARK_Y,
            dead: false,
            delay: initial_delay(id),
            wait: SLIME_INITIAL_WAIT,
        })
    }

    fn reset(&mut self, pool: &mut SpritePool) {
        self.x = SLIME_PARK_X;
        self.y = SLIME_PARK_Y;
        self.dead = false;
        self.delay = initial_delay(self.id);
        self.wait = SLIME_INITIAL_WAIT;
        pool.set_position(self.sprite, self.x, self.y);
        pool.set_tile_offset(self.sprite, SLIME_BASE_TILE);
    }

    /// Identity-keyed entry point at the screen edge.
    fn spawn_point(&self) -> (i32, i32) {
        match self.id {
            1 => (120, 0),
            2 => (120, 144),
            3 => (16, 80),
            _ => (224, 80),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        !self.dead && self.delay < 0
    }

    /// Countdown/park/teleport handling; active slimes just republish
    /// their position.
    fn update_lifecycle(&mut self, pool: &mut SpritePool) {
        if self.delay < 0 {
            pool.set_position(self.sprite, self.x, self.y);
            return;
        }
        if self.delay == 0 {
            let (spawn_x, spawn_y) = self.spawn_point();
            self.x = spawn_x;
            self.y = spawn_y;
            self.dead = false;
            self.delay = ACTIVE_SENTINEL;
            pool.set_position(self.sprite, self.x, self.y);
            debug!(slime = self.id, x = self.x, y = self.y, "slime_spawned");
        } else {
            self.delay -= 1;
            pool.set_position(self.sprite, SLIME_PARK_X, SLIME_PARK_Y);
        }
    }

    fn kill(&mut self, pool: &mut SpritePool, respawn_delay_ticks: i32) {
        self.dead = true;
        self.x = SLIME_PARK_X;
        self.y = SLIME_PARK_Y;
        self.delay = respawn_delay_ticks;
        pool.set_position(self.sprite, self.x, self.y);
    }

    /// One chase step toward the player: larger |delta| wins the axis,
    /// ties and zero horizontal delta prefer vertical. A blocked step is
    /// retried every tick; only a taken step resets the cadence.
    fn chase(
        &mut self,
        pool: &mut SpritePool,
        map: &TileMap,
        xscroll: i32,
        yscroll: i32,
        player_x: i32,
        player_y: i32,
        wave: u32,
    ) {
        if self.wait > 0 {
            self.wait -= 1;
            return;
        }

        let dx = player_x - self.x;
        let dy = player_y - self.y;
        let step = if dx == 0 || (dy != 0 && dy.abs() >= dx.abs()) {
            if dy < 0 {
                Facing::Up
            } else {
                Facing::Down
            }
        } else if dx > 0 {
            Facing::Right
        } else {
            Facing::Left
        };

        if !step_is_clear(map, xscroll, yscroll, self.x, self.y, step) {
            return;
        }

        let (step_dx, step_dy) = step.delta();
        self.x += step_dx;
        self.y += step_dy;
        pool.set_position(self.sprite, self.x, self.y);
        self.wait = move_cadence(wave) - 1;
    }

    /// Counter-shift against a scroll step so the slime stays put in map
    /// space.
    fn shift(&mut self, pool: &mut SpritePool, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
        pool.set_position(self.sprite, self.x, self.y);
    }
}
