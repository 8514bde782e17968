/// The whole simulation: entity set, map, scroll and wave bookkeeping.
/// Stepped once per frame by the engine runner.
pub(crate) struct GameWorld {
    pool: SpritePool,
    map: TileMap,
    player: Player,
    bullets: Vec<Bullet>,
    slimes: Vec<Slime>,
    xscroll: i32,
    yscroll: i32,
    kills: u32,
    wave: u32,
    bullet_cooldown: u32,
    config: GameConfig,
}

impl GameWorld {
    pub(crate) fn new(config: &GameConfig, map: TileMap) -> Result<Self, SpriteError> {
        let mut pool = SpritePool::new();
        let player = Player::create(&mut pool, config)?;
        let bullets = (0..BULLET_COUNT)
            .map(|_| Bullet::create(&mut pool))
            .collect::<Result<Vec<_>, _>>()?;
        let slimes = (1..=SLIME_COUNT as u8)
            .map(|id| Slime::create(&mut pool, id))
            .collect::<Result<Vec<_>, _>>()?;

        info!(sprites = pool.allocated(), "world_created");
        Ok(Self {
            pool,
            map,
            player,
            bullets,
            slimes,
            xscroll: 0,
            yscroll: 0,
            kills: 0,
            wave: 0,
            bullet_cooldown: 0,
            config: config.clone(),
        })
    }

    fn step(&mut self, buttons: Buttons) {
        self.player.update(&mut self.pool);
        for bullet in &mut self.bullets {
            bullet.update(&mut self.pool);
        }
        for slime in &mut self.slimes {
            slime.update_lifecycle(&mut self.pool);
        }

        self.handle_movement(buttons);
        self.handle_firing(buttons);

        for slime in &mut self.slimes {
            if slime.is_active() {
                slime.chase(
                    &mut self.pool,
                    &self.map,
                    self.xscroll,
                    self.yscroll,
                    self.player.x,
                    self.player.y,
                    self.wave,
                );
            }
        }

        self.resolve_bullet_hits();
        if self.bullet_cooldown > 0 {
            self.bullet_cooldown -= 1;
        }

        let wave = wave_for_kills(self.kills);
        if wave != self.wave {
            info!(wave, kills = self.kills, "wave_advanced");
            self.wave = wave;
        }

        self.resolve_player_contact();
        self.player.decay_invincibility();

        if self.player.health <= 0 {
            info!("player_defeated");
            self.reset_party();
        }
    }

    /// Directional pad priority is right > left > up > down; with no
    /// direction held the player idles.
    fn handle_movement(&mut self, buttons: Buttons) {
        let facing = if buttons.contains(Buttons::RIGHT) {
            Some(Facing::Right)
        } else if buttons.contains(Buttons::LEFT) {
            Some(Facing::Left)
        } else if buttons.contains(Buttons::UP) {
            Some(Facing::Up)
        } else if buttons.contains(Buttons::DOWN) {
            Some(Facing::Down)
        } else {
            None
        };

        let Some(facing) = facing else {
            self.player.stop(&mut self.pool);
            return;
        };

        let outcome = self
            .player
            .walk(&mut self.pool, &self.map, self.xscroll, self.yscroll, facing);
        if outcome == StepOutcome::ScrollEdge {
            let (dx, dy) = facing.delta();
            self.xscroll += dx;
            self.yscroll += dy;
            // Slimes live in screen coordinates; shift them against the
            // scroll so they stay put on the map.
            for slime in &mut self.slimes {
                slime.shift(&mut self.pool, -dx, -dy);
            }
        }
    }

    fn handle_firing(&mut self, buttons: Buttons) {
        if !buttons.contains(Buttons::A) || self.bullet_cooldown > 0 {
            return;
        }
        let (shooter_x, shooter_y, facing) = (self.player.x, self.player.y, self.player.facing);
        if let Some(bullet) = self.bullets.iter_mut().find(|bullet| !bullet.active) {
            bullet.fire(&mut self.pool, shooter_x, shooter_y, facing);
            self.bullet_cooldown = self.config.bullet_cooldown_ticks;
            debug!(facing = ?facing, "bullet_fired");
        }
    }

    /// Every bullet against every slime; a kill is counted exactly once,
    /// at the impact that set the slime dead.
    fn resolve_bullet_hits(&mut self) {
        for bullet in &mut self.bullets {
            for slime in &mut self.slimes {
                if bullet.hits(slime) {
                    bullet.deactivate(&mut self.pool);
                    slime.kill(&mut self.pool, self.config.respawn_delay_ticks);
                    self.kills = self.kills.saturating_add(1);
                    info!(slime = slime.id, kills = self.kills, "slime_killed");
                }
            }
        }
    }

    fn resolve_player_contact(&mut self) {
        for slime in &self.slimes {
            if slime.is_active()
                && boxes_touch(self.player.x, self.player.y, slime.x, slime.y)
                && self.player.take_damage(self.config.invincibility_ticks)
            {
                info!(
                    slime = slime.id,
                    health = self.player.health,
                    "player_damaged"
                );
            }
        }
    }

    /// Full-party reset on defeat. Sprite handles are reused, identities
    /// stay distinct, and the camera keeps its scroll.
    fn reset_party(&mut self) {
        self.player.reset(&mut self.pool, &self.config);
        for bullet in &mut self.bullets {
            bullet.reset(&mut self.pool);
        }
        for slime in &mut self.slimes {
            slime.reset(&mut self.pool);
        }
        self.kills = 0;
        self.wave = 0;
        self.bullet_cooldown = 0;
        info!("party_reset");
    }
}

impl Simulation for GameWorld {
    fn tick(&mut self, buttons: Buttons) {
        self.step(buttons);
    }

    fn scroll(&self) -> (i16, i16) {
        (self.xscroll as i16, self.yscroll as i16)
    }

    fn sprite_table(&self) -> &[SpriteSlot] {
        self.pool.table()
    }
}
