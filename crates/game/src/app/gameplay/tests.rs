    use super::*;

    fn open_map() -> TileMap {
        TileMap::from_rows(32, 32, vec![TILE_GRASS; 32 * 32]).expect("map")
    }

    fn map_with_blocks(blocks: &[(u32, u32)]) -> TileMap {
        let mut rows = vec![TILE_GRASS; 32 * 32];
        for &(tile_x, tile_y) in blocks {
            rows[(tile_y * 32 + tile_x) as usize] = TILE_TREE;
        }
        TileMap::from_rows(32, 32, rows).expect("map")
    }

    fn world_with_map(map: TileMap) -> GameWorld {
        GameWorld::new(&GameConfig::default(), map).expect("world")
    }

    fn open_world() -> GameWorld {
        world_with_map(open_map())
    }

    fn tick_n(world: &mut GameWorld, buttons: Buttons, ticks: u32) {
        for _ in 0..ticks {
            world.tick(buttons);
        }
    }

    /// Put slime `index` on the field at a fixed spot and freeze its
    /// chase cadence so a test controls every variable but the one under
    /// test.
    fn place_frozen_slime(world: &mut GameWorld, index: usize, x: i32, y: i32) {
        let slime = &mut world.slimes[index];
        slime.delay = ACTIVE_SENTINEL;
        slime.dead = false;
        slime.x = x;
        slime.y = y;
        slime.wait = i32::MAX;
    }

    #[test]
    fn player_starts_at_spawn_with_full_health() {
        let world = open_world();
        assert_eq!((world.player.x, world.player.y), (PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(world.player.health, 3);
        assert_eq!(world.scroll(), (0, 0));
    }

    #[test]
    fn walking_moves_one_pixel_per_tick() {
        let mut world = open_world();
        tick_n(&mut world, Buttons::UP, 5);
        assert_eq!((world.player.x, world.player.y), (PLAYER_SPAWN_X, PLAYER_SPAWN_Y - 5));
    }

    #[test]
    fn pad_priority_is_right_left_up_down() {
        let mut world = open_world();
        world.tick(Buttons::RIGHT | Buttons::LEFT | Buttons::UP | Buttons::DOWN);
        assert_eq!(world.player.x, PLAYER_SPAWN_X + 1);

        let mut world = open_world();
        world.tick(Buttons::UP | Buttons::DOWN);
        assert_eq!(world.player.y, PLAYER_SPAWN_Y - 1);
    }

    #[test]
    fn blocking_tile_at_either_leading_corner_stops_the_step() {
        // Wall column at tile x 15 (px 120..128); the right-edge probes
        // reach it once the player's leading edge is at x 120.
        let top_probe_only = map_with_blocks(&[(15, 14)]);
        let mut world = world_with_map(top_probe_only);
        tick_n(&mut world, Buttons::RIGHT, 10);
        assert_eq!(world.player.x, 104);

        let bottom_probe_only = map_with_blocks(&[(15, 16)]);
        let mut world = world_with_map(bottom_probe_only);
        tick_n(&mut world, Buttons::RIGHT, 10);
        assert_eq!(world.player.x, 104);

        // Facing still turns even though the body cannot move.
        assert_eq!(world.player.facing, Facing::Right);
    }

    #[test]
    fn firing_activates_the_first_free_bullet_at_player_center() {
        let mut world = open_world();
        world.tick(Buttons::A);

        let bullet = &world.bullets[0];
        assert!(bullet.active);
        assert_eq!(bullet.x, PLAYER_SPAWN_X + BULLET_SPAWN_OFFSET_PX);
        assert_eq!(bullet.y, PLAYER_SPAWN_Y + BULLET_SPAWN_OFFSET_PX);
        assert_eq!(
            world.pool.slot(bullet.sprite).tile_offset(),
            BULLET_ACTIVE_TILE
        );
        assert!(!world.bullets[1].active);
    }

    #[test]
    fn shared_cooldown_blocks_rapid_fire() {
        let mut world = open_world();
        tick_n(&mut world, Buttons::A, 20);
        let active = world.bullets.iter().filter(|bullet| bullet.active).count();
        assert_eq!(active, 1);

        // One more tick crosses the 20-tick cooldown boundary.
        world.tick(Buttons::A);
        let active = world.bullets.iter().filter(|bullet| bullet.active).count();
        assert_eq!(active, 2);
    }

    #[test]
    fn firing_with_all_three_bullets_active_is_a_no_op() {
        let mut world = open_world();
        for _ in 0..3 {
            world.bullet_cooldown = 0;
            world.tick(Buttons::A);
        }
        assert!(world.bullets.iter().all(|bullet| bullet.active));

        world.bullet_cooldown = 0;
        world.tick(Buttons::A);
        assert!(world.bullets.iter().all(|bullet| bullet.active));
        // No bullet fired, so no cooldown was armed either.
        assert_eq!(world.bullet_cooldown, 0);
    }

    #[test]
    fn bullet_leaving_the_screen_deactivates_and_hides() {
        let mut world = open_world();
        world.tick(Buttons::UP); // face up
        world.tick(Buttons::A);
        assert!(world.bullets[0].active);

        tick_n(&mut world, Buttons::NONE, 130);
        let bullet = &world.bullets[0];
        assert!(!bullet.active);
        assert_eq!((bullet.x, bullet.y), (0, 0));
        assert_eq!(
            world.pool.slot(bullet.sprite).tile_offset(),
            BULLET_HIDDEN_TILE
        );
    }

    #[test]
    fn slime_spawns_at_identity_point_after_initial_delay() {
        let mut world = open_world();
        world.slimes[0].delay = 0;
        world.tick(Buttons::NONE);

        assert!(world.slimes[0].is_active());
        assert_eq!((world.slimes[0].x, world.slimes[0].y), (120, 0));
    }

    #[test]
    fn inactive_slimes_stay_parked_off_map() {
        let mut world = open_world();
        tick_n(&mut world, Buttons::NONE, 50);
        for slime in &world.slimes {
            assert!(!slime.is_active());
            assert_eq!((slime.x, slime.y), (SLIME_PARK_X, SLIME_PARK_Y));
        }
    }

    #[test]
    fn active_slime_steps_once_every_six_ticks_at_wave_zero() {
        let mut world = open_world();
        world.slimes[0].delay = 0;
        world.tick(Buttons::NONE); // spawn at (120, 0)
        world.slimes[0].wait = 0;

        let mut move_ticks = Vec::new();
        let mut last_y = world.slimes[0].y;
        for tick in 1..=18 {
            world.tick(Buttons::NONE);
            if world.slimes[0].y != last_y {
                move_ticks.push(tick);
                last_y = world.slimes[0].y;
            }
        }

        assert_eq!(move_ticks, vec![1, 7, 13]);
    }

    #[test]
    fn slime_chase_prefers_vertical_on_equal_deltas() {
        let mut world = open_world();
        let (player_x, player_y) = (world.player.x, world.player.y);
        place_frozen_slime(&mut world, 0, player_x + 20, player_y + 20);
        world.slimes[0].wait = 0;
        world.tick(Buttons::NONE);

        // |dx| == |dy|: the vertical axis wins.
        assert_eq!(world.slimes[0].y, world.player.y + 19);
        assert_eq!(world.slimes[0].x, world.player.x + 20);
    }

    #[test]
    fn slime_chase_moves_horizontally_when_that_delta_dominates() {
        let mut world = open_world();
        let (player_x, player_y) = (world.player.x, world.player.y);
        place_frozen_slime(&mut world, 0, player_x + 30, player_y + 5);
        world.slimes[0].wait = 0;
        let start_x = world.slimes[0].x;
        world.tick(Buttons::NONE);

        assert_eq!(world.slimes[0].x, start_x - 1);
    }

    #[test]
    fn blocked_slime_retries_every_tick_until_clear() {
        // Wall in the row the slime's top edge probes; the player sits
        // due north so every chase step is an upward attempt.
        let map = map_with_blocks(&[(15, 10), (16, 10), (17, 10)]);
        let mut world = world_with_map(map);
        world.player.x = 124;
        world.player.y = 20;
        place_frozen_slime(&mut world, 0, 124, 80);
        world.slimes[0].wait = 0;

        tick_n(&mut world, Buttons::NONE, 10);
        assert_eq!((world.slimes[0].x, world.slimes[0].y), (124, 80));
    }

    #[test]
    fn bullet_impact_kills_once_and_arms_respawn() {
        let mut world = open_world();
        place_frozen_slime(&mut world, 0, 120, 0);
        world.player.x = 120;
        world.player.y = 48;
        world.tick(Buttons::UP); // face up
        world.tick(Buttons::A);

        let mut ticks_to_kill = None;
        for tick in 0..100 {
            if world.kills == 1 {
                ticks_to_kill = Some(tick);
                break;
            }
            world.tick(Buttons::NONE);
        }

        assert!(ticks_to_kill.is_some(), "bullet never connected");
        assert!(!world.slimes[0].is_active());
        assert_eq!(
            (world.slimes[0].x, world.slimes[0].y),
            (SLIME_PARK_X, SLIME_PARK_Y)
        );
        assert!(!world.bullets[0].active);

        // The kill is counted at the impact event, exactly once.
        tick_n(&mut world, Buttons::NONE, 20);
        assert_eq!(world.kills, 1);
    }

    #[test]
    fn killed_slime_respawns_at_identity_point_after_500_ticks() {
        let mut world = open_world();
        place_frozen_slime(&mut world, 1, 100, 100);
        world.slimes[1].kill(&mut world.pool, world.config.respawn_delay_ticks);

        tick_n(&mut world, Buttons::NONE, 500);
        assert!(!world.slimes[1].is_active());
        assert_eq!(
            (world.slimes[1].x, world.slimes[1].y),
            (SLIME_PARK_X, SLIME_PARK_Y)
        );

        world.tick(Buttons::NONE);
        assert!(world.slimes[1].is_active());
        assert_eq!((world.slimes[1].x, world.slimes[1].y), (120, 144));
    }

    #[test]
    fn wave_curve_steps_every_five_kills_and_caps() {
        assert_eq!(wave_for_kills(0), 0);
        assert_eq!(wave_for_kills(4), 0);
        assert_eq!(wave_for_kills(5), 1);
        assert_eq!(wave_for_kills(14), 2);
        assert_eq!(wave_for_kills(25), 5);
        assert_eq!(wave_for_kills(1000), 5);
    }

    #[test]
    fn cadence_tightens_with_wave_but_never_reaches_zero() {
        assert_eq!(move_cadence(0), 6);
        assert_eq!(move_cadence(3), 3);
        assert_eq!(move_cadence(5), 1);
        assert_eq!(move_cadence(9), 1);
    }

    #[test]
    fn contact_damage_respects_the_invincibility_window() {
        let mut world = open_world();
        let (player_x, player_y) = (world.player.x, world.player.y);
        place_frozen_slime(&mut world, 0, player_x, player_y);

        world.tick(Buttons::NONE);
        assert_eq!(world.player.health, 2);

        // Continuous overlap for the rest of the window: no second hit.
        tick_n(&mut world, Buttons::NONE, 29);
        assert_eq!(world.player.health, 2);

        // First tick past the window lands the next hit.
        world.tick(Buttons::NONE);
        assert_eq!(world.player.health, 1);
    }

    #[test]
    fn party_resets_when_health_runs_out() {
        let mut world = open_world();
        world.xscroll = 7;
        world.kills = 12;
        world.wave = wave_for_kills(12);
        world.player.health = 1;
        let (player_x, player_y) = (world.player.x, world.player.y);
        place_frozen_slime(&mut world, 2, player_x, player_y);

        world.tick(Buttons::NONE);

        assert_eq!(world.player.health, 3);
        assert_eq!((world.player.x, world.player.y), (PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(world.kills, 0);
        assert_eq!(world.wave, 0);
        for (index, slime) in world.slimes.iter().enumerate() {
            assert_eq!(slime.id as usize, index + 1);
            assert_eq!(slime.delay, SLIME_SPAWN_DELAYS[index]);
            assert!(!slime.is_active());
        }
        // The camera keeps its scroll through a reset.
        assert_eq!(world.scroll().0, 7);
        // Handles were reused, not re-acquired.
        assert_eq!(world.pool.allocated(), 8);
    }

    #[test]
    fn border_law_walking_left_scrolls_instead_of_crossing_the_margin() {
        let mut world = open_world();

        tick_n(&mut world, Buttons::LEFT, 40);
        assert_eq!(world.player.x, 60);
        assert_eq!(world.scroll(), (0, 0));

        tick_n(&mut world, Buttons::LEFT, 20);
        assert_eq!(world.player.x, 40);
        assert_eq!(world.scroll(), (0, 0));

        tick_n(&mut world, Buttons::LEFT, 5);
        assert_eq!(world.player.x, 40);
        assert_eq!(world.scroll(), (-5, 0));
    }

    #[test]
    fn slimes_counter_shift_against_scroll() {
        let mut world = open_world();
        place_frozen_slime(&mut world, 0, 200, 20);
        world.player.x = 40; // already at the left margin

        world.tick(Buttons::LEFT);
        assert_eq!(world.scroll(), (-1, 0));
        assert_eq!(world.slimes[0].x, 201);
    }

    #[test]
    fn idle_player_shows_facing_rest_pose() {
        let mut world = open_world();
        tick_n(&mut world, Buttons::UP, 3);
        world.tick(Buttons::NONE);

        let slot = world.pool.slot(world.player.sprite);
        assert_eq!(slot.tile_offset(), rest_tile(Facing::Up));
        assert!(!world.player.walking);
    }

    #[test]
    fn walking_left_mirrors_the_sprite() {
        let mut world = open_world();
        world.tick(Buttons::LEFT);
        assert!(world.pool.slot(world.player.sprite).horizontal_flip());

        world.tick(Buttons::RIGHT);
        assert!(!world.pool.slot(world.player.sprite).horizontal_flip());
    }

    #[test]
    fn walk_cycle_alternates_between_stride_frames() {
        let mut world = open_world();
        let mut seen = Vec::new();
        for _ in 0..40 {
            world.tick(Buttons::DOWN);
            let tile = world.pool.slot(world.player.sprite).tile_offset();
            if !seen.contains(&tile) {
                seen.push(tile);
            }
        }
        assert!(seen.contains(&8), "stride frames seen: {seen:?}");
        assert!(seen.contains(&16), "stride frames seen: {seen:?}");
    }

    #[test]
    fn sprite_table_tracks_entity_positions() {
        let mut world = open_world();
        tick_n(&mut world, Buttons::RIGHT, 4);

        let table = world.sprite_table();
        let player_slot = table[world.player.sprite.index()];
        assert_eq!(player_slot.x(), world.player.x);
        assert_eq!(player_slot.y(), world.player.y);
    }

    #[test]
    fn forest_map_builds_with_walkable_clearing_and_solid_border() {
        let map = build_forest_map().expect("map");

        for tile_y in 1..CLEARING_HEIGHT_TILES {
            for tile_x in 1..CLEARING_WIDTH_TILES {
                let tile = map.lookup(tile_x as i32 * 8, tile_y as i32 * 8, 0, 0);
                assert!(!is_blocking(tile), "blocked clearing at ({tile_x},{tile_y})");
            }
        }
        for edge in 0..64 {
            assert!(is_blocking(map.lookup(edge * 8, 0, 0, 0)));
            assert!(is_blocking(map.lookup(0, edge * 8, 0, 0)));
        }
    }

    #[test]
    fn sprite_sheet_hides_the_inactive_bullet_frame() {
        let colors = sprite_sheet_colors();
        assert_eq!(colors[BULLET_HIDDEN_TILE as usize][3], 0);
        assert_ne!(colors[BULLET_ACTIVE_TILE as usize][3], 0);
        assert_ne!(colors[SLIME_BASE_TILE as usize][3], 0);
    }
