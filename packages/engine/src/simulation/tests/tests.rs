use super::*;
use crate::elements::{
    EL_ACID, EL_ELECTRICITY, EL_FIRE, EL_GAS, EL_GUNPOWDER, EL_ICE, EL_LAVA, EL_MAGNET, EL_METAL,
    EL_OIL, EL_PLANT, EL_PLASMA, EL_SAND, EL_STEAM, EL_STONE, EL_VIRUS, EL_WATER, MAX_TEMP,
    MIN_TEMP,
};
use crate::systems::TickContext;

fn run(world: &mut WorldCore, ticks: u32) {
    for _ in 0..ticks {
        world.step();
    }
}

fn count_of(world: &WorldCore, element: ElementId) -> usize {
    world.grid.types.iter().filter(|&&t| t == element).count()
}

#[test]
fn empty_world_stays_empty() {
    let mut world = WorldCore::with_seed(16, 16, 3);
    run(&mut world, 10);

    assert_eq!(world.particle_count(), 0);
    assert!(world.grid.temperature.iter().all(|&t| t == AMBIENT_TEMP));
    assert_eq!(world.tick(), 10);
    assert_eq!(world.stats().cells_visited(), 0);
}

#[test]
fn sand_falls_one_row_per_tick() {
    let mut world = WorldCore::with_seed(8, 8, 1);
    assert!(world.set_cell(3, 0, EL_SAND));

    world.step();
    assert_eq!(world.get_type(3, 1), EL_SAND);
    assert_eq!(world.get_type(3, 0), EL_EMPTY);

    run(&mut world, 10);
    assert_eq!(world.get_type(3, 7), EL_SAND);
    assert_eq!(world.particle_count(), 1);
}

#[test]
fn reverse_gravity_sends_powder_to_row_zero() {
    let mut world = WorldCore::with_seed(8, 8, 2);
    world.set_reverse_gravity(true);
    assert!(world.set_cell(4, 7, EL_SAND));

    run(&mut world, 12);
    assert_eq!(world.get_type(4, 0), EL_SAND);
}

#[test]
fn inert_mixture_conserves_mass() {
    let mut world = WorldCore::with_seed(12, 12, 9);
    world.paint(Shape::Rect { x0: 0, y0: 0, x1: 11, y1: 1 }, EL_SAND);
    world.paint(Shape::Rect { x0: 0, y0: 2, x1: 11, y1: 3 }, EL_WATER);
    world.paint(Shape::Rect { x0: 0, y0: 4, x1: 5, y1: 4 }, EL_OIL);
    world.paint(Shape::Line { x0: 0, y0: 11, x1: 11, y1: 11 }, EL_STONE);
    let before = world.particle_count();

    for _ in 0..60 {
        world.step();
        assert_eq!(world.particle_count(), before);
    }
    assert_eq!(count_of(&world, EL_SAND), 24);
    assert_eq!(count_of(&world, EL_OIL), 6);
}

#[test]
fn cells_act_at_most_once_per_tick() {
    let mut world = WorldCore::with_seed(6, 6, 5);
    assert!(world.set_cell(1, 0, EL_SAND));
    assert!(world.set_cell(4, 0, EL_SAND));

    world.step();
    assert_eq!(world.stats().cells_visited(), 2);
    assert_eq!(world.stats().moves(), 2);
    assert_eq!(world.get_type(1, 1), EL_SAND);
    assert_eq!(world.get_type(4, 1), EL_SAND);
}

#[test]
fn sand_sinks_through_water_in_a_cup() {
    for seed in 0..10 {
        let mut world = WorldCore::with_seed(3, 3, seed);
        assert!(world.set_cell(0, 2, EL_STONE));
        assert!(world.set_cell(2, 2, EL_STONE));
        assert!(world.set_cell(1, 2, EL_WATER));
        assert!(world.set_cell(1, 1, EL_SAND));

        run(&mut world, 50);
        assert_eq!(world.get_type(1, 2), EL_SAND, "seed {seed}");
        assert_eq!(count_of(&world, EL_WATER), 1);
        assert_eq!(world.particle_count(), 4);
    }
}

#[test]
fn rising_plasma_leaves_stone_intact() {
    for seed in 0..20 {
        let mut world = WorldCore::with_seed(1, 2, seed);
        world.grid_mut().set_particle(0, 0, EL_STONE, 0, 20.0);
        world.grid_mut().set_particle(0, 1, EL_PLASMA, 25, 2000.0);

        world.step();
        assert_eq!(world.get_type(0, 0), EL_STONE, "seed {seed}");
        assert_eq!(world.get_type(0, 1), EL_PLASMA);
    }
}

#[test]
fn expiring_fire_leaves_steam_behind() {
    let mut smoked = 0;
    for seed in 0..10 {
        let mut world = WorldCore::with_seed(5, 5, seed);
        world.grid_mut().set_particle(2, 2, EL_FIRE, 1, 200.0);

        world.step();
        assert_eq!(count_of(&world, EL_FIRE), 0);
        assert_eq!(world.stats().decays(), 1);
        for (idx, &element) in world.grid.types.iter().enumerate() {
            if element != EL_EMPTY {
                assert_eq!(element, EL_STEAM);
                assert_eq!(world.grid.life[idx], 40);
            }
        }
        if count_of(&world, EL_STEAM) > 0 {
            smoked += 1;
        }
    }
    assert!(smoked > 0);
}

#[test]
fn expiring_steam_condenses_only_when_cool() {
    let mut world = WorldCore::with_seed(3, 3, 1);
    world.grid_mut().set_particle(1, 1, EL_STEAM, 1, 40.0);
    world.step();
    assert_eq!(world.get_type(1, 1), EL_WATER);

    let mut world = WorldCore::with_seed(3, 3, 1);
    world.grid_mut().set_particle(1, 1, EL_STEAM, 1, 150.0);
    world.step();
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn other_lifetimes_simply_vanish() {
    let mut world = WorldCore::with_seed(3, 3, 2);
    world.grid_mut().set_particle(0, 0, EL_ELECTRICITY, 1, 120.0);
    world.grid_mut().set_particle(2, 2, EL_VIRUS, 1, 20.0);

    world.step();
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.stats().decays(), 2);
}

#[test]
fn plasma_melts_neighbouring_ice() {
    for seed in 0..5 {
        let mut world = WorldCore::with_seed(2, 1, seed);
        world.grid_mut().set_particle(0, 0, EL_PLASMA, 25, 2000.0);
        world.grid_mut().set_particle(1, 0, EL_ICE, 0, -5.0);

        world.step();
        assert_eq!(count_of(&world, EL_ICE), 0, "seed {seed}");
        assert_eq!(count_of(&world, EL_WATER), 1);
    }
}

#[test]
fn acid_dissolves_metal_into_gas() {
    for seed in 0..3 {
        let mut world = WorldCore::with_seed(3, 1, seed);
        world.grid_mut().set_particle(0, 0, EL_METAL, 0, 20.0);
        world.grid_mut().set_particle(1, 0, EL_ACID, 0, 20.0);
        world.grid_mut().set_particle(2, 0, EL_METAL, 0, 20.0);

        let mut saw_gas = false;
        for _ in 0..200 {
            world.step();
            saw_gas |= count_of(&world, EL_GAS) > 0;
        }
        assert!(count_of(&world, EL_METAL) < 2, "seed {seed}");
        assert!(saw_gas, "seed {seed}");
    }
}

#[test]
fn electricity_travels_into_metal() {
    let mut converted = 0;
    for seed in 0..8 {
        let mut world = WorldCore::with_seed(2, 1, seed);
        world.grid_mut().set_particle(0, 0, EL_ELECTRICITY, 8, 150.0);
        world.grid_mut().set_particle(1, 0, EL_METAL, 0, 20.0);

        run(&mut world, 7);
        if world.get_type(1, 0) == EL_ELECTRICITY {
            converted += 1;
        }
    }
    assert!(converted > 0);
}

#[test]
fn virus_infects_plants() {
    let mut infected = 0;
    for seed in 0..5 {
        let mut world = WorldCore::with_seed(1, 2, seed);
        world.grid_mut().set_particle(0, 0, EL_VIRUS, 100, 20.0);
        world.grid_mut().set_particle(0, 1, EL_PLANT, 0, 20.0);

        run(&mut world, 99);
        if world.get_type(0, 1) == EL_VIRUS {
            infected += 1;
        }
        assert_eq!(count_of(&world, EL_PLANT) + count_of(&world, EL_VIRUS), 2);
    }
    assert!(infected > 0);
}

#[test]
fn ice_freezes_neighbouring_water() {
    for seed in 0..4 {
        let mut world = WorldCore::with_seed(2, 1, seed);
        world.grid_mut().set_particle(0, 0, EL_ICE, 0, -50.0);
        world.grid_mut().set_particle(1, 0, EL_WATER, 0, 20.0);

        let mut frozen = false;
        for _ in 0..30 {
            world.step();
            frozen |= count_of(&world, EL_ICE) == 2;
        }
        assert!(frozen, "seed {seed}");
    }
}

#[test]
fn gas_next_to_fire_bursts() {
    let mut bursts = 0;
    for seed in 0..16 {
        let mut world = WorldCore::with_seed(5, 5, seed);
        world.grid_mut().set_particle(2, 3, EL_FIRE, 8, 200.0);
        for x in 1..=3 {
            world.grid_mut().set_particle(x, 4, EL_GAS, 0, 20.0);
        }

        world.step();
        if world.stats().explosions() > 0 {
            bursts += 1;
        }
    }
    assert!(bursts > 0);
}

#[test]
fn steam_rises_against_gravity() {
    for seed in 0..8 {
        let mut world = WorldCore::with_seed(3, 16, seed);
        world.grid_mut().set_particle(1, 12, EL_STEAM, 80, 120.0);

        run(&mut world, 5);
        assert_eq!(count_of(&world, EL_STEAM), 1, "seed {seed}");
        let at = world.grid.types.iter().position(|&t| t == EL_STEAM).map(|idx| idx as u32 / 3);
        assert!(matches!(at, Some(y) if y < 12), "seed {seed}: {at:?}");
    }
}

#[test]
fn water_column_spreads_along_the_floor() {
    for seed in 0..4 {
        let mut world = WorldCore::with_seed(6, 5, seed);
        world.paint(Shape::Line { x0: 0, y0: 0, x1: 0, y1: 4 }, EL_WATER);

        run(&mut world, 60);
        let floor = (0..6).filter(|&x| world.get_type(x, 4) == EL_WATER).count();
        assert!(floor >= 3, "seed {seed}: {floor} on the floor");
        assert_eq!(count_of(&world, EL_WATER), 5);
    }
}

#[test]
fn busy_grid_keeps_temperatures_in_range() {
    for seed in 0..3 {
        let mut world = WorldCore::with_seed(24, 24, seed);
        world.paint(Shape::Rect { x0: 0, y0: 0, x1: 23, y1: 2 }, EL_WATER);
        world.paint(Shape::Rect { x0: 0, y0: 3, x1: 11, y1: 4 }, EL_LAVA);
        world.paint(Shape::Rect { x0: 12, y0: 3, x1: 23, y1: 4 }, EL_ICE);
        world.paint(Shape::Rect { x0: 0, y0: 6, x1: 7, y1: 7 }, EL_OIL);
        world.paint(Shape::Rect { x0: 8, y0: 6, x1: 15, y1: 7 }, EL_GUNPOWDER);
        world.paint(Shape::Rect { x0: 16, y0: 6, x1: 23, y1: 7 }, EL_METAL);
        world.paint(Shape::Rect { x0: 0, y0: 10, x1: 5, y1: 11 }, EL_FIRE);
        world.paint(Shape::Rect { x0: 6, y0: 10, x1: 11, y1: 11 }, EL_PLASMA);
        world.paint(Shape::Rect { x0: 12, y0: 10, x1: 17, y1: 11 }, EL_ELECTRICITY);

        for tick in 0..40 {
            world.step();
            assert_eq!(world.stats().errors(), 0, "seed {seed} tick {tick}");
            for &t in &world.grid.temperature {
                assert!(t.is_finite() && (MIN_TEMP..=MAX_TEMP).contains(&t), "seed {seed} tick {tick}: {t}");
            }
        }
    }
}

#[test]
fn unknown_ids_are_normalized_to_empty() {
    let mut world = WorldCore::with_seed(4, 4, 1);
    let idx = world.grid.index(2, 2);
    world.grid_mut().types[idx] = 200;

    world.step();
    assert_eq!(world.get_type(2, 2), EL_EMPTY);
    assert_eq!(world.stats().errors(), 0);
}

#[test]
fn corrupt_temperature_is_reported_and_sanitized() {
    let mut world = WorldCore::with_seed(5, 5, 1);
    assert!(world.set_cell(2, 4, EL_STONE));
    let idx = world.grid.index(2, 4);
    world.grid_mut().temperature[idx] = f32::NAN;

    world.step();
    assert_eq!(world.stats().errors(), 1);
    assert_eq!(world.get_type(2, 4), EL_STONE);
    assert!(world.cell(2, 4).temperature.is_finite());

    world.step();
    assert_eq!(world.stats().errors(), 0);
}

#[test]
fn replacement_policy_guards_occupied_cells() {
    let mut world = WorldCore::new(4, 4);
    assert!(world.set_cell(0, 0, EL_STONE));
    assert!(!world.set_cell(0, 0, EL_WATER));
    assert_eq!(world.get_type(0, 0), EL_STONE);

    assert!(world.set_cell(1, 0, EL_WATER));
    assert!(world.set_cell(1, 0, EL_LAVA));
    assert_eq!(world.get_type(1, 0), EL_LAVA);

    assert!(!world.set_cell(-1, 0, EL_SAND));
    assert!(!world.set_cell(2, 2, 99));
    assert!(world.set_cell(0, 0, EL_EMPTY));
    assert_eq!(world.particle_count(), 1);
}

#[test]
fn painting_counts_written_cells() {
    let mut world = WorldCore::new(10, 10);
    assert_eq!(world.paint(Shape::Rect { x0: 0, y0: 0, x1: 2, y1: 1 }, EL_STONE), 6);
    // Sand cannot overwrite stone
    assert_eq!(world.paint(Shape::Line { x0: 0, y0: 1, x1: 4, y1: 1 }, EL_SAND), 2);
    assert_eq!(world.clear_shape(Shape::Rect { x0: 0, y0: 0, x1: 9, y1: 9 }), 8);
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn eyedropper_reads_the_cell() {
    let mut world = WorldCore::new(4, 4);
    assert!(world.set_cell(1, 1, EL_OIL));
    assert_eq!(world.pick_element(1, 1), Some(EL_OIL));
    assert_eq!(world.pick_element(0, 0), None);
    assert_eq!(world.pick_element(10, 10), None);
}

#[test]
fn advance_frame_honours_speed_and_pause() {
    let mut world = WorldCore::new(4, 4);
    world.set_game_speed(5);
    let divisor = world.settings().tick_divisor();
    assert_eq!(divisor, 7);

    for _ in 0..divisor - 1 {
        assert!(!world.advance_frame());
    }
    assert!(world.advance_frame());
    assert_eq!(world.tick(), 1);

    world.set_paused(true);
    for _ in 0..20 {
        assert!(!world.advance_frame());
    }
    assert_eq!(world.tick(), 1);
    assert_eq!(world.frame(), divisor + 20);
}

#[test]
fn clear_resets_cells_and_counters() {
    let mut world = WorldCore::with_seed(6, 6, 4);
    world.paint(Shape::Circle { cx: 3, cy: 3, radius: 2 }, EL_WATER);
    run(&mut world, 3);
    world.advance_frame();

    world.clear();
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.tick(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.stats().moves(), 0);
}

#[test]
fn average_temperature_covers_occupied_cells_only() {
    let mut world = WorldCore::new(4, 4);
    assert_eq!(world.average_temperature(), AMBIENT_TEMP);

    assert!(world.set_cell(0, 0, EL_STONE));
    assert!(world.set_cell(1, 0, EL_STONE));
    world.grid_mut().set_temp(0, 0, 0.0);
    world.grid_mut().set_temp(1, 0, 100.0);
    assert_eq!(world.average_temperature(), 50.0);
}

#[test]
fn wind_pushes_fluids_downwind() {
    let mut world = WorldCore::with_seed(6, 3, 1);
    assert!(world.set_cell(2, 1, EL_WATER));
    assert!(world.set_cell(4, 2, EL_STONE));

    let WorldCore { grid, processed, rng, reactions, stats, fields, .. } = &mut world;
    let mut ctx = TickContext {
        grid,
        processed,
        rng,
        reactions: &*reactions,
        stats,
        gravity: 1,
    };
    // Off-period ticks do nothing
    fields.apply_wind(&mut ctx, 5.0, 1);
    assert_eq!(ctx.grid.get_type(2, 1), EL_WATER);

    fields.apply_wind(&mut ctx, 5.0, 0);
    assert_eq!(ctx.grid.get_type(3, 1), EL_WATER);
    assert_eq!(ctx.grid.get_type(4, 2), EL_STONE);
}

#[test]
fn magnetism_draws_metal_toward_the_magnet() {
    let mut world = WorldCore::with_seed(10, 1, 8);
    assert!(world.set_cell(0, 0, EL_MAGNET));
    assert!(world.set_cell(6, 0, EL_METAL));

    let WorldCore { grid, processed, rng, reactions, stats, fields, .. } = &mut world;
    let mut ctx = TickContext {
        grid,
        processed,
        rng,
        reactions: &*reactions,
        stats,
        gravity: 1,
    };
    for _ in 0..200 {
        fields.apply_magnetism(&mut ctx, 0);
    }
    assert_eq!(ctx.grid.get_type(0, 0), EL_MAGNET);
    assert_eq!(ctx.grid.get_type(1, 0), EL_METAL);
}

#[test]
fn magnets_pull_nearby_metal_during_the_scan() {
    for seed in 0..3 {
        let mut world = WorldCore::with_seed(5, 1, seed);
        assert!(world.set_cell(0, 0, EL_MAGNET));
        assert!(world.set_cell(3, 0, EL_METAL));
        assert!(!world.settings().magnetic_field);

        run(&mut world, 400);
        assert_eq!(world.get_type(1, 0), EL_METAL, "seed {seed}");
        assert_eq!(world.get_type(0, 0), EL_MAGNET);
    }
}

#[test]
fn push_and_vacuum_move_loose_cells() {
    let mut world = WorldCore::with_seed(12, 12, 1);
    assert!(world.set_cell(5, 5, EL_SAND));
    assert_eq!(world.apply_force_field(ForceField::Push { cx: 3, cy: 5, radius: 2 }), 1);
    assert_eq!(world.get_type(6, 5), EL_SAND);

    assert_eq!(world.apply_force_field(ForceField::Vacuum { cx: 3, cy: 5, radius: 4 }), 1);
    assert_eq!(world.get_type(5, 5), EL_SAND);

    assert!(world.set_cell(10, 1, EL_STONE));
    assert_eq!(world.apply_force_field(ForceField::Vacuum { cx: 10, cy: 3, radius: 4 }), 0);
    assert_eq!(world.get_type(10, 1), EL_STONE);
}

#[test]
fn gust_shifts_by_distance_falloff() {
    let mut world = WorldCore::with_seed(12, 12, 1);
    assert!(world.set_cell(5, 5, EL_WATER));
    assert_eq!(world.apply_force_field(ForceField::Gust { cx: 5, cy: 5, radius: 4, direction: 1 }), 1);
    assert_eq!(world.get_type(8, 5), EL_WATER);
}

#[test]
fn thermal_tool_drives_phase_changes() {
    let mut world = WorldCore::with_seed(6, 6, 1);
    assert!(world.set_cell(1, 1, EL_ICE));
    assert_eq!(world.apply_thermal_delta(1, 1, 0, 50.0), 1);
    assert_eq!(world.get_type(1, 1), EL_WATER);

    assert_eq!(world.apply_thermal_delta(1, 1, 0, -100.0), 1);
    assert_eq!(world.get_type(1, 1), EL_ICE);
    assert_eq!(world.cell(1, 1).temperature, -10.0);

    assert!(world.set_cell(4, 4, EL_FIRE));
    world.apply_thermal_delta(4, 4, 1, -5.0);
    assert_eq!(world.get_type(4, 4), EL_EMPTY);
}

#[test]
fn explosion_tool_clears_the_centre() {
    let mut world = WorldCore::with_seed(9, 9, 1);
    world.paint(Shape::Rect { x0: 0, y0: 0, x1: 8, y1: 8 }, EL_STONE);
    let sparks = world.apply_explosion(4, 4, 3, 2);

    assert_eq!(sparks, 10);
    assert!(matches!(world.get_type(4, 4), EL_FIRE | EL_EMPTY));
    // Corners are outside the blast radius
    assert_eq!(world.get_type(0, 0), EL_STONE);
    assert!(count_of(&world, EL_STONE) <= 80);
}

#[test]
fn tools_accept_radii_far_beyond_the_grid() {
    let mut world = WorldCore::with_seed(8, 8, 1);
    world.paint(Shape::Circle { cx: 4, cy: 4, radius: i32::MAX }, EL_STONE);
    assert_eq!(count_of(&world, EL_STONE), 64);

    world.apply_thermal_delta(i32::MIN, i32::MAX, i32::MAX, 10.0);
    world.apply_thermal_delta(4, 4, i32::MAX, 10.0);
    assert!(world.grid.temperature.iter().all(|&t| t == 30.0));
    assert_eq!(world.apply_force_field(ForceField::Vacuum { cx: 0, cy: 0, radius: i32::MAX }), 0);

    assert_eq!(world.apply_explosion(4, 4, i32::MAX, 1), 5);
    assert_eq!(count_of(&world, EL_STONE), 0);
}

#[test]
fn settings_round_trip_through_json() {
    let mut world = WorldCore::new(4, 4);
    world.set_wind(3.5, 0.0);
    world.set_magnetic_field(true);
    let json = world.settings_json().unwrap();

    let mut other = WorldCore::new(4, 4);
    other.load_settings_json(&json).unwrap();
    assert_eq!(other.settings(), world.settings());
    assert!(other.load_settings_json("{ nope").is_err());
}
