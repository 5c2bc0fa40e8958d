use crate::elements::{is_flammable, EL_FIRE, EL_GAS, EL_OIL, EL_PLANT, EL_WOOD};
use crate::systems::{TickContext, NEIGHBORS_8};

const BASE_SPREAD: f32 = 0.15;

/// Fire reaches into flammable neighbours, faster against gravity.
pub(super) fn spread_fire(ctx: &mut TickContext, x: i32, y: i32) {
    for (dx, dy) in NEIGHBORS_8 {
        let (nx, ny) = (x + dx, y + dy);
        if !ctx.grid.in_bounds(nx, ny) {
            continue;
        }
        let nidx = ctx.grid.index(nx as u32, ny as u32);
        let fuel = ctx.grid.types[nidx];
        if !is_flammable(fuel) {
            continue;
        }

        let mut chance = BASE_SPREAD;
        if dy == ctx.up() {
            chance *= 2.0;
        } else if dy == ctx.gravity {
            chance *= 0.5;
        }
        chance *= match fuel {
            EL_PLANT => 1.5,
            EL_OIL => 2.5,
            EL_WOOD => 1.2,
            EL_GAS => 3.0,
            _ => 1.0,
        };
        if !ctx.rng.chance(chance) {
            continue;
        }

        let burn = match fuel {
            EL_OIL => 15,
            EL_GAS => 10,
            EL_PLANT => 8,
            _ => 6,
        };
        let life = burn + ctx.rng.range_u16(0, 4);
        let temp = ctx.rng.range_f32(200.0, 250.0);
        ctx.transform(nidx, EL_FIRE, life, temp);
        ctx.stats.reactions += 1;
    }
}
