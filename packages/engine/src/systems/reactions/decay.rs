use crate::elements::{has_lifetime, EL_EMPTY, EL_FIRE, EL_STEAM, EL_WATER};
use crate::error::PhysicsError;
use crate::systems::{CellFlow, TickContext, NEIGHBORS_8};

const FIRE_SMOKE_CHANCE: f32 = 0.2;
const STEAM_CONDENSE_TEMP: f32 = 60.0;

/// Count the lifetime down; at zero the cell decays and its turn is over.
pub(super) fn tick_lifetime(ctx: &mut TickContext, x: i32, y: i32) -> Result<CellFlow, PhysicsError> {
    let idx = ctx.grid.checked_index(x, y)?;
    let element = ctx.grid.types[idx];
    if !has_lifetime(element) {
        return Ok(CellFlow::Continue);
    }

    let life = ctx.grid.life[idx].saturating_sub(1);
    ctx.grid.life[idx] = life;
    if life > 0 {
        return Ok(CellFlow::Continue);
    }

    ctx.stats.decays += 1;
    match element {
        EL_FIRE => {
            for (dx, dy) in NEIGHBORS_8 {
                let (nx, ny) = (x + dx, y + dy);
                if !ctx.grid.in_bounds(nx, ny) {
                    continue;
                }
                let nidx = ctx.grid.index(nx as u32, ny as u32);
                if ctx.grid.types[nidx] == EL_EMPTY && ctx.rng.chance(FIRE_SMOKE_CHANCE) {
                    ctx.transform(nidx, EL_STEAM, 40, 100.0);
                }
            }
            ctx.vacate(idx);
        }
        EL_STEAM if ctx.grid.temperature[idx] < STEAM_CONDENSE_TEMP => {
            let temp = ctx.grid.temperature[idx];
            ctx.transform(idx, EL_WATER, 0, temp);
        }
        _ => ctx.vacate(idx),
    }
    Ok(CellFlow::Consumed)
}
