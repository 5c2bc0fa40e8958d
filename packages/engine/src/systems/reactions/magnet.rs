use crate::elements::{EL_EMPTY, EL_METAL};
use crate::systems::TickContext;

const PULL_RANGE: i32 = 4;
const ACTIVE_CHANCE: f32 = 0.3;
const STEP_CHANCE: f32 = 0.1;

/// Nearby metal creeps one cell toward the magnet.
pub(super) fn pull_metals(ctx: &mut TickContext, x: i32, y: i32) {
    if !ctx.rng.chance(ACTIVE_CHANCE) {
        return;
    }
    for dy in -PULL_RANGE..=PULL_RANGE {
        for dx in -PULL_RANGE..=PULL_RANGE {
            if (dx == 0 && dy == 0) || dx.abs() + dy.abs() > PULL_RANGE {
                continue;
            }
            let (mx, my) = (x + dx, y + dy);
            if ctx.grid.get_type(mx, my) != EL_METAL || !ctx.rng.chance(STEP_CHANCE) {
                continue;
            }
            let (tx, ty) = (mx - dx.signum(), my - dy.signum());
            if !ctx.grid.in_bounds(tx, ty) {
                continue;
            }
            let from = ctx.grid.index(mx as u32, my as u32);
            let to = ctx.grid.index(tx as u32, ty as u32);
            if ctx.grid.types[to] != EL_EMPTY || ctx.is_processed(to) {
                continue;
            }
            ctx.grid.move_idx(from, to);
            ctx.processed.mark(to);
            ctx.stats.moves += 1;
        }
    }
}
