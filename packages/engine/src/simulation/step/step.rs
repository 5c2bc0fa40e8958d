use crate::systems::scan::ScanScheduler;
use crate::systems::TickContext;

use super::cell::process_cell;
use super::WorldCore;

/// One tick:
/// 1. copy the published grid into the back buffer and clear the mask
/// 2. scan rows along gravity, columns freshly shuffled per row
/// 3. wind and magnetism on the back buffer
/// 4. swap, publishing the new state
///
/// A cell whose rules fail is logged and left as it stands; the tick
/// always completes.
pub(super) fn step(world: &mut WorldCore) {
    let WorldCore {
        grid,
        back,
        processed,
        scan,
        behaviors,
        reactions,
        fields,
        rng,
        settings,
        tick,
        stats,
        ..
    } = world;

    stats.reset(*tick);
    back.copy_from(grid);
    processed.clear();

    let gravity = settings.gravity_step();
    let height = back.height();
    let mut ctx = TickContext {
        grid: &mut *back,
        processed: &mut *processed,
        rng: &mut *rng,
        reactions: &*reactions,
        stats: &mut *stats,
        gravity,
    };

    for y in ScanScheduler::row_order(height, gravity) {
        for &x in scan.shuffle_columns(ctx.rng) {
            if let Err(err) = process_cell(&mut ctx, behaviors, x as i32, y as i32) {
                ctx.stats.errors += 1;
                tracing::warn!(x, y, %err, "cell rules failed; cell skipped for this tick");
            }
        }
    }

    fields.apply_wind(&mut ctx, settings.wind_x, *tick);
    if settings.magnetic_field {
        fields.apply_magnetism(&mut ctx, *tick);
    }

    std::mem::swap(grid, back);
    *tick += 1;
}

pub(super) fn advance_frame(world: &mut WorldCore) -> bool {
    world.frame += 1;
    if world.settings.paused || world.frame % world.settings.tick_divisor() != 0 {
        return false;
    }
    step(world);
    true
}
