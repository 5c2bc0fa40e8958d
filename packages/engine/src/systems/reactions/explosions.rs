use crate::elements::EL_FIRE;
use crate::systems::TickContext;

pub const GUNPOWDER_BLAST_RADIUS: i32 = 4;
pub const GAS_BURST_RADIUS: i32 = 3;

/// Gunpowder blast centred on `(cx, cy)`.
///
/// The centre is always consumed. Other cells within the radius are hit
/// with probability `(1 - d/r) * 0.8`; a hit cell becomes fire (60 %) or
/// empty. Every hit cell is marked processed, so a blast never re-enters
/// a cell it already converted this tick.
pub fn detonate(ctx: &mut TickContext, cx: i32, cy: i32) {
    ctx.stats.explosions += 1;
    let r = GUNPOWDER_BLAST_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            let (x, y) = (cx + dx, cy + dy);
            if !ctx.grid.in_bounds(x, y) {
                continue;
            }
            let distance = ((dx * dx + dy * dy) as f32).sqrt();
            if distance > r as f32 {
                continue;
            }
            let centre = dx == 0 && dy == 0;
            let power = (1.0 - distance / r as f32) * 0.8;
            if !centre && !ctx.rng.chance(power) {
                continue;
            }
            let idx = ctx.grid.index(x as u32, y as u32);
            if ctx.rng.chance(0.6) {
                ctx.transform(idx, EL_FIRE, 6, 300.0);
            } else {
                ctx.vacate(idx);
            }
        }
    }
}

/// Flammable-gas fireball: each cell within radius 3 turns to fire with
/// probability 0.7. The centre is always consumed.
pub fn gas_burst(ctx: &mut TickContext, cx: i32, cy: i32) {
    ctx.stats.explosions += 1;
    let r = GAS_BURST_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            let (x, y) = (cx + dx, cy + dy);
            if !ctx.grid.in_bounds(x, y) || dx * dx + dy * dy > r * r {
                continue;
            }
            let idx = ctx.grid.index(x as u32, y as u32);
            if ctx.rng.chance(0.7) {
                ctx.transform(idx, EL_FIRE, 5, 250.0);
            } else if dx == 0 && dy == 0 {
                ctx.vacate(idx);
            }
        }
    }
}
