use crate::core::grid::Grid;
use crate::elements::{
    density_of, is_corrosive, is_destructive_pair, is_flammable, is_gas, is_liquid, is_powder,
    is_solid, EL_EMPTY, EL_FIRE, EL_ICE, EL_LAVA, EL_METAL, EL_PLANT, EL_PLASMA, EL_STONE,
};
use crate::error::PhysicsError;
use crate::systems::reactions::resolve_contact;
use crate::systems::TickContext;

const DISPLACE_MARGIN: f32 = 0.1;
const HOT_GAS_MARGIN: f32 = 30.0;
const LAVA_MARGIN: f32 = -1.0;

/// Whether the occupant of `from` may try to enter `to`.
///
/// Rules are checked in order and the first match wins.
pub fn can_move_to(grid: &Grid, from: usize, to: usize) -> bool {
    let mover = grid.types[from];
    let target = grid.types[to];
    if target == EL_EMPTY {
        return true;
    }

    let difference = density_of(mover) - density_of(target);
    if difference > DISPLACE_MARGIN {
        return true;
    }
    if is_liquid(mover) && is_gas(target) {
        return true;
    }
    if is_powder(mover) && (is_liquid(target) || is_gas(target)) {
        return true;
    }
    if is_solid(mover) && difference > 0.0 {
        return true;
    }

    match mover {
        EL_FIRE if is_flammable(target) || is_gas(target) => return true,
        _ if is_corrosive(mover)
            && (matches!(target, EL_METAL | EL_PLANT | EL_STONE) || is_flammable(target)) =>
        {
            return true
        }
        EL_LAVA
            if is_flammable(target)
                || is_gas(target)
                || is_liquid(target)
                || target == EL_ICE
                || difference > LAVA_MARGIN =>
        {
            return true
        }
        EL_PLASMA if target != EL_PLASMA => return true,
        _ => {}
    }

    is_gas(mover)
        && is_liquid(target)
        && grid.temperature[from] > grid.temperature[to] + HOT_GAS_MARGIN
}

/// Try to move the cell at `(x, y)` into `(tx, ty)`.
///
/// Refused when the target is outside the grid, already processed, or
/// illegal for `can_move_to`. An empty target is simply taken. An occupied
/// one first gets a chance to react with the mover. Failing that, a mover
/// more than 0.1 denser pushes the occupant into the first free slot near
/// the target, or consumes it when the pair is destructive and no slot is
/// free. Anything else leaves both cells unchanged.
/// Returns whether anything happened.
pub fn move_cell_safe(ctx: &mut TickContext, x: i32, y: i32, tx: i32, ty: i32) -> Result<bool, PhysicsError> {
    let from = ctx.grid.checked_index(x, y)?;
    if !ctx.grid.in_bounds(tx, ty) {
        return Ok(false);
    }
    let to = ctx.grid.index(tx as u32, ty as u32);
    if ctx.is_processed(to) || !can_move_to(ctx.grid, from, to) {
        return Ok(false);
    }

    let mover = ctx.grid.types[from];
    let target = ctx.grid.types[to];

    if target == EL_EMPTY {
        ctx.grid.move_idx(from, to);
        ctx.processed.mark(to);
        ctx.stats.moves += 1;
        return Ok(true);
    }

    if resolve_contact(ctx, from, to) {
        return Ok(true);
    }

    if density_of(mover) - density_of(target) <= DISPLACE_MARGIN {
        return Ok(false);
    }

    if let Some(slot) = relocation_slot(ctx, tx, ty) {
        ctx.grid.move_idx(to, slot);
        ctx.grid.move_idx(from, to);
        ctx.processed.mark(slot);
        ctx.processed.mark(to);
        ctx.stats.moves += 1;
        return Ok(true);
    }

    if is_destructive_pair(mover, target) {
        ctx.grid.clear_cell_idx(to);
        ctx.grid.move_idx(from, to);
        ctx.processed.mark(to);
        ctx.stats.reactions += 1;
        return Ok(true);
    }

    Ok(false)
}

/// First unprocessed empty slot around the target, searched against gravity first.
fn relocation_slot(ctx: &TickContext, tx: i32, ty: i32) -> Option<usize> {
    let p = ctx.up();
    let offsets = [(0, p), (-1, p), (1, p), (-1, 0), (1, 0), (0, 2 * p), (-1, 2 * p), (1, 2 * p)];
    offsets.into_iter().find_map(|(ox, oy)| {
        let (sx, sy) = (tx + ox, ty + oy);
        if !ctx.grid.in_bounds(sx, sy) {
            return None;
        }
        let slot = ctx.grid.index(sx as u32, sy as u32);
        (!ctx.is_processed(slot) && ctx.grid.types[slot] == EL_EMPTY).then_some(slot)
    })
}
