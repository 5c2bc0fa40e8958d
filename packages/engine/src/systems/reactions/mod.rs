//! Reaction Engine - lifetimes, neighbour reactions and explosions
//!
//! Runs after the thermal phase for every occupied cell:
//! 1. count down the lifetime and decay at zero
//! 2. kind-specific behaviour (fire spreading, magnet pull)
//! 3. one roll per occupied 8-neighbour against the reaction table
//!
//! Converted neighbours are marked processed so they do not act again
//! in the same tick.

mod contact;
mod decay;
mod explosions;
mod magnet;
mod spread;
mod table;

pub use contact::resolve_contact;
pub use explosions::{detonate, gas_burst, GAS_BURST_RADIUS, GUNPOWDER_BLAST_RADIUS};
pub use table::{Effect, Reaction, ReactionTable, Site};

use crate::elements::{is_magnetic, props_of, EL_EMPTY, EL_FIRE, EL_LAVA, EL_STEAM, EL_STONE};
use crate::error::PhysicsError;

use super::{CellFlow, TickContext, NEIGHBORS_8};

pub fn update_cell(ctx: &mut TickContext, x: i32, y: i32) -> Result<CellFlow, PhysicsError> {
    if decay::tick_lifetime(ctx, x, y)? == CellFlow::Consumed {
        return Ok(CellFlow::Consumed);
    }

    let idx = ctx.grid.checked_index(x, y)?;
    let element = ctx.grid.types[idx];
    match element {
        EL_FIRE => spread::spread_fire(ctx, x, y),
        _ if is_magnetic(element) => magnet::pull_metals(ctx, x, y),
        _ => {}
    }

    apply_neighbor_reactions(ctx, x, y)
}

fn apply_neighbor_reactions(ctx: &mut TickContext, x: i32, y: i32) -> Result<CellFlow, PhysicsError> {
    let idx = ctx.grid.checked_index(x, y)?;
    let element = ctx.grid.types[idx];

    for (dx, dy) in NEIGHBORS_8 {
        let (nx, ny) = (x + dx, y + dy);
        if !ctx.grid.in_bounds(nx, ny) {
            continue;
        }
        let nidx = ctx.grid.index(nx as u32, ny as u32);
        let neighbor = ctx.grid.types[nidx];
        if neighbor == EL_EMPTY {
            continue;
        }
        props_of(neighbor)?;

        let Some(&reaction) = ctx.reactions.get(element, neighbor) else {
            continue;
        };
        if !ctx.rng.chance(reaction.chance) {
            continue;
        }
        ctx.stats.reactions += 1;

        match reaction.effect {
            Effect::Convert { element: into, life, temp } => {
                let temp = temp.unwrap_or(ctx.grid.temperature[nidx]);
                ctx.transform(nidx, into, life, temp);
            }
            Effect::Quench => {
                let (lava, coolant) = if element == EL_LAVA { (idx, nidx) } else { (nidx, idx) };
                quench(ctx, lava, coolant);
                return Ok(CellFlow::Consumed);
            }
            Effect::Detonate { at } => {
                let (cx, cy) = match at {
                    Site::Source => (x, y),
                    Site::Neighbor => (nx, ny),
                };
                detonate(ctx, cx, cy);
                return Ok(CellFlow::Consumed);
            }
            Effect::GasBurst => {
                gas_burst(ctx, x, y);
                return Ok(CellFlow::Consumed);
            }
        }
    }

    Ok(CellFlow::Continue)
}

/// One side hardens to stone and the other flashes to steam; a coin flip
/// picks which.
fn quench(ctx: &mut TickContext, lava: usize, coolant: usize) {
    let (stone, steam) = if ctx.rng.coin() { (lava, coolant) } else { (coolant, lava) };
    ctx.transform(stone, EL_STONE, 0, 300.0);
    ctx.transform(steam, EL_STEAM, 60, 150.0);
}
