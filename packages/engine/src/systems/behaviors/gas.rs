//! GasBehavior - steam, fire, electricity, gas, plasma
//!
//! Rises against gravity with a little randomness, disperses sideways.
//! Fire can hop up to two cells, steam condenses near the ceiling, and
//! flammable gas pools in open space above it.

use super::{move_cell_safe, shuffled_pair, Behavior};
use crate::elements::{EL_EMPTY, EL_FIRE, EL_GAS, EL_STEAM, EL_WATER};
use crate::error::PhysicsError;
use crate::systems::TickContext;

const RISE_CHANCE: f32 = 0.85;
const DIAGONAL_CHANCE: f32 = 0.7;
const DISPERSE_CHANCE: f32 = 0.5;
const FIRE_HOP_CHANCE: f32 = 0.4;
const CONDENSE_CHANCE: f32 = 0.1;
const CEILING_BAND: i32 = 2;
const POOL_CHANCE: f32 = 0.3;
const POOL_REACH: i32 = 3;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Within two rows of the boundary gases rise toward.
    fn near_ceiling(ctx: &TickContext, y: i32) -> bool {
        if ctx.up() < 0 {
            y <= CEILING_BAND
        } else {
            y >= ctx.grid.height() as i32 - 1 - CEILING_BAND
        }
    }

    fn disperse(ctx: &mut TickContext, x: i32, y: i32) -> Result<bool, PhysicsError> {
        let up = ctx.up();
        if ctx.rng.chance(RISE_CHANCE) && move_cell_safe(ctx, x, y, x, y + up)? {
            return Ok(true);
        }
        for dx in shuffled_pair(ctx.rng) {
            if ctx.rng.chance(DIAGONAL_CHANCE) && move_cell_safe(ctx, x, y, x + dx, y + up)? {
                return Ok(true);
            }
        }
        if ctx.rng.chance(DISPERSE_CHANCE) {
            let dx = ctx.rng.sign();
            if move_cell_safe(ctx, x, y, x + dx, y)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut TickContext, x: i32, y: i32) -> Result<(), PhysicsError> {
        let element = ctx.grid.get_type(x, y);
        let up = ctx.up();

        if element == EL_STEAM && Self::near_ceiling(ctx, y) && ctx.rng.chance(CONDENSE_CHANCE) {
            let idx = ctx.grid.checked_index(x, y)?;
            ctx.transform(idx, EL_WATER, 0, 80.0);
            ctx.stats.phase_changes += 1;
            return Ok(());
        }

        if Self::disperse(ctx, x, y)? {
            return Ok(());
        }

        match element {
            EL_FIRE if ctx.rng.chance(FIRE_HOP_CHANCE) => {
                for hop in 1..=2 {
                    if move_cell_safe(ctx, x, y, x, y + hop * up)? {
                        break;
                    }
                }
            }
            EL_GAS if ctx.rng.chance(POOL_CHANCE) => {
                for reach in 1..=POOL_REACH {
                    if ctx.grid.get_type(x, y + reach * up) == EL_EMPTY
                        && ctx.grid.in_bounds(x, y + reach * up)
                    {
                        move_cell_safe(ctx, x, y, x, y + reach * up)?;
                        break;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}
