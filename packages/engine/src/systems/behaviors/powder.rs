//! PowderBehavior - sand, dirt, gunpowder, virus
//!
//! Falls along gravity; when blocked, slides diagonally with a per-kind
//! chance, and piles shed sideways when loaded from above.

use super::{move_cell_safe, shuffled_pair, Behavior};
use crate::elements::{density_of, ElementId, EL_DIRT, EL_GUNPOWDER, EL_SAND};
use crate::error::PhysicsError;
use crate::systems::TickContext;

const AVALANCHE_CHANCE: f32 = 0.3;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn slide_chance(element: ElementId) -> f32 {
        match element {
            EL_SAND => 0.9,
            EL_GUNPOWDER => 0.85,
            EL_DIRT => 0.6,
            _ => 0.8,
        }
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut TickContext, x: i32, y: i32) -> Result<(), PhysicsError> {
        let element = ctx.grid.get_type(x, y);
        let down = ctx.gravity;

        if move_cell_safe(ctx, x, y, x, y + down)? {
            return Ok(());
        }

        let sides = shuffled_pair(ctx.rng);
        let slide = Self::slide_chance(element);
        for dx in sides {
            if ctx.rng.chance(slide) && move_cell_safe(ctx, x, y, x + dx, y + down)? {
                return Ok(());
            }
        }

        let above = ctx.grid.get_type(x, y - down);
        if above == element || density_of(above) > 1.0 {
            for dx in sides {
                if ctx.rng.chance(AVALANCHE_CHANCE) && move_cell_safe(ctx, x, y, x + dx, y)? {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
