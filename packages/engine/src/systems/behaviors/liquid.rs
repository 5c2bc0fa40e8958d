//! LiquidBehavior - water, oil, lava, acid
//!
//! Falls, then flows diagonally, then levels out: a cell drifts toward the
//! side with clearly lower column pressure, or wanders at random.

use super::{column_pressure, move_cell_safe, shuffled_pair, Behavior};
use crate::error::PhysicsError;
use crate::systems::TickContext;

const PRESSURE_GAP: f32 = 0.2;
const FLOW_CHANCE: f32 = 0.7;
const DRIFT_CHANCE: f32 = 0.2;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Lateral direction toward lower pressure, 0 when level.
    fn downhill(ctx: &TickContext, x: i32, y: i32) -> i32 {
        let up = ctx.up();
        let mut best = column_pressure(ctx.grid, x, y, up);
        let mut direction = 0;
        for dx in [-1, 1] {
            if !ctx.grid.in_bounds(x + dx, y) {
                continue;
            }
            let pressure = column_pressure(ctx.grid, x + dx, y, up);
            if pressure < best - PRESSURE_GAP {
                best = pressure;
                direction = dx;
            }
        }
        direction
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut TickContext, x: i32, y: i32) -> Result<(), PhysicsError> {
        let down = ctx.gravity;

        if move_cell_safe(ctx, x, y, x, y + down)? {
            return Ok(());
        }
        for dx in shuffled_pair(ctx.rng) {
            if move_cell_safe(ctx, x, y, x + dx, y + down)? {
                return Ok(());
            }
        }

        let direction = Self::downhill(ctx, x, y);
        if direction != 0 {
            if ctx.rng.chance(FLOW_CHANCE) {
                move_cell_safe(ctx, x, y, x + direction, y)?;
            }
        } else if ctx.rng.chance(DRIFT_CHANCE) {
            let dx = ctx.rng.sign();
            move_cell_safe(ctx, x, y, x + dx, y)?;
        }
        Ok(())
    }
}
