//! Thermal Engine - per-cell thermodynamics
//!
//! Each visited cell, in order:
//! - relaxes toward the ambient 20 °C
//! - checks its phase-change thresholds (a change ends the cell's turn)
//! - otherwise exchanges heat with its four orthogonal neighbours

mod conduction;
mod phase_changes;

pub use conduction::exchange_heat;
pub use phase_changes::{check_phase_change, PhaseChange};

use crate::elements::{clamp_temp, AMBIENT_TEMP};
use crate::error::PhysicsError;

use super::{CellFlow, TickContext};

const RELAX_RATE: f32 = 0.02;
const RELAX_MAX_STEP: f32 = 2.0;
const RELAX_DEADBAND: f32 = 1.0;

/// One relaxation step toward ambient; never overshoots.
#[inline]
pub fn relax_toward_ambient(t: f32) -> f32 {
    let gap = AMBIENT_TEMP - t;
    if gap.abs() <= RELAX_DEADBAND {
        return t;
    }
    let step = (gap.abs() * RELAX_RATE).min(RELAX_MAX_STEP);
    t + step.copysign(gap)
}

pub fn update_cell(ctx: &mut TickContext, x: i32, y: i32) -> Result<CellFlow, PhysicsError> {
    let idx = ctx.grid.checked_index(x, y)?;
    let element = ctx.grid.types[idx];
    let before = ctx.grid.temperature[idx];

    if !before.is_finite() {
        ctx.grid.temperature[idx] = clamp_temp(before);
        return Err(PhysicsError::CorruptTemperature { x, y });
    }

    let relaxed = relax_toward_ambient(before);

    // A cell that changes phase keeps the temperature it entered the tick with.
    if let Some(change) = check_phase_change(element, relaxed, before, ctx.rng) {
        ctx.transform(idx, change.element, change.life, change.temperature);
        ctx.stats.phase_changes += 1;
        return Ok(CellFlow::Consumed);
    }

    ctx.grid.set_temp_idx(idx, relaxed);
    exchange_heat(ctx.grid, x, y);
    Ok(CellFlow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaxation_moves_toward_ambient_without_overshoot() {
        assert_eq!(relax_toward_ambient(20.5), 20.5);
        assert_eq!(relax_toward_ambient(120.0), 118.0);
        assert_eq!(relax_toward_ambient(-30.0), -29.0);
        // 1000 °C is capped at 2 degrees per tick
        assert_eq!(relax_toward_ambient(1000.0), 998.0);
        let t = relax_toward_ambient(21.5);
        assert!(t >= AMBIENT_TEMP && t < 21.5);
    }
}
