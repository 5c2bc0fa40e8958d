//! Interactive tools: force fields, heating/cooling, explosions.
//!
//! Tools act on the published grid between ticks and only ever move a cell
//! into an empty target.

use crate::elements::{
    is_flammable, is_solid, EL_EMPTY, EL_FIRE, EL_ICE, EL_LAVA, EL_STEAM, EL_STONE, EL_WATER,
};

use super::shapes::{for_each_in_disc, DiscCell};
use super::WorldCore;

const GUST_SHIFT: f32 = 3.0;
const COOL_FLOOR: f32 = -10.0;
const SPARKS_PER_POWER: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceField {
    /// Radial push away from the centre, scaled by the pressure setting
    Push { cx: i32, cy: i32, radius: i32 },
    /// Sideways gust; `direction` is the sign of the shift
    Gust { cx: i32, cy: i32, radius: i32, direction: i32 },
    /// Pulls loose cells one step toward the centre
    Vacuum { cx: i32, cy: i32, radius: i32 },
}

/// Returns how many cells moved.
pub(super) fn apply_force_field(world: &mut WorldCore, field: ForceField) -> u32 {
    let (cx, cy, radius) = match field {
        ForceField::Push { cx, cy, radius }
        | ForceField::Gust { cx, cy, radius, .. }
        | ForceField::Vacuum { cx, cy, radius } => (cx, cy, radius.max(0)),
    };
    let strength = world.settings.pressure;
    let (width, height) = (world.grid.width(), world.grid.height());
    let mut moved = 0;

    for_each_in_disc(cx, cy, radius, width, height, |cell| {
        let DiscCell { x, y, dx, dy, distance } = cell;
        let element = world.grid.get_type(x, y);
        if element == EL_EMPTY {
            return;
        }

        let target = match field {
            ForceField::Push { .. } => {
                if distance == 0.0 {
                    return;
                }
                let shift = strength / 5.0 / distance;
                (
                    (x as f32 + dx as f32 * shift).round() as i32,
                    (y as f32 + dy as f32 * shift).round() as i32,
                )
            }
            ForceField::Gust { direction, .. } => {
                if is_solid(element) {
                    return;
                }
                let force = 1.0 - distance / radius.max(1) as f32;
                (x + direction.signum() * (force * GUST_SHIFT).floor() as i32, y)
            }
            ForceField::Vacuum { .. } => {
                if is_solid(element) || distance == 0.0 {
                    return;
                }
                (x - dx.signum(), y - dy.signum())
            }
        };

        if target != (x, y) && world.grid.is_empty(target.0, target.1) {
            let from = world.grid.index(x as u32, y as u32);
            let to = world.grid.index(target.0 as u32, target.1 as u32);
            world.grid.move_idx(from, to);
            moved += 1;
        }
    });
    moved
}

/// Heat (`delta > 0`) or cool (`delta < 0`) occupied cells in a disc,
/// applying the tool's own phase rules. Returns how many cells changed kind.
pub(super) fn apply_thermal_delta(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, delta: f32) -> u32 {
    let (width, height) = (world.grid.width(), world.grid.height());
    let mut transformed = 0;
    for_each_in_disc(cx, cy, radius, width, height, |DiscCell { x, y, .. }| {
        let element = world.grid.get_type(x, y);
        if element == EL_EMPTY {
            return;
        }

        let current = world.grid.get_temp(x, y);
        let temp = if delta >= 0.0 {
            current + delta
        } else if current < COOL_FLOOR {
            current
        } else {
            (current + delta).max(COOL_FLOOR)
        };

        let change = if delta >= 0.0 {
            match element {
                EL_ICE if temp > 30.0 => Some((EL_WATER, 0)),
                EL_WATER if temp > 80.0 => Some((EL_STEAM, 80)),
                _ if is_flammable(element) && temp > 60.0 => Some((EL_FIRE, 15)),
                _ => None,
            }
        } else {
            match element {
                EL_WATER if temp < 5.0 => Some((EL_ICE, 0)),
                EL_STEAM if temp < 50.0 => Some((EL_WATER, 0)),
                EL_FIRE => Some((EL_EMPTY, 0)),
                EL_LAVA if temp < 100.0 => Some((EL_STONE, 0)),
                _ => None,
            }
        };

        let (ux, uy) = (x as u32, y as u32);
        match change {
            Some((into, life)) => {
                world.grid.set_particle(ux, uy, into, life, temp);
                transformed += 1;
            }
            None => world.grid.set_temp(ux, uy, temp),
        }
    });
    transformed
}

/// Each cell within `radius` is hit with probability `1 - d/radius`; hit
/// cells turn to fire (30 %) or empty. Returns the cosmetic spark count.
pub(super) fn apply_explosion(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, power: u32) -> u32 {
    let radius = radius.max(0);
    let (width, height) = (world.grid.width(), world.grid.height());
    for_each_in_disc(cx, cy, radius, width, height, |DiscCell { x, y, distance, .. }| {
        let hit = radius == 0 || world.rng.chance(1.0 - distance / radius as f32);
        if !hit {
            return;
        }
        let (ux, uy) = (x as u32, y as u32);
        if world.rng.chance(0.3) {
            world.grid.set_particle(ux, uy, EL_FIRE, 8, 200.0);
        } else {
            world.grid.clear_cell(ux, uy);
        }
    });
    tracing::debug!(cx, cy, radius, power, "explosion tool");
    power.saturating_mul(SPARKS_PER_POWER)
}
