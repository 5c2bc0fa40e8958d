//! Global field effects, applied once per tick to the back buffer after
//! the cell scan and before it is published.
//!
//! - Wind (every 3rd tick): pushes up to 100 gas/liquid cells (and the
//!   odd powder) one column downwind.
//! - Magnetism (every 5th tick): up to 50 metal cells step toward their
//!   nearest magnet.
//!
//! Both only move cells into empty targets.

use crate::elements::{is_gas, is_liquid, is_solid, EL_EMPTY, EL_MAGNET, EL_METAL};

use super::TickContext;

const WIND_PERIOD: u64 = 3;
const WIND_THRESHOLD: f32 = 0.1;
const WIND_BUDGET: u32 = 100;
const WIND_POWDER_CHANCE: f32 = 0.05;

const MAGNET_PERIOD: u64 = 5;
const MAGNET_METAL_BUDGET: usize = 50;
const MAGNET_RANGE: i32 = 15;
const MAGNET_STEP_CHANCE: f32 = 0.15;

/// Scratch lists reused across ticks
pub struct FieldEffects {
    magnets: Vec<(i32, i32)>,
    metals: Vec<(i32, i32)>,
}

impl FieldEffects {
    pub fn new() -> Self {
        Self {
            magnets: Vec::new(),
            metals: Vec::with_capacity(MAGNET_METAL_BUDGET),
        }
    }

    pub fn apply_wind(&mut self, ctx: &mut TickContext, wind_x: f32, tick: u64) {
        if tick % WIND_PERIOD != 0 || wind_x.abs() <= WIND_THRESHOLD {
            return;
        }
        let dir: i32 = if wind_x > 0.0 { 1 } else { -1 };
        let (width, height) = (ctx.grid.width() as i32, ctx.grid.height() as i32);
        let mut budget = WIND_BUDGET;

        for y in 0..height {
            // Walk against the wind so a pushed cell is never visited twice.
            for i in 0..width {
                let x = if dir > 0 { width - 1 - i } else { i };
                let element = ctx.grid.get_type(x, y);
                if element == EL_EMPTY || is_solid(element) {
                    continue;
                }
                let eligible =
                    is_gas(element) || is_liquid(element) || ctx.rng.chance(WIND_POWDER_CHANCE);
                if !eligible {
                    continue;
                }

                let tx = x + dir;
                if ctx.grid.is_empty(tx, y) {
                    let from = ctx.grid.index(x as u32, y as u32);
                    let to = ctx.grid.index(tx as u32, y as u32);
                    ctx.grid.move_idx(from, to);
                    ctx.stats.moves += 1;
                }

                budget -= 1;
                if budget == 0 {
                    return;
                }
            }
        }
    }

    pub fn apply_magnetism(&mut self, ctx: &mut TickContext, tick: u64) {
        if tick % MAGNET_PERIOD != 0 {
            return;
        }
        self.magnets.clear();
        self.metals.clear();

        let (width, height) = (ctx.grid.width() as i32, ctx.grid.height() as i32);
        for y in 0..height {
            for x in 0..width {
                match ctx.grid.get_type(x, y) {
                    EL_MAGNET => self.magnets.push((x, y)),
                    EL_METAL if self.metals.len() < MAGNET_METAL_BUDGET => self.metals.push((x, y)),
                    _ => {}
                }
            }
        }
        if self.magnets.is_empty() {
            return;
        }

        for &(mx, my) in &self.metals {
            let nearest = self
                .magnets
                .iter()
                .map(|&(gx, gy)| (gx - mx, gy - my))
                .min_by_key(|(dx, dy)| dx.abs() + dy.abs());
            let Some((dx, dy)) = nearest else {
                continue;
            };
            let distance = dx.abs() + dy.abs();
            if distance == 0 || distance >= MAGNET_RANGE || !ctx.rng.chance(MAGNET_STEP_CHANCE) {
                continue;
            }
            let (tx, ty) = (mx + dx.signum(), my + dy.signum());
            if ctx.grid.is_empty(tx, ty) && ctx.grid.get_type(mx, my) == EL_METAL {
                let from = ctx.grid.index(mx as u32, my as u32);
                let to = ctx.grid.index(tx as u32, ty as u32);
                ctx.grid.move_idx(from, to);
                ctx.stats.moves += 1;
            }
        }
    }
}

impl Default for FieldEffects {
    fn default() -> Self {
        Self::new()
    }
}
