use crate::core::grid::Grid;
use crate::core::rng::SimRng;
use crate::elements::{density_of, is_liquid, EL_EMPTY};

const PRESSURE_COLUMN: i32 = 8;
const PRESSURE_SPAN: i32 = 3;

/// Both lateral directions, in random order
#[inline]
pub fn shuffled_pair(rng: &mut SimRng) -> [i32; 2] {
    if rng.coin() { [-1, 1] } else { [1, -1] }
}

/// Hydrostatic pressure at `(x, y)`.
///
/// Walks the column against gravity (`up`) for up to 8 cells: liquids add
/// `density * height * 0.1`, empty cells are skipped, anything else stops
/// the walk. Liquids within 3 cells on the same row add `density * 0.05`.
pub fn column_pressure(grid: &Grid, x: i32, y: i32, up: i32) -> f32 {
    let mut pressure = 0.0;
    for k in 0..=PRESSURE_COLUMN {
        let cy = y + k * up;
        if !grid.in_bounds(x, cy) {
            break;
        }
        let element = grid.get_type(x, cy);
        if is_liquid(element) {
            pressure += density_of(element) * (k + 1) as f32 * 0.1;
        } else if element != EL_EMPTY {
            break;
        }
    }

    for cx in (x - PRESSURE_SPAN)..=(x + PRESSURE_SPAN) {
        let element = grid.get_type(cx, y);
        if is_liquid(element) {
            pressure += density_of(element) * 0.05;
        }
    }
    pressure
}
