use crate::core::grid::Grid;
use crate::elements::{conductivity_of, EL_EMPTY};
use crate::systems::NEIGHBORS_4;

const MIN_GAP: f32 = 2.0;
const TRANSFER_RATE: f32 = 0.03;

/// Symmetric heat exchange with the occupied orthogonal neighbours.
///
/// Each exchange is capped at half the gap so the pair never crosses over.
pub fn exchange_heat(grid: &mut Grid, x: i32, y: i32) {
    if !grid.in_bounds(x, y) {
        return;
    }
    let idx = grid.index(x as u32, y as u32);
    let own_conductivity = conductivity_of(grid.types[idx]);

    for (dx, dy) in NEIGHBORS_4 {
        let (nx, ny) = (x + dx, y + dy);
        if !grid.in_bounds(nx, ny) {
            continue;
        }
        let nidx = grid.index(nx as u32, ny as u32);
        let neighbor = grid.types[nidx];
        if neighbor == EL_EMPTY {
            continue;
        }

        let mine = grid.temperature[idx];
        let theirs = grid.temperature[nidx];
        let gap = mine - theirs;
        if gap.abs() <= MIN_GAP {
            continue;
        }

        let conductivity = (own_conductivity + conductivity_of(neighbor)) * 0.5;
        let cap = gap.abs() * 0.5;
        let transfer = (gap * TRANSFER_RATE * conductivity).clamp(-cap, cap);

        grid.set_temp_idx(idx, mine - transfer);
        grid.set_temp_idx(nidx, theirs + transfer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{EL_METAL, EL_STONE};

    #[test]
    fn heat_flows_from_hot_to_cold_and_is_conserved() {
        let mut grid = Grid::new(3, 1);
        grid.set_particle(0, 0, EL_METAL, 0, 500.0);
        grid.set_particle(1, 0, EL_METAL, 0, 100.0);
        exchange_heat(&mut grid, 0, 0);
        let (a, b) = (grid.get_temp(0, 0), grid.get_temp(1, 0));
        assert!(a < 500.0 && b > 100.0);
        assert!(a >= b);
        assert!((a + b - 600.0).abs() < 1e-3);
    }

    #[test]
    fn small_gaps_and_empty_neighbours_are_ignored() {
        let mut grid = Grid::new(3, 1);
        grid.set_particle(1, 0, EL_STONE, 0, 21.5);
        grid.set_particle(2, 0, EL_STONE, 0, 20.0);
        exchange_heat(&mut grid, 1, 0);
        assert_eq!(grid.get_temp(1, 0), 21.5);
        assert_eq!(grid.get_temp(0, 0), 20.0);
    }
}
