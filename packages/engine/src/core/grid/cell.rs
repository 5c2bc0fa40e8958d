use crate::elements::{ElementId, AMBIENT_TEMP, EL_EMPTY};

use super::Grid;

/// One cell's state, gathered from the SoA arrays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub element: ElementId,
    pub life: u16,
    pub temperature: f32,
}

impl Cell {
    pub const EMPTY: Cell = Cell { element: EL_EMPTY, life: 0, temperature: AMBIENT_TEMP };
}

impl Grid {
    /// `Cell::EMPTY` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::EMPTY;
        }
        let idx = self.index(x as u32, y as u32);
        Cell {
            element: self.types[idx],
            life: self.life[idx],
            temperature: self.temperature[idx],
        }
    }
}
