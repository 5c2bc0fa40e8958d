//! Systems - the rules applied to each cell during a tick
//!
//! - scan/         - row and column visiting order
//! - temperature/  - ambient relaxation, phase changes, conduction
//! - reactions/    - lifetimes, neighbour reactions, explosions
//! - behaviors/    - gas, liquid and powder movement
//! - fields        - wind and magnetism, applied once per tick

pub mod behaviors;
pub mod fields;
pub mod reactions;
pub mod scan;
pub mod temperature;

use crate::core::grid::{Grid, ProcessedMask};
use crate::core::rng::SimRng;
use crate::elements::ElementId;
use crate::simulation::StepStats;

use reactions::ReactionTable;

/// What the orchestrator does with a cell after a phase ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFlow {
    /// Run the next phase
    Continue,
    /// The cell was transformed or destroyed; its turn is over
    Consumed,
}

/// Mutable view of the tick in progress.
///
/// `grid` is the back buffer: every rule reads and writes it, and the
/// orchestrator publishes it once the scan and the field effects are done.
pub struct TickContext<'a> {
    pub grid: &'a mut Grid,
    pub processed: &'a mut ProcessedMask,
    pub rng: &'a mut SimRng,
    pub reactions: &'a ReactionTable,
    pub stats: &'a mut StepStats,
    /// Row step along gravity: +1 falls toward the bottom row, -1 toward row 0
    pub gravity: i32,
}

impl<'a> TickContext<'a> {
    /// Replace a cell and mark it handled so it does not act again this tick.
    #[inline]
    pub fn transform(&mut self, idx: usize, element: ElementId, life: u16, temp: f32) {
        self.grid.set_particle_idx(idx, element, life, temp);
        self.processed.mark(idx);
    }

    #[inline]
    pub fn vacate(&mut self, idx: usize) {
        self.grid.clear_cell_idx(idx);
        self.processed.mark(idx);
    }

    #[inline]
    pub fn is_processed(&self, idx: usize) -> bool {
        self.processed.is_set(idx)
    }

    /// Row step against gravity, where gases rise
    #[inline]
    pub fn up(&self) -> i32 {
        -self.gravity
    }
}

/// The 8-neighbourhood, row by row
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Orthogonal neighbours
pub const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
