//! Scan Scheduler - the order cells are visited in a tick
//!
//! Rows run from the gravity side upward (bottom-to-top under normal
//! gravity, top-to-bottom when reversed) so falling matter is handled
//! before whatever rests on it. Columns inside a row are reshuffled for
//! every row to remove left/right bias.

use crate::core::rng::SimRng;

pub struct ScanScheduler {
    columns: Vec<u32>,
}

impl ScanScheduler {
    pub fn new(width: u32) -> Self {
        Self {
            columns: (0..width).collect(),
        }
    }

    /// Row order for the given gravity step (+1 = down).
    pub fn row_order(height: u32, gravity: i32) -> impl Iterator<Item = u32> {
        let from_bottom = gravity > 0;
        (0..height).map(move |i| if from_bottom { height - 1 - i } else { i })
    }

    /// Fresh random permutation of the columns.
    pub fn shuffle_columns(&mut self, rng: &mut SimRng) -> &[u32] {
        rng.shuffle(&mut self.columns);
        &self.columns
    }
}
