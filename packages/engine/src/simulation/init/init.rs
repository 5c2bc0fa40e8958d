use crate::core::grid::{Grid, ProcessedMask};
use crate::core::rng::SimRng;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::fields::FieldEffects;
use crate::systems::reactions::ReactionTable;
use crate::systems::scan::ScanScheduler;

use super::settings::Settings;
use super::step_stats::StepStats;
use super::WorldCore;

/// Every buffer the tick needs is allocated here, once.
pub(super) fn create_world_core(width: u32, height: u32, rng: SimRng) -> WorldCore {
    let grid = Grid::new(width, height);
    let size = grid.size();
    tracing::debug!(width, height, "creating world");
    WorldCore {
        grid,
        back: Grid::new(width, height),
        processed: ProcessedMask::new(size),
        scan: ScanScheduler::new(width),
        behaviors: BehaviorRegistry::new(),
        reactions: ReactionTable::new(),
        fields: FieldEffects::new(),
        rng,
        settings: Settings::default(),
        tick: 0,
        frame: 0,
        stats: StepStats::default(),
    }
}
