//! World - the tick orchestrator and its edit surface
//!
//! - WorldCore owns the published grid, a preallocated back buffer and the
//!   processed mask; a tick copies, scans, applies field effects and swaps
//! - Edits, tools and snapshot imports act on the published grid between
//!   ticks
//! - All physics lives in systems/, element data in domain/

use crate::core::grid::{Cell, Grid, ProcessedMask};
use crate::core::rng::SimRng;
use crate::elements::{ElementId, AMBIENT_TEMP, EL_EMPTY};
use crate::error::SnapshotError;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::fields::FieldEffects;
use crate::systems::reactions::ReactionTable;
use crate::systems::scan::ScanScheduler;

#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "step/cell.rs"]
mod cell;
#[path = "step/step.rs"]
mod step;
#[path = "commands/shapes.rs"]
mod shapes;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/tools.rs"]
mod tools;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::World;
pub use settings::Settings;
pub use shapes::Shape;
pub use snapshot::{Snapshot, SnapshotCell, SNAPSHOT_VERSION};
pub use step_stats::StepStats;
pub use tools::ForceField;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    back: Grid,
    processed: ProcessedMask,
    scan: ScanScheduler,
    behaviors: BehaviorRegistry,
    reactions: ReactionTable,
    fields: FieldEffects,
    rng: SimRng,
    settings: Settings,

    // State
    tick: u64,
    frame: u64,
    stats: StepStats,
}

impl WorldCore {
    /// Create a new world with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SimRng::default())
    }

    /// Create a world whose random choices are driven by `rng`
    pub fn with_rng(width: u32, height: u32, rng: SimRng) -> Self {
        init::create_world_core(width, height, rng)
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        init::create_world_core(width, height, SimRng::seeded(seed))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Ticks simulated so far
    pub fn tick(&self) -> u64 { self.tick }

    /// Host frames counted by `advance_frame`
    pub fn frame(&self) -> u64 { self.frame }

    /// The published grid
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Raw access to the published grid. Unknown ids written here are
    /// normalized to empty on the next tick.
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn cell(&self, x: i32, y: i32) -> Cell { self.grid.cell(x, y) }

    pub fn get_type(&self, x: i32, y: i32) -> ElementId { self.grid.get_type(x, y) }

    pub fn particle_count(&self) -> u32 { self.grid.count_particles() }

    /// Mean temperature over occupied cells; ambient when there are none
    pub fn average_temperature(&self) -> f32 {
        let (sum, count) = self
            .grid
            .types
            .iter()
            .zip(&self.grid.temperature)
            .filter(|(&t, _)| t != EL_EMPTY)
            .fold((0.0f64, 0u32), |(sum, n), (_, &temp)| (sum + temp as f64, n + 1));
        if count == 0 {
            AMBIENT_TEMP
        } else {
            (sum / count as f64) as f32
        }
    }

    /// Counters from the last tick
    pub fn stats(&self) -> StepStats {
        self.stats.clone()
    }

    // === Settings ===

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn set_reverse_gravity(&mut self, reversed: bool) {
        settings::set_reverse_gravity(self, reversed);
    }

    pub fn set_wind(&mut self, x: f32, y: f32) {
        settings::set_wind(self, x, y);
    }

    pub fn set_magnetic_field(&mut self, enabled: bool) {
        settings::set_magnetic_field(self, enabled);
    }

    pub fn set_game_speed(&mut self, speed: u32) {
        settings::set_game_speed(self, speed);
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        settings::set_pressure(self, pressure);
    }

    pub fn set_random_mode(&mut self, enabled: bool) {
        settings::set_random_mode(self, enabled);
    }

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn settings_json(&self) -> Result<String, String> {
        settings::settings_json(self)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    // === Edits ===

    /// Place `element` at a cell, honouring the replacement policy
    pub fn set_cell(&mut self, x: i32, y: i32, element: ElementId) -> bool {
        commands::set_cell(self, x, y, element)
    }

    pub fn erase_cell(&mut self, x: i32, y: i32) -> bool {
        commands::erase_cell(self, x, y)
    }

    /// Paint every cell of `shape`; returns how many were written
    pub fn paint(&mut self, shape: Shape, element: ElementId) -> u32 {
        commands::paint(self, shape, element)
    }

    /// Erase every cell of `shape`; returns how many were occupied
    pub fn clear_shape(&mut self, shape: Shape) -> u32 {
        commands::clear_shape(self, shape)
    }

    /// Element under the cursor, if any
    pub fn pick_element(&self, x: i32, y: i32) -> Option<ElementId> {
        commands::pick_element(self, x, y)
    }

    /// Clear all cells and transient state
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Tools ===

    pub fn apply_force_field(&mut self, field: ForceField) -> u32 {
        tools::apply_force_field(self, field)
    }

    pub fn apply_thermal_delta(&mut self, cx: i32, cy: i32, radius: i32, delta: f32) -> u32 {
        tools::apply_thermal_delta(self, cx, cy, radius, delta)
    }

    /// Blast the area; returns how many cosmetic sparks the host may draw
    pub fn apply_explosion(&mut self, cx: i32, cy: i32, radius: i32, power: u32) -> u32 {
        tools::apply_explosion(self, cx, cy, radius, power)
    }

    // === Snapshots ===

    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        snapshot::export_json(self)
    }

    pub fn import_snapshot(&mut self, json: &str) -> Result<(), SnapshotError> {
        snapshot::import_json(self, json)
    }

    // === Time ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self)
    }

    /// Count one host frame; steps when not paused and the frame lands on
    /// the speed divisor. Returns whether a tick ran.
    pub fn advance_frame(&mut self) -> bool {
        step::advance_frame(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
