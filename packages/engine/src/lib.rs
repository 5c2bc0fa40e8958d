//! Elemental Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/        - Grid storage, processed mask, seeded RNG
//! - domain/      - Element table and property helpers
//! - systems/     - Heat, reactions, movement behaviors, field effects
//! - simulation/  - WorldCore tick orchestration, edits, snapshots, wasm facade

pub mod core;
pub mod domain;
pub mod error;
pub mod simulation;
pub mod systems;

pub use domain::elements;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Elemental engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::grid::{Cell, Grid};
pub use crate::core::rng::SimRng;
pub use domain::elements::ElementId;
pub use error::{PhysicsError, SnapshotError};
pub use simulation::{ForceField, Settings, Shape, Snapshot, StepStats, World, WorldCore};

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_dirt() -> u8 { domain::elements::EL_DIRT }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_fire() -> u8 { domain::elements::EL_FIRE }
#[wasm_bindgen]
pub fn el_plant() -> u8 { domain::elements::EL_PLANT }
#[wasm_bindgen]
pub fn el_stone() -> u8 { domain::elements::EL_STONE }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_steam() -> u8 { domain::elements::EL_STEAM }
#[wasm_bindgen]
pub fn el_oil() -> u8 { domain::elements::EL_OIL }
#[wasm_bindgen]
pub fn el_ice() -> u8 { domain::elements::EL_ICE }
#[wasm_bindgen]
pub fn el_lava() -> u8 { domain::elements::EL_LAVA }
#[wasm_bindgen]
pub fn el_acid() -> u8 { domain::elements::EL_ACID }
#[wasm_bindgen]
pub fn el_metal() -> u8 { domain::elements::EL_METAL }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_gunpowder() -> u8 { domain::elements::EL_GUNPOWDER }
#[wasm_bindgen]
pub fn el_electricity() -> u8 { domain::elements::EL_ELECTRICITY }
#[wasm_bindgen]
pub fn el_virus() -> u8 { domain::elements::EL_VIRUS }
#[wasm_bindgen]
pub fn el_magnet() -> u8 { domain::elements::EL_MAGNET }
#[wasm_bindgen]
pub fn el_gas() -> u8 { domain::elements::EL_GAS }
#[wasm_bindgen]
pub fn el_plasma() -> u8 { domain::elements::EL_PLASMA }

/// Element name for a palette label; "empty" for unknown ids
#[wasm_bindgen]
pub fn element_name(id: u8) -> String {
    domain::elements::element_name(id).to_string()
}
