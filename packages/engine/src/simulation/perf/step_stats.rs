use wasm_bindgen::prelude::*;

/// Counters for one tick, reset when the tick starts
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub(crate) tick: u64,
    pub(crate) cells_visited: u32,
    pub(crate) moves: u32,
    pub(crate) reactions: u32,
    pub(crate) phase_changes: u32,
    pub(crate) decays: u32,
    pub(crate) explosions: u32,
    pub(crate) errors: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self, tick: u64) {
        *self = StepStats { tick, ..StepStats::default() };
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn reactions(&self) -> u32 { self.reactions }
    #[wasm_bindgen(getter)]
    pub fn phase_changes(&self) -> u32 { self.phase_changes }
    #[wasm_bindgen(getter)]
    pub fn decays(&self) -> u32 { self.decays }
    #[wasm_bindgen(getter)]
    pub fn explosions(&self) -> u32 { self.explosions }
    #[wasm_bindgen(getter)]
    pub fn errors(&self) -> u32 { self.errors }
}
