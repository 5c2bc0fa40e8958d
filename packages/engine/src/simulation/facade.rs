use wasm_bindgen::prelude::*;

use super::{ForceField, Shape, StepStats, WorldCore};

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

/// Seed from the host clock and Math.random in the browser, fixed elsewhere
fn host_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (noise << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED_CAFE
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::with_seed(width, height, host_seed()),
        }
    }

    /// Deterministic world for replays and tests
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self {
            core: WorldCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn average_temperature(&self) -> f32 { self.core.average_temperature() }

    /// Counters from the last tick
    pub fn get_stats(&self) -> StepStats {
        self.core.stats()
    }

    // === Settings ===

    pub fn set_reverse_gravity(&mut self, reversed: bool) {
        self.core.set_reverse_gravity(reversed);
    }

    pub fn set_wind(&mut self, x: f32, y: f32) {
        self.core.set_wind(x, y);
    }

    pub fn set_magnetic_field(&mut self, enabled: bool) {
        self.core.set_magnetic_field(enabled);
    }

    pub fn set_game_speed(&mut self, speed: u32) {
        self.core.set_game_speed(speed);
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        self.core.set_pressure(pressure);
    }

    pub fn set_random_mode(&mut self, enabled: bool) {
        self.core.set_random_mode(enabled);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.core.settings_json().map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(|e| JsValue::from_str(&e))
    }

    // === Edits ===

    pub fn set_cell(&mut self, x: i32, y: i32, element: u8) -> bool {
        self.core.set_cell(x, y, element)
    }

    pub fn erase_cell(&mut self, x: i32, y: i32) -> bool {
        self.core.erase_cell(x, y)
    }

    /// Round brush of diameter `size` centred on the cursor
    pub fn paint_brush(&mut self, cx: i32, cy: i32, size: i32, element: u8) -> u32 {
        self.core.paint(Shape::Brush { cx, cy, size }, element)
    }

    pub fn paint_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, element: u8) -> u32 {
        self.core.paint(Shape::Line { x0, y0, x1, y1 }, element)
    }

    pub fn paint_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, element: u8) -> u32 {
        self.core.paint(Shape::Rect { x0, y0, x1, y1 }, element)
    }

    pub fn paint_circle(&mut self, cx: i32, cy: i32, radius: i32, element: u8) -> u32 {
        self.core.paint(Shape::Circle { cx, cy, radius }, element)
    }

    pub fn erase_brush(&mut self, cx: i32, cy: i32, size: i32) -> u32 {
        self.core.clear_shape(Shape::Brush { cx, cy, size })
    }

    /// Eyedropper; `undefined` over an empty cell
    pub fn pick_element(&self, x: i32, y: i32) -> Option<u8> {
        self.core.pick_element(x, y)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Tools ===

    pub fn push(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.apply_force_field(ForceField::Push { cx, cy, radius })
    }

    pub fn gust(&mut self, cx: i32, cy: i32, radius: i32, direction: i32) -> u32 {
        self.core.apply_force_field(ForceField::Gust { cx, cy, radius, direction })
    }

    pub fn vacuum(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.apply_force_field(ForceField::Vacuum { cx, cy, radius })
    }

    pub fn heat(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) -> u32 {
        self.core.apply_thermal_delta(cx, cy, radius, amount.abs())
    }

    pub fn cool(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) -> u32 {
        self.core.apply_thermal_delta(cx, cy, radius, -amount.abs())
    }

    /// Returns how many cosmetic sparks to draw
    pub fn explode(&mut self, cx: i32, cy: i32, radius: i32, power: u32) -> u32 {
        self.core.apply_explosion(cx, cy, radius, power)
    }

    // === Snapshots ===

    pub fn export_snapshot(&self) -> Result<String, JsValue> {
        self.core
            .export_snapshot()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn import_snapshot(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .import_snapshot(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === Time ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Call once per animation frame; returns whether a tick ran
    pub fn advance_frame(&mut self) -> bool {
        self.core.advance_frame()
    }

    // === Zero-copy views ===

    /// Pointer to the element-id buffer (`width * height` bytes)
    pub fn types_ptr(&self) -> *const u8 {
        self.core.grid().types_ptr()
    }

    /// Pointer to the temperature buffer (`width * height` f32s)
    pub fn temperature_ptr(&self) -> *const f32 {
        self.core.grid().temperature_ptr()
    }
}
