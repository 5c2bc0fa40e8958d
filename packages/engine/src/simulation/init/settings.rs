//! Host-tunable world settings
//!
//! Setters clamp into range; `load_settings_json` accepts partial
//! documents, filling gaps from the defaults.

use serde::{Deserialize, Serialize};

use super::WorldCore;

pub const MAX_WIND: f32 = 10.0;
pub const MIN_GAME_SPEED: u32 = 1;
pub const MAX_GAME_SPEED: u32 = 11;
pub const MIN_PRESSURE: f32 = 1.0;
pub const MAX_PRESSURE: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reverse_gravity: bool,
    pub wind_x: f32,
    pub wind_y: f32,
    pub magnetic_field: bool,
    pub game_speed: u32,
    /// Strength of the push tool
    pub pressure: f32,
    /// Reserved for hosts; the engine does not read it
    pub random_mode: bool,
    pub paused: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reverse_gravity: false,
            wind_x: 0.0,
            wind_y: 0.0,
            magnetic_field: false,
            game_speed: 5,
            pressure: 5.0,
            random_mode: false,
            paused: false,
        }
    }
}

impl Settings {
    /// Row step along gravity: +1 down, -1 up
    pub fn gravity_step(&self) -> i32 {
        if self.reverse_gravity { -1 } else { 1 }
    }

    /// Host frames per tick
    pub fn tick_divisor(&self) -> u64 {
        12u64.saturating_sub(self.game_speed as u64).max(1)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed: Settings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(parsed.sanitized())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    fn sanitized(mut self) -> Self {
        self.wind_x = clamp_wind(self.wind_x);
        self.wind_y = clamp_wind(self.wind_y);
        self.game_speed = self.game_speed.clamp(MIN_GAME_SPEED, MAX_GAME_SPEED);
        self.pressure = clamp_pressure(self.pressure);
        self
    }
}

fn clamp_wind(v: f32) -> f32 {
    if v.is_finite() { v.clamp(-MAX_WIND, MAX_WIND) } else { 0.0 }
}

fn clamp_pressure(v: f32) -> f32 {
    if v.is_finite() { v.clamp(MIN_PRESSURE, MAX_PRESSURE) } else { MIN_PRESSURE }
}

pub(super) fn set_reverse_gravity(world: &mut WorldCore, reversed: bool) {
    world.settings.reverse_gravity = reversed;
}

pub(super) fn set_wind(world: &mut WorldCore, x: f32, y: f32) {
    world.settings.wind_x = clamp_wind(x);
    world.settings.wind_y = clamp_wind(y);
}

pub(super) fn set_magnetic_field(world: &mut WorldCore, enabled: bool) {
    world.settings.magnetic_field = enabled;
}

pub(super) fn set_game_speed(world: &mut WorldCore, speed: u32) {
    world.settings.game_speed = speed.clamp(MIN_GAME_SPEED, MAX_GAME_SPEED);
}

pub(super) fn set_pressure(world: &mut WorldCore, pressure: f32) {
    world.settings.pressure = clamp_pressure(pressure);
}

pub(super) fn set_random_mode(world: &mut WorldCore, enabled: bool) {
    world.settings.random_mode = enabled;
}

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    world.settings.paused = paused;
}

pub(super) fn settings_json(world: &WorldCore) -> Result<String, String> {
    world.settings.to_json()
}

pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    world.settings = Settings::from_json(json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_maps_to_divisor() {
        let mut s = Settings::default();
        assert_eq!(s.tick_divisor(), 7);
        s.game_speed = 11;
        assert_eq!(s.tick_divisor(), 1);
        s.game_speed = 1;
        assert_eq!(s.tick_divisor(), 11);
    }

    #[test]
    fn partial_json_fills_defaults_and_clamps() {
        let s = Settings::from_json(r#"{ "wind_x": 42.0, "game_speed": 0 }"#).unwrap();
        assert_eq!(s.wind_x, MAX_WIND);
        assert_eq!(s.game_speed, MIN_GAME_SPEED);
        assert!(!s.reverse_gravity);
        assert_eq!(s.pressure, 5.0);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(Settings::from_json("{ wind").is_err());
    }

    #[test]
    fn json_round_trip() {
        let s = Settings { reverse_gravity: true, magnetic_field: true, ..Settings::default() };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }
}
