//! Grid - Structure of Arrays (SoA) cell storage
//!
//! Instead of: Vec<Cell>        // one struct per cell
//! We have:    types[], life[], temperature[]  // linear memory per property
//!
//! Every write goes through a setter that clamps temperature and
//! normalizes unknown element ids, so the stored state is always legal.

use crate::elements::{clamp_temp, is_valid_element_id, ElementId, AMBIENT_TEMP, EL_EMPTY};
use crate::error::PhysicsError;

mod accessors;
mod cell;
mod processed;

pub use cell::Cell;
pub use processed::ProcessedMask;

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub types: Vec<ElementId>,   // Element kind (0 = empty)
    pub life: Vec<u16>,          // Remaining lifetime in ticks
    pub temperature: Vec<f32>,   // Temperature in °C
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            types: vec![EL_EMPTY; size],
            life: vec![0; size],
            temperature: vec![AMBIENT_TEMP; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Result<usize, PhysicsError> {
        if self.in_bounds(x, y) {
            Ok(self.index(x as u32, y as u32))
        } else {
            Err(PhysicsError::OutOfBounds { x, y })
        }
    }

    /// False outside the grid.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.types[self.index(x as u32, y as u32)] == EL_EMPTY
    }

    // === Type access ===
    /// Empty outside the grid.
    #[inline]
    pub fn get_type(&self, x: i32, y: i32) -> ElementId {
        if !self.in_bounds(x, y) { return EL_EMPTY; }
        self.types[self.index(x as u32, y as u32)]
    }

    // === Whole-cell writes ===
    #[inline]
    pub fn set_particle_idx(&mut self, idx: usize, element: ElementId, life: u16, temp: f32) {
        if !is_valid_element_id(element) || element == EL_EMPTY {
            self.clear_cell_idx(idx);
            return;
        }
        self.types[idx] = element;
        self.life[idx] = life;
        self.temperature[idx] = clamp_temp(temp);
    }

    pub fn set_particle(&mut self, x: u32, y: u32, element: ElementId, life: u16, temp: f32) {
        let idx = self.index(x, y);
        self.set_particle_idx(idx, element, life, temp);
    }

    /// Empty the cell. Temperature resets to ambient.
    #[inline]
    pub fn clear_cell_idx(&mut self, idx: usize) {
        self.types[idx] = EL_EMPTY;
        self.life[idx] = 0;
        self.temperature[idx] = AMBIENT_TEMP;
    }

    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.clear_cell_idx(idx);
    }

    /// Move the occupant of `from` into `to`, leaving `from` empty.
    #[inline]
    pub fn move_idx(&mut self, from: usize, to: usize) {
        self.types[to] = self.types[from];
        self.life[to] = self.life[from];
        self.temperature[to] = self.temperature[from];
        self.clear_cell_idx(from);
    }

    /// Overwrite this grid with `other` without reallocating.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.types.copy_from_slice(&other.types);
        self.life.copy_from_slice(&other.life);
        self.temperature.copy_from_slice(&other.temperature);
    }

    pub fn clear(&mut self) {
        self.types.fill(EL_EMPTY);
        self.life.fill(0);
        self.temperature.fill(AMBIENT_TEMP);
    }

    pub fn count_particles(&self) -> u32 {
        self.types.iter().filter(|&&t| t != EL_EMPTY).count() as u32
    }

    pub fn types_ptr(&self) -> *const u8 {
        self.types.as_ptr()
    }
}
