//! Element Definitions - the static property table
//!
//! Every kind the engine knows is an `ElementId` indexing `ELEMENT_DATA`.
//! Categories are derived from the flags:
//! - gas flag    -> CAT_GAS
//! - liquid flag -> CAT_LIQUID
//! - solid flag  -> CAT_SOLID
//! - otherwise   -> CAT_POWDER
//!
//! Handwritten helpers layered on top live in `elements_ext`.

pub use crate::domain::elements_ext::*;

pub type ElementId = u8;
pub type CategoryId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_DIRT: ElementId = 1;
pub const EL_WATER: ElementId = 2;
pub const EL_FIRE: ElementId = 3;
pub const EL_PLANT: ElementId = 4;
pub const EL_STONE: ElementId = 5;
pub const EL_SAND: ElementId = 6;
pub const EL_STEAM: ElementId = 7;
pub const EL_OIL: ElementId = 8;
pub const EL_ICE: ElementId = 9;
pub const EL_LAVA: ElementId = 10;
pub const EL_ACID: ElementId = 11;
pub const EL_METAL: ElementId = 12;
pub const EL_WOOD: ElementId = 13;
pub const EL_GUNPOWDER: ElementId = 14;
pub const EL_ELECTRICITY: ElementId = 15;
pub const EL_VIRUS: ElementId = 16;
pub const EL_MAGNET: ElementId = 17;
pub const EL_GAS: ElementId = 18;
pub const EL_PLASMA: ElementId = 19;

pub const ELEMENT_COUNT: usize = 20;

pub const CAT_SOLID: CategoryId = 0;
pub const CAT_POWDER: CategoryId = 1;
pub const CAT_LIQUID: CategoryId = 2;
pub const CAT_GAS: CategoryId = 3;

pub const FLAG_FLAMMABLE: u16 = 1 << 0;
pub const FLAG_LIQUID: u16 = 1 << 1;
pub const FLAG_GAS: u16 = 1 << 2;
pub const FLAG_SOLID: u16 = 1 << 3;
pub const FLAG_CORROSIVE: u16 = 1 << 4;
pub const FLAG_EXPLOSIVE: u16 = 1 << 5;
pub const FLAG_INFECTIOUS: u16 = 1 << 6;
pub const FLAG_CONDUCTIVE: u16 = 1 << 7;
pub const FLAG_MAGNETIC: u16 = 1 << 8;

/// Static descriptor of one element kind
#[derive(Debug, Clone, Copy)]
pub struct ElementProps {
    pub name: &'static str,
    pub density: f32,
    pub flags: u16,
    pub category: CategoryId,
    /// Ticks a freshly created cell lives; 0 = persistent
    pub lifetime: u16,
    pub melt_point: Option<f32>,
    pub conductivity: f32,
    pub ignition_temp: f32,
}

const fn category_from_flags(flags: u16) -> CategoryId {
    if flags & FLAG_GAS != 0 {
        CAT_GAS
    } else if flags & FLAG_LIQUID != 0 {
        CAT_LIQUID
    } else if flags & FLAG_SOLID != 0 {
        CAT_SOLID
    } else {
        CAT_POWDER
    }
}

const fn props(
    name: &'static str,
    density: f32,
    flags: u16,
    lifetime: u16,
    conductivity: f32,
    ignition_temp: f32,
) -> ElementProps {
    ElementProps {
        name,
        density,
        flags,
        category: category_from_flags(flags),
        lifetime,
        melt_point: None,
        conductivity,
        ignition_temp,
    }
}

const DEFAULT_IGNITION: f32 = 100.0;

pub static ELEMENT_DATA: [ElementProps; ELEMENT_COUNT] = [
    props("empty", 0.0, 0, 0, 0.1, DEFAULT_IGNITION),
    props("dirt", 1.5, 0, 0, 0.5, DEFAULT_IGNITION),
    props("water", 1.0, FLAG_LIQUID, 0, 1.5, DEFAULT_IGNITION),
    props("fire", 0.01, FLAG_GAS, 8, 1.0, DEFAULT_IGNITION),
    props("plant", 0.8, FLAG_FLAMMABLE | FLAG_SOLID, 0, 0.4, 60.0),
    props("stone", 2.7, FLAG_SOLID, 0, 0.8, DEFAULT_IGNITION),
    props("sand", 1.6, 0, 0, 0.6, DEFAULT_IGNITION),
    props("steam", 0.001, FLAG_GAS, 80, 1.0, DEFAULT_IGNITION),
    props("oil", 0.9, FLAG_FLAMMABLE | FLAG_LIQUID, 0, 1.0, 40.0),
    ElementProps {
        melt_point: Some(0.0),
        ..props("ice", 0.92, FLAG_SOLID, 0, 1.2, DEFAULT_IGNITION)
    },
    props("lava", 3.0, FLAG_LIQUID, 0, 2.0, DEFAULT_IGNITION),
    props("acid", 1.2, FLAG_LIQUID | FLAG_CORROSIVE, 0, 1.0, DEFAULT_IGNITION),
    props("metal", 3.5, FLAG_SOLID | FLAG_CONDUCTIVE, 0, 3.0, DEFAULT_IGNITION),
    props("wood", 0.6, FLAG_FLAMMABLE | FLAG_SOLID, 0, 0.3, 80.0),
    props("gunpowder", 1.7, FLAG_EXPLOSIVE, 0, 1.0, 50.0),
    props("electricity", 0.001, FLAG_GAS | FLAG_CONDUCTIVE, 8, 1.0, DEFAULT_IGNITION),
    props("virus", 0.1, FLAG_INFECTIOUS, 100, 1.0, DEFAULT_IGNITION),
    props("magnet", 7.5, FLAG_SOLID | FLAG_MAGNETIC, 0, 1.0, DEFAULT_IGNITION),
    props("gas", 0.002, FLAG_FLAMMABLE | FLAG_GAS, 0, 1.0, 30.0),
    props("plasma", 0.0001, FLAG_GAS, 25, 1.0, DEFAULT_IGNITION),
];
