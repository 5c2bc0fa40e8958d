use crate::core::rng::SimRng;
use crate::domain::elements::{
    CategoryId, ElementId, ElementProps, CAT_GAS, CAT_LIQUID, CAT_POWDER, CAT_SOLID, ELEMENT_COUNT,
    ELEMENT_DATA, EL_ACID, EL_ELECTRICITY, EL_EMPTY, EL_FIRE, EL_GAS, EL_ICE, EL_LAVA, EL_METAL,
    EL_OIL, EL_PLANT, EL_PLASMA, EL_STEAM, EL_STONE, EL_WATER, EL_WOOD, FLAG_CORROSIVE,
    FLAG_EXPLOSIVE, FLAG_FLAMMABLE, FLAG_MAGNETIC,
};
use crate::error::PhysicsError;

pub const AMBIENT_TEMP: f32 = 20.0;
pub const MIN_TEMP: f32 = -50.0;
pub const MAX_TEMP: f32 = 2000.0;

/// Clamp into the legal range. NaN collapses to ambient.
#[inline]
pub fn clamp_temp(t: f32) -> f32 {
    if t.is_nan() {
        return AMBIENT_TEMP;
    }
    t.clamp(MIN_TEMP, MAX_TEMP)
}

#[inline]
pub fn is_valid_element_id(id: ElementId) -> bool {
    (id as usize) < ELEMENT_COUNT
}

#[inline]
pub fn is_particle(id: ElementId) -> bool {
    id != EL_EMPTY && is_valid_element_id(id)
}

#[inline]
pub fn props_of(id: ElementId) -> Result<&'static ElementProps, PhysicsError> {
    ELEMENT_DATA
        .get(id as usize)
        .ok_or(PhysicsError::UnknownElement { id })
}

#[inline]
pub fn category_of(id: ElementId) -> Option<CategoryId> {
    if is_particle(id) {
        Some(ELEMENT_DATA[id as usize].category)
    } else {
        None
    }
}

#[inline]
pub fn is_solid(id: ElementId) -> bool {
    category_of(id) == Some(CAT_SOLID)
}

#[inline]
pub fn is_powder(id: ElementId) -> bool {
    category_of(id) == Some(CAT_POWDER)
}

#[inline]
pub fn is_liquid(id: ElementId) -> bool {
    category_of(id) == Some(CAT_LIQUID)
}

#[inline]
pub fn is_gas(id: ElementId) -> bool {
    category_of(id) == Some(CAT_GAS)
}

#[inline]
fn has_flag(id: ElementId, flag: u16) -> bool {
    is_particle(id) && ELEMENT_DATA[id as usize].flags & flag != 0
}

#[inline]
pub fn is_flammable(id: ElementId) -> bool {
    has_flag(id, FLAG_FLAMMABLE)
}

#[inline]
pub fn is_corrosive(id: ElementId) -> bool {
    has_flag(id, FLAG_CORROSIVE)
}

#[inline]
pub fn is_explosive(id: ElementId) -> bool {
    has_flag(id, FLAG_EXPLOSIVE)
}

#[inline]
pub fn is_magnetic(id: ElementId) -> bool {
    has_flag(id, FLAG_MAGNETIC)
}

/// Density, or 0 for empty and unknown ids
#[inline]
pub fn density_of(id: ElementId) -> f32 {
    ELEMENT_DATA.get(id as usize).map_or(0.0, |p| p.density)
}

#[inline]
pub fn conductivity_of(id: ElementId) -> f32 {
    ELEMENT_DATA.get(id as usize).map_or(1.0, |p| p.conductivity)
}

#[inline]
pub fn ignition_temp_of(id: ElementId) -> f32 {
    ELEMENT_DATA.get(id as usize).map_or(100.0, |p| p.ignition_temp)
}

/// Kinds that count down a lifetime and decay at zero
#[inline]
pub fn has_lifetime(id: ElementId) -> bool {
    ELEMENT_DATA.get(id as usize).is_some_and(|p| p.lifetime > 0)
}

pub fn element_name(id: ElementId) -> &'static str {
    ELEMENT_DATA.get(id as usize).map_or("empty", |p| p.name)
}

pub fn element_id_by_name(name: &str) -> Option<ElementId> {
    ELEMENT_DATA
        .iter()
        .position(|p| p.name == name)
        .map(|i| i as ElementId)
}

/// Temperature a freshly painted cell starts at
pub fn spawn_temperature(id: ElementId, rng: &mut SimRng) -> f32 {
    let t = match id {
        EL_FIRE => rng.range_f32(200.0, 300.0),
        EL_LAVA => rng.range_f32(1000.0, 1200.0),
        EL_ICE => rng.range_f32(-10.0, 0.0),
        EL_STEAM => rng.range_f32(100.0, 120.0),
        EL_PLASMA => rng.range_f32(5000.0, 10000.0),
        EL_ELECTRICITY => rng.range_f32(100.0, 150.0),
        _ => AMBIENT_TEMP,
    };
    clamp_temp(t)
}

/// Lifetime a freshly painted cell starts with
pub fn spawn_lifetime(id: ElementId, rng: &mut SimRng) -> u16 {
    match id {
        EL_FIRE => rng.range_u16(3, 8),
        _ => ELEMENT_DATA.get(id as usize).map_or(0, |p| p.lifetime),
    }
}

/// Painting over an occupied cell is allowed only for these pairs.
pub fn can_replace(existing: ElementId, new: ElementId) -> bool {
    matches!(
        (new, existing),
        (EL_WATER, EL_STEAM)
            | (EL_FIRE, EL_PLANT | EL_OIL)
            | (EL_LAVA, EL_PLANT | EL_OIL | EL_ICE | EL_WATER)
            | (EL_ACID, EL_PLANT | EL_METAL)
    )
}

/// Mover consumes the target when the density rule refuses to displace it.
pub fn is_destructive_pair(mover: ElementId, target: ElementId) -> bool {
    matches!(
        (mover, target),
        (EL_FIRE, EL_PLANT | EL_WOOD | EL_OIL | EL_GAS)
            | (EL_LAVA, EL_PLANT | EL_WOOD | EL_OIL | EL_ICE | EL_WATER)
            | (EL_ACID, EL_METAL | EL_PLANT | EL_WOOD)
            | (EL_PLASMA, EL_METAL | EL_STONE | EL_WATER | EL_ICE | EL_PLANT | EL_WOOD | EL_OIL)
    )
}
