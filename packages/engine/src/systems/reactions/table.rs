//! Neighbour reaction table
//!
//! O(1) lookup keyed by `(source, neighbour)`. Pairs whose outcome must not
//! depend on which cell the scan reaches first are registered both ways.

use crate::elements::{
    ElementId, ELEMENT_COUNT, EL_ACID, EL_ELECTRICITY, EL_EMPTY, EL_FIRE, EL_GAS, EL_GUNPOWDER,
    EL_ICE, EL_LAVA, EL_METAL, EL_OIL, EL_PLANT, EL_PLASMA, EL_SAND, EL_STEAM, EL_STONE, EL_VIRUS,
    EL_WATER, EL_WOOD,
};

/// Where a blast is centred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Source,
    Neighbor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The neighbour becomes `element`; `temp: None` keeps its temperature
    Convert { element: ElementId, life: u16, temp: Option<f32> },
    /// Lava meets a coolant: one cell hardens to stone, the other flashes to steam
    Quench,
    /// Gunpowder blast centred on `at`
    Detonate { at: Site },
    /// Flammable gas fireball centred on the source
    GasBurst,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub chance: f32,
    pub effect: Effect,
}

impl Reaction {
    const fn new(chance: f32, effect: Effect) -> Self {
        Self { chance, effect }
    }

    const fn convert(chance: f32, element: ElementId, life: u16, temp: Option<f32>) -> Self {
        Self::new(chance, Effect::Convert { element, life, temp })
    }
}

const REACTIONS: &[(ElementId, ElementId, Reaction)] = &[
    // Quenching, both directions
    (EL_LAVA, EL_WATER, Reaction::new(1.0, Effect::Quench)),
    (EL_LAVA, EL_ICE, Reaction::new(1.0, Effect::Quench)),
    (EL_WATER, EL_LAVA, Reaction::new(1.0, Effect::Quench)),
    (EL_ICE, EL_LAVA, Reaction::new(1.0, Effect::Quench)),
    // Lava sets fuel alight
    (EL_LAVA, EL_PLANT, Reaction::convert(0.2, EL_FIRE, 25, Some(250.0))),
    (EL_LAVA, EL_WOOD, Reaction::convert(0.2, EL_FIRE, 25, Some(250.0))),
    (EL_LAVA, EL_OIL, Reaction::convert(0.2, EL_FIRE, 25, Some(250.0))),
    (EL_LAVA, EL_GAS, Reaction::convert(0.2, EL_FIRE, 25, Some(250.0))),
    // Ice seeds freezing
    (EL_ICE, EL_WATER, Reaction::convert(0.02, EL_ICE, 0, Some(-5.0))),
    // Acid
    (EL_ACID, EL_METAL, Reaction::convert(0.05, EL_GAS, 40, None)),
    (EL_ACID, EL_PLANT, Reaction::convert(0.1, EL_EMPTY, 0, None)),
    (EL_ACID, EL_STONE, Reaction::convert(0.01, EL_SAND, 0, None)),
    // Gunpowder, both directions
    (EL_GUNPOWDER, EL_FIRE, Reaction::new(1.0, Effect::Detonate { at: Site::Source })),
    (EL_GUNPOWDER, EL_ELECTRICITY, Reaction::new(1.0, Effect::Detonate { at: Site::Source })),
    (EL_GUNPOWDER, EL_LAVA, Reaction::new(1.0, Effect::Detonate { at: Site::Source })),
    (EL_GUNPOWDER, EL_PLASMA, Reaction::new(0.3, Effect::Detonate { at: Site::Source })),
    (EL_FIRE, EL_GUNPOWDER, Reaction::new(1.0, Effect::Detonate { at: Site::Neighbor })),
    (EL_LAVA, EL_GUNPOWDER, Reaction::new(1.0, Effect::Detonate { at: Site::Neighbor })),
    (EL_PLASMA, EL_GUNPOWDER, Reaction::new(0.3, Effect::Detonate { at: Site::Neighbor })),
    // Electricity
    (EL_ELECTRICITY, EL_METAL, Reaction::convert(0.4, EL_ELECTRICITY, 8, Some(150.0))),
    (EL_ELECTRICITY, EL_WATER, Reaction::convert(0.2, EL_STEAM, 30, Some(200.0))),
    (EL_ELECTRICITY, EL_GUNPOWDER, Reaction::new(0.1, Effect::Detonate { at: Site::Neighbor })),
    // Virus
    (EL_VIRUS, EL_PLANT, Reaction::convert(0.03, EL_VIRUS, 100, None)),
    (EL_VIRUS, EL_WOOD, Reaction::convert(0.01, EL_VIRUS, 80, None)),
    // Flammable gas
    (EL_GAS, EL_FIRE, Reaction::new(0.2, Effect::GasBurst)),
    // Plasma
    (EL_PLASMA, EL_METAL, Reaction::convert(0.1, EL_LAVA, 0, Some(400.0))),
    (EL_PLASMA, EL_WATER, Reaction::convert(0.15, EL_STEAM, 40, Some(300.0))),
    (EL_PLASMA, EL_ICE, Reaction::convert(1.0, EL_WATER, 0, Some(80.0))),
];

pub struct ReactionTable {
    lut: Vec<Option<Reaction>>,
}

impl ReactionTable {
    pub fn new() -> Self {
        let mut lut = vec![None; ELEMENT_COUNT * ELEMENT_COUNT];
        for &(source, neighbor, reaction) in REACTIONS {
            lut[source as usize * ELEMENT_COUNT + neighbor as usize] = Some(reaction);
        }
        Self { lut }
    }

    #[inline]
    pub fn get(&self, source: ElementId, neighbor: ElementId) -> Option<&Reaction> {
        if source as usize >= ELEMENT_COUNT || neighbor as usize >= ELEMENT_COUNT {
            return None;
        }
        self.lut[source as usize * ELEMENT_COUNT + neighbor as usize].as_ref()
    }
}

impl Default for ReactionTable {
    fn default() -> Self {
        Self::new()
    }
}
