use crate::elements::{
    is_flammable, ElementId, EL_ACID, EL_EMPTY, EL_FIRE, EL_GAS, EL_ICE, EL_LAVA, EL_METAL,
    EL_PLANT, EL_STEAM, EL_STONE, EL_WATER, EL_WOOD,
};
use crate::systems::TickContext;

/// What a cell becomes after a contact reaction
#[derive(Debug, Clone, Copy)]
struct Spawn {
    element: ElementId,
    life: u16,
    temp: f32,
}

const fn spawn(element: ElementId, life: u16, temp: f32) -> Spawn {
    Spawn { element, life, temp }
}

const VACATED: Spawn = spawn(EL_EMPTY, 0, 20.0);

/// Reaction between a mover and the occupant of the cell it tries to enter.
///
/// Returns `false` when the pair does not react; otherwise both cells are
/// rewritten, marked processed, and the move attempt is over.
pub fn resolve_contact(ctx: &mut TickContext, from: usize, to: usize) -> bool {
    let mover = ctx.grid.types[from];
    let target = ctx.grid.types[to];
    let mover_temp = ctx.grid.temperature[from];

    let (into_target, into_source) = match (mover, target) {
        (EL_FIRE, EL_WATER) => (spawn(EL_STEAM, 60, 120.0), spawn(EL_STEAM, 40, 100.0)),
        (EL_FIRE, fuel) if is_flammable(fuel) => (spawn(EL_FIRE, 20, 200.0), VACATED),
        (EL_WATER, EL_FIRE) => (spawn(EL_STEAM, 50, 110.0), VACATED),
        (EL_WATER, EL_LAVA) => (spawn(EL_STONE, 0, 200.0), spawn(EL_STEAM, 80, 150.0)),
        (EL_LAVA, EL_WATER | EL_ICE) => (spawn(EL_STONE, 0, 300.0), spawn(EL_STEAM, 60, 200.0)),
        (EL_ACID, EL_METAL) => (spawn(EL_ACID, 0, mover_temp), spawn(EL_GAS, 40, 40.0)),
        (EL_ACID, EL_PLANT | EL_WOOD) => (spawn(EL_ACID, 0, mover_temp), VACATED),
        _ => return false,
    };

    ctx.transform(to, into_target.element, into_target.life, into_target.temp);
    ctx.transform(from, into_source.element, into_source.life, into_source.temp);
    ctx.stats.reactions += 1;
    true
}
