use crate::elements::{
    can_replace, is_valid_element_id, spawn_lifetime, spawn_temperature, ElementId, EL_EMPTY,
};

use super::shapes::Shape;
use super::WorldCore;

pub(super) fn set_cell(world: &mut WorldCore, x: i32, y: i32, element: ElementId) -> bool {
    if !world.grid.in_bounds(x, y) || !is_valid_element_id(element) {
        return false;
    }
    if element == EL_EMPTY {
        return erase_cell(world, x, y);
    }

    let current = world.grid.get_type(x, y);
    if current != EL_EMPTY && !can_replace(current, element) {
        return false;
    }

    let life = spawn_lifetime(element, &mut world.rng);
    let temp = spawn_temperature(element, &mut world.rng);
    world.grid.set_particle(x as u32, y as u32, element, life, temp);
    true
}

/// True when the cell held something.
pub(super) fn erase_cell(world: &mut WorldCore, x: i32, y: i32) -> bool {
    if world.grid.is_empty(x, y) || !world.grid.in_bounds(x, y) {
        return false;
    }
    world.grid.clear_cell(x as u32, y as u32);
    true
}

pub(super) fn paint(world: &mut WorldCore, shape: Shape, element: ElementId) -> u32 {
    let (width, height) = (world.grid.width(), world.grid.height());
    let mut written = 0;
    shape.for_each_cell(width, height, |x, y| {
        if set_cell(world, x, y, element) {
            written += 1;
        }
    });
    written
}

pub(super) fn clear_shape(world: &mut WorldCore, shape: Shape) -> u32 {
    let (width, height) = (world.grid.width(), world.grid.height());
    let mut erased = 0;
    shape.for_each_cell(width, height, |x, y| {
        if erase_cell(world, x, y) {
            erased += 1;
        }
    });
    erased
}

pub(super) fn pick_element(world: &WorldCore, x: i32, y: i32) -> Option<ElementId> {
    match world.grid.get_type(x, y) {
        EL_EMPTY => None,
        element => Some(element),
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.back.clear();
    world.processed.clear();
    world.tick = 0;
    world.frame = 0;
    world.stats.reset(0);
    tracing::info!("world cleared");
}
