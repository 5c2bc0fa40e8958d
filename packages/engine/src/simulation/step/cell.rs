use crate::elements::{category_of, is_valid_element_id, EL_EMPTY};
use crate::error::PhysicsError;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::{reactions, temperature, CellFlow, TickContext};

/// Thermal, then reactions, then movement. Any phase may end the turn.
pub(super) fn process_cell(
    ctx: &mut TickContext,
    behaviors: &BehaviorRegistry,
    x: i32,
    y: i32,
) -> Result<(), PhysicsError> {
    let idx = ctx.grid.checked_index(x, y)?;
    if ctx.is_processed(idx) {
        return Ok(());
    }
    let element = ctx.grid.types[idx];
    if element == EL_EMPTY {
        return Ok(());
    }
    if !is_valid_element_id(element) {
        tracing::debug!(x, y, element, "unknown element normalized to empty");
        ctx.vacate(idx);
        return Ok(());
    }

    // Only moves and transforms mark the mask; an idle cell can still be displaced.
    ctx.stats.cells_visited += 1;

    if temperature::update_cell(ctx, x, y)? == CellFlow::Consumed {
        return Ok(());
    }
    if reactions::update_cell(ctx, x, y)? == CellFlow::Consumed {
        return Ok(());
    }
    if let Some(category) = category_of(element) {
        behaviors.update(category, ctx, x, y)?;
    }
    Ok(())
}
