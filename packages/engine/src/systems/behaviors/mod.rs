//! Behaviors - movement rules per particle category
//!
//! - powder: falls, slides diagonally, avalanches off piles
//! - liquid: falls, flows diagonally, levels out by column pressure
//! - gas:    rises against gravity and disperses
//! - solid:  never moves
//!
//! Every move goes through `move_cell_safe`, which owns the displacement,
//! contact-reaction and destruction rules.

mod common;
mod gas;
mod liquid;
mod movement;
mod powder;

pub use common::{column_pressure, shuffled_pair};
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use movement::{can_move_to, move_cell_safe};
pub use powder::PowderBehavior;

use crate::elements::{CategoryId, CAT_GAS, CAT_LIQUID, CAT_POWDER};
use crate::error::PhysicsError;

use super::TickContext;

/// Behavior trait - each movable category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut TickContext, x: i32, y: i32) -> Result<(), PhysicsError>;
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(
        &self,
        category: CategoryId,
        ctx: &mut TickContext,
        x: i32,
        y: i32,
    ) -> Result<(), PhysicsError> {
        match category {
            CAT_POWDER => self.powder.update(ctx, x, y),
            CAT_LIQUID => self.liquid.update(ctx, x, y),
            CAT_GAS => self.gas.update(ctx, x, y),
            _ => Ok(()), // Solid - no behavior
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
