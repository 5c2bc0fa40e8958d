use crate::core::rng::SimRng;
use crate::elements::{
    ignition_temp_of, is_flammable, ElementId, EL_FIRE, EL_ICE, EL_LAVA, EL_METAL, EL_STEAM,
    EL_STONE, EL_WATER,
};

/// Result of a phase change: the new kind and its starting state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseChange {
    pub element: ElementId,
    pub life: u16,
    pub temperature: f32,
}

impl PhaseChange {
    fn keep(element: ElementId, temperature: f32) -> Self {
        Self { element, life: 0, temperature }
    }
}

/// Phase change for `element` at the relaxed temperature `temp`, if any.
///
/// Deterministic thresholds fire every time; the rest roll against a
/// probability that grows with the distance past the threshold. `entry_temp`
/// is the temperature the cell held before relaxation and is carried into
/// the new kind unless its convention says otherwise.
pub fn check_phase_change(
    element: ElementId,
    temp: f32,
    entry_temp: f32,
    rng: &mut SimRng,
) -> Option<PhaseChange> {
    match element {
        EL_ICE if temp > 5.0 => Some(PhaseChange::keep(EL_WATER, entry_temp.min(10.0))),
        EL_WATER if temp < -2.0 => Some(PhaseChange::keep(EL_ICE, entry_temp)),
        EL_WATER if temp > 80.0 && rng.chance(((temp - 80.0) * 0.01).min(0.3)) => Some(PhaseChange {
            element: EL_STEAM,
            life: rng.range_u16(60, 100),
            temperature: entry_temp,
        }),
        EL_STEAM if temp < 90.0 && rng.chance((90.0 - temp) * 0.005) => {
            Some(PhaseChange::keep(EL_WATER, entry_temp))
        }
        EL_LAVA if temp < 400.0 && rng.chance((400.0 - temp) * 0.001) => {
            Some(PhaseChange::keep(EL_STONE, entry_temp))
        }
        EL_STONE if temp > 800.0 && rng.chance((temp - 800.0) * 0.0005) => {
            Some(PhaseChange::keep(EL_LAVA, entry_temp))
        }
        EL_METAL if temp > 1000.0 && rng.chance((temp - 1000.0) * 0.0001) => {
            Some(PhaseChange::keep(EL_LAVA, entry_temp))
        }
        _ if is_flammable(element) => {
            let ignition = ignition_temp_of(element);
            if temp > ignition && rng.chance((temp - ignition) * 0.01) {
                Some(PhaseChange { element: EL_FIRE, life: rng.range_u16(6, 10), temperature: 200.0 })
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{EL_OIL, EL_SAND, EL_WOOD};

    #[test]
    fn deterministic_thresholds() {
        let mut rng = SimRng::seeded(1);
        let melt = check_phase_change(EL_ICE, 6.0, 6.0, &mut rng).map(|c| c.element);
        assert_eq!(melt, Some(EL_WATER));
        let freeze = check_phase_change(EL_WATER, -3.0, -3.5, &mut rng);
        assert_eq!(freeze, Some(PhaseChange { element: EL_ICE, life: 0, temperature: -3.5 }));
        assert_eq!(check_phase_change(EL_WATER, 20.0, 20.0, &mut rng), None);
        assert_eq!(check_phase_change(EL_SAND, 1900.0, 1900.0, &mut rng), None);
    }

    #[test]
    fn melted_ice_is_capped_at_ten_degrees() {
        let mut rng = SimRng::seeded(1);
        let change = check_phase_change(EL_ICE, 40.0, 41.0, &mut rng);
        assert_eq!(change.map(|c| c.temperature), Some(10.0));
    }

    #[test]
    fn hot_flammables_eventually_ignite() {
        let mut rng = SimRng::seeded(5);
        // p = (180 - 80) * 0.01 = 1.0
        let change = check_phase_change(EL_WOOD, 180.0, 180.0, &mut rng);
        assert_eq!(change.map(|c| c.element), Some(EL_FIRE));
        assert_eq!(check_phase_change(EL_OIL, 35.0, 35.0, &mut rng), None);
    }

    #[test]
    fn boiling_needs_heat_past_eighty() {
        let mut rng = SimRng::seeded(2);
        let boiled = (0..500)
            .filter_map(|_| check_phase_change(EL_WATER, 200.0, 200.0, &mut rng))
            .count();
        // p = 0.3 per roll
        assert!(boiled > 100 && boiled < 200, "boiled {boiled}");
    }
}
