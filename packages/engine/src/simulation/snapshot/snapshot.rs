//! Snapshot save/load
//!
//! Row-major JSON document:
//! `{ "version": "1.0", "width": W, "height": H, "grid": [[{ "type", "lifetime", "temperature" }]] }`
//!
//! Import is all-or-nothing: the document is fully validated before the
//! grid is touched.

use serde::{Deserialize, Deserializer, Serialize};

use crate::elements::{clamp_temp, element_id_by_name, element_name, AMBIENT_TEMP, EL_EMPTY};
use crate::error::SnapshotError;

use super::WorldCore;

pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCell {
    /// Element name; unknown names load as empty
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_lifetime")]
    pub lifetime: u16,
    #[serde(default = "ambient", deserialize_with = "lenient_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub grid: Option<Vec<Vec<SnapshotCell>>>,
}

fn ambient() -> f32 {
    AMBIENT_TEMP
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

/// Accepts fractional or out-of-range lifetimes and null.
fn lenient_lifetime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|v| v.is_finite())
        .map_or(0, |v| v.round().clamp(0.0, u16::MAX as f64) as u16))
}

/// Null, which browsers write for NaN, reads as ambient.
fn lenient_temperature<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map_or(AMBIENT_TEMP, |v| v as f32))
}

impl Snapshot {
    pub fn capture(world: &WorldCore) -> Self {
        let grid = &world.grid;
        let rows = (0..grid.height() as i32)
            .map(|y| {
                (0..grid.width() as i32)
                    .map(|x| {
                        let cell = grid.cell(x, y);
                        SnapshotCell {
                            kind: element_name(cell.element).to_string(),
                            lifetime: cell.life,
                            temperature: clamp_temp(cell.temperature),
                        }
                    })
                    .collect()
            })
            .collect();
        Snapshot {
            version: default_version(),
            width: Some(grid.width()),
            height: Some(grid.height()),
            grid: Some(rows),
        }
    }
}

pub(super) fn export_json(world: &WorldCore) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&Snapshot::capture(world))?)
}

pub(super) fn import_json(world: &mut WorldCore, json: &str) -> Result<(), SnapshotError> {
    let result = parse_and_apply(world, json);
    match &result {
        Ok(()) => tracing::info!(tick = world.tick, "snapshot imported"),
        Err(err) => tracing::warn!(%err, "snapshot rejected"),
    }
    result
}

fn parse_and_apply(world: &mut WorldCore, json: &str) -> Result<(), SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    let rows = snapshot.grid.ok_or(SnapshotError::MissingGrid)?;

    let found_height = rows.len() as u32;
    let found_width = rows.first().map_or(0, |r| r.len()) as u32;
    if let Some(row) = rows.iter().position(|r| r.len() as u32 != found_width) {
        return Err(SnapshotError::RaggedRow { row });
    }
    let expected = (world.grid.width(), world.grid.height());
    if (found_width, found_height) != expected {
        return Err(SnapshotError::DimensionMismatch {
            expected,
            found: (found_width, found_height),
        });
    }

    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let element = element_id_by_name(&cell.kind).unwrap_or(EL_EMPTY);
            let (ux, uy) = (x as u32, y as u32);
            if element == EL_EMPTY {
                world.grid.clear_cell(ux, uy);
            } else {
                world.grid.set_particle(ux, uy, element, cell.lifetime, cell.temperature);
            }
        }
    }

    world.processed.clear();
    world.stats.reset(world.tick);
    Ok(())
}
